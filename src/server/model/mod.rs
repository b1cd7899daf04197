//! Server application models and type definitions.
//!
//! This module contains the engine's non-entity data types: wire DTOs for the
//! extraction service, the notification payload, compliance and document
//! report types, service inputs, and worker job definitions. These models
//! bridge the gap between database entities, external services, and the
//! worker pool.

pub mod alert;
pub mod analysis;
pub mod company;
pub mod compliance;
pub mod document;
pub mod extractor;
pub mod worker;
