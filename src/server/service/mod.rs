//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements the engine's
//! business logic on top of the repositories: document lifecycle and validity
//! derivation, expiry-alert sweeps, the edital analysis state machine, the
//! compliance matcher, and company registration with cascade delete.

pub mod alert;
pub mod analysis;
pub mod company;
pub mod compliance;
pub mod document;
