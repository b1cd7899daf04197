//! Engine core modules.
//!
//! This module contains all server-side functionality for the habilita engine:
//! document lifecycle and validity tracking, expiry alerting, the edital
//! analysis state machine with its worker pool, compliance matching, and the
//! cron scheduler that keeps derived state fresh without user activity.

pub mod config;
pub mod data;
pub mod error;
pub mod extractor;
pub mod model;
pub mod notifier;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod worker;
