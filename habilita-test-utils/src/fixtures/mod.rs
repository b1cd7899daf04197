//! Test fixture modules for database and HTTP mock creation.
//!
//! Each submodule provides fixtures for one side of the engine:
//!
//! - `company` - company, user, and subscription records
//! - `document` - documents, version snapshots, and expiry alerts
//! - `edital` - editais and their analysis result rows
//! - `extractor` - extraction response payloads and mock `/analyze` endpoints
//! - `notifier` - mock `/notify` endpoints

pub mod company;
pub mod document;
pub mod edital;
pub mod extractor;
pub mod notifier;
