//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the
//! engine. Repositories provide an abstraction layer over database
//! operations, one per entity, each generic over `ConnectionTrait` so a
//! service can pass either the connection or an open transaction.

pub mod analysis;
pub mod company;
pub mod document;
pub mod document_version;
pub mod edital;
pub mod expiry_alert;
pub mod subscription;
pub mod user;

#[cfg(test)]
mod tests;
