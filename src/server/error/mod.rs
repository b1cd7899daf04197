//! Error types for the habilita engine.
//!
//! This module provides specialized error types for each domain of the engine
//! (companies, documents, alerts, edital analysis, compliance, the extraction
//! client, and configuration) aggregated into a single crate-level [`Error`].
//! All types use `thiserror` for ergonomic definitions with automatic `Display`
//! and `Error` trait implementations.

pub mod alert;
pub mod analysis;
pub mod company;
pub mod compliance;
pub mod config;
pub mod document;
pub mod extractor;

use thiserror::Error;

use crate::server::error::{
    alert::AlertError, analysis::AnalysisError, company::CompanyError,
    compliance::ComplianceError, config::ConfigError, document::DocumentError,
    extractor::ExtractorError,
};

/// Main error type for the habilita engine.
///
/// Aggregates all domain-specific error types and external library errors into
/// a single unified error type. It uses `thiserror`'s `#[from]` attribute to
/// enable automatic conversion from underlying error types via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Company errors (registration conflicts, missing records)
/// - Document errors (missing records, invalid version operations)
/// - Alert errors (sweep failures for missing documents)
/// - Analysis errors (state machine conflicts, invalid extractor payloads)
/// - Compliance errors (reports requested before analysis completed)
/// - Extractor errors (HTTP failures, timeouts, reported extraction failures)
/// - External library errors (database, HTTP client, cron scheduler)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Company error (duplicate CNPJ, missing company).
    #[error(transparent)]
    CompanyError(#[from] CompanyError),
    /// Document error (missing document, invalid version operation).
    #[error(transparent)]
    DocumentError(#[from] DocumentError),
    /// Alert error (sweep requested for a missing document).
    #[error(transparent)]
    AlertError(#[from] AlertError),
    /// Edital analysis error (state machine conflicts, invalid payloads).
    #[error(transparent)]
    AnalysisError(#[from] AnalysisError),
    /// Compliance error (report requested before the edital completed analysis).
    #[error(transparent)]
    ComplianceError(#[from] ComplianceError),
    /// Extraction client error (request failures, timeouts, reported failures).
    #[error(transparent)]
    ExtractorError(#[from] ExtractorError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// HTTP client error outside the extraction client (notification dispatch).
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}
