//! Cron schedules and limits for the maintenance jobs.

/// Nightly document validity recomputation.
pub mod validity {
    /// Daily at 02:00 UTC, before the alert sweep reads statuses.
    pub const CRON_EXPRESSION: &str = "0 0 2 * * *";
}

/// Expiry alert sweep and dispatch.
pub mod alert {
    /// Daily at 08:00 UTC.
    pub const CRON_EXPRESSION: &str = "0 0 8 * * *";
}

/// Stuck analysis recovery.
pub mod recovery {
    /// Every 10 minutes.
    pub const CRON_EXPRESSION: &str = "0 */10 * * * *";

    /// A PROCESSING attempt older than this is considered stuck.
    pub const MAX_PROCESSING_MINUTES: i64 = 30;
}
