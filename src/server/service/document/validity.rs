//! Pure validity classification for documents.
//!
//! Validity is derived state: it is always recomputable from the expiry date
//! and a reference date, and nothing else may write it. The rules are
//! evaluated in order, first match wins:
//!
//! 1. no expiry date → `NotApplicable`
//! 2. expiry before the reference date → `Expired`
//! 3. expiry within the warning window → `ExpiringSoon`
//! 4. otherwise → `Valid`

use chrono::{Duration, NaiveDate};

use entity::document::ValidityStatus;

/// Days before expiry at which a document counts as expiring soon.
pub const EXPIRY_WARNING_WINDOW_DAYS: i64 = 30;

/// Classify a document's validity relative to a reference date.
///
/// Pure and idempotent: the same inputs always produce the same status, and
/// no input can make it fail.
pub fn classify(expiry_date: Option<NaiveDate>, as_of: NaiveDate) -> ValidityStatus {
    let Some(expiry_date) = expiry_date else {
        return ValidityStatus::NotApplicable;
    };

    if expiry_date < as_of {
        ValidityStatus::Expired
    } else if expiry_date <= as_of + Duration::days(EXPIRY_WARNING_WINDOW_DAYS) {
        ValidityStatus::ExpiringSoon
    } else {
        ValidityStatus::Valid
    }
}

/// Whole days from `as_of` until `expiry_date`; negative once expired.
pub fn days_until_expiry(expiry_date: NaiveDate, as_of: NaiveDate) -> i64 {
    (expiry_date - as_of).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Expect NotApplicable for any reference date when there is no expiry
    #[test]
    fn no_expiry_is_not_applicable() {
        assert_eq!(
            classify(None, date(2026, 1, 1)),
            ValidityStatus::NotApplicable
        );
        assert_eq!(
            classify(None, date(1999, 12, 31)),
            ValidityStatus::NotApplicable
        );
    }

    /// Expect Expired strictly before the reference date
    #[test]
    fn past_expiry_is_expired() {
        assert_eq!(
            classify(Some(date(2026, 8, 25)), date(2026, 8, 26)),
            ValidityStatus::Expired
        );
    }

    /// Expect ExpiringSoon from the reference date through the window edge
    #[test]
    fn expiry_within_window_is_expiring_soon() {
        let as_of = date(2026, 8, 26);

        // Expires today: still usable, but inside the window.
        assert_eq!(
            classify(Some(as_of), as_of),
            ValidityStatus::ExpiringSoon
        );
        // Exactly 30 days out is the window boundary, inclusive.
        assert_eq!(
            classify(Some(date(2026, 9, 25)), as_of),
            ValidityStatus::ExpiringSoon
        );
    }

    /// Expect Valid strictly beyond the warning window
    #[test]
    fn expiry_beyond_window_is_valid() {
        assert_eq!(
            classify(Some(date(2026, 9, 26)), date(2026, 8, 26)),
            ValidityStatus::Valid
        );
        assert_eq!(
            classify(Some(date(2030, 1, 1)), date(2026, 8, 26)),
            ValidityStatus::Valid
        );
    }

    /// Expect identical results across repeated calls
    #[test]
    fn classification_is_idempotent() {
        let expiry = Some(date(2026, 9, 10));
        let as_of = date(2026, 8, 26);

        let first = classify(expiry, as_of);
        let second = classify(expiry, as_of);

        assert_eq!(first, second);
    }

    /// Expect signed day counts around the expiry date
    #[test]
    fn day_counts_are_signed() {
        let as_of = date(2026, 8, 26);

        assert_eq!(days_until_expiry(date(2026, 8, 26), as_of), 0);
        assert_eq!(days_until_expiry(date(2026, 9, 2), as_of), 7);
        assert_eq!(days_until_expiry(date(2026, 8, 20), as_of), -6);
    }
}
