use entity::expiry_alert::AlertType;

use crate::server::service::alert::crossed_thresholds;

/// Expect no thresholds outside the warning window
#[test]
fn none_outside_window() {
    assert!(crossed_thresholds(31).is_empty());
    assert!(crossed_thresholds(90).is_empty());
}

/// Expect only the 30 day threshold at the window edge
#[test]
fn thirty_days_at_window_edge() {
    assert_eq!(crossed_thresholds(30), vec![AlertType::ThirtyDays]);
    assert_eq!(crossed_thresholds(16), vec![AlertType::ThirtyDays]);
}

/// Expect cumulative thresholds as expiry approaches
#[test]
fn thresholds_accumulate() {
    assert_eq!(
        crossed_thresholds(15),
        vec![AlertType::FifteenDays, AlertType::ThirtyDays]
    );
    assert_eq!(
        crossed_thresholds(7),
        vec![
            AlertType::SevenDays,
            AlertType::FifteenDays,
            AlertType::ThirtyDays
        ]
    );
    assert_eq!(
        crossed_thresholds(0),
        vec![
            AlertType::SevenDays,
            AlertType::FifteenDays,
            AlertType::ThirtyDays
        ]
    );
}

/// Expect every threshold including EXPIRED for a past expiry
#[test]
fn expired_crosses_everything() {
    assert_eq!(
        crossed_thresholds(-1),
        vec![
            AlertType::Expired,
            AlertType::SevenDays,
            AlertType::FifteenDays,
            AlertType::ThirtyDays
        ]
    );
}
