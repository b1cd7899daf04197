use super::*;

use chrono::Utc;
use entity::document::DocumentType;
use entity::expiry_alert::AlertType;

/// Expect Ok with only undispatched alerts paired with their documents
#[tokio::test]
async fn returns_only_undispatched_alerts() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let document = test
        .insert_mock_document(company.id, DocumentType::CndFederal, None)
        .await?;

    let alert_repo = ExpiryAlertRepository::new(&test.db);
    let pending = test
        .insert_mock_alert(document.id, AlertType::ThirtyDays)
        .await?;
    let dispatched = test
        .insert_mock_alert(document.id, AlertType::FifteenDays)
        .await?;
    alert_repo
        .mark_dispatched(dispatched.id, Utc::now().naive_utc())
        .await?;

    let result = alert_repo.find_undispatched().await?;

    assert_eq!(result.len(), 1);
    let (alert, joined_document) = &result[0];
    assert_eq!(alert.id, pending.id);
    assert_eq!(joined_document.id, document.id);

    Ok(())
}

/// Expect Ok with an empty list when every alert was dispatched
#[tokio::test]
async fn returns_empty_when_all_dispatched() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let document = test
        .insert_mock_document(company.id, DocumentType::CndFederal, None)
        .await?;

    let alert_repo = ExpiryAlertRepository::new(&test.db);
    let alert = test
        .insert_mock_alert(document.id, AlertType::ThirtyDays)
        .await?;
    alert_repo
        .mark_dispatched(alert.id, Utc::now().naive_utc())
        .await?;

    let result = alert_repo.find_undispatched().await?;

    assert!(result.is_empty());

    Ok(())
}
