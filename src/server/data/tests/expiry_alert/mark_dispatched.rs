use super::*;

use chrono::Utc;
use entity::document::DocumentType;
use entity::expiry_alert::AlertType;

/// Expect Ok and the dispatch flag plus sent timestamp set
#[tokio::test]
async fn sets_flag_and_timestamp() -> Result<(), TestError> {
    use sea_orm::EntityTrait;

    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let document = test
        .insert_mock_document(company.id, DocumentType::CndFederal, None)
        .await?;
    let alert = test
        .insert_mock_alert(document.id, AlertType::SevenDays)
        .await?;

    let sent_at = Utc::now().naive_utc();
    let alert_repo = ExpiryAlertRepository::new(&test.db);
    let affected = alert_repo.mark_dispatched(alert.id, sent_at).await?;

    assert_eq!(affected, 1);

    let updated = entity::prelude::ExpiryAlert::find_by_id(alert.id)
        .one(&test.db)
        .await?
        .expect("alert row should exist");
    assert!(updated.email_sent);
    assert_eq!(updated.sent_at, Some(sent_at));

    Ok(())
}

/// Expect zero affected rows for a missing alert
#[tokio::test]
async fn affects_nothing_for_missing_alert() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;

    let alert_repo = ExpiryAlertRepository::new(&test.db);
    let affected = alert_repo
        .mark_dispatched(999, Utc::now().naive_utc())
        .await?;

    assert_eq!(affected, 0);

    Ok(())
}
