use super::*;

use chrono::{Duration, Utc};
use sea_orm::EntityTrait;

use entity::document::DocumentType;
use entity::expiry_alert::AlertType;

/// Expect alert rows for every crossed threshold, dispatched to the sink
#[tokio::test]
async fn creates_and_dispatches_alerts() -> Result<(), TestError> {
    let mut test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    // Five days out: crosses the 7, 15, and 30 day thresholds.
    let document = test
        .insert_mock_document(
            company.id,
            DocumentType::CndFederal,
            Some(Utc::now().date_naive() + Duration::days(5)),
        )
        .await?;
    let mock = test.create_notify_endpoint(3);

    let notifier = NotifierClient::new(test.server.url());
    let dispatched = AlertService::new(&test.db, &notifier)
        .run_sweep()
        .await
        .unwrap();

    assert_eq!(dispatched, 3);

    let alerts = entity::prelude::ExpiryAlert::find().all(&test.db).await?;
    assert_eq!(alerts.len(), 3);
    assert!(alerts.iter().all(|alert| alert.email_sent));
    assert!(alerts.iter().all(|alert| alert.sent_at.is_some()));
    assert!(alerts
        .iter()
        .any(|alert| alert.alert_type == AlertType::SevenDays));
    assert!(alerts
        .iter()
        .all(|alert| alert.document_id == document.id));
    mock.assert();

    Ok(())
}

/// Expect a second sweep to create and dispatch nothing new
#[tokio::test]
async fn second_sweep_is_a_no_op() -> Result<(), TestError> {
    let mut test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    test.insert_mock_document(
        company.id,
        DocumentType::CndFederal,
        Some(Utc::now().date_naive() + Duration::days(20)),
    )
    .await?;
    let mock = test.create_notify_endpoint(1);

    let notifier = NotifierClient::new(test.server.url());
    let service = AlertService::new(&test.db, &notifier);

    let first = service.run_sweep().await.unwrap();
    let second = service.run_sweep().await.unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 0);
    assert_eq!(
        entity::prelude::ExpiryAlert::find().all(&test.db).await?.len(),
        1
    );
    mock.assert();

    Ok(())
}

/// Expect dateless and far-future documents to produce no alerts
#[tokio::test]
async fn skips_documents_outside_window() -> Result<(), TestError> {
    let mut test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    test.insert_mock_document(company.id, DocumentType::ContratoSocial, None)
        .await?;
    test.insert_mock_document(
        company.id,
        DocumentType::CndFederal,
        Some(Utc::now().date_naive() + Duration::days(120)),
    )
    .await?;
    let mock = test.create_notify_endpoint(0);

    let notifier = NotifierClient::new(test.server.url());
    let dispatched = AlertService::new(&test.db, &notifier)
        .run_sweep()
        .await
        .unwrap();

    assert_eq!(dispatched, 0);
    assert!(entity::prelude::ExpiryAlert::find()
        .all(&test.db)
        .await?
        .is_empty());
    mock.assert();

    Ok(())
}

/// Expect a failed dispatch to stay undispatched and retry on the next sweep
#[tokio::test]
async fn failed_dispatch_is_retried_next_sweep() -> Result<(), TestError> {
    let mut test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    test.insert_mock_document(
        company.id,
        DocumentType::CndFederal,
        Some(Utc::now().date_naive() + Duration::days(25)),
    )
    .await?;

    let db = test.db.clone();
    let notifier = NotifierClient::new(test.server.url());
    let service = AlertService::new(&db, &notifier);

    let failure = test.create_notify_failure_endpoint(502, 1);
    let dispatched = service.run_sweep().await.unwrap();
    assert_eq!(dispatched, 0);
    failure.assert();
    failure.remove();

    let alert = entity::prelude::ExpiryAlert::find()
        .all(&test.db)
        .await?
        .pop()
        .expect("alert row should exist");
    assert!(!alert.email_sent);

    let success = test.create_notify_endpoint(1);
    let dispatched = service.run_sweep().await.unwrap();
    assert_eq!(dispatched, 1);
    success.assert();

    Ok(())
}
