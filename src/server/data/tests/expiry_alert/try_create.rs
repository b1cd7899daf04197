use super::*;

use entity::document::DocumentType;
use entity::expiry_alert::AlertType;

/// Expect Ok(Some) when creating the first alert for a threshold
#[tokio::test]
async fn creates_first_alert() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let document = test
        .insert_mock_document(company.id, DocumentType::CndFederal, None)
        .await?;

    let alert_repo = ExpiryAlertRepository::new(&test.db);
    let result = alert_repo
        .try_create(document.id, AlertType::ThirtyDays)
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert!(created.is_some());

    let created = created.unwrap();
    assert_eq!(created.document_id, document.id);
    assert_eq!(created.alert_type, AlertType::ThirtyDays);
    assert!(!created.email_sent);
    assert!(created.sent_at.is_none());

    Ok(())
}

/// Expect Ok(None) when the (document, threshold) pair already exists
#[tokio::test]
async fn returns_none_for_duplicate_threshold() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let document = test
        .insert_mock_document(company.id, DocumentType::CndFederal, None)
        .await?;

    let alert_repo = ExpiryAlertRepository::new(&test.db);
    let first = alert_repo
        .try_create(document.id, AlertType::ThirtyDays)
        .await?;
    let second = alert_repo
        .try_create(document.id, AlertType::ThirtyDays)
        .await?;

    assert!(first.is_some());
    assert!(second.is_none());

    Ok(())
}

/// Expect Ok(Some) for a different threshold on the same document
#[tokio::test]
async fn allows_different_threshold_for_same_document() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let document = test
        .insert_mock_document(company.id, DocumentType::CndFederal, None)
        .await?;

    let alert_repo = ExpiryAlertRepository::new(&test.db);
    let thirty = alert_repo
        .try_create(document.id, AlertType::ThirtyDays)
        .await?;
    let fifteen = alert_repo
        .try_create(document.id, AlertType::FifteenDays)
        .await?;

    assert!(thirty.is_some());
    assert!(fifteen.is_some());

    Ok(())
}

/// Expect exactly one row when 100 concurrent creators race for one threshold
#[tokio::test]
async fn concurrent_creators_produce_one_row() -> Result<(), TestError> {
    use sea_orm::EntityTrait;

    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let document = test
        .insert_mock_document(company.id, DocumentType::CndFederal, None)
        .await?;

    let mut handles = Vec::new();
    for _ in 0..100 {
        let db = test.db.clone();
        let document_id = document.id;
        handles.push(tokio::spawn(async move {
            ExpiryAlertRepository::new(&db)
                .try_create(document_id, AlertType::SevenDays)
                .await
        }));
    }

    let mut created = 0;
    for handle in handles {
        let result = handle.await.expect("task panicked")?;
        if result.is_some() {
            created += 1;
        }
    }

    assert_eq!(created, 1);

    let rows = entity::prelude::ExpiryAlert::find().all(&test.db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Expect Error when creating to a table that doesn't exist
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let alert_repo = ExpiryAlertRepository::new(&test.db);
    let result = alert_repo.try_create(1, AlertType::ThirtyDays).await;

    assert!(result.is_err());

    Ok(())
}
