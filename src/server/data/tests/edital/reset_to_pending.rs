use super::*;

use chrono::Utc;
use entity::edital::AnalysisStatus;
use sea_orm::EntityTrait;

/// Expect true resetting a FAILED edital and clearing its error message
#[tokio::test]
async fn resets_failed_edital() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let edital = test
        .insert_mock_processing_edital(company.id, Utc::now().naive_utc())
        .await?;

    let edital_repo = EditalRepository::new(&test.db);
    edital_repo.mark_failed(edital.id, "timed out").await?;

    let reset = edital_repo.reset_to_pending(edital.id).await?;

    assert!(reset);

    let updated = entity::prelude::Edital::find_by_id(edital.id)
        .one(&test.db)
        .await?
        .expect("edital row should exist");
    assert_eq!(updated.analysis_status, AnalysisStatus::Pending);
    assert!(updated.error_message.is_none());
    assert!(updated.processing_started_at.is_none());

    Ok(())
}

/// Expect false when the edital is not FAILED
#[tokio::test]
async fn rejects_non_failed_edital() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let pending = test
        .insert_mock_edital(company.id, AnalysisStatus::Pending)
        .await?;
    let completed = test
        .insert_mock_edital(company.id, AnalysisStatus::Completed)
        .await?;

    let edital_repo = EditalRepository::new(&test.db);

    assert!(!edital_repo.reset_to_pending(pending.id).await?);
    assert!(!edital_repo.reset_to_pending(completed.id).await?);

    Ok(())
}
