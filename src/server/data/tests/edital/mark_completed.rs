use super::*;

use entity::edital::AnalysisStatus;
use sea_orm::EntityTrait;

/// Expect true flipping a PROCESSING edital to COMPLETED
#[tokio::test]
async fn completes_processing_edital() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let edital = test
        .insert_mock_edital(company.id, AnalysisStatus::Processing)
        .await?;

    let edital_repo = EditalRepository::new(&test.db);
    let completed = edital_repo.mark_completed(edital.id).await?;

    assert!(completed);

    let updated = entity::prelude::Edital::find_by_id(edital.id)
        .one(&test.db)
        .await?
        .expect("edital row should exist");
    assert_eq!(updated.analysis_status, AnalysisStatus::Completed);
    assert!(updated.analyzed_at.is_some());
    assert!(updated.error_message.is_none());

    Ok(())
}

/// Expect false when the edital is not PROCESSING
#[tokio::test]
async fn rejects_non_processing_edital() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let pending = test
        .insert_mock_edital(company.id, AnalysisStatus::Pending)
        .await?;
    let failed = test
        .insert_mock_edital(company.id, AnalysisStatus::Failed)
        .await?;

    let edital_repo = EditalRepository::new(&test.db);

    assert!(!edital_repo.mark_completed(pending.id).await?);
    assert!(!edital_repo.mark_completed(failed.id).await?);

    Ok(())
}
