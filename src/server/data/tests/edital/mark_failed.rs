use super::*;

use entity::edital::AnalysisStatus;
use sea_orm::EntityTrait;

/// Expect true flipping a PROCESSING edital to FAILED with a message
#[tokio::test]
async fn fails_processing_edital_with_message() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let edital = test
        .insert_mock_edital(company.id, AnalysisStatus::Processing)
        .await?;

    let edital_repo = EditalRepository::new(&test.db);
    let failed = edital_repo
        .mark_failed(edital.id, "Extraction service returned HTTP 503")
        .await?;

    assert!(failed);

    let updated = entity::prelude::Edital::find_by_id(edital.id)
        .one(&test.db)
        .await?
        .expect("edital row should exist");
    assert_eq!(updated.analysis_status, AnalysisStatus::Failed);
    assert_eq!(
        updated.error_message.as_deref(),
        Some("Extraction service returned HTTP 503")
    );

    Ok(())
}

/// Expect false when a completing worker already won the race
#[tokio::test]
async fn rejects_completed_edital() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let edital = test
        .insert_mock_edital(company.id, AnalysisStatus::Processing)
        .await?;

    let edital_repo = EditalRepository::new(&test.db);
    edital_repo.mark_completed(edital.id).await?;

    let failed = edital_repo.mark_failed(edital.id, "stale sweep").await?;

    assert!(!failed);

    let updated = entity::prelude::Edital::find_by_id(edital.id)
        .one(&test.db)
        .await?
        .expect("edital row should exist");
    assert_eq!(updated.analysis_status, AnalysisStatus::Completed);

    Ok(())
}
