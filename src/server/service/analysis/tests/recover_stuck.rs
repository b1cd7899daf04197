use super::*;

use chrono::{Duration, Utc};
use sea_orm::EntityTrait;

use entity::edital::AnalysisStatus;

/// Expect editais processing past the limit to be force-failed
#[tokio::test]
async fn fails_stuck_editais() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let stuck = test
        .insert_mock_processing_edital(
            company.id,
            Utc::now().naive_utc() - Duration::minutes(45),
        )
        .await?;
    let fresh = test
        .insert_mock_processing_edital(
            company.id,
            Utc::now().naive_utc() - Duration::minutes(5),
        )
        .await?;

    let recovered = AnalysisService::recover_stuck(&test.db, Duration::minutes(30))
        .await
        .unwrap();

    assert_eq!(recovered, 1);

    let updated = entity::prelude::Edital::find_by_id(stuck.id)
        .one(&test.db)
        .await?
        .expect("edital row should exist");
    assert_eq!(updated.analysis_status, AnalysisStatus::Failed);
    assert!(updated
        .error_message
        .as_deref()
        .expect("error message should be recorded")
        .contains("recovery sweep"));

    let untouched = entity::prelude::Edital::find_by_id(fresh.id)
        .one(&test.db)
        .await?
        .expect("edital row should exist");
    assert_eq!(untouched.analysis_status, AnalysisStatus::Processing);

    Ok(())
}

/// Expect non-processing editais to be ignored regardless of age
#[tokio::test]
async fn ignores_terminal_and_pending_editais() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    test.insert_mock_edital(company.id, AnalysisStatus::Pending).await?;
    test.insert_mock_edital(company.id, AnalysisStatus::Completed).await?;
    test.insert_mock_edital(company.id, AnalysisStatus::Failed).await?;

    let recovered = AnalysisService::recover_stuck(&test.db, Duration::minutes(30))
        .await
        .unwrap();

    assert_eq!(recovered, 0);

    Ok(())
}
