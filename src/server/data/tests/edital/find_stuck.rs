use super::*;

use chrono::{Duration, Utc};
use entity::edital::AnalysisStatus;

/// Expect only PROCESSING editais older than the cutoff
#[tokio::test]
async fn finds_attempts_older_than_cutoff() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let now = Utc::now().naive_utc();

    let stale = test
        .insert_mock_processing_edital(company.id, now - Duration::hours(2))
        .await?;
    let _fresh = test
        .insert_mock_processing_edital(company.id, now - Duration::minutes(5))
        .await?;
    let _pending = test
        .insert_mock_edital(company.id, AnalysisStatus::Pending)
        .await?;

    let edital_repo = EditalRepository::new(&test.db);
    let stuck = edital_repo.find_stuck(now - Duration::minutes(30)).await?;

    assert_eq!(stuck.len(), 1);
    assert_eq!(stuck[0].id, stale.id);

    Ok(())
}

/// Expect an empty list when nothing is stuck
#[tokio::test]
async fn returns_empty_without_stuck_attempts() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let now = Utc::now().naive_utc();

    test.insert_mock_processing_edital(company.id, now - Duration::minutes(1))
        .await?;

    let edital_repo = EditalRepository::new(&test.db);
    let stuck = edital_repo.find_stuck(now - Duration::minutes(30)).await?;

    assert!(stuck.is_empty());

    Ok(())
}
