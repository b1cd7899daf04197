use super::*;

use entity::edital::AnalysisStatus;

/// Expect the oldest PENDING edital to be claimed first
#[tokio::test]
async fn claims_oldest_pending_first() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let first = test
        .insert_mock_edital(company.id, AnalysisStatus::Pending)
        .await?;
    let _second = test
        .insert_mock_edital(company.id, AnalysisStatus::Pending)
        .await?;

    let edital_repo = EditalRepository::new(&test.db);
    let claimed = edital_repo.claim_next_pending().await?;

    assert!(claimed.is_some());
    let claimed = claimed.unwrap();
    assert_eq!(claimed.id, first.id);
    assert_eq!(claimed.analysis_status, AnalysisStatus::Processing);

    Ok(())
}

/// Expect None when no edital is PENDING
#[tokio::test]
async fn returns_none_without_pending_editais() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    test.insert_mock_edital(company.id, AnalysisStatus::Completed)
        .await?;

    let edital_repo = EditalRepository::new(&test.db);
    let claimed = edital_repo.claim_next_pending().await?;

    assert!(claimed.is_none());

    Ok(())
}

/// Expect each claim to take a different edital
#[tokio::test]
async fn sequential_claims_take_distinct_editais() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    test.insert_mock_edital(company.id, AnalysisStatus::Pending)
        .await?;
    test.insert_mock_edital(company.id, AnalysisStatus::Pending)
        .await?;

    let edital_repo = EditalRepository::new(&test.db);
    let first = edital_repo.claim_next_pending().await?.unwrap();
    let second = edital_repo.claim_next_pending().await?.unwrap();
    let third = edital_repo.claim_next_pending().await?;

    assert_ne!(first.id, second.id);
    assert!(third.is_none());

    Ok(())
}
