use super::*;

use entity::edital::AnalysisStatus;
use sea_orm::EntityTrait;

/// Expect true when claiming a PENDING edital
#[tokio::test]
async fn claims_pending_edital() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let edital = test
        .insert_mock_edital(company.id, AnalysisStatus::Pending)
        .await?;

    let edital_repo = EditalRepository::new(&test.db);
    let claimed = edital_repo.claim_pending(edital.id).await?;

    assert!(claimed);

    let updated = entity::prelude::Edital::find_by_id(edital.id)
        .one(&test.db)
        .await?
        .expect("edital row should exist");
    assert_eq!(updated.analysis_status, AnalysisStatus::Processing);
    assert!(updated.processing_started_at.is_some());

    Ok(())
}

/// Expect false when the edital is already PROCESSING
#[tokio::test]
async fn rejects_already_claimed_edital() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let edital = test
        .insert_mock_edital(company.id, AnalysisStatus::Processing)
        .await?;

    let edital_repo = EditalRepository::new(&test.db);
    let claimed = edital_repo.claim_pending(edital.id).await?;

    assert!(!claimed);

    Ok(())
}

/// Expect false when the edital is in a terminal state
#[tokio::test]
async fn rejects_terminal_edital() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let completed = test
        .insert_mock_edital(company.id, AnalysisStatus::Completed)
        .await?;
    let failed = test
        .insert_mock_edital(company.id, AnalysisStatus::Failed)
        .await?;

    let edital_repo = EditalRepository::new(&test.db);

    assert!(!edital_repo.claim_pending(completed.id).await?);
    assert!(!edital_repo.claim_pending(failed.id).await?);

    Ok(())
}

/// Expect exactly one winner when concurrent workers race for one claim
#[tokio::test]
async fn concurrent_claims_have_one_winner() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let edital = test
        .insert_mock_edital(company.id, AnalysisStatus::Pending)
        .await?;

    let mut handles = Vec::new();
    for _ in 0..20 {
        let db = test.db.clone();
        let edital_id = edital.id;
        handles.push(tokio::spawn(async move {
            EditalRepository::new(&db).claim_pending(edital_id).await
        }));
    }

    let mut winners = 0;
    for handle in handles {
        if handle.await.expect("task panicked")? {
            winners += 1;
        }
    }

    assert_eq!(winners, 1);

    Ok(())
}

/// Expect false for a missing edital
#[tokio::test]
async fn returns_false_for_missing_edital() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;

    let edital_repo = EditalRepository::new(&test.db);
    let claimed = edital_repo.claim_pending(999).await?;

    assert!(!claimed);

    Ok(())
}
