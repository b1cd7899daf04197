//! End-to-end tests for pool-driven edital analysis.
//!
//! A pending edital is inserted, the pool is started against the mock
//! extraction service, and the test polls the database until the edital
//! reaches a terminal state.

use std::time::Duration;

use sea_orm::EntityTrait;

use entity::edital::AnalysisStatus;
use habilita_test_utils::prelude::*;

use super::create_test_pool;

const POLL_DEADLINE: Duration = Duration::from_secs(5);

/// Poll until the edital leaves PENDING/PROCESSING or the deadline passes.
async fn wait_for_terminal_status(
    test: &TestSetup,
    edital_id: i32,
) -> Result<entity::edital::Model, TestError> {
    let deadline = tokio::time::Instant::now() + POLL_DEADLINE;

    loop {
        let edital = entity::prelude::Edital::find_by_id(edital_id)
            .one(&test.db)
            .await?
            .expect("edital row should exist");

        match edital.analysis_status {
            AnalysisStatus::Completed | AnalysisStatus::Failed => return Ok(edital),
            _ if tokio::time::Instant::now() >= deadline => return Ok(edital),
            _ => tokio::time::sleep(Duration::from_millis(20)).await,
        }
    }
}

/// Expect a pending edital to be claimed, analyzed, and completed
#[tokio::test]
async fn processes_pending_edital_to_completion() -> Result<(), TestError> {
    let mut test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let edital = test
        .insert_mock_edital(company.id, AnalysisStatus::Pending)
        .await?;

    let body = factory::mock_extraction_response(
        factory::mock_analysis_json(),
        vec![factory::mock_entity_json("ORGANIZACAO", "Prefeitura Municipal")],
        vec![factory::mock_requirement_json(Some("CND_FEDERAL"), true)],
    );
    let mock = test.create_analyze_endpoint(&body, 1);

    let pool = create_test_pool(&test);
    pool.start().await.expect("pool should start");

    let finished = wait_for_terminal_status(&test, edital.id).await?;

    pool.stop().await.expect("pool should stop");

    assert_eq!(finished.analysis_status, AnalysisStatus::Completed);
    assert!(finished.analyzed_at.is_some());
    assert_eq!(
        entity::prelude::HabilitacaoRequirement::find()
            .all(&test.db)
            .await?
            .len(),
        1
    );
    mock.assert();

    Ok(())
}

/// Expect an extractor outage to drive the edital to FAILED with no result rows
#[tokio::test]
async fn failed_extraction_marks_edital_failed() -> Result<(), TestError> {
    let mut test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let edital = test
        .insert_mock_edital(company.id, AnalysisStatus::Pending)
        .await?;
    let mock = test.create_analyze_failure_endpoint(503, 1);

    let pool = create_test_pool(&test);
    pool.start().await.expect("pool should start");

    let finished = wait_for_terminal_status(&test, edital.id).await?;

    pool.stop().await.expect("pool should stop");

    assert_eq!(finished.analysis_status, AnalysisStatus::Failed);
    assert!(finished.error_message.is_some());
    assert!(entity::prelude::ExtractedEntity::find()
        .all(&test.db)
        .await?
        .is_empty());
    mock.assert();

    Ok(())
}

/// Expect multiple pending editais to all reach COMPLETED
#[tokio::test]
async fn drains_a_backlog_of_pending_editais() -> Result<(), TestError> {
    let mut test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;

    let mut editais = Vec::new();
    for _ in 0..3 {
        editais.push(
            test.insert_mock_edital(company.id, AnalysisStatus::Pending)
                .await?,
        );
    }

    let body = factory::mock_extraction_response(factory::mock_analysis_json(), vec![], vec![]);
    let mock = test.create_analyze_endpoint(&body, 3);

    let pool = create_test_pool(&test);
    pool.start().await.expect("pool should start");

    for edital in &editais {
        let finished = wait_for_terminal_status(&test, edital.id).await?;
        assert_eq!(finished.analysis_status, AnalysisStatus::Completed);
    }

    pool.stop().await.expect("pool should stop");
    mock.assert();

    Ok(())
}
