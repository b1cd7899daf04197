use super::*;

use entity::document::DocumentType;
use entity::edital::AnalysisStatus;

/// Expect every result row of the edital removed, other editais untouched
#[tokio::test]
async fn deletes_all_rows_for_edital() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let edital = test
        .insert_mock_edital(company.id, AnalysisStatus::Failed)
        .await?;
    let other = test
        .insert_mock_edital(company.id, AnalysisStatus::Completed)
        .await?;

    test.insert_mock_analysis(edital.id).await?;
    test.insert_mock_entity(edital.id).await?;
    test.insert_mock_requirement(edital.id, Some(DocumentType::CndFederal), true)
        .await?;
    test.insert_mock_requirement(other.id, Some(DocumentType::CertidaoFgts), true)
        .await?;

    let analysis_repo = AnalysisRepository::new(&test.db);
    let deleted = analysis_repo.delete_results(edital.id).await?;

    assert_eq!(deleted, 3);
    assert!(analysis_repo.find_analysis(edital.id).await?.is_none());
    assert!(analysis_repo.find_entities(edital.id).await?.is_empty());
    assert!(analysis_repo.find_requirements(edital.id).await?.is_empty());

    let other_requirements = analysis_repo.find_requirements(other.id).await?;
    assert_eq!(other_requirements.len(), 1);

    Ok(())
}

/// Expect Ok(0) when the edital has no result rows
#[tokio::test]
async fn deletes_nothing_without_rows() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let edital = test
        .insert_mock_edital(company.id, AnalysisStatus::Pending)
        .await?;

    let analysis_repo = AnalysisRepository::new(&test.db);
    let deleted = analysis_repo.delete_results(edital.id).await?;

    assert_eq!(deleted, 0);

    Ok(())
}
