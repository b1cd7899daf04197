use super::*;

use entity::document::DocumentType;
use entity::edital::AnalysisStatus;

use crate::server::model::extractor::{AnalysisSummaryDto, ValidatedEntity, ValidatedRequirement};

fn summary() -> AnalysisSummaryDto {
    AnalysisSummaryDto {
        organizacao_licitante: Some("Prefeitura Municipal de São Paulo".into()),
        modalidade_licitacao: Some("PREGAO_ELETRONICO".into()),
        numero_processo: Some("2026/001234".into()),
        data_abertura_propostas: None,
        data_sessao_publica: None,
        objeto_licitacao: None,
        criterio_julgamento: Some("MENOR_PRECO".into()),
        valor_estimado: Some(1_500_000.0),
    }
}

/// Expect Ok persisting a summary row linked to the edital
#[tokio::test]
async fn inserts_analysis_summary() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let edital = test
        .insert_mock_edital(company.id, AnalysisStatus::Processing)
        .await?;

    let analysis_repo = AnalysisRepository::new(&test.db);
    let created = analysis_repo.insert_analysis(edital.id, summary()).await?;

    assert_eq!(created.edital_id, edital.id);
    assert_eq!(
        created.organizacao_licitante.as_deref(),
        Some("Prefeitura Municipal de São Paulo")
    );
    assert_eq!(created.valor_estimado, Some(1_500_000.0));

    Ok(())
}

/// Expect Ok inserting entity and requirement batches
#[tokio::test]
async fn inserts_entities_and_requirements() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let edital = test
        .insert_mock_edital(company.id, AnalysisStatus::Processing)
        .await?;

    let analysis_repo = AnalysisRepository::new(&test.db);
    let entity_count = analysis_repo
        .insert_entities(
            edital.id,
            vec![ValidatedEntity {
                entity_type: "ORGANIZACAO".into(),
                entity_value: "Prefeitura Municipal de São Paulo".into(),
                confidence: 0.92,
                start_position: 0,
                end_position: 33,
            }],
        )
        .await?;
    let requirement_count = analysis_repo
        .insert_requirements(
            edital.id,
            vec![
                ValidatedRequirement {
                    requirement_type: "CERTIDAO".into(),
                    description: "Prova de regularidade fiscal".into(),
                    document_type: Some(DocumentType::CndFederal),
                    is_mandatory: true,
                },
                ValidatedRequirement {
                    requirement_type: "DECLARACAO".into(),
                    description: "Declaração de inexistência de fato impeditivo".into(),
                    document_type: None,
                    is_mandatory: false,
                },
            ],
        )
        .await?;

    assert_eq!(entity_count, 1);
    assert_eq!(requirement_count, 2);

    let entities = analysis_repo.find_entities(edital.id).await?;
    let requirements = analysis_repo.find_requirements(edital.id).await?;
    assert_eq!(entities.len(), 1);
    assert_eq!(requirements.len(), 2);

    Ok(())
}

/// Expect Ok(0) for empty batches without touching the database
#[tokio::test]
async fn empty_batches_insert_nothing() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let company = test.insert_mock_company("12.345.678/0001-90").await?;
    let edital = test
        .insert_mock_edital(company.id, AnalysisStatus::Processing)
        .await?;

    let analysis_repo = AnalysisRepository::new(&test.db);

    assert_eq!(analysis_repo.insert_entities(edital.id, vec![]).await?, 0);
    assert_eq!(
        analysis_repo.insert_requirements(edital.id, vec![]).await?,
        0
    );

    Ok(())
}

/// Expect Error when inserting to tables that don't exist
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let analysis_repo = AnalysisRepository::new(&test.db);
    let result = analysis_repo.insert_analysis(1, summary()).await;

    assert!(result.is_err());

    Ok(())
}
