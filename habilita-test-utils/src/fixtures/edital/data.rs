//! Edital insertion utilities.
//!
//! Methods for inserting editais and analysis result rows into the test
//! database. Status transitions in real code are owned by the analysis state
//! machine; these fixtures write rows directly to stage specific scenarios.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use entity::document::DocumentType;
use entity::edital::AnalysisStatus;

use crate::{
    error::TestError,
    model::{EditalAnalysisModel, EditalModel, ExtractedEntityModel, HabilitacaoRequirementModel},
    TestSetup,
};

impl TestSetup {
    /// Insert a mock edital with the given status.
    pub async fn insert_mock_edital(
        &self,
        company_id: i32,
        status: AnalysisStatus,
    ) -> Result<EditalModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Edital::insert(entity::edital::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            original_filename: ActiveValue::Set("edital_pregao_2026.pdf".to_string()),
            file_path: ActiveValue::Set("uploads/editais/edital_pregao_2026.pdf".to_string()),
            file_size: ActiveValue::Set(204_800),
            analysis_status: ActiveValue::Set(status),
            error_message: ActiveValue::Set(None),
            processing_started_at: ActiveValue::Set(None),
            analyzed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await?)
    }

    /// Insert a PROCESSING edital whose attempt started at the given time.
    ///
    /// Used by stuck-attempt recovery tests that need control over how old the
    /// in-flight attempt looks.
    pub async fn insert_mock_processing_edital(
        &self,
        company_id: i32,
        started_at: NaiveDateTime,
    ) -> Result<EditalModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Edital::insert(entity::edital::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            original_filename: ActiveValue::Set("edital_pregao_2026.pdf".to_string()),
            file_path: ActiveValue::Set("uploads/editais/edital_pregao_2026.pdf".to_string()),
            file_size: ActiveValue::Set(204_800),
            analysis_status: ActiveValue::Set(AnalysisStatus::Processing),
            error_message: ActiveValue::Set(None),
            processing_started_at: ActiveValue::Set(Some(started_at)),
            analyzed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await?)
    }

    /// Insert a habilitação requirement for an edital.
    pub async fn insert_mock_requirement(
        &self,
        edital_id: i32,
        document_type: Option<DocumentType>,
        is_mandatory: bool,
    ) -> Result<HabilitacaoRequirementModel, TestError> {
        Ok(entity::prelude::HabilitacaoRequirement::insert(
            entity::habilitacao_requirement::ActiveModel {
                edital_id: ActiveValue::Set(edital_id),
                requirement_type: ActiveValue::Set("CERTIDAO".to_string()),
                description: ActiveValue::Set(
                    "Prova de regularidade fiscal perante a Fazenda Nacional".to_string(),
                ),
                document_type: ActiveValue::Set(document_type),
                is_mandatory: ActiveValue::Set(is_mandatory),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.db)
        .await?)
    }

    /// Insert an extracted entity for an edital.
    pub async fn insert_mock_entity(
        &self,
        edital_id: i32,
    ) -> Result<ExtractedEntityModel, TestError> {
        Ok(
            entity::prelude::ExtractedEntity::insert(entity::extracted_entity::ActiveModel {
                edital_id: ActiveValue::Set(edital_id),
                entity_type: ActiveValue::Set("ORGANIZACAO".to_string()),
                entity_value: ActiveValue::Set("Prefeitura Municipal de São Paulo".to_string()),
                confidence: ActiveValue::Set(0.8),
                start_position: ActiveValue::Set(0),
                end_position: ActiveValue::Set(33),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.db)
            .await?,
        )
    }

    /// Insert an analysis summary row for an edital.
    pub async fn insert_mock_analysis(
        &self,
        edital_id: i32,
    ) -> Result<EditalAnalysisModel, TestError> {
        Ok(
            entity::prelude::EditalAnalysis::insert(entity::edital_analysis::ActiveModel {
                edital_id: ActiveValue::Set(edital_id),
                organizacao_licitante: ActiveValue::Set(Some(
                    "Prefeitura Municipal de São Paulo".to_string(),
                )),
                modalidade_licitacao: ActiveValue::Set(Some("PREGAO_ELETRONICO".to_string())),
                numero_processo: ActiveValue::Set(Some("2026/001234".to_string())),
                data_abertura_propostas: ActiveValue::Set(None),
                data_sessao_publica: ActiveValue::Set(None),
                objeto_licitacao: ActiveValue::Set(Some(
                    "Contratação de empresa especializada em serviços de engenharia".to_string(),
                )),
                criterio_julgamento: ActiveValue::Set(Some("MENOR_PRECO".to_string())),
                valor_estimado: ActiveValue::Set(Some(1_500_000.0)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.db)
            .await?,
        )
    }
}
