use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::extractor::{AnalysisSummaryDto, ValidatedEntity, ValidatedRequirement};

/// Repository for the three result tables of an analysis attempt.
///
/// Callers pass an open transaction when the inserts must commit atomically
/// with the edital's status flip.
pub struct AnalysisRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AnalysisRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn insert_analysis(
        &self,
        edital_id: i32,
        summary: AnalysisSummaryDto,
    ) -> Result<entity::edital_analysis::Model, DbErr> {
        entity::prelude::EditalAnalysis::insert(entity::edital_analysis::ActiveModel {
            edital_id: ActiveValue::Set(edital_id),
            organizacao_licitante: ActiveValue::Set(summary.organizacao_licitante),
            modalidade_licitacao: ActiveValue::Set(summary.modalidade_licitacao),
            numero_processo: ActiveValue::Set(summary.numero_processo),
            data_abertura_propostas: ActiveValue::Set(summary.data_abertura_propostas),
            data_sessao_publica: ActiveValue::Set(summary.data_sessao_publica),
            objeto_licitacao: ActiveValue::Set(summary.objeto_licitacao),
            criterio_julgamento: ActiveValue::Set(summary.criterio_julgamento),
            valor_estimado: ActiveValue::Set(summary.valor_estimado),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn insert_entities(
        &self,
        edital_id: i32,
        entities: Vec<ValidatedEntity>,
    ) -> Result<usize, DbErr> {
        if entities.is_empty() {
            return Ok(0);
        }

        let count = entities.len();
        let now = Utc::now().naive_utc();

        let models = entities
            .into_iter()
            .map(|entity| entity::extracted_entity::ActiveModel {
                edital_id: ActiveValue::Set(edital_id),
                entity_type: ActiveValue::Set(entity.entity_type),
                entity_value: ActiveValue::Set(entity.entity_value),
                confidence: ActiveValue::Set(entity.confidence),
                start_position: ActiveValue::Set(entity.start_position),
                end_position: ActiveValue::Set(entity.end_position),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::ExtractedEntity::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(count)
    }

    pub async fn insert_requirements(
        &self,
        edital_id: i32,
        requirements: Vec<ValidatedRequirement>,
    ) -> Result<usize, DbErr> {
        if requirements.is_empty() {
            return Ok(0);
        }

        let count = requirements.len();
        let now = Utc::now().naive_utc();

        let models =
            requirements
                .into_iter()
                .map(|requirement| entity::habilitacao_requirement::ActiveModel {
                    edital_id: ActiveValue::Set(edital_id),
                    requirement_type: ActiveValue::Set(requirement.requirement_type),
                    description: ActiveValue::Set(requirement.description),
                    document_type: ActiveValue::Set(requirement.document_type),
                    is_mandatory: ActiveValue::Set(requirement.is_mandatory),
                    created_at: ActiveValue::Set(now),
                    ..Default::default()
                });

        entity::prelude::HabilitacaoRequirement::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(count)
    }

    /// Delete every result row of an edital's previous attempt.
    ///
    /// The retry path runs this inside a transaction with the status reset so
    /// old and new attempts never coexist.
    pub async fn delete_results(&self, edital_id: i32) -> Result<u64, DbErr> {
        let mut deleted = 0;

        deleted += entity::prelude::EditalAnalysis::delete_many()
            .filter(entity::edital_analysis::Column::EditalId.eq(edital_id))
            .exec(self.db)
            .await?
            .rows_affected;

        deleted += entity::prelude::ExtractedEntity::delete_many()
            .filter(entity::extracted_entity::Column::EditalId.eq(edital_id))
            .exec(self.db)
            .await?
            .rows_affected;

        deleted += entity::prelude::HabilitacaoRequirement::delete_many()
            .filter(entity::habilitacao_requirement::Column::EditalId.eq(edital_id))
            .exec(self.db)
            .await?
            .rows_affected;

        Ok(deleted)
    }

    pub async fn find_analysis(
        &self,
        edital_id: i32,
    ) -> Result<Option<entity::edital_analysis::Model>, DbErr> {
        entity::prelude::EditalAnalysis::find()
            .filter(entity::edital_analysis::Column::EditalId.eq(edital_id))
            .one(self.db)
            .await
    }

    pub async fn find_entities(
        &self,
        edital_id: i32,
    ) -> Result<Vec<entity::extracted_entity::Model>, DbErr> {
        entity::prelude::ExtractedEntity::find()
            .filter(entity::extracted_entity::Column::EditalId.eq(edital_id))
            .all(self.db)
            .await
    }

    pub async fn find_requirements(
        &self,
        edital_id: i32,
    ) -> Result<Vec<entity::habilitacao_requirement::Model>, DbErr> {
        entity::prelude::HabilitacaoRequirement::find()
            .filter(entity::habilitacao_requirement::Column::EditalId.eq(edital_id))
            .all(self.db)
            .await
    }
}
