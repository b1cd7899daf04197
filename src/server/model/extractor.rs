//! Wire types for the extraction service.
//!
//! The extraction service parses an uploaded edital into a structured summary,
//! a list of recognized entities, and a list of habilitação requirements. The
//! DTOs in this module mirror its JSON contract exactly; [`ExtractionResult`]
//! is the validated form the analysis state machine persists. Conversion
//! rejects payloads the engine cannot trust (out-of-range confidence values,
//! unknown document-type labels, inverted character spans) instead of
//! silently coercing them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use entity::document::DocumentType;

use crate::server::error::analysis::AnalysisError;

/// Request body for `POST /analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionRequest {
    pub file_path: String,
    pub filename: String,
}

/// Raw response body from `POST /analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionResponse {
    pub success: bool,
    pub analysis: Option<AnalysisSummaryDto>,
    #[serde(default)]
    pub entities: Vec<ExtractedEntityDto>,
    #[serde(default)]
    pub requirements: Vec<RequirementDto>,
    pub error: Option<String>,
}

/// Structured summary of the notice as reported by the extraction service.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSummaryDto {
    pub organizacao_licitante: Option<String>,
    pub modalidade_licitacao: Option<String>,
    pub numero_processo: Option<String>,
    pub data_abertura_propostas: Option<NaiveDateTime>,
    pub data_sessao_publica: Option<NaiveDateTime>,
    pub objeto_licitacao: Option<String>,
    pub criterio_julgamento: Option<String>,
    pub valor_estimado: Option<f64>,
}

/// One recognized entity with its character span in the notice text.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedEntityDto {
    pub entity_type: String,
    pub entity_value: String,
    pub confidence: f64,
    pub start_position: i32,
    pub end_position: i32,
}

/// One habilitação requirement candidate.
///
/// `document_type` is a string on the wire; conversion maps it onto the
/// [`DocumentType`] enum and rejects labels outside the known catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct RequirementDto {
    pub requirement_type: String,
    pub description: String,
    pub document_type: Option<String>,
    pub is_mandatory: bool,
}

/// Validated extraction output, ready for transactional persistence.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub summary: AnalysisSummaryDto,
    pub entities: Vec<ValidatedEntity>,
    pub requirements: Vec<ValidatedRequirement>,
}

#[derive(Debug, Clone)]
pub struct ValidatedEntity {
    pub entity_type: String,
    pub entity_value: String,
    pub confidence: f64,
    pub start_position: i32,
    pub end_position: i32,
}

#[derive(Debug, Clone)]
pub struct ValidatedRequirement {
    pub requirement_type: String,
    pub description: String,
    pub document_type: Option<DocumentType>,
    pub is_mandatory: bool,
}

/// Map a wire document-type label onto the engine's closed catalog.
pub fn parse_document_type(label: &str) -> Result<DocumentType, AnalysisError> {
    match label {
        "CONTRATO_SOCIAL" => Ok(DocumentType::ContratoSocial),
        "CND_FEDERAL" => Ok(DocumentType::CndFederal),
        "CND_ESTADUAL" => Ok(DocumentType::CndEstadual),
        "CND_MUNICIPAL" => Ok(DocumentType::CndMunicipal),
        "CERTIDAO_FGTS" => Ok(DocumentType::CertidaoFgts),
        "CERTIDAO_TRABALHISTA" => Ok(DocumentType::CertidaoTrabalhista),
        "ALVARA_FUNCIONAMENTO" => Ok(DocumentType::AlvaraFuncionamento),
        "ATESTADO_CAPACIDADE_TECNICA" => Ok(DocumentType::AtestadoCapacidadeTecnica),
        "BALANCO_PATRIMONIAL" => Ok(DocumentType::BalancoPatrimonial),
        "DEMONSTRACAO_RESULTADOS" => Ok(DocumentType::DemonstracaoResultados),
        "CERTIDAO_FALENCIA" => Ok(DocumentType::CertidaoFalencia),
        "OUTROS" => Ok(DocumentType::Outros),
        other => Err(AnalysisError::InvalidPayload(format!(
            "unknown document type label: {}",
            other
        ))),
    }
}

impl TryFrom<ExtractionResponse> for ExtractionResult {
    type Error = AnalysisError;

    fn try_from(response: ExtractionResponse) -> Result<Self, Self::Error> {
        let summary = response.analysis.ok_or_else(|| {
            AnalysisError::InvalidPayload("successful response missing analysis summary".into())
        })?;

        let entities = response
            .entities
            .into_iter()
            .map(|entity| {
                if !(0.0..=1.0).contains(&entity.confidence) {
                    return Err(AnalysisError::InvalidPayload(format!(
                        "entity confidence {} outside [0, 1] for '{}'",
                        entity.confidence, entity.entity_type
                    )));
                }
                if entity.start_position < 0 || entity.end_position < entity.start_position {
                    return Err(AnalysisError::InvalidPayload(format!(
                        "invalid character span {}..{} for '{}'",
                        entity.start_position, entity.end_position, entity.entity_type
                    )));
                }

                Ok(ValidatedEntity {
                    entity_type: entity.entity_type,
                    entity_value: entity.entity_value,
                    confidence: entity.confidence,
                    start_position: entity.start_position,
                    end_position: entity.end_position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let requirements = response
            .requirements
            .into_iter()
            .map(|requirement| {
                let document_type = requirement
                    .document_type
                    .as_deref()
                    .map(parse_document_type)
                    .transpose()?;

                Ok(ValidatedRequirement {
                    requirement_type: requirement.requirement_type,
                    description: requirement.description,
                    document_type,
                    is_mandatory: requirement.is_mandatory,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ExtractionResult {
            summary,
            entities,
            requirements,
        })
    }
}
