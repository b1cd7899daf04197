//! Factory functions for extraction service response payloads.
//!
//! Pure functions building the JSON bodies the extraction service returns from
//! `POST /analyze`. Tests compose these into full responses and hand them to
//! the mock endpoint builders.

use serde_json::{json, Value};

/// Create a mock analysis summary payload with standard test values.
pub fn mock_analysis_json() -> Value {
    json!({
        "organizacao_licitante": "Prefeitura Municipal de São Paulo",
        "modalidade_licitacao": "PREGAO_ELETRONICO",
        "numero_processo": "2026/001234",
        "data_abertura_propostas": "2026-09-15T10:00:00",
        "data_sessao_publica": "2026-09-15T14:00:00",
        "objeto_licitacao": "Contratação de empresa especializada em serviços de engenharia",
        "criterio_julgamento": "MENOR_PRECO",
        "valor_estimado": 1500000.0
    })
}

/// Create a mock extracted entity payload.
///
/// # Arguments
/// - `entity_type` - Category label for the entity
/// - `entity_value` - The extracted text span
pub fn mock_entity_json(entity_type: &str, entity_value: &str) -> Value {
    json!({
        "entity_type": entity_type,
        "entity_value": entity_value,
        "confidence": 0.8,
        "start_position": 0,
        "end_position": entity_value.len()
    })
}

/// Create a mock habilitação requirement payload.
///
/// # Arguments
/// - `document_type` - Optional document type string the requirement maps to
/// - `is_mandatory` - Whether the requirement is mandatory for qualification
pub fn mock_requirement_json(document_type: Option<&str>, is_mandatory: bool) -> Value {
    json!({
        "requirement_type": "CERTIDAO",
        "description": "Prova de regularidade fiscal perante a Fazenda Nacional",
        "document_type": document_type,
        "is_mandatory": is_mandatory
    })
}

/// Compose a successful extraction response.
///
/// # Arguments
/// - `analysis` - Summary payload, usually from [`mock_analysis_json`]
/// - `entities` - Extracted entity payloads
/// - `requirements` - Requirement payloads
pub fn mock_extraction_response(
    analysis: Value,
    entities: Vec<Value>,
    requirements: Vec<Value>,
) -> Value {
    json!({
        "success": true,
        "analysis": analysis,
        "entities": entities,
        "requirements": requirements,
        "error": null
    })
}

/// Compose a failed extraction response carrying an error message.
pub fn mock_failed_extraction(error: &str) -> Value {
    json!({
        "success": false,
        "analysis": null,
        "entities": [],
        "requirements": [],
        "error": error
    })
}
