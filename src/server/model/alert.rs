//! Notification payload for expiry alerts.

use chrono::NaiveDate;
use serde::Serialize;

use entity::expiry_alert::AlertType;
use entity::{document, expiry_alert};

/// Payload handed to the notification sink for one expiry alert.
///
/// The threshold is serialized as the alert-type label the rest of the system
/// uses (`30_DAYS`, `15_DAYS`, `7_DAYS`, `EXPIRED`).
#[derive(Debug, Clone, Serialize)]
pub struct AlertNotification {
    pub alert_id: i32,
    pub document_id: i32,
    pub company_id: i32,
    pub document_name: String,
    pub document_type: String,
    pub alert_type: String,
    pub expiry_date: Option<NaiveDate>,
}

impl AlertNotification {
    pub fn new(alert: &expiry_alert::Model, document: &document::Model) -> Self {
        Self {
            alert_id: alert.id,
            document_id: document.id,
            company_id: document.company_id,
            document_name: document.name.clone(),
            document_type: document_type_label(document.document_type).to_string(),
            alert_type: alert_type_label(alert.alert_type).to_string(),
            expiry_date: document.expiry_date,
        }
    }
}

/// Wire label for an alert threshold.
pub fn alert_type_label(alert_type: AlertType) -> &'static str {
    match alert_type {
        AlertType::ThirtyDays => "30_DAYS",
        AlertType::FifteenDays => "15_DAYS",
        AlertType::SevenDays => "7_DAYS",
        AlertType::Expired => "EXPIRED",
    }
}

/// Wire label for a document type.
pub fn document_type_label(document_type: document::DocumentType) -> &'static str {
    use document::DocumentType;

    match document_type {
        DocumentType::ContratoSocial => "CONTRATO_SOCIAL",
        DocumentType::CndFederal => "CND_FEDERAL",
        DocumentType::CndEstadual => "CND_ESTADUAL",
        DocumentType::CndMunicipal => "CND_MUNICIPAL",
        DocumentType::CertidaoFgts => "CERTIDAO_FGTS",
        DocumentType::CertidaoTrabalhista => "CERTIDAO_TRABALHISTA",
        DocumentType::AlvaraFuncionamento => "ALVARA_FUNCIONAMENTO",
        DocumentType::AtestadoCapacidadeTecnica => "ATESTADO_CAPACIDADE_TECNICA",
        DocumentType::BalancoPatrimonial => "BALANCO_PATRIMONIAL",
        DocumentType::DemonstracaoResultados => "DEMONSTRACAO_RESULTADOS",
        DocumentType::CertidaoFalencia => "CERTIDAO_FALENCIA",
        DocumentType::Outros => "OUTROS",
    }
}
