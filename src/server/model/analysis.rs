//! Structured results surface for a completed edital analysis.

use entity::{edital, edital_analysis, extracted_entity, habilitacao_requirement};

/// Everything persisted for a COMPLETED edital, for the web layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResults {
    pub edital: edital::Model,
    pub analysis: edital_analysis::Model,
    pub entities: Vec<extracted_entity::Model>,
    pub requirements: Vec<habilitacao_requirement::Model>,
}
