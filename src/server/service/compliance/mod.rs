//! Compliance matching between a company's documents and an edital's
//! requirements.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use entity::document::{DocumentType, ValidityStatus};
use entity::edital::AnalysisStatus;

use crate::server::{
    data::{
        analysis::AnalysisRepository, document::DocumentRepository, edital::EditalRepository,
    },
    error::{compliance::ComplianceError, Error},
    model::compliance::{
        ComplianceReport, Readiness, RequirementAssessment, RequirementVerdict,
    },
    service::document::validity::classify,
};

pub struct ComplianceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComplianceService<'a> {
    /// Creates a new instance of [`ComplianceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Evaluate a company's readiness for an edital.
    ///
    /// Requirements are only trustworthy once the edital is COMPLETED;
    /// anything else is an error, not an empty report. Documents are
    /// classified live against today, never from the stored status column,
    /// and each requirement matches against the company's highest-version
    /// document of its mapped type.
    pub async fn evaluate(&self, edital_id: i32) -> Result<ComplianceReport, Error> {
        let edital = EditalRepository::new(self.db)
            .find_by_id(edital_id)
            .await?
            .ok_or(ComplianceError::EditalNotFound(edital_id))?;

        if edital.analysis_status != AnalysisStatus::Completed {
            return Err(ComplianceError::AnalysisNotCompleted(edital_id).into());
        }

        let requirements = AnalysisRepository::new(self.db)
            .find_requirements(edital_id)
            .await?;
        let documents = DocumentRepository::new(self.db)
            .find_by_company(edital.company_id)
            .await?;

        let inventory = latest_by_type(&documents);
        let today = Utc::now().date_naive();

        let assessments: Vec<_> = requirements
            .iter()
            .map(|requirement| {
                let (verdict, expiring_soon, document_id) = match requirement.document_type {
                    None => (RequirementVerdict::Unmapped, false, None),
                    Some(document_type) => match inventory.get(&document_type) {
                        None => (RequirementVerdict::Missing, false, None),
                        Some(document) => {
                            match classify(document.expiry_date, today) {
                                ValidityStatus::Expired => {
                                    (RequirementVerdict::Expired, false, Some(document.id))
                                }
                                ValidityStatus::ExpiringSoon => {
                                    (RequirementVerdict::Satisfied, true, Some(document.id))
                                }
                                ValidityStatus::Valid | ValidityStatus::NotApplicable => {
                                    (RequirementVerdict::Satisfied, false, Some(document.id))
                                }
                            }
                        }
                    },
                };

                RequirementAssessment {
                    requirement_id: requirement.id,
                    requirement_type: requirement.requirement_type.clone(),
                    description: requirement.description.clone(),
                    document_type: requirement.document_type,
                    is_mandatory: requirement.is_mandatory,
                    verdict,
                    expiring_soon,
                    document_id,
                }
            })
            .collect();

        let mut failing: Vec<_> = assessments
            .iter()
            .filter(|assessment| !assessment.is_satisfied())
            .cloned()
            .collect();
        failing.sort_by_key(|assessment| !assessment.is_mandatory);

        let readiness = if failing.iter().any(|assessment| assessment.is_mandatory) {
            Readiness::NotReady
        } else {
            Readiness::Ready
        };

        // Expiring-soon matches satisfy the requirement but do not count
        // toward the score; the score reflects fully-usable documents.
        let satisfied = assessments
            .iter()
            .filter(|assessment| assessment.is_satisfied() && !assessment.expiring_soon)
            .count();
        let compliance_score = if assessments.is_empty() {
            100.0
        } else {
            satisfied as f64 / assessments.len() as f64 * 100.0
        };

        Ok(ComplianceReport {
            edital_id,
            company_id: edital.company_id,
            readiness,
            assessments,
            failing,
            compliance_score,
        })
    }
}

/// Index the inventory by type, ties resolved to the highest version.
fn latest_by_type(
    documents: &[entity::document::Model],
) -> HashMap<DocumentType, &entity::document::Model> {
    let mut inventory: HashMap<DocumentType, &entity::document::Model> = HashMap::new();

    for document in documents {
        match inventory.get(&document.document_type) {
            Some(existing) if existing.version >= document.version => {}
            _ => {
                inventory.insert(document.document_type, document);
            }
        }
    }

    inventory
}
