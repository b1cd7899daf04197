//! Compliance report types produced by the matcher.
//!
//! These are plain structured records for consumption by the web layer. The
//! matcher never mutates documents or requirements; it only classifies and
//! reports.

use entity::document::DocumentType;

/// Satisfaction verdict for a single habilitação requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementVerdict {
    /// A document of the mapped type exists and is currently usable.
    Satisfied,
    /// No document of the mapped type exists.
    Missing,
    /// A document of the mapped type exists but has expired.
    Expired,
    /// The requirement has no mapped document type and needs manual review.
    Unmapped,
}

/// Per-requirement line of the compliance report.
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementAssessment {
    pub requirement_id: i32,
    pub requirement_type: String,
    pub description: String,
    pub document_type: Option<DocumentType>,
    pub is_mandatory: bool,
    pub verdict: RequirementVerdict,
    /// Set when the satisfying document is within its expiry warning window.
    pub expiring_soon: bool,
    /// The document that produced the verdict, when one exists.
    pub document_id: Option<i32>,
}

impl RequirementAssessment {
    pub fn is_satisfied(&self) -> bool {
        self.verdict == RequirementVerdict::Satisfied
    }
}

/// Overall readiness of a company for an edital.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// Every mandatory requirement is satisfied.
    Ready,
    /// At least one mandatory requirement is missing, expired, or unmapped.
    NotReady,
}

/// Full compliance report for one (company, edital) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceReport {
    pub edital_id: i32,
    pub company_id: i32,
    pub readiness: Readiness,
    /// One assessment per requirement, in extraction order.
    pub assessments: Vec<RequirementAssessment>,
    /// Unsatisfied requirements, mandatory failures first.
    pub failing: Vec<RequirementAssessment>,
    /// Satisfied requirements over total, as a percentage. 100 when the
    /// edital extracted no requirements.
    pub compliance_score: f64,
}
