//! Database model type aliases for test utilities.
//!
//! Convenient aliases for the SeaORM entity models used throughout the test
//! utilities and the engine's tests.

/// Type alias for the company database model.
pub type CompanyModel = entity::company::Model;

/// Type alias for the user database model.
pub type UserModel = entity::user::Model;

/// Type alias for the subscription database model.
pub type SubscriptionModel = entity::subscription::Model;

/// Type alias for the document database model.
pub type DocumentModel = entity::document::Model;

/// Type alias for the document version snapshot model.
pub type DocumentVersionModel = entity::document_version::Model;

/// Type alias for the expiry alert database model.
pub type ExpiryAlertModel = entity::expiry_alert::Model;

/// Type alias for the edital database model.
pub type EditalModel = entity::edital::Model;

/// Type alias for the edital analysis summary model.
pub type EditalAnalysisModel = entity::edital_analysis::Model;

/// Type alias for the extracted entity database model.
pub type ExtractedEntityModel = entity::extracted_entity::Model;

/// Type alias for the habilitação requirement database model.
pub type HabilitacaoRequirementModel = entity::habilitacao_requirement::Model;
