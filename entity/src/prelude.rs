pub use super::company::Entity as Company;
pub use super::document::Entity as Document;
pub use super::document_version::Entity as DocumentVersion;
pub use super::edital::Entity as Edital;
pub use super::edital_analysis::Entity as EditalAnalysis;
pub use super::expiry_alert::Entity as ExpiryAlert;
pub use super::extracted_entity::Entity as ExtractedEntity;
pub use super::habilitacao_requirement::Entity as HabilitacaoRequirement;
pub use super::subscription::Entity as Subscription;
pub use super::user::Entity as User;
