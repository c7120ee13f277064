use super::certificate::HealthCertificate;
use super::form_config::MergedFormPage;

/// Source of the merged EHC/EXA form configuration.
pub trait FormConfigurationService: Send + Sync {
    fn merged_form_pages(
        &self,
        ehc_name: &str,
        ehc_version: &str,
        exa_name: &str,
        exa_version: &str,
    ) -> Result<Vec<MergedFormPage>, CollaboratorError>;
}

/// Lookup of health certificate configuration by EHC number.
pub trait HealthCertificateService: Send + Sync {
    fn health_certificate(
        &self,
        ehc_number: &str,
    ) -> Result<Option<HealthCertificate>, CollaboratorError>;
}

/// Failure reported by an external configuration collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollaboratorError {
    #[error("configuration missing: {0}")]
    MissingConfiguration(String),
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
}
