//! File-backed snapshots of the certificate and form configuration services.

mod certificates;
mod form_pages;

pub use certificates::HealthCertificateCatalog;
pub use form_pages::{FormPageCatalog, FormPageEntry};

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    UnknownApplicationType { ehc_number: String, value: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read catalog: {}", err),
            CatalogError::Csv(err) => write!(f, "invalid certificate CSV data: {}", err),
            CatalogError::Json(err) => write!(f, "invalid form page JSON data: {}", err),
            CatalogError::UnknownApplicationType { ehc_number, value } => write!(
                f,
                "certificate {} has unknown application type '{}'",
                ehc_number, value
            ),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Csv(err) => Some(err),
            CatalogError::Json(err) => Some(err),
            CatalogError::UnknownApplicationType { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
