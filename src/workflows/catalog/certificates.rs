use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::CatalogError;
use crate::workflows::application::{
    ApplicationType, CollaboratorError, HealthCertificate, HealthCertificateService,
};

/// Health certificate configuration loaded from a CSV export, keyed by EHC number.
#[derive(Debug, Clone, Default)]
pub struct HealthCertificateCatalog {
    certificates: HashMap<String, HealthCertificate>,
}

impl HealthCertificateCatalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut certificates = HashMap::new();

        for record in csv_reader.deserialize::<CertificateRow>() {
            let row = record?;
            if row.ehc_number.is_empty() {
                continue;
            }

            let Some(application_type) = ApplicationType::parse(&row.application_type) else {
                return Err(CatalogError::UnknownApplicationType {
                    ehc_number: row.ehc_number,
                    value: row.application_type,
                });
            };

            certificates.insert(
                row.ehc_number.clone(),
                HealthCertificate {
                    ehc_number: row.ehc_number,
                    destination_country: row.destination_country,
                    commodity_group: row.commodity_group,
                    application_type,
                },
            );
        }

        debug!(certificates = certificates.len(), "loaded health certificate catalog");
        Ok(Self { certificates })
    }

    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }
}

impl HealthCertificateService for HealthCertificateCatalog {
    fn health_certificate(
        &self,
        ehc_number: &str,
    ) -> Result<Option<HealthCertificate>, CollaboratorError> {
        Ok(self.certificates.get(ehc_number.trim()).cloned())
    }
}

#[derive(Debug, Deserialize)]
struct CertificateRow {
    #[serde(rename = "EHC Number", default)]
    ehc_number: String,
    #[serde(rename = "Destination Country", default)]
    destination_country: String,
    #[serde(rename = "Commodity Group", default)]
    commodity_group: String,
    #[serde(rename = "Application Type", default)]
    application_type: String,
}
