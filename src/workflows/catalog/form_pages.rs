use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CatalogError;
use crate::workflows::application::{
    CollaboratorError, FormConfigurationService, FormVersion, MergedFormPage,
};

/// Merged pages for one EHC/EXA version pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPageEntry {
    pub ehc: FormVersion,
    pub exa: FormVersion,
    #[serde(default)]
    pub pages: Vec<MergedFormPage>,
}

impl FormPageEntry {
    fn matches(
        &self,
        ehc_name: &str,
        ehc_version: &str,
        exa_name: &str,
        exa_version: &str,
    ) -> bool {
        self.ehc.name == ehc_name
            && self.ehc.version == ehc_version
            && self.exa.name == exa_name
            && self.exa.version == exa_version
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormPageCatalog {
    entries: Vec<FormPageEntry>,
}

impl FormPageCatalog {
    pub fn new(entries: Vec<FormPageEntry>) -> Self {
        Self { entries }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let entries: Vec<FormPageEntry> = serde_json::from_reader(reader)?;
        debug!(entries = entries.len(), "loaded form page catalog");
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FormConfigurationService for FormPageCatalog {
    fn merged_form_pages(
        &self,
        ehc_name: &str,
        ehc_version: &str,
        exa_name: &str,
        exa_version: &str,
    ) -> Result<Vec<MergedFormPage>, CollaboratorError> {
        self.entries
            .iter()
            .find(|entry| entry.matches(ehc_name, ehc_version, exa_name, exa_version))
            .map(|entry| entry.pages.clone())
            .ok_or_else(|| {
                CollaboratorError::MissingConfiguration(format!(
                    "no form pages for {ehc_name} {ehc_version} / {exa_name} {exa_version}"
                ))
            })
    }
}
