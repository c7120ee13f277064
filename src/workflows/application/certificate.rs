use serde::{Deserialize, Serialize};

/// How a certificate is issued; several mappers branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationType {
    Phyto,
    Reforwarding,
}

impl ApplicationType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "PHYTO" => Some(Self::Phyto),
            "REFORWARDING" | "RE-FORWARDING" => Some(Self::Reforwarding),
            _ => None,
        }
    }
}

/// Configuration entry describing an export health certificate, keyed by EHC number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCertificate {
    pub ehc_number: String,
    pub destination_country: String,
    pub commodity_group: String,
    pub application_type: ApplicationType,
}
