use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for persisted application forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationFormId(pub String);

impl fmt::Display for ApplicationFormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name and version pair identifying an EHC or EXA template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormVersion {
    pub name: String,
    pub version: String,
}

impl FormVersion {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// An exporter's application for an export health certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    pub id: ApplicationFormId,
    pub ehc: FormVersion,
    pub exa: FormVersion,
    /// Raw commodity group tag; only the tags known to [`CommodityGroup`] can be mapped.
    pub commodity_group: String,
    pub destination_country: String,
    #[serde(default)]
    pub applicant_id: Option<String>,
    #[serde(default)]
    pub applicant_reference: Option<String>,
    #[serde(default)]
    pub exporter_organisation_id: Option<String>,
    #[serde(default)]
    pub agency_organisation_id: Option<String>,
    #[serde(default)]
    pub intermediary: bool,
    #[serde(default)]
    pub pheats: bool,
    #[serde(default)]
    pub inspection: InspectionDetail,
    #[serde(default)]
    pub answered_items: Vec<AnsweredItem>,
    #[serde(default)]
    pub consignment: Option<Consignment>,
    #[serde(default)]
    pub reforwarding_details: Option<ReforwardingDetails>,
    #[serde(default)]
    pub supplementary_documents: Vec<SupplementaryDocument>,
    #[serde(default)]
    pub date_needed: Option<NaiveDate>,
    #[serde(default)]
    pub further_information: Option<String>,
    pub status: ApplicationFormStatus,
    pub created: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub submitted: Option<DateTime<Utc>>,
}

/// Contact and location details for the physical inspection of the consignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionDetail {
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub specific_location: Option<String>,
}

/// Answer to a single form question. Answers stay textual until a mapper coerces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnsweredItem {
    pub question_id: String,
    pub answer: String,
}

impl AnsweredItem {
    pub fn new(question_id: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            answer: answer.into(),
        }
    }
}

/// The shipped goods of an application. All commodities belong to one family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consignment {
    pub id: String,
    #[serde(default)]
    pub commodities: Vec<Commodity>,
}

/// Commodity families an application can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommodityGroup {
    #[serde(rename = "USED_FARM_MACHINERY")]
    Machinery,
    Plants,
    PlantProducts,
    Potatoes,
}

impl CommodityGroup {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Machinery,
            Self::Plants,
            Self::PlantProducts,
            Self::Potatoes,
        ]
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Machinery => "USED_FARM_MACHINERY",
            Self::Plants => "PLANTS",
            Self::PlantProducts => "PLANT_PRODUCTS",
            Self::Potatoes => "POTATOES",
        }
    }

    /// Exact, case-sensitive lookup; anything else is an unsupported group.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|group| group.tag() == tag.trim())
    }
}

impl fmt::Display for CommodityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Commodity {
    Machinery(MachineryCommodity),
    Plants(PlantsCommodity),
    PlantProducts(PlantProductsCommodity),
    Potatoes(PotatoesCommodity),
}

impl Commodity {
    pub fn group(&self) -> CommodityGroup {
        match self {
            Commodity::Machinery(_) => CommodityGroup::Machinery,
            Commodity::Plants(_) => CommodityGroup::Plants,
            Commodity::PlantProducts(_) => CommodityGroup::PlantProducts,
            Commodity::Potatoes(_) => CommodityGroup::Potatoes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineryCommodity {
    pub id: String,
    pub machine_type: String,
    pub make: String,
    pub model: String,
    pub serial_number: String,
    #[serde(default)]
    pub country_of_origin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantsCommodity {
    pub id: String,
    pub genus: String,
    pub species: String,
    #[serde(default)]
    pub variety: Option<String>,
    pub commodity_type: String,
    pub quantity: f64,
    pub unit_of_measurement: String,
    pub number_of_packages: u32,
    pub type_of_packaging: String,
    pub country_of_origin: String,
    #[serde(default)]
    pub eppo_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantProductsCommodity {
    pub id: String,
    pub species: String,
    pub product_type: String,
    #[serde(default)]
    pub additional_countries_of_origin: Vec<String>,
    pub quantity: f64,
    pub unit_of_measurement: String,
    pub number_of_packages: u32,
    pub type_of_packaging: String,
    pub country_of_origin: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PotatoType {
    Seed,
    Ware,
}

impl PotatoType {
    pub const fn label(self) -> &'static str {
        match self {
            PotatoType::Seed => "Seed",
            PotatoType::Ware => "Ware",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PotatoesCommodity {
    pub id: String,
    pub potato_type: PotatoType,
    pub variety: String,
    #[serde(default)]
    pub chemical_used: Option<String>,
    pub stock_number: String,
    pub lot_reference: String,
    #[serde(default)]
    pub distinguishing_marks: Option<String>,
    pub quantity: f64,
    pub unit_of_measurement: String,
    pub number_of_packages: u32,
    pub type_of_packaging: String,
}

/// Present only when the consignment is re-exported under an import phytosanitary
/// certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReforwardingDetails {
    pub import_certificate_number: String,
    pub country_of_origin: String,
    pub consignment_repackaging: ConsignmentRepackaging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsignmentRepackaging {
    NotRepacked,
    RepackedInSameContainers,
    RepackedInNewContainers,
}

impl ConsignmentRepackaging {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotRepacked => "Not repacked",
            Self::RepackedInSameContainers => "Repacked in the same containers",
            Self::RepackedInNewContainers => "Repacked in new containers",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementaryDocument {
    pub id: String,
    pub file_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationFormStatus {
    Draft,
    Submitted,
    Updated,
    Completed,
    Cancelled,
}

impl ApplicationFormStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationFormStatus::Draft => "draft",
            ApplicationFormStatus::Submitted => "submitted",
            ApplicationFormStatus::Updated => "updated",
            ApplicationFormStatus::Completed => "completed",
            ApplicationFormStatus::Cancelled => "cancelled",
        }
    }
}
