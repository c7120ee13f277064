//! The case payload expected by the case-management system.
//!
//! Each top-level section is written by exactly one mapper (see `mappers`), so sections are
//! replaced wholesale through [`CaseBuilder`] rather than merged field by field.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    #[serde(flatten)]
    pub identity: CaseIdentity,
    #[serde(flatten)]
    pub organisation: CaseOrganisation,
    #[serde(flatten)]
    pub applicant: CaseApplicant,
    #[serde(flatten)]
    pub export_details: ExportDetails,
    pub inspection: CaseInspection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_by_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub further_information: Option<String>,
    #[serde(flatten)]
    pub links: CaseLinks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consignment: Option<CaseConsignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reforwarding_details: Option<CaseReforwardingDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseIdentity {
    pub application_form_id: String,
    pub ehc_number: String,
    pub exa_number: String,
    pub commodity_group: String,
    pub destination_country: String,
    pub status: String,
    pub submission_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseOrganisation {
    pub organisation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_organisation_id: Option<String>,
    pub intermediary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseApplicant {
    pub applicant_id: Option<String>,
    pub applicant_reference: String,
}

/// Fields fed directly by mapped form questions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_of_export: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_loading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_packages: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_net_weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub means_of_transport_identifier: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseInspection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Time of day formatted as `HH:MM:SSZ`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_generation_url: Option<String>,
    pub edit_application_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_documents_view_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseConsignment {
    pub consignee: Consignee,
    pub other_details: OtherConsignmentDetails,
    pub commodity_group: String,
    pub commodities: Vec<CaseCommodity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Consignee {
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_of_entry: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherConsignmentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_in_pounds: Option<MonetaryValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_mode: Option<String>,
}

/// A declared value that keeps whole and fractional amounts apart on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MonetaryValue {
    Whole(i64),
    Decimal(f64),
}

/// One commodity line. Every line in a consignment has the same variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CaseCommodity {
    Machinery(MachineryLine),
    Plant(PlantLine),
    PlantProduct(PlantProductLine),
    Potato(PotatoLine),
}

impl CaseCommodity {
    pub fn commodity_id(&self) -> &str {
        match self {
            CaseCommodity::Machinery(line) => &line.commodity_id,
            CaseCommodity::Plant(line) => &line.commodity_id,
            CaseCommodity::PlantProduct(line) => &line.commodity_id,
            CaseCommodity::Potato(line) => &line.commodity_id,
        }
    }

    /// Machinery lines carry no quantity.
    pub fn quantity(&self) -> Option<f64> {
        match self {
            CaseCommodity::Machinery(_) => None,
            CaseCommodity::Plant(line) => Some(line.quantity),
            CaseCommodity::PlantProduct(line) => Some(line.quantity),
            CaseCommodity::Potato(line) => Some(line.quantity),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineryLine {
    pub commodity_id: String,
    pub description: String,
    pub machine_type: String,
    pub make: String,
    pub model: String,
    pub serial_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_of_origin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantLine {
    pub commodity_id: String,
    pub scientific_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variety: Option<String>,
    pub commodity_type: String,
    pub quantity: f64,
    pub unit_of_measurement: String,
    pub number_of_packages: u32,
    pub type_of_packaging: String,
    pub country_of_origin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eppo_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantProductLine {
    pub commodity_id: String,
    pub species: String,
    pub product_type: String,
    pub quantity: f64,
    pub unit_of_measurement: String,
    pub number_of_packages: u32,
    pub type_of_packaging: String,
    /// Primary country first, then any additional countries, comma separated.
    pub countries_of_origin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PotatoLine {
    pub commodity_id: String,
    pub potato_type: String,
    pub variety: String,
    pub chemical_used: String,
    pub stock_number: String,
    pub lot_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinguishing_marks: Option<String>,
    pub quantity: f64,
    pub unit_of_measurement: String,
    pub number_of_packages: u32,
    pub type_of_packaging: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseReforwardingDetails {
    pub country_of_origin: String,
    pub import_phyto_number: String,
    pub repacking_container: String,
}

/// Accumulates sections while mappers run; the case is only visible after [`CaseBuilder::build`].
#[derive(Debug, Default)]
pub struct CaseBuilder {
    case: Case,
}

impl CaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(&mut self, identity: CaseIdentity) -> &mut Self {
        self.case.identity = identity;
        self
    }

    pub fn organisation(&mut self, organisation: CaseOrganisation) -> &mut Self {
        self.case.organisation = organisation;
        self
    }

    pub fn applicant(&mut self, applicant: CaseApplicant) -> &mut Self {
        self.case.applicant = applicant;
        self
    }

    pub fn export_details(&mut self, export_details: ExportDetails) -> &mut Self {
        self.case.export_details = export_details;
        self
    }

    pub fn inspection(&mut self, inspection: CaseInspection) -> &mut Self {
        self.case.inspection = inspection;
        self
    }

    pub fn required_by_date(&mut self, date: Option<NaiveDate>) -> &mut Self {
        self.case.required_by_date = date;
        self
    }

    pub fn further_information(&mut self, text: Option<String>) -> &mut Self {
        self.case.further_information = text;
        self
    }

    pub fn links(&mut self, links: CaseLinks) -> &mut Self {
        self.case.links = links;
        self
    }

    pub fn consignment(&mut self, consignment: CaseConsignment) -> &mut Self {
        self.case.consignment = Some(consignment);
        self
    }

    pub fn reforwarding_details(&mut self, details: Option<CaseReforwardingDetails>) -> &mut Self {
        self.case.reforwarding_details = details;
        self
    }

    pub fn build(self) -> Case {
        self.case
    }
}
