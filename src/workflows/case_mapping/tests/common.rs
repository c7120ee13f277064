use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::LinkConfig;
use crate::workflows::application::{
    AnsweredItem, ApplicationForm, ApplicationFormId, ApplicationFormStatus, ApplicationType,
    CollaboratorError, Commodity, Consignment, FormConfigurationService, FormVersion,
    HealthCertificate, HealthCertificateService, InspectionDetail, MachineryCommodity,
    MergedFormPage, MergedFormQuestion, PlantProductsCommodity, PlantsCommodity, PotatoType,
    PotatoesCommodity,
};
use crate::workflows::case_mapping::context::MappingContext;
use crate::workflows::case_mapping::error::FieldMappingError;
use crate::workflows::case_mapping::mappers::CaseFieldMapper;
use crate::workflows::case_mapping::payload::{Case, CaseBuilder};
use crate::workflows::case_mapping::service::CaseMapper;

pub(super) const EHC_NUMBER: &str = "EHC8106";
pub(super) const FORM_ID: &str = "form-0001";

pub(super) fn timestamp(value: &str) -> DateTime<Utc> {
    value.parse().expect("valid RFC 3339 timestamp")
}

pub(super) fn links() -> LinkConfig {
    LinkConfig::new("http://certificates.test", "http://frontend.test")
}

/// A submitted used-machinery application that maps and validates cleanly.
pub(super) fn machinery_form() -> ApplicationForm {
    ApplicationForm {
        id: ApplicationFormId(FORM_ID.to_string()),
        ehc: FormVersion::new(EHC_NUMBER, "1.0"),
        exa: FormVersion::new("EXA8106", "1.0"),
        commodity_group: "USED_FARM_MACHINERY".to_string(),
        destination_country: "US".to_string(),
        applicant_id: Some("applicant-1".to_string()),
        applicant_reference: Some("REF-1".to_string()),
        exporter_organisation_id: Some("org-1".to_string()),
        agency_organisation_id: None,
        intermediary: false,
        pheats: false,
        inspection: InspectionDetail {
            contact_name: Some("Morag Fraser".to_string()),
            contact_phone: Some("01234 567890".to_string()),
            contact_email: Some("morag@example.com".to_string()),
            location_id: Some("loc-77".to_string()),
            date: Some(timestamp("2026-10-20T09:30:00Z")),
            specific_location: Some("Grain store".to_string()),
        },
        answered_items: vec![
            AnsweredItem::new("q-country", "England"),
            AnsweredItem::new("q-consignee-name", "Prairie Implements LLC"),
            AnsweredItem::new("q-value", "18500"),
        ],
        consignment: Some(Consignment {
            id: "consignment-1".to_string(),
            commodities: vec![machinery_commodity()],
        }),
        reforwarding_details: None,
        supplementary_documents: Vec::new(),
        date_needed: NaiveDate::from_ymd_opt(2026, 10, 25),
        further_information: None,
        status: ApplicationFormStatus::Submitted,
        created: timestamp("2026-10-01T08:00:00Z"),
        last_updated: timestamp("2026-10-14T16:45:00Z"),
        submitted: Some(timestamp("2026-10-14T16:45:00Z")),
    }
}

/// Swaps the commodity group and consignment lines of a form.
pub(super) fn with_commodities(
    mut form: ApplicationForm,
    group: &str,
    commodities: Vec<Commodity>,
) -> ApplicationForm {
    form.commodity_group = group.to_string();
    form.consignment = Some(Consignment {
        id: "consignment-1".to_string(),
        commodities,
    });
    form
}

pub(super) fn machinery_commodity() -> Commodity {
    Commodity::Machinery(MachineryCommodity {
        id: "machine-1".to_string(),
        machine_type: "Tractor".to_string(),
        make: "Massey Ferguson".to_string(),
        model: "MF 5713".to_string(),
        serial_number: "MF5713-00921".to_string(),
        country_of_origin: Some("GB".to_string()),
    })
}

pub(super) fn plants_commodity(quantity: f64) -> Commodity {
    Commodity::Plants(PlantsCommodity {
        id: "plant-1".to_string(),
        genus: "Malus".to_string(),
        species: "domestica".to_string(),
        variety: Some("Bramley".to_string()),
        commodity_type: "Plants for planting".to_string(),
        quantity,
        unit_of_measurement: "Number".to_string(),
        number_of_packages: 4,
        type_of_packaging: "Crate".to_string(),
        country_of_origin: "GB".to_string(),
        eppo_code: Some("MABSD".to_string()),
    })
}

pub(super) fn plant_products_commodity() -> Commodity {
    Commodity::PlantProducts(PlantProductsCommodity {
        id: "product-1".to_string(),
        species: "Quercus robur".to_string(),
        product_type: "Sawn wood".to_string(),
        additional_countries_of_origin: vec!["IE".to_string(), "FR".to_string()],
        quantity: 12.5,
        unit_of_measurement: "Cubic metres".to_string(),
        number_of_packages: 3,
        type_of_packaging: "Bundle".to_string(),
        country_of_origin: "GB".to_string(),
    })
}

pub(super) fn potatoes_commodity() -> Commodity {
    Commodity::Potatoes(PotatoesCommodity {
        id: "potato-1".to_string(),
        potato_type: PotatoType::Seed,
        variety: "Maris Piper".to_string(),
        chemical_used: None,
        stock_number: "S-100".to_string(),
        lot_reference: "L-7".to_string(),
        distinguishing_marks: None,
        quantity: 20.0,
        unit_of_measurement: "Tonnes".to_string(),
        number_of_packages: 40,
        type_of_packaging: "Bag".to_string(),
    })
}

pub(super) fn certificate(application_type: ApplicationType) -> HealthCertificate {
    HealthCertificate {
        ehc_number: EHC_NUMBER.to_string(),
        destination_country: "US".to_string(),
        commodity_group: "USED_FARM_MACHINERY".to_string(),
        application_type,
    }
}

pub(super) fn question(question_id: &str, label: Option<&str>) -> MergedFormQuestion {
    MergedFormQuestion::new(question_id, label)
}

pub(super) fn page(page_number: u32, questions: Vec<MergedFormQuestion>) -> MergedFormPage {
    MergedFormPage {
        page_number,
        title: None,
        questions,
    }
}

/// Pages matching the answers on [`machinery_form`].
pub(super) fn standard_pages() -> Vec<MergedFormPage> {
    vec![
        page(
            1,
            vec![
                question("q-country", Some("countryOfExport")),
                question("q-notes", None),
            ],
        ),
        page(
            2,
            vec![
                question("q-consignee-name", Some("consigneeName")),
                question("q-value", Some("valueInPounds")),
            ],
        ),
    ]
}

/// Serves fixed pages and counts how often it is asked.
#[derive(Default)]
pub(super) struct CountingFormConfig {
    pages: Vec<MergedFormPage>,
    calls: AtomicUsize,
}

impl CountingFormConfig {
    pub(super) fn new(pages: Vec<MergedFormPage>) -> Self {
        Self {
            pages,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FormConfigurationService for CountingFormConfig {
    fn merged_form_pages(
        &self,
        _ehc_name: &str,
        _ehc_version: &str,
        _exa_name: &str,
        _exa_version: &str,
    ) -> Result<Vec<MergedFormPage>, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.pages.clone())
    }
}

pub(super) struct UnavailableFormConfig;

impl FormConfigurationService for UnavailableFormConfig {
    fn merged_form_pages(
        &self,
        _ehc_name: &str,
        _ehc_version: &str,
        _exa_name: &str,
        _exa_version: &str,
    ) -> Result<Vec<MergedFormPage>, CollaboratorError> {
        Err(CollaboratorError::Unavailable("form service timed out".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemoryCertificates {
    certificates: HashMap<String, HealthCertificate>,
}

impl MemoryCertificates {
    pub(super) fn with(certificate: HealthCertificate) -> Self {
        let mut certificates = HashMap::new();
        certificates.insert(certificate.ehc_number.clone(), certificate);
        Self { certificates }
    }
}

impl HealthCertificateService for MemoryCertificates {
    fn health_certificate(
        &self,
        ehc_number: &str,
    ) -> Result<Option<HealthCertificate>, CollaboratorError> {
        Ok(self.certificates.get(ehc_number).cloned())
    }
}

pub(super) fn build_mapper(
    pages: Vec<MergedFormPage>,
    application_type: ApplicationType,
) -> (
    CaseMapper<CountingFormConfig, MemoryCertificates>,
    Arc<CountingFormConfig>,
) {
    let form_config = Arc::new(CountingFormConfig::new(pages));
    let certificates = Arc::new(MemoryCertificates::with(certificate(application_type)));
    let mapper = CaseMapper::new(form_config.clone(), certificates, &links());
    (mapper, form_config)
}

/// Runs one mapper in isolation and returns its outcome with the case it produced.
pub(super) fn run_mapper(
    mapper: &dyn CaseFieldMapper,
    form: &ApplicationForm,
    application_type: ApplicationType,
    pages: Vec<MergedFormPage>,
) -> (Result<(), FieldMappingError>, Case) {
    let certificate = certificate(application_type);
    let form_config = CountingFormConfig::new(pages);
    let context = MappingContext::new(form, &certificate, &form_config);
    let mut builder = CaseBuilder::new();
    let outcome = mapper.map(&context, &mut builder);
    (outcome, builder.build())
}
