use std::sync::Arc;

use serde_json::Value;

use super::common::*;
use crate::workflows::application::{
    ApplicationType, Commodity, ConsignmentRepackaging, ReforwardingDetails,
    SupplementaryDocument,
};
use crate::workflows::case_mapping::context::MappingContext;
use crate::workflows::case_mapping::error::{CaseMappingError, FailureKind, FieldMappingError};
use crate::workflows::case_mapping::mappers::CaseFieldMapper;
use crate::workflows::case_mapping::payload::{CaseBuilder, MonetaryValue};
use crate::workflows::case_mapping::service::CaseMapper;

struct FailingMapper(&'static str);

impl CaseFieldMapper for FailingMapper {
    fn name(&self) -> &'static str {
        self.0
    }

    fn map(
        &self,
        _context: &MappingContext<'_>,
        _builder: &mut CaseBuilder,
    ) -> Result<(), FieldMappingError> {
        Err(FieldMappingError::UnsupportedCommodityGroup {
            tag: self.0.to_string(),
        })
    }
}

#[test]
fn maps_a_complete_machinery_application() {
    let (mapper, form_config) = build_mapper(standard_pages(), ApplicationType::Phyto);

    let case = mapper.map_case(&machinery_form()).expect("case maps");

    assert_eq!(case.identity.application_form_id, FORM_ID);
    assert_eq!(case.identity.ehc_number, EHC_NUMBER);
    assert_eq!(case.identity.status, "submitted");
    assert_eq!(case.export_details.country_of_export, Some(167_440_000));
    assert_eq!(case.applicant.applicant_reference, "REF-1");
    assert_eq!(
        case.links.certificate_generation_url.as_deref(),
        Some("http://certificates.test/certificate/EHC8106?applicationFormId=form-0001")
    );
    assert_eq!(
        case.links.edit_application_url,
        "http://frontend.test/applications/form-0001/edit"
    );
    assert_eq!(case.links.uploaded_documents_view_url, None);
    assert!(case.reforwarding_details.is_none());

    let consignment = case.consignment.as_ref().expect("consignment mapped");
    assert_eq!(
        consignment.other_details.value_in_pounds,
        Some(MonetaryValue::Whole(18500))
    );
    assert_eq!(form_config.calls(), 1);
}

#[test]
fn serialized_case_uses_wire_names() {
    let (mapper, _) = build_mapper(standard_pages(), ApplicationType::Phyto);
    let case = mapper.map_case(&machinery_form()).expect("case maps");

    let json = serde_json::to_value(&case).expect("case serializes");

    assert_eq!(json["applicationFormId"], "form-0001");
    assert_eq!(json["countryOfExport"], 167_440_000);
    assert_eq!(json["consignment"]["otherDetails"]["valueInPounds"], 18500);
    assert_eq!(
        json["consignment"]["commodities"][0]["description"],
        "Massey Ferguson MF 5713"
    );
    assert_eq!(json["inspection"]["time"], "09:30:00Z");
    assert_eq!(json.get("reforwardingDetails"), None::<&Value>);
}

#[test]
fn unknown_certificate_is_not_found() {
    let (mapper, form_config) = build_mapper(standard_pages(), ApplicationType::Phyto);
    let mut form = machinery_form();
    form.ehc.name = "EHC0000".to_string();

    let err = mapper.map_case(&form).expect_err("certificate missing");

    assert!(matches!(
        &err,
        CaseMappingError::HealthCertificateNotFound { ehc_number } if ehc_number == "EHC0000"
    ));
    assert_eq!(err.kind(), FailureKind::NotFound);
    assert_eq!(form_config.calls(), 0);
}

#[test]
fn unavailable_form_configuration_ends_the_run() {
    let mapper = CaseMapper::new(
        Arc::new(UnavailableFormConfig),
        Arc::new(MemoryCertificates::with(certificate(ApplicationType::Phyto))),
        &links(),
    );

    let err = mapper
        .map_case(&machinery_form())
        .expect_err("collaborator down");

    assert!(matches!(err, CaseMappingError::Collaborator(_)));
    assert_eq!(err.kind(), FailureKind::Unavailable);
}

#[test]
fn every_failing_mapper_is_reported() {
    let mapper = CaseMapper::with_mappers(
        Arc::new(CountingFormConfig::new(standard_pages())),
        Arc::new(MemoryCertificates::with(certificate(ApplicationType::Phyto))),
        vec![
            Box::new(FailingMapper("first")),
            Box::new(FailingMapper("second")),
        ],
    );

    let err = mapper
        .map_case(&machinery_form())
        .expect_err("mappers fail");

    let mappers = err
        .failures()
        .iter()
        .map(|failure| failure.mapper)
        .collect::<Vec<_>>();
    assert_eq!(mappers, vec!["first", "second"]);
    assert_eq!(err.kind(), FailureKind::BadRequest);
    assert!(err.to_string().contains("[first]"));
    assert!(err.to_string().contains("[second]"));
}

#[test]
fn standard_mappers_keep_running_after_a_failure() {
    let mut pages = standard_pages();
    pages[0]
        .questions
        .push(question("q-colour", Some("tractorColour")));
    let (mapper, _) = build_mapper(pages, ApplicationType::Phyto);
    let form = with_commodities(machinery_form(), "SEEDS", vec![machinery_commodity()]);

    let err = mapper.map_case(&form).expect_err("mapping fails");

    let failures = err.failures();
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].mapper, "questions");
    assert!(matches!(
        failures[0].error,
        FieldMappingError::FailedToMapAnswer { .. }
    ));
    assert_eq!(failures[1].mapper, "consignment");
    assert!(matches!(
        failures[1].error,
        FieldMappingError::UnsupportedCommodityGroup { .. }
    ));
}

#[test]
fn reforwarding_block_follows_the_application() {
    let (mapper, _) = build_mapper(standard_pages(), ApplicationType::Reforwarding);
    let mut form = machinery_form();

    let case = mapper.map_case(&form).expect("case maps");
    assert!(case.reforwarding_details.is_none());

    form.reforwarding_details = Some(ReforwardingDetails {
        import_certificate_number: "IMP-2026-118".to_string(),
        country_of_origin: "NL".to_string(),
        consignment_repackaging: ConsignmentRepackaging::RepackedInNewContainers,
    });
    let case = mapper.map_case(&form).expect("case maps");

    let details = case.reforwarding_details.expect("re-forwarding mapped");
    assert_eq!(details.import_phyto_number, "IMP-2026-118");
    assert_eq!(details.country_of_origin, "NL");
    assert_eq!(details.repacking_container, "Repacked in new containers");
    assert_eq!(case.inspection.date, None);
}

#[test]
fn offline_certificate_has_no_generation_link() {
    let (mapper, _) = build_mapper(standard_pages(), ApplicationType::Phyto);
    let mut form = machinery_form();
    form.ehc.version = "OFFLINE".to_string();
    form.supplementary_documents = vec![SupplementaryDocument {
        id: "doc-1".to_string(),
        file_name: "wash-certificate.pdf".to_string(),
        description: None,
    }];

    let case = mapper.map_case(&form).expect("case maps");

    assert_eq!(case.links.certificate_generation_url, None);
    assert_eq!(
        case.links.uploaded_documents_view_url.as_deref(),
        Some("http://frontend.test/applications/form-0001/supplementary-documents")
    );
}

#[test]
fn each_missing_required_field_is_a_violation() {
    let (mapper, _) = build_mapper(standard_pages(), ApplicationType::Phyto);
    let mut form = machinery_form();
    form.applicant_id = None;
    form.exporter_organisation_id = Some("   ".to_string());
    form.answered_items
        .retain(|item| item.question_id != "q-consignee-name");

    let err = mapper.map_case(&form).expect_err("validation fails");

    let paths = err
        .violations()
        .iter()
        .map(|violation| violation.property_path.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        paths,
        vec!["applicantId", "organisationId", "consignment.consignee.name"]
    );
    assert_eq!(err.kind(), FailureKind::BadRequest);
    assert!(err.failures().is_empty());
}

#[test]
fn non_positive_quantity_is_a_violation() {
    let (mapper, _) = build_mapper(standard_pages(), ApplicationType::Phyto);
    let mut empty = plants_commodity(0.0);
    if let Commodity::Plants(plant) = &mut empty {
        plant.id = "plant-2".to_string();
    }
    let form = with_commodities(
        machinery_form(),
        "PLANTS",
        vec![plants_commodity(10.0), empty],
    );

    let err = mapper.map_case(&form).expect_err("validation fails");

    let violations = err.violations();
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0].property_path,
        "consignment.commodities[1].quantity"
    );
    assert_eq!(
        violations[0].message,
        "must be greater than zero (commodity plant-2)"
    );
}
