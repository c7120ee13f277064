use serde_json::json;

use super::common::*;
use crate::workflows::application::{
    ApplicationForm, ApplicationType, ConsignmentRepackaging, ReforwardingDetails,
};
use crate::workflows::case_mapping::error::{FailureKind, Violation};

fn violations(form: &ApplicationForm, application_type: ApplicationType) -> Vec<Violation> {
    let (mapper, _) = build_mapper(standard_pages(), application_type);
    let err = mapper.map_case(form).expect_err("validation fails");
    assert_eq!(err.kind(), FailureKind::BadRequest);
    assert!(err.failures().is_empty());
    err.violations().to_vec()
}

fn single_violation(form: &ApplicationForm) -> Violation {
    let mut found = violations(form, ApplicationType::Phyto);
    assert_eq!(found.len(), 1, "{found:?}");
    found.remove(0)
}

#[test]
fn lower_case_destination_country_is_rejected() {
    let mut form = machinery_form();
    form.destination_country = "us".to_string();

    let violation = single_violation(&form);

    assert_eq!(violation.property_path, "destinationCountry");
    assert_eq!(
        violation.message,
        "must be a two letter upper-case country code"
    );
    assert_eq!(violation.invalid_value, json!("us"));
}

#[test]
fn three_letter_destination_country_is_rejected() {
    let mut form = machinery_form();
    form.destination_country = "USA".to_string();

    let violation = single_violation(&form);

    assert_eq!(violation.property_path, "destinationCountry");
}

#[test]
fn inspection_email_needs_an_at_sign() {
    let mut form = machinery_form();
    form.inspection.contact_email = Some("morag.example.com".to_string());

    let violation = single_violation(&form);

    assert_eq!(violation.property_path, "inspection.contactEmail");
    assert_eq!(violation.message, "must be a valid email address");
    assert_eq!(violation.invalid_value, json!("morag.example.com"));
}

#[test]
fn applicant_reference_longer_than_one_hundred_characters() {
    let mut form = machinery_form();
    form.applicant_reference = Some("R".repeat(100));
    let (mapper, _) = build_mapper(standard_pages(), ApplicationType::Phyto);
    mapper.map_case(&form).expect("one hundred characters fit");

    form.applicant_reference = Some("R".repeat(101));
    let violation = single_violation(&form);

    assert_eq!(violation.property_path, "applicantReference");
    assert_eq!(violation.message, "must be at most 100 characters");
}

#[test]
fn further_information_longer_than_four_thousand_characters() {
    let mut form = machinery_form();
    form.further_information = Some("x".repeat(4000));
    let (mapper, _) = build_mapper(standard_pages(), ApplicationType::Phyto);
    mapper.map_case(&form).expect("four thousand characters fit");

    form.further_information = Some("x".repeat(4001));
    let violation = single_violation(&form);

    assert_eq!(violation.property_path, "furtherInformation");
    assert_eq!(violation.message, "must be at most 4000 characters");
}

#[test]
fn blank_import_phyto_number_is_rejected() {
    let mut form = machinery_form();
    form.reforwarding_details = Some(ReforwardingDetails {
        import_certificate_number: "  ".to_string(),
        country_of_origin: "NL".to_string(),
        consignment_repackaging: ConsignmentRepackaging::RepackedInNewContainers,
    });

    let found = violations(&form, ApplicationType::Reforwarding);

    assert_eq!(found.len(), 1, "{found:?}");
    assert_eq!(
        found[0].property_path,
        "reforwardingDetails.importPhytoNumber"
    );
    assert_eq!(found[0].message, "must not be blank");
}
