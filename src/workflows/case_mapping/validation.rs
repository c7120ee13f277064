use serde_json::{json, Value};

use super::error::Violation;
use super::payload::Case;

const MAX_APPLICANT_REFERENCE_LENGTH: usize = 100;
const MAX_FURTHER_INFORMATION_LENGTH: usize = 4000;

/// Schema checks applied to a finished case before it leaves the service.
#[derive(Debug, Clone, Default)]
pub struct CaseValidator;

impl CaseValidator {
    /// Every violation found, in field order. An empty list means the case is valid.
    pub fn validate(&self, case: &Case) -> Vec<Violation> {
        let mut violations = Vec::new();
        let identity = &case.identity;

        require_text(&mut violations, "applicationFormId", &identity.application_form_id);
        require_text(&mut violations, "ehcNumber", &identity.ehc_number);
        require_text(&mut violations, "commodityGroup", &identity.commodity_group);

        if !is_country_code(&identity.destination_country) {
            violations.push(Violation::new(
                "destinationCountry",
                "must be a two letter upper-case country code",
                json!(identity.destination_country),
            ));
        }

        if identity.submission_date.is_none() {
            violations.push(missing("submissionDate"));
        }

        require_present(
            &mut violations,
            "applicantId",
            case.applicant.applicant_id.as_deref(),
        );
        require_present(
            &mut violations,
            "organisationId",
            case.organisation.organisation_id.as_deref(),
        );

        let reference = &case.applicant.applicant_reference;
        if reference.chars().count() > MAX_APPLICANT_REFERENCE_LENGTH {
            violations.push(Violation::new(
                "applicantReference",
                format!("must be at most {MAX_APPLICANT_REFERENCE_LENGTH} characters"),
                json!(reference),
            ));
        }

        if let Some(email) = &case.inspection.contact_email {
            if !email.contains('@') {
                violations.push(Violation::new(
                    "inspection.contactEmail",
                    "must be a valid email address",
                    json!(email),
                ));
            }
        }

        if let Some(text) = &case.further_information {
            if text.chars().count() > MAX_FURTHER_INFORMATION_LENGTH {
                violations.push(Violation::new(
                    "furtherInformation",
                    format!("must be at most {MAX_FURTHER_INFORMATION_LENGTH} characters"),
                    json!(text),
                ));
            }
        }

        require_text(
            &mut violations,
            "editApplicationUrl",
            &case.links.edit_application_url,
        );

        match &case.consignment {
            None => violations.push(missing("consignment")),
            Some(consignment) => {
                require_present(
                    &mut violations,
                    "consignment.consignee.name",
                    consignment.consignee.name.as_deref(),
                );

                if consignment.commodities.is_empty() {
                    violations.push(Violation::new(
                        "consignment.commodities",
                        "must contain at least one commodity",
                        json!([]),
                    ));
                }

                for (index, commodity) in consignment.commodities.iter().enumerate() {
                    if let Some(quantity) = commodity.quantity() {
                        if quantity <= 0.0 {
                            let id = commodity.commodity_id();
                            violations.push(Violation::new(
                                format!("consignment.commodities[{index}].quantity"),
                                format!("must be greater than zero (commodity {id})"),
                                json!(quantity),
                            ));
                        }
                    }
                }
            }
        }

        if let Some(details) = &case.reforwarding_details {
            require_text(
                &mut violations,
                "reforwardingDetails.importPhytoNumber",
                &details.import_phyto_number,
            );
        }

        violations
    }
}

fn missing(path: &str) -> Violation {
    Violation::new(path, "must not be null", Value::Null)
}

fn require_text(violations: &mut Vec<Violation>, path: &str, value: &str) {
    if value.trim().is_empty() {
        violations.push(Violation::new(path, "must not be blank", json!(value)));
    }
}

fn require_present(violations: &mut Vec<Violation>, path: &str, value: Option<&str>) {
    match value {
        None => violations.push(missing(path)),
        Some(text) => require_text(violations, path, text),
    }
}

fn is_country_code(value: &str) -> bool {
    value.len() == 2 && value.bytes().all(|b| b.is_ascii_uppercase())
}
