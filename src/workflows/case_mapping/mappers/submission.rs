use super::CaseFieldMapper;
use crate::workflows::case_mapping::context::MappingContext;
use crate::workflows::case_mapping::error::FieldMappingError;
use crate::workflows::case_mapping::payload::{CaseBuilder, CaseIdentity};

pub struct SubmissionMapper;

impl CaseFieldMapper for SubmissionMapper {
    fn name(&self) -> &'static str {
        "submission"
    }

    fn map(
        &self,
        context: &MappingContext<'_>,
        builder: &mut CaseBuilder,
    ) -> Result<(), FieldMappingError> {
        let form = context.form();

        builder.identity(CaseIdentity {
            application_form_id: form.id.to_string(),
            ehc_number: form.ehc.name.clone(),
            exa_number: form.exa.name.clone(),
            commodity_group: form.commodity_group.clone(),
            destination_country: form.destination_country.clone(),
            status: form.status.label().to_string(),
            submission_date: Some(form.submitted.unwrap_or(form.last_updated)),
        });

        Ok(())
    }
}
