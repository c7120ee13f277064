use super::{non_blank, CaseFieldMapper};
use crate::workflows::case_mapping::context::MappingContext;
use crate::workflows::case_mapping::error::FieldMappingError;
use crate::workflows::case_mapping::payload::{CaseApplicant, CaseBuilder};

pub struct ApplicantMapper;

impl CaseFieldMapper for ApplicantMapper {
    fn name(&self) -> &'static str {
        "applicant"
    }

    fn map(
        &self,
        context: &MappingContext<'_>,
        builder: &mut CaseBuilder,
    ) -> Result<(), FieldMappingError> {
        let form = context.form();

        builder.applicant(CaseApplicant {
            applicant_id: non_blank(form.applicant_id.as_ref()),
            applicant_reference: non_blank(form.applicant_reference.as_ref()).unwrap_or_default(),
        });

        Ok(())
    }
}
