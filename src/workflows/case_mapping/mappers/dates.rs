use super::CaseFieldMapper;
use crate::workflows::case_mapping::context::MappingContext;
use crate::workflows::case_mapping::error::FieldMappingError;
use crate::workflows::case_mapping::payload::CaseBuilder;

/// Date by which the exporter needs the certificate.
pub struct RequiredByDateMapper;

impl CaseFieldMapper for RequiredByDateMapper {
    fn name(&self) -> &'static str {
        "required_by_date"
    }

    fn map(
        &self,
        context: &MappingContext<'_>,
        builder: &mut CaseBuilder,
    ) -> Result<(), FieldMappingError> {
        builder.required_by_date(context.form().date_needed);
        Ok(())
    }
}
