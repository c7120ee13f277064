use super::{non_blank, CaseFieldMapper};
use crate::workflows::case_mapping::context::MappingContext;
use crate::workflows::case_mapping::error::FieldMappingError;
use crate::workflows::case_mapping::payload::CaseBuilder;

pub struct FurtherInformationMapper;

impl CaseFieldMapper for FurtherInformationMapper {
    fn name(&self) -> &'static str {
        "further_information"
    }

    fn map(
        &self,
        context: &MappingContext<'_>,
        builder: &mut CaseBuilder,
    ) -> Result<(), FieldMappingError> {
        builder.further_information(non_blank(context.form().further_information.as_ref()));
        Ok(())
    }
}
