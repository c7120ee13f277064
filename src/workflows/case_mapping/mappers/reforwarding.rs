use super::CaseFieldMapper;
use crate::workflows::case_mapping::context::MappingContext;
use crate::workflows::case_mapping::error::FieldMappingError;
use crate::workflows::case_mapping::payload::{CaseBuilder, CaseReforwardingDetails};

/// Writes the re-forwarding block only when the application carries re-forwarding details.
pub struct ReforwardingMapper;

impl CaseFieldMapper for ReforwardingMapper {
    fn name(&self) -> &'static str {
        "reforwarding"
    }

    fn map(
        &self,
        context: &MappingContext<'_>,
        builder: &mut CaseBuilder,
    ) -> Result<(), FieldMappingError> {
        let details = context
            .form()
            .reforwarding_details
            .as_ref()
            .map(|details| CaseReforwardingDetails {
                country_of_origin: details.country_of_origin.clone(),
                import_phyto_number: details.import_certificate_number.clone(),
                repacking_container: details.consignment_repackaging.label().to_string(),
            });

        builder.reforwarding_details(details);
        Ok(())
    }
}
