use super::{non_blank, CaseFieldMapper};
use crate::workflows::case_mapping::context::MappingContext;
use crate::workflows::case_mapping::error::FieldMappingError;
use crate::workflows::case_mapping::payload::{CaseBuilder, CaseOrganisation};

pub struct OrganisationMapper;

impl CaseFieldMapper for OrganisationMapper {
    fn name(&self) -> &'static str {
        "organisation"
    }

    fn map(
        &self,
        context: &MappingContext<'_>,
        builder: &mut CaseBuilder,
    ) -> Result<(), FieldMappingError> {
        let form = context.form();

        builder.organisation(CaseOrganisation {
            organisation_id: non_blank(form.exporter_organisation_id.as_ref()),
            agency_organisation_id: non_blank(form.agency_organisation_id.as_ref()),
            intermediary: form.intermediary,
        });

        Ok(())
    }
}
