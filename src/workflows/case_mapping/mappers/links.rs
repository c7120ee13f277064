use super::CaseFieldMapper;
use crate::config::LinkConfig;
use crate::workflows::case_mapping::context::MappingContext;
use crate::workflows::case_mapping::error::FieldMappingError;
use crate::workflows::case_mapping::payload::{CaseBuilder, CaseLinks};

/// Derives the links the case worker follows back into the service.
pub struct LinksMapper {
    links: LinkConfig,
}

impl LinksMapper {
    pub fn new(links: LinkConfig) -> Self {
        Self { links }
    }
}

impl CaseFieldMapper for LinksMapper {
    fn name(&self) -> &'static str {
        "links"
    }

    fn map(
        &self,
        context: &MappingContext<'_>,
        builder: &mut CaseBuilder,
    ) -> Result<(), FieldMappingError> {
        let form = context.form();
        let frontend = &self.links.frontend_url;

        // Offline certificates are produced by hand, not by the certificate service.
        let certificate_generation_url = (!context.is_offline_ehc()).then(|| {
            format!(
                "{}/certificate/{}?applicationFormId={}",
                self.links.certificate_service_url, form.ehc.name, form.id
            )
        });

        let uploaded_documents_view_url = (!form.supplementary_documents.is_empty())
            .then(|| format!("{frontend}/applications/{}/supplementary-documents", form.id));

        builder.links(CaseLinks {
            certificate_generation_url,
            edit_application_url: format!("{frontend}/applications/{}/edit", form.id),
            uploaded_documents_view_url,
        });

        Ok(())
    }
}
