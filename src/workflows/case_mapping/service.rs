use std::sync::Arc;

use tracing::{debug, info, warn};

use super::context::MappingContext;
use super::error::{CaseMappingError, MapperFailure};
use super::mappers::{standard_mappers, CaseFieldMapper};
use super::payload::{Case, CaseBuilder};
use super::validation::CaseValidator;
use crate::config::LinkConfig;
use crate::workflows::application::{
    ApplicationForm, FormConfigurationService, HealthCertificateService,
};

/// Maps an application form onto a validated case.
///
/// Every mapper runs even when an earlier one fails; all failures are returned together. The
/// case is only returned when every mapper succeeded and validation found nothing.
pub struct CaseMapper<F, H> {
    form_config: Arc<F>,
    certificates: Arc<H>,
    mappers: Vec<Box<dyn CaseFieldMapper>>,
    validator: CaseValidator,
}

impl<F, H> CaseMapper<F, H>
where
    F: FormConfigurationService + 'static,
    H: HealthCertificateService + 'static,
{
    pub fn new(form_config: Arc<F>, certificates: Arc<H>, links: &LinkConfig) -> Self {
        Self::with_mappers(form_config, certificates, standard_mappers(links))
    }

    pub fn with_mappers(
        form_config: Arc<F>,
        certificates: Arc<H>,
        mappers: Vec<Box<dyn CaseFieldMapper>>,
    ) -> Self {
        Self {
            form_config,
            certificates,
            mappers,
            validator: CaseValidator,
        }
    }

    pub fn map_case(&self, form: &ApplicationForm) -> Result<Case, CaseMappingError> {
        let ehc_number = form.ehc.name.as_str();
        let certificate = self
            .certificates
            .health_certificate(ehc_number)?
            .ok_or_else(|| CaseMappingError::HealthCertificateNotFound {
                ehc_number: ehc_number.to_string(),
            })?;

        let context = MappingContext::new(form, &certificate, self.form_config.as_ref());
        // A configuration outage ends the run here instead of surfacing as mapper failures.
        context.merged_form_pages()?;

        let mut builder = CaseBuilder::new();
        let failures = self.run_mappers(&context, &mut builder);
        if !failures.is_empty() {
            warn!(
                application_form_id = %form.id,
                failures = failures.len(),
                "case mapping failed"
            );
            return Err(CaseMappingError::MappingFailed(failures));
        }

        let case = builder.build();
        let violations = self.validator.validate(&case);
        if !violations.is_empty() {
            warn!(
                application_form_id = %form.id,
                violations = violations.len(),
                "mapped case failed validation"
            );
            return Err(CaseMappingError::ValidationFailed(violations));
        }

        info!(application_form_id = %form.id, ehc = ehc_number, "case mapped");
        Ok(case)
    }

    fn run_mappers(
        &self,
        context: &MappingContext<'_>,
        builder: &mut CaseBuilder,
    ) -> Vec<MapperFailure> {
        let mut failures = Vec::new();

        for mapper in &self.mappers {
            match mapper.map(context, builder) {
                Ok(()) => debug!(mapper = mapper.name(), "mapper completed"),
                Err(error) => {
                    warn!(mapper = mapper.name(), %error, "mapper failed");
                    failures.push(MapperFailure {
                        mapper: mapper.name(),
                        error,
                    });
                }
            }
        }

        failures
    }
}
