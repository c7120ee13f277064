use std::cell::OnceCell;

use tracing::debug;

use super::data_mapping::DataMapping;
use super::question_index::QuestionIndex;
use crate::workflows::application::{
    ApplicationForm, ApplicationType, CollaboratorError, CommodityGroup, FormConfigurationService,
    HealthCertificate, MergedFormPage, MergedFormQuestion,
};

/// EHC version marker for certificates completed outside the service.
pub const OFFLINE_EHC_VERSION: &str = "OFFLINE";

/// Per-run view over the application, its certificate and the form configuration.
///
/// Derived values are computed on first access and kept for the lifetime of the context, so the
/// form-configuration collaborator is called at most once per run. A context belongs to a single
/// mapping run and is not shared across threads.
pub struct MappingContext<'a> {
    form: &'a ApplicationForm,
    certificate: &'a HealthCertificate,
    form_config: &'a dyn FormConfigurationService,
    merged_pages: OnceCell<Vec<MergedFormPage>>,
    mapped_questions: OnceCell<Vec<MergedFormQuestion>>,
    answers: OnceCell<QuestionIndex>,
}

impl<'a> MappingContext<'a> {
    pub fn new(
        form: &'a ApplicationForm,
        certificate: &'a HealthCertificate,
        form_config: &'a dyn FormConfigurationService,
    ) -> Self {
        Self {
            form,
            certificate,
            form_config,
            merged_pages: OnceCell::new(),
            mapped_questions: OnceCell::new(),
            answers: OnceCell::new(),
        }
    }

    pub fn form(&self) -> &'a ApplicationForm {
        self.form
    }

    pub fn certificate(&self) -> &'a HealthCertificate {
        self.certificate
    }

    pub fn merged_form_pages(&self) -> Result<&[MergedFormPage], CollaboratorError> {
        if let Some(pages) = self.merged_pages.get() {
            return Ok(pages);
        }

        let ehc = &self.form.ehc;
        let exa = &self.form.exa;
        let pages =
            self.form_config
                .merged_form_pages(&ehc.name, &ehc.version, &exa.name, &exa.version)?;
        debug!(
            ehc = %ehc.name,
            exa = %exa.name,
            pages = pages.len(),
            "loaded merged form pages"
        );

        Ok(self.merged_pages.get_or_init(|| pages))
    }

    /// Questions carrying a non-empty `dataMapping`, in page order.
    pub fn mapped_questions(&self) -> Result<&[MergedFormQuestion], CollaboratorError> {
        if let Some(questions) = self.mapped_questions.get() {
            return Ok(questions);
        }

        let questions = self
            .merged_form_pages()?
            .iter()
            .flat_map(|page| page.questions.iter())
            .filter(|question| question.mapping_label().is_some())
            .cloned()
            .collect::<Vec<_>>();

        Ok(self.mapped_questions.get_or_init(|| questions))
    }

    pub fn answered_items(&self) -> &QuestionIndex {
        self.answers
            .get_or_init(|| QuestionIndex::build(&self.form.answered_items))
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&str> {
        self.answered_items()
            .get(question_id)
            .map(|item| item.answer.as_str())
    }

    /// First non-blank answer among the questions labelled with `mapping`.
    pub fn answer_for_mapping(
        &self,
        mapping: DataMapping,
    ) -> Result<Option<&str>, CollaboratorError> {
        let answer = self
            .mapped_questions()?
            .iter()
            .filter(|question| question.mapping_label() == Some(mapping.label()))
            .filter_map(|question| self.answer_for(&question.question_id))
            .find(|answer| !answer.trim().is_empty());
        Ok(answer)
    }

    pub fn commodity_group(&self) -> Option<CommodityGroup> {
        CommodityGroup::from_tag(&self.form.commodity_group)
    }

    pub fn is_offline_ehc(&self) -> bool {
        self.form
            .ehc
            .version
            .trim()
            .eq_ignore_ascii_case(OFFLINE_EHC_VERSION)
    }

    pub fn is_plants_phyto_with_pheats(&self) -> bool {
        self.form.pheats
            && self.commodity_group() == Some(CommodityGroup::Plants)
            && self.certificate.application_type == ApplicationType::Phyto
    }

    pub fn is_plant_products(&self) -> bool {
        self.commodity_group() == Some(CommodityGroup::PlantProducts)
    }

    pub fn is_reforwarding(&self) -> bool {
        self.certificate.application_type == ApplicationType::Reforwarding
    }
}
