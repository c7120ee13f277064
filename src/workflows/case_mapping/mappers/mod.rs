//! Field mappers, run in registration order against one context and one builder.
//!
//! Section ownership (each case section is written by one mapper only):
//!
//! | mapper                | section                                |
//! |-----------------------|----------------------------------------|
//! | `submission`          | identity, status, submission date      |
//! | `organisation`        | organisation, agency, intermediary     |
//! | `applicant`           | applicant id and reference             |
//! | `questions`           | export details fed by mapped questions |
//! | `consignment`         | consignment                            |
//! | `inspection`          | inspection                             |
//! | `required_by_date`    | required-by date                       |
//! | `further_information` | further information                    |
//! | `links`               | certificate, edit and document URLs    |
//! | `reforwarding`        | re-forwarding details                  |

mod applicant;
mod consignment;
mod dates;
mod further_information;
mod inspection;
mod links;
mod organisation;
mod question;
mod reforwarding;
mod submission;

pub use applicant::ApplicantMapper;
pub use consignment::ConsignmentMapper;
pub use dates::RequiredByDateMapper;
pub use further_information::FurtherInformationMapper;
pub use inspection::InspectionMapper;
pub use links::LinksMapper;
pub use organisation::OrganisationMapper;
pub use question::QuestionMapper;
pub use reforwarding::ReforwardingMapper;
pub use submission::SubmissionMapper;

use super::commodity::CommodityBuilderRegistry;
use super::context::MappingContext;
use super::error::FieldMappingError;
use super::payload::CaseBuilder;
use crate::config::LinkConfig;

/// One independent contribution to the case.
pub trait CaseFieldMapper: Send + Sync {
    /// Label used when reporting this mapper's failures.
    fn name(&self) -> &'static str;

    fn map(
        &self,
        context: &MappingContext<'_>,
        builder: &mut CaseBuilder,
    ) -> Result<(), FieldMappingError>;
}

pub fn standard_mappers(links: &LinkConfig) -> Vec<Box<dyn CaseFieldMapper>> {
    vec![
        Box::new(SubmissionMapper),
        Box::new(OrganisationMapper),
        Box::new(ApplicantMapper),
        Box::new(QuestionMapper),
        Box::new(ConsignmentMapper::new(CommodityBuilderRegistry::standard())),
        Box::new(InspectionMapper),
        Box::new(RequiredByDateMapper),
        Box::new(FurtherInformationMapper),
        Box::new(LinksMapper::new(links.clone())),
        Box::new(ReforwardingMapper),
    ]
}

/// Trimmed copy of an optional free-text value, `None` when blank.
pub(crate) fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
