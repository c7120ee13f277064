use super::CaseFieldMapper;
use crate::workflows::case_mapping::coercion;
use crate::workflows::case_mapping::context::MappingContext;
use crate::workflows::case_mapping::data_mapping::{DataMapping, MappingOwner};
use crate::workflows::case_mapping::error::FieldMappingError;
use crate::workflows::case_mapping::payload::{CaseBuilder, ExportDetails};

/// Copies answers to mapped questions onto the case, coercing each to its field's type.
///
/// Labels owned by another mapper are skipped. A label outside the known table fails the
/// mapper, so a form-configuration change cannot silently drop an answer.
pub struct QuestionMapper;

impl CaseFieldMapper for QuestionMapper {
    fn name(&self) -> &'static str {
        "questions"
    }

    fn map(
        &self,
        context: &MappingContext<'_>,
        builder: &mut CaseBuilder,
    ) -> Result<(), FieldMappingError> {
        let mut details = ExportDetails::default();

        for question in context.mapped_questions()? {
            let Some(label) = question.mapping_label() else {
                continue;
            };

            let mapping = DataMapping::from_label(label).ok_or_else(|| {
                FieldMappingError::FailedToMapAnswer {
                    question_id: question.question_id.clone(),
                    label: label.to_string(),
                }
            })?;

            if mapping.owner() != MappingOwner::Question {
                continue;
            }

            apply_answer(
                &mut details,
                mapping,
                context.answer_for(&question.question_id),
            )?;
        }

        builder.export_details(details);
        Ok(())
    }
}

/// Writes only when the answer converts to a value, so an unanswered duplicate never clears an
/// earlier answer.
fn apply_answer(
    details: &mut ExportDetails,
    mapping: DataMapping,
    answer: Option<&str>,
) -> Result<(), FieldMappingError> {
    match mapping {
        DataMapping::CountryOfExport => {
            assign(&mut details.country_of_export, coercion::country_of_export(answer)?)
        }
        DataMapping::ExportPurpose => assign(&mut details.export_purpose, coercion::text(answer)),
        DataMapping::PlaceOfLoading => {
            assign(&mut details.place_of_loading, coercion::text(answer))
        }
        DataMapping::NumberOfPackages => assign(
            &mut details.number_of_packages,
            coercion::whole_number(mapping.label(), answer)?,
        ),
        DataMapping::TotalNetWeightKg => assign(
            &mut details.total_net_weight_kg,
            coercion::decimal(mapping.label(), answer)?,
        ),
        DataMapping::DepartureDate => assign(
            &mut details.departure_date,
            coercion::date(mapping.label(), answer)?,
        ),
        DataMapping::MeansOfTransportIdentifier => assign(
            &mut details.means_of_transport_identifier,
            coercion::text(answer),
        ),
        DataMapping::ConsigneeName
        | DataMapping::ConsigneeAddress
        | DataMapping::PointOfEntry
        | DataMapping::TransportMode
        | DataMapping::ValueInPounds => {}
    }

    Ok(())
}

fn assign<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}
