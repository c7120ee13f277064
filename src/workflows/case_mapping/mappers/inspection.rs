use super::{non_blank, CaseFieldMapper};
use crate::workflows::application::CommodityGroup;
use crate::workflows::case_mapping::context::MappingContext;
use crate::workflows::case_mapping::error::FieldMappingError;
use crate::workflows::case_mapping::payload::{CaseBuilder, CaseInspection};

const INSPECTION_TIME_FORMAT: &str = "%H:%M:%SZ";

/// Inspection contact, location and timing.
///
/// - Re-forwarding applications carry no inspection date or time.
/// - Plants under the PHEATS workflow carry a location but no contact details.
/// - Only machinery and potato applications carry an inspection time.
pub struct InspectionMapper;

impl CaseFieldMapper for InspectionMapper {
    fn name(&self) -> &'static str {
        "inspection"
    }

    fn map(
        &self,
        context: &MappingContext<'_>,
        builder: &mut CaseBuilder,
    ) -> Result<(), FieldMappingError> {
        let detail = &context.form().inspection;

        let mut inspection = CaseInspection {
            location_id: non_blank(detail.location_id.as_ref()),
            specific_location: non_blank(detail.specific_location.as_ref()),
            ..CaseInspection::default()
        };

        if !context.is_plants_phyto_with_pheats() {
            inspection.contact_name = non_blank(detail.contact_name.as_ref());
            inspection.contact_phone = non_blank(detail.contact_phone.as_ref());
            inspection.contact_email = non_blank(detail.contact_email.as_ref());
        }

        if !context.is_reforwarding() {
            inspection.date = detail.date.map(|timestamp| timestamp.date_naive());

            if carries_inspection_time(context) {
                inspection.time = detail
                    .date
                    .map(|timestamp| timestamp.format(INSPECTION_TIME_FORMAT).to_string());
            }
        }

        builder.inspection(inspection);
        Ok(())
    }
}

fn carries_inspection_time(context: &MappingContext<'_>) -> bool {
    if context.is_plant_products() || context.is_reforwarding() {
        return false;
    }

    matches!(
        context.commodity_group(),
        Some(CommodityGroup::Machinery | CommodityGroup::Potatoes)
    )
}
