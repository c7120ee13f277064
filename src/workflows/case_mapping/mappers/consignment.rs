use super::CaseFieldMapper;
use crate::workflows::case_mapping::coercion;
use crate::workflows::case_mapping::commodity::CommodityBuilderRegistry;
use crate::workflows::case_mapping::context::MappingContext;
use crate::workflows::case_mapping::data_mapping::DataMapping;
use crate::workflows::case_mapping::error::FieldMappingError;
use crate::workflows::case_mapping::payload::{
    CaseBuilder, CaseConsignment, Consignee, OtherConsignmentDetails,
};

/// Assembles the consignment: consignee and other details from mapped questions, commodity lines
/// from the builder registered for the application's commodity group.
pub struct ConsignmentMapper {
    registry: CommodityBuilderRegistry,
}

impl ConsignmentMapper {
    pub fn new(registry: CommodityBuilderRegistry) -> Self {
        Self { registry }
    }
}

impl CaseFieldMapper for ConsignmentMapper {
    fn name(&self) -> &'static str {
        "consignment"
    }

    fn map(
        &self,
        context: &MappingContext<'_>,
        builder: &mut CaseBuilder,
    ) -> Result<(), FieldMappingError> {
        let form = context.form();
        let commodity_builder = self.registry.builder_for(&form.commodity_group)?;

        let commodities = form
            .consignment
            .iter()
            .flat_map(|consignment| consignment.commodities.iter())
            .map(|commodity| commodity_builder.build_commodity(commodity))
            .collect::<Result<Vec<_>, _>>()?;

        let consignee = Consignee {
            name: coercion::text(context.answer_for_mapping(DataMapping::ConsigneeName)?),
            address: coercion::text(context.answer_for_mapping(DataMapping::ConsigneeAddress)?),
            point_of_entry: coercion::text(
                context.answer_for_mapping(DataMapping::PointOfEntry)?,
            ),
        };

        let other_details = OtherConsignmentDetails {
            value_in_pounds: coercion::value_in_pounds(
                context.answer_for_mapping(DataMapping::ValueInPounds)?,
            )?,
            transport_mode: coercion::text(
                context.answer_for_mapping(DataMapping::TransportMode)?,
            ),
        };

        builder.consignment(CaseConsignment {
            consignee,
            other_details,
            commodity_group: commodity_builder.group().tag().to_string(),
            commodities,
        });

        Ok(())
    }
}
