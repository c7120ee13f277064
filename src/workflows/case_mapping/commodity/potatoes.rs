use super::{family_mismatch, CommodityBuilder};
use crate::workflows::application::{Commodity, CommodityGroup};
use crate::workflows::case_mapping::error::FieldMappingError;
use crate::workflows::case_mapping::payload::{CaseCommodity, PotatoLine};

const NO_CHEMICAL_USED: &str = "None";

pub struct PotatoesCommodityBuilder;

impl CommodityBuilder for PotatoesCommodityBuilder {
    fn group(&self) -> CommodityGroup {
        CommodityGroup::Potatoes
    }

    fn build_commodity(&self, commodity: &Commodity) -> Result<CaseCommodity, FieldMappingError> {
        let Commodity::Potatoes(potato) = commodity else {
            return Err(family_mismatch(self.group(), commodity));
        };

        let chemical_used = potato
            .chemical_used
            .as_deref()
            .map(str::trim)
            .filter(|chemical| !chemical.is_empty())
            .unwrap_or(NO_CHEMICAL_USED)
            .to_string();

        Ok(CaseCommodity::Potato(PotatoLine {
            commodity_id: potato.id.clone(),
            potato_type: potato.potato_type.label().to_string(),
            variety: potato.variety.clone(),
            chemical_used,
            stock_number: potato.stock_number.clone(),
            lot_reference: potato.lot_reference.clone(),
            distinguishing_marks: potato.distinguishing_marks.clone(),
            quantity: potato.quantity,
            unit_of_measurement: potato.unit_of_measurement.clone(),
            number_of_packages: potato.number_of_packages,
            type_of_packaging: potato.type_of_packaging.clone(),
        }))
    }
}
