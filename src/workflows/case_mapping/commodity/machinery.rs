use super::{family_mismatch, CommodityBuilder};
use crate::workflows::application::{Commodity, CommodityGroup};
use crate::workflows::case_mapping::error::FieldMappingError;
use crate::workflows::case_mapping::payload::{CaseCommodity, MachineryLine};

pub struct MachineryCommodityBuilder;

impl CommodityBuilder for MachineryCommodityBuilder {
    fn group(&self) -> CommodityGroup {
        CommodityGroup::Machinery
    }

    fn build_commodity(&self, commodity: &Commodity) -> Result<CaseCommodity, FieldMappingError> {
        let Commodity::Machinery(machine) = commodity else {
            return Err(family_mismatch(self.group(), commodity));
        };

        Ok(CaseCommodity::Machinery(MachineryLine {
            commodity_id: machine.id.clone(),
            description: format!("{} {}", machine.make.trim(), machine.model.trim()),
            machine_type: machine.machine_type.clone(),
            make: machine.make.clone(),
            model: machine.model.clone(),
            serial_number: machine.serial_number.clone(),
            country_of_origin: machine.country_of_origin.clone(),
        }))
    }
}
