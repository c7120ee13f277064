use super::{family_mismatch, CommodityBuilder};
use crate::workflows::application::{Commodity, CommodityGroup};
use crate::workflows::case_mapping::error::FieldMappingError;
use crate::workflows::case_mapping::payload::{CaseCommodity, PlantProductLine};

pub struct PlantProductsCommodityBuilder;

impl CommodityBuilder for PlantProductsCommodityBuilder {
    fn group(&self) -> CommodityGroup {
        CommodityGroup::PlantProducts
    }

    fn build_commodity(&self, commodity: &Commodity) -> Result<CaseCommodity, FieldMappingError> {
        let Commodity::PlantProducts(product) = commodity else {
            return Err(family_mismatch(self.group(), commodity));
        };

        let additional = &product.additional_countries_of_origin;
        let countries_of_origin = std::iter::once(product.country_of_origin.as_str())
            .chain(additional.iter().map(String::as_str))
            .map(str::trim)
            .filter(|country| !country.is_empty())
            .collect::<Vec<_>>()
            .join(",");

        Ok(CaseCommodity::PlantProduct(PlantProductLine {
            commodity_id: product.id.clone(),
            species: product.species.clone(),
            product_type: product.product_type.clone(),
            quantity: product.quantity,
            unit_of_measurement: product.unit_of_measurement.clone(),
            number_of_packages: product.number_of_packages,
            type_of_packaging: product.type_of_packaging.clone(),
            countries_of_origin,
        }))
    }
}
