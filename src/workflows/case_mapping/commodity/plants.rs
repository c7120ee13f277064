use super::{family_mismatch, CommodityBuilder};
use crate::workflows::application::{Commodity, CommodityGroup};
use crate::workflows::case_mapping::error::FieldMappingError;
use crate::workflows::case_mapping::payload::{CaseCommodity, PlantLine};

pub struct PlantsCommodityBuilder;

impl CommodityBuilder for PlantsCommodityBuilder {
    fn group(&self) -> CommodityGroup {
        CommodityGroup::Plants
    }

    fn build_commodity(&self, commodity: &Commodity) -> Result<CaseCommodity, FieldMappingError> {
        let Commodity::Plants(plant) = commodity else {
            return Err(family_mismatch(self.group(), commodity));
        };

        Ok(CaseCommodity::Plant(PlantLine {
            commodity_id: plant.id.clone(),
            scientific_name: scientific_name(&plant.genus, &plant.species),
            variety: plant
                .variety
                .as_deref()
                .map(str::trim)
                .filter(|variety| !variety.is_empty())
                .map(str::to_string),
            commodity_type: plant.commodity_type.clone(),
            quantity: plant.quantity,
            unit_of_measurement: plant.unit_of_measurement.clone(),
            number_of_packages: plant.number_of_packages,
            type_of_packaging: plant.type_of_packaging.clone(),
            country_of_origin: plant.country_of_origin.clone(),
            eppo_code: plant.eppo_code.clone(),
        }))
    }
}

/// Genus alone when the species is unknown.
fn scientific_name(genus: &str, species: &str) -> String {
    let genus = genus.trim();
    let species = species.trim();
    if species.is_empty() {
        genus.to_string()
    } else {
        format!("{genus} {species}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scientific_name_skips_blank_species() {
        assert_eq!(scientific_name("Malus", "domestica"), "Malus domestica");
        assert_eq!(scientific_name(" Rosa ", "  "), "Rosa");
    }
}
