//! Family-specific commodity shaping, selected by the application's commodity group.

mod machinery;
mod plant_products;
mod plants;
mod potatoes;

use std::collections::HashMap;

pub use machinery::MachineryCommodityBuilder;
pub use plant_products::PlantProductsCommodityBuilder;
pub use plants::PlantsCommodityBuilder;
pub use potatoes::PotatoesCommodityBuilder;

use super::error::FieldMappingError;
use super::payload::CaseCommodity;
use crate::workflows::application::{Commodity, CommodityGroup};

/// Turns one domain commodity into its case line.
pub trait CommodityBuilder: Send + Sync {
    fn group(&self) -> CommodityGroup;

    fn build_commodity(&self, commodity: &Commodity) -> Result<CaseCommodity, FieldMappingError>;
}

pub(crate) fn family_mismatch(
    expected: CommodityGroup,
    commodity: &Commodity,
) -> FieldMappingError {
    FieldMappingError::CommodityFamilyMismatch {
        expected,
        found: commodity.group(),
    }
}

/// One builder per supported commodity group.
pub struct CommodityBuilderRegistry {
    builders: HashMap<CommodityGroup, Box<dyn CommodityBuilder>>,
}

impl CommodityBuilderRegistry {
    pub fn standard() -> Self {
        let builders: [Box<dyn CommodityBuilder>; 4] = [
            Box::new(MachineryCommodityBuilder),
            Box::new(PlantsCommodityBuilder),
            Box::new(PlantProductsCommodityBuilder),
            Box::new(PotatoesCommodityBuilder),
        ];

        Self {
            builders: builders
                .into_iter()
                .map(|builder| (builder.group(), builder))
                .collect(),
        }
    }

    pub fn builder_for(&self, tag: &str) -> Result<&dyn CommodityBuilder, FieldMappingError> {
        CommodityGroup::from_tag(tag)
            .and_then(|group| self.builders.get(&group))
            .map(|builder| &**builder)
            .ok_or_else(|| FieldMappingError::UnsupportedCommodityGroup {
                tag: tag.to_string(),
            })
    }
}

impl Default for CommodityBuilderRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
