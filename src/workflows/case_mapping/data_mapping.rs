/// Every `dataMapping` label the pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataMapping {
    CountryOfExport,
    ExportPurpose,
    PlaceOfLoading,
    NumberOfPackages,
    TotalNetWeightKg,
    DepartureDate,
    MeansOfTransportIdentifier,
    ConsigneeName,
    ConsigneeAddress,
    PointOfEntry,
    TransportMode,
    ValueInPounds,
}

/// Which mapper writes the field a label feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingOwner {
    Question,
    Consignment,
}

impl DataMapping {
    pub const fn all() -> [Self; 12] {
        [
            Self::CountryOfExport,
            Self::ExportPurpose,
            Self::PlaceOfLoading,
            Self::NumberOfPackages,
            Self::TotalNetWeightKg,
            Self::DepartureDate,
            Self::MeansOfTransportIdentifier,
            Self::ConsigneeName,
            Self::ConsigneeAddress,
            Self::PointOfEntry,
            Self::TransportMode,
            Self::ValueInPounds,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CountryOfExport => "countryOfExport",
            Self::ExportPurpose => "exportPurpose",
            Self::PlaceOfLoading => "placeOfLoading",
            Self::NumberOfPackages => "numberOfPackages",
            Self::TotalNetWeightKg => "totalNetWeightKg",
            Self::DepartureDate => "departureDate",
            Self::MeansOfTransportIdentifier => "meansOfTransportIdentifier",
            Self::ConsigneeName => "consigneeName",
            Self::ConsigneeAddress => "consigneeAddress",
            Self::PointOfEntry => "pointOfEntry",
            Self::TransportMode => "transportMode",
            Self::ValueInPounds => "valueInPounds",
        }
    }

    pub const fn owner(self) -> MappingOwner {
        match self {
            Self::ConsigneeName
            | Self::ConsigneeAddress
            | Self::PointOfEntry
            | Self::TransportMode
            | Self::ValueInPounds => MappingOwner::Consignment,
            _ => MappingOwner::Question,
        }
    }

    /// Exact label match.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|mapping| mapping.label() == label)
    }
}
