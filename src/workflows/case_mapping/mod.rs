//! Maps a submitted application form onto the downstream case payload.
//!
//! A [`CaseMapper`] looks up the health certificate, builds a per-run [`MappingContext`], runs
//! every registered [`CaseFieldMapper`] against a shared [`CaseBuilder`], and validates the
//! finished [`Case`]. Mapper failures are collected, never short-circuited.

pub mod coercion;
pub mod commodity;
pub mod context;
pub mod data_mapping;
pub mod error;
pub mod mappers;
pub mod payload;
pub mod question_index;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use commodity::{CommodityBuilder, CommodityBuilderRegistry};
pub use context::{MappingContext, OFFLINE_EHC_VERSION};
pub use data_mapping::{DataMapping, MappingOwner};
pub use error::{CaseMappingError, FailureKind, FieldMappingError, MapperFailure, Violation};
pub use mappers::{standard_mappers, CaseFieldMapper};
pub use payload::{
    Case, CaseApplicant, CaseBuilder, CaseCommodity, CaseConsignment, CaseIdentity,
    CaseInspection, CaseLinks, CaseOrganisation, CaseReforwardingDetails, Consignee,
    ExportDetails, MachineryLine, MonetaryValue, OtherConsignmentDetails, PlantLine,
    PlantProductLine, PotatoLine,
};
pub use question_index::QuestionIndex;
pub use router::case_router;
pub use service::CaseMapper;
pub use validation::CaseValidator;
