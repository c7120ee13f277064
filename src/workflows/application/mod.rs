//! Read-only view of an export certificate application and the configuration it references.
//!
//! Persistence, form configuration and certificate lookup live behind the collaborator traits in
//! [`repository`]; nothing in this module mutates an application.

pub mod certificate;
pub mod domain;
pub mod form_config;
pub mod repository;

pub use certificate::{ApplicationType, HealthCertificate};
pub use domain::{
    AnsweredItem, ApplicationForm, ApplicationFormId, ApplicationFormStatus, Commodity,
    CommodityGroup, Consignment, ConsignmentRepackaging, FormVersion, InspectionDetail,
    MachineryCommodity, PlantProductsCommodity, PlantsCommodity, PotatoType, PotatoesCommodity,
    ReforwardingDetails, SupplementaryDocument,
};
pub use form_config::{MergedFormPage, MergedFormQuestion};
pub use repository::{CollaboratorError, FormConfigurationService, HealthCertificateService};
