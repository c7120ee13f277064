use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::workflows::application::{CollaboratorError, CommodityGroup};

/// Failure raised by a single field mapper. The orchestrator labels and aggregates these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldMappingError {
    #[error("question {question_id} has unknown data mapping '{label}'")]
    FailedToMapAnswer { question_id: String, label: String },
    #[error("'{answer}' is not a recognised country of export")]
    FailedToMapCountryOfExport { answer: String },
    #[error("answer '{answer}' for {field} is not a valid number")]
    MalformedNumber { field: &'static str, answer: String },
    #[error("answer '{answer}' for {field} is not a valid date")]
    MalformedDate { field: &'static str, answer: String },
    #[error("commodity group '{tag}' is not supported")]
    UnsupportedCommodityGroup { tag: String },
    #[error("{found} commodity cannot be built as {expected}")]
    CommodityFamilyMismatch {
        expected: CommodityGroup,
        found: CommodityGroup,
    },
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

/// A mapper failure labeled with the mapper that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct MapperFailure {
    pub mapper: &'static str,
    pub error: FieldMappingError,
}

impl fmt::Display for MapperFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.mapper, self.error)
    }
}

/// A schema violation found on a finished case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub property_path: String,
    pub message: String,
    pub invalid_value: Value,
}

impl Violation {
    pub fn new(property_path: impl Into<String>, message: impl Into<String>, value: Value) -> Self {
        Self {
            property_path: property_path.into(),
            message: message.into(),
            invalid_value: value,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (was {})",
            self.property_path, self.message, self.invalid_value
        )
    }
}

/// How a failed run should be reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    BadRequest,
    Unavailable,
}

/// Error returned by [`super::CaseMapper::map_case`].
#[derive(Debug, thiserror::Error)]
pub enum CaseMappingError {
    #[error("health certificate {ehc_number} not found")]
    HealthCertificateNotFound { ehc_number: String },
    #[error("unable to build mapping context: {0}")]
    Collaborator(#[from] CollaboratorError),
    #[error("failed to map case: {}", join(.0))]
    MappingFailed(Vec<MapperFailure>),
    #[error("case failed validation: {}", join(.0))]
    ValidationFailed(Vec<Violation>),
}

impl CaseMappingError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CaseMappingError::HealthCertificateNotFound { .. } => FailureKind::NotFound,
            CaseMappingError::Collaborator(_) => FailureKind::Unavailable,
            CaseMappingError::MappingFailed(_) | CaseMappingError::ValidationFailed(_) => {
                FailureKind::BadRequest
            }
        }
    }

    pub fn failures(&self) -> &[MapperFailure] {
        match self {
            CaseMappingError::MappingFailed(failures) => failures,
            _ => &[],
        }
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            CaseMappingError::ValidationFailed(violations) => violations,
            _ => &[],
        }
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
