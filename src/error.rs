use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::case_mapping::{CaseMappingError, FailureKind};
use crate::workflows::catalog::CatalogError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Request(JsonRejection),
    Catalog(CatalogError),
    Mapping(CaseMappingError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Json(err) => write!(f, "invalid json: {}", err),
            AppError::Request(err) => write!(f, "invalid request body: {}", err.body_text()),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Mapping(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Request(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Mapping(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, body) = match self {
            AppError::Mapping(err) => {
                let status = match err.kind() {
                    FailureKind::NotFound => StatusCode::NOT_FOUND,
                    FailureKind::BadRequest => StatusCode::BAD_REQUEST,
                    FailureKind::Unavailable => StatusCode::BAD_GATEWAY,
                };
                let failures = err
                    .failures()
                    .iter()
                    .map(|failure| {
                        json!({
                            "mapper": failure.mapper,
                            "message": failure.error.to_string(),
                        })
                    })
                    .collect::<Vec<_>>();
                let body = json!({
                    "error": message,
                    "failures": failures,
                    "violations": err.violations(),
                });
                (status, body)
            }
            AppError::Json(_) | AppError::Request(_) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message })),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        Self::Request(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<CaseMappingError> for AppError {
    fn from(value: CaseMappingError) -> Self {
        Self::Mapping(value)
    }
}
