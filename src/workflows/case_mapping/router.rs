use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};

use super::service::CaseMapper;
use crate::error::AppError;
use crate::workflows::application::{
    ApplicationForm, FormConfigurationService, HealthCertificateService,
};

/// Router exposing the case mapping pipeline.
pub fn case_router<F, H>(mapper: Arc<CaseMapper<F, H>>) -> Router
where
    F: FormConfigurationService + 'static,
    H: HealthCertificateService + 'static,
{
    Router::new()
        .route("/api/v1/cases/map", post(map_case_handler::<F, H>))
        .with_state(mapper)
}

pub(crate) async fn map_case_handler<F, H>(
    State(mapper): State<Arc<CaseMapper<F, H>>>,
    payload: Result<axum::Json<ApplicationForm>, JsonRejection>,
) -> Response
where
    F: FormConfigurationService + 'static,
    H: HealthCertificateService + 'static,
{
    let axum::Json(form) = match payload {
        Ok(form) => form,
        Err(rejection) => return AppError::from(rejection).into_response(),
    };

    match mapper.map_case(&form) {
        Ok(case) => (StatusCode::OK, axum::Json(case)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}
