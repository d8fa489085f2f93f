use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::ApplicantRecord;
use super::repository::ApplicantRepository;
use super::service::ApplicantService;

/// Router builder exposing the classification endpoint.
pub fn applicant_router<R>(service: Arc<ApplicantService<R>>) -> Router
where
    R: ApplicantRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/applicants/classify",
            post(classify_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn classify_handler<R>(
    State(service): State<Arc<ApplicantService<R>>>,
    axum::Json(applicant): axum::Json<ApplicantRecord>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    match service.process_applicant(applicant) {
        Ok(status) => (StatusCode::OK, axum::Json(status)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
