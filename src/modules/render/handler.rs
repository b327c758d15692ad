use super::dto::{GenerateRequest, GenerateResponse};
use super::service::RenderService;
use crate::common::response::{ApiError, ApiSuccess, ErrorResponse};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::warn;

/// Render a Manim scene to video
#[utoipa::path(
    post,
    path = "/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Video rendered", body = GenerateResponse),
        (status = 400, description = "Invalid request or renderer failure", body = ErrorResponse),
        (status = 408, description = "Renderer timed out", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
        (status = 422, description = "Body does not match the request schema", body = ErrorResponse),
        (status = 500, description = "No video produced or internal error", body = ErrorResponse)
    ),
    tag = "Render"
)]
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(p) => p,
        Err(rejection) => {
            warn!("Rejected render request: {}", rejection.body_text());
            return ApiError(rejection.body_text(), rejection.status()).into_response();
        }
    };

    match RenderService::generate(state, payload).await {
        Ok(res) => ApiSuccess(res, StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}
