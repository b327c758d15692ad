use utoipa::OpenApi;
use crate::common::response::ErrorResponse;
use crate::modules::health::handler::HealthResponse;
use crate::modules::render::dto::{GenerateRequest, GenerateResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::render::handler::generate,
        crate::modules::health::handler::health,
    ),
    components(
        schemas(GenerateRequest, GenerateResponse, HealthResponse, ErrorResponse)
    ),
    tags(
        (name = "Render", description = "Manim scene rendering"),
        (name = "Health", description = "Liveness")
    )
)]
pub struct ApiDoc;
