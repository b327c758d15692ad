use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::model::DEFAULT_SCENE_NAME;

fn default_scene_name() -> String {
    DEFAULT_SCENE_NAME.to_string()
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateRequest {
    /// Manim scene source, written verbatim to `scene.py`.
    #[validate(length(min = 1, message = "Code must not be empty"))]
    pub code: String,
    /// Scene class to render.
    #[serde(default = "default_scene_name")]
    #[schema(default = "Scene")]
    #[validate(length(min = 1, message = "Scene name must not be empty"))]
    pub scene_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub success: bool,
    /// Standard base64 of the rendered video.
    pub video_base64: String,
    pub filename: String,
}
