use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::common::response::ApiError;
use crate::infrastructure::renderer::process::ProcessError;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Manim execution failed: {stderr}")]
    ExecutionFailed { exit_code: i32, stderr: String },

    #[error("Animation generation timed out")]
    TimedOut,

    #[error("No video file was generated")]
    ArtifactMissing,

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Unclassified(String),
}

impl RenderError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RenderError::Validation(_) | RenderError::ExecutionFailed { .. } => {
                StatusCode::BAD_REQUEST
            }
            RenderError::TimedOut => StatusCode::REQUEST_TIMEOUT,
            RenderError::ArtifactMissing | RenderError::Io(_) | RenderError::Unclassified(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl RenderError {
    /// Renderer exit code, for failures where the renderer ran to completion.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            RenderError::ExecutionFailed { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }
}

impl From<ProcessError> for RenderError {
    fn from(e: ProcessError) -> Self {
        match e {
            ProcessError::Timeout { .. } => RenderError::TimedOut,
            ProcessError::Io(e) => RenderError::Io(e),
        }
    }
}

impl From<RenderError> for ApiError {
    fn from(e: RenderError) -> Self {
        ApiError(e.to_string(), e.status_code())
    }
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Render failed: {}", self);
        } else if let Some(code) = self.exit_code() {
            warn!(exit_code = code, "Render rejected ({}): {}", status, self);
        } else {
            warn!("Render rejected ({}): {}", status, self);
        }
        ApiError::from(self).into_response()
    }
}
