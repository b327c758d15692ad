use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::{info, info_span, Instrument};
use validator::Validate;

use super::dto::{GenerateRequest, GenerateResponse};
use super::error::RenderError;
use super::model::RenderJob;
use crate::infrastructure::scratch::workspace::ScratchWorkspace;
use crate::state::AppState;

pub struct RenderService;

impl RenderService {
    pub async fn generate(state: AppState, req: GenerateRequest) -> Result<GenerateResponse, RenderError> {
        req.validate()
            .map_err(|e| RenderError::Validation(e.to_string()))?;

        let job = RenderJob::new(req.code, req.scene_name);
        let span = info_span!("render_job", job_id = %job.id, scene = %job.scene_name);

        Self::run(state, job).instrument(span).await
    }

    async fn run(state: AppState, job: RenderJob) -> Result<GenerateResponse, RenderError> {
        // Held until the job finishes, when a render limit is configured.
        let _permit = match &state.render_slots {
            Some(slots) => Some(
                slots
                    .clone()
                    .acquire_owned()
                    .await
                    .map_err(|e| RenderError::Unclassified(e.to_string()))?,
            ),
            None => None,
        };

        let workspace = ScratchWorkspace::create(&state.config.scratch_root, job.id).await?;
        let result = Self::render_in(&state, &job, &workspace).await;
        workspace.close().await;

        result
    }

    async fn render_in(
        state: &AppState,
        job: &RenderJob,
        workspace: &ScratchWorkspace,
    ) -> Result<GenerateResponse, RenderError> {
        workspace.write_source(&job.source_code).await?;

        info!("Rendering scene");
        let output = state.renderer.render(workspace, &job.scene_name).await?;

        if !output.success() {
            return Err(RenderError::ExecutionFailed {
                exit_code: output.exit_code,
                stderr: output.stderr,
            });
        }

        let artifact = state
            .renderer
            .find_artifact(workspace)
            .await?
            .ok_or(RenderError::ArtifactMissing)?;

        let bytes = tokio::fs::read(&artifact).await?;
        info!(
            "Rendered {} bytes in {}ms",
            bytes.len(),
            output.duration_ms
        );

        Ok(GenerateResponse {
            success: true,
            video_base64: STANDARD.encode(&bytes),
            filename: job.filename(),
        })
    }
}
