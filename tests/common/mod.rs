#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use manim_gateway::app::create_app;
use manim_gateway::config::settings::AppConfig;
use manim_gateway::state::AppState;

/// Writes `media/videos/scene/480p15/<scene>.mp4` containing the submitted source.
pub const RENDER_SOURCE_AS_VIDEO: &str = r#"
out="$2/videos/scene/480p15"
mkdir -p "$out"
cat "$3" > "$out/$4.mp4"
"#;

pub const FAIL_WITH_NAME_ERROR: &str = r#"
echo "NameError: name 'Circl' is not defined" >&2
exit 1
"#;

pub const HANG: &str = "exec sleep 30\n";

pub const SUCCEED_WITHOUT_OUTPUT: &str = "exit 0\n";

/// Scratch root plus a fake renderer script, both removed on drop.
pub struct TestEnv {
    pub dir: TempDir,
    pub config: AppConfig,
}

impl TestEnv {
    /// The fake renderer runs as `sh <script> --media_dir <media> <source> <scene>`:
    /// the script path sits where the quality flag normally goes, so no
    /// executable bit is needed.
    pub fn new(script: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let script_path = dir.path().join("fake_manim.sh");
        std::fs::write(&script_path, script).unwrap();

        let config = AppConfig {
            renderer_bin: "sh".to_string(),
            quality_flag: script_path.to_string_lossy().into_owned(),
            render_timeout: Duration::from_secs(10),
            scratch_root: dir.path().join("scratch"),
            ..AppConfig::default()
        };

        Self { dir, config }
    }

    pub fn app(&self) -> Router {
        create_app(AppState::new(self.config.clone()))
    }

    pub fn scratch_root(&self) -> &Path {
        &self.config.scratch_root
    }

    /// Job workspaces still present under the scratch root.
    pub fn leftover_workspaces(&self) -> Vec<PathBuf> {
        match std::fs::read_dir(self.scratch_root()) {
            Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
            Err(_) => Vec::new(),
        }
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, serde_json::to_vec(&body).unwrap()).await
}

pub async fn post_raw(app: Router, uri: &str, body: Vec<u8>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
