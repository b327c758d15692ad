use crate::config::env::{self, EnvKey};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_RENDERER_BIN: &str = "manim";
/// Preview, low quality. Manim writes these renders under `480p15`.
pub const DEFAULT_QUALITY_FLAG: &str = "-pql";
pub const DEFAULT_RESOLUTION_TAG: &str = "480p15";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub renderer_bin: String,
    pub quality_flag: String,
    pub resolution_tag: String,
    pub render_timeout: Duration,
    pub scratch_root: PathBuf,
    /// `0` leaves renderer spawns unbounded.
    pub max_concurrent_renders: usize,
    pub max_body_bytes: usize,
}

impl AppConfig {
    pub fn new() -> Self {
        let scratch_root = env::lookup(EnvKey::ScratchRoot)
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir);

        Self {
            server_port: env::parsed_or(EnvKey::ServerPort, DEFAULT_PORT),
            renderer_bin: env::string_or(EnvKey::RendererBin, DEFAULT_RENDERER_BIN),
            quality_flag: env::string_or(EnvKey::RendererQualityFlag, DEFAULT_QUALITY_FLAG),
            resolution_tag: env::string_or(EnvKey::RendererResolutionTag, DEFAULT_RESOLUTION_TAG),
            render_timeout: Duration::from_secs(env::parsed_or(
                EnvKey::RenderTimeoutSecs,
                DEFAULT_TIMEOUT_SECS,
            )),
            scratch_root,
            max_concurrent_renders: env::parsed_or(EnvKey::MaxConcurrentRenders, 0),
            max_body_bytes: env::parsed_or(EnvKey::MaxBodyBytes, DEFAULT_MAX_BODY_BYTES),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            renderer_bin: DEFAULT_RENDERER_BIN.to_string(),
            quality_flag: DEFAULT_QUALITY_FLAG.to_string(),
            resolution_tag: DEFAULT_RESOLUTION_TAG.to_string(),
            render_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            scratch_root: std::env::temp_dir(),
            max_concurrent_renders: 0,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}
