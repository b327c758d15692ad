use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, info};

use super::process::{self, ProcessError, ProcessOutput};
use crate::config::settings::AppConfig;
use crate::infrastructure::scratch::workspace::ScratchWorkspace;

pub const VIDEO_EXTENSION: &str = "mp4";

/// Thin client around the `manim` command-line renderer.
#[derive(Clone, Debug)]
pub struct ManimRenderer {
    pub bin: String,
    pub quality_flag: String,
    pub resolution_tag: String,
    pub timeout: Duration,
}

impl ManimRenderer {
    pub fn new(config: &AppConfig) -> Self {
        info!(
            "Renderer configured: {} {} (timeout {}s)",
            config.renderer_bin,
            config.quality_flag,
            config.render_timeout.as_secs()
        );

        Self {
            bin: config.renderer_bin.clone(),
            quality_flag: config.quality_flag.clone(),
            resolution_tag: config.resolution_tag.clone(),
            timeout: config.render_timeout,
        }
    }

    /// `<bin> <quality_flag> --media_dir <media> <source> <scene_name>`
    pub fn command(&self, workspace: &ScratchWorkspace, scene_name: &str) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.arg(&self.quality_flag)
            .arg("--media_dir")
            .arg(workspace.media_dir())
            .arg(workspace.source_path())
            .arg(scene_name)
            .current_dir(workspace.path());
        cmd
    }

    pub async fn render(
        &self,
        workspace: &ScratchWorkspace,
        scene_name: &str,
    ) -> Result<ProcessOutput, ProcessError> {
        let mut cmd = self.command(workspace, scene_name);
        debug!("Spawning renderer: {:?}", cmd.as_std());

        process::run_with_timeout(&mut cmd, self.timeout).await
    }

    /// Directory the renderer populates on success:
    /// `<media>/videos/<source stem>/<resolution tag>`.
    pub fn output_dir(&self, workspace: &ScratchWorkspace) -> PathBuf {
        let source = workspace.source_path();
        let stem = source.file_stem().unwrap_or_default();

        workspace
            .media_dir()
            .join("videos")
            .join(stem)
            .join(&self.resolution_tag)
    }

    /// First video file in the conventional output directory, by file name.
    pub async fn find_artifact(&self, workspace: &ScratchWorkspace) -> io::Result<Option<PathBuf>> {
        find_first_video(&self.output_dir(workspace)).await
    }
}

/// Regular `*.mp4` files in `dir`, sorted by name; a missing directory
/// counts as empty.
pub async fn find_first_video(dir: &Path) -> io::Result<Option<PathBuf>> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let mut videos = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension() == Some(OsStr::new(VIDEO_EXTENSION)) && entry.file_type().await?.is_file() {
            videos.push(path);
        }
    }

    videos.sort();
    Ok(videos.into_iter().next())
}
