use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

pub const WORKSPACE_PREFIX: &str = "manim_";
pub const SOURCE_FILE_NAME: &str = "scene.py";
pub const MEDIA_DIR_NAME: &str = "media";

/// Per-job scratch directory under the shared scratch root.
///
/// Call [`ScratchWorkspace::close`] when the job ends; if the guard is dropped
/// without it (a cancelled request), `Drop` removes the directory inline.
/// Removal is best-effort: failures are logged, never returned.
#[derive(Debug)]
pub struct ScratchWorkspace {
    root: PathBuf,
    closed: bool,
}

impl ScratchWorkspace {
    /// Creates `<scratch_root>/manim_<job_id>`.
    ///
    /// Fails if the directory already exists, so two jobs can never share one.
    pub async fn create(scratch_root: &Path, job_id: Uuid) -> io::Result<Self> {
        tokio::fs::create_dir_all(scratch_root).await?;

        let root = scratch_root.join(format!("{}{}", WORKSPACE_PREFIX, job_id));
        tokio::fs::create_dir(&root).await?;

        debug!("Created scratch workspace {}", root.display());
        Ok(Self { root, closed: false })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn source_path(&self) -> PathBuf {
        self.root.join(SOURCE_FILE_NAME)
    }

    pub fn media_dir(&self) -> PathBuf {
        self.root.join(MEDIA_DIR_NAME)
    }

    /// Writes the scene source verbatim and returns its path.
    pub async fn write_source(&self, code: &str) -> io::Result<PathBuf> {
        let path = self.source_path();
        tokio::fs::write(&path, code).await?;
        Ok(path)
    }

    /// Removes the workspace on the blocking pool.
    pub async fn close(mut self) {
        self.closed = true;
        let root = self.root.clone();

        if let Err(e) = tokio::task::spawn_blocking(move || remove_tree(&root)).await {
            warn!("Scratch cleanup task failed: {}", e);
        }
    }
}

impl Drop for ScratchWorkspace {
    fn drop(&mut self) {
        if !self.closed {
            remove_tree(&self.root);
        }
    }
}

fn remove_tree(root: &Path) {
    match std::fs::remove_dir_all(root) {
        Ok(()) => debug!("Removed scratch workspace {}", root.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove scratch workspace {}: {}", root.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_names_directory_after_job() {
        let root = tempfile::tempdir().unwrap();
        let id = Uuid::new_v4();

        let ws = ScratchWorkspace::create(root.path(), id).await.unwrap();

        assert!(ws.path().is_dir());
        assert_eq!(
            ws.path().file_name().unwrap().to_str().unwrap(),
            format!("manim_{}", id)
        );
        assert_eq!(ws.source_path(), ws.path().join("scene.py"));
        assert_eq!(ws.media_dir(), ws.path().join("media"));
    }

    #[tokio::test]
    async fn write_source_is_verbatim() {
        let root = tempfile::tempdir().unwrap();
        let ws = ScratchWorkspace::create(root.path(), Uuid::new_v4())
            .await
            .unwrap();
        let code = "from manim import *\n\nclass Scene(Scene):\n    pass\n";

        let path = ws.write_source(code).await.unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), code);
    }

    #[tokio::test]
    async fn same_job_id_cannot_be_reused() {
        let root = tempfile::tempdir().unwrap();
        let id = Uuid::new_v4();

        let _first = ScratchWorkspace::create(root.path(), id).await.unwrap();
        let second = ScratchWorkspace::create(root.path(), id).await;

        assert_eq!(second.unwrap_err().kind(), io::ErrorKind::AlreadyExists);
    }

    #[tokio::test]
    async fn drop_removes_whole_tree() {
        let root = tempfile::tempdir().unwrap();
        let ws = ScratchWorkspace::create(root.path(), Uuid::new_v4())
            .await
            .unwrap();
        let nested = ws.media_dir().join("videos").join("scene");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("out.mp4"), b"data").unwrap();
        let path = ws.path().to_path_buf();

        drop(ws);

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn close_removes_whole_tree() {
        let root = tempfile::tempdir().unwrap();
        let ws = ScratchWorkspace::create(root.path(), Uuid::new_v4())
            .await
            .unwrap();
        ws.write_source("print()").await.unwrap();
        std::fs::create_dir_all(ws.media_dir().join("videos")).unwrap();
        let path = ws.path().to_path_buf();

        ws.close().await;

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn drop_tolerates_already_removed_directory() {
        let root = tempfile::tempdir().unwrap();
        let ws = ScratchWorkspace::create(root.path(), Uuid::new_v4())
            .await
            .unwrap();
        std::fs::remove_dir_all(ws.path()).unwrap();

        drop(ws);
    }
}
