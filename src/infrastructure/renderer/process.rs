//! Child-process execution with captured output and a wall-clock bound.

use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

/// Cap on captured stdout/stderr per stream (10 MiB).
const MAX_OUTPUT_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: u64,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Failed to run process: {0}")]
    Io(#[from] std::io::Error),

    #[error("Process timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },
}

/// Spawns `cmd`, captures both output streams and waits at most `timeout`.
///
/// The deadline covers both the exit and the draining of its output. On
/// timeout the child is dropped, and `kill_on_drop` kills it.
/// A process terminated by a signal reports exit code `-1`.
pub async fn run_with_timeout(
    cmd: &mut Command,
    timeout: Duration,
) -> Result<ProcessOutput, ProcessError> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let start = Instant::now();
    let mut child = cmd.spawn()?;

    // Drain pipes concurrently so a chatty child cannot block on a full pipe.
    let stdout_task = tokio::spawn(read_stream(child.stdout.take()));
    let stderr_task = tokio::spawn(read_stream(child.stderr.take()));
    let stdout_abort = stdout_task.abort_handle();
    let stderr_abort = stderr_task.abort_handle();

    // The drains count against the deadline too: a descendant that inherited
    // the pipes keeps them open after the child itself has exited.
    let run = async {
        let status = child.wait().await?;
        let (stdout, stderr) = tokio::join!(stdout_task, stderr_task);
        Ok::<_, std::io::Error>((status, stdout.unwrap_or_default(), stderr.unwrap_or_default()))
    };

    match tokio::time::timeout(timeout, run).await {
        Ok(Ok((status, stdout, stderr))) => Ok(ProcessOutput {
            exit_code: status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
            duration_ms: start.elapsed().as_millis() as u64,
        }),
        Ok(Err(e)) => Err(ProcessError::Io(e)),
        Err(_elapsed) => {
            stdout_abort.abort();
            stderr_abort.abort();
            Err(ProcessError::Timeout {
                elapsed_ms: start.elapsed().as_millis() as u64,
            })
        }
    }
}

async fn read_stream<R: AsyncRead + Unpin>(handle: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(h) = handle {
        let _ = h.take(MAX_OUTPUT_BYTES).read_to_end(&mut buf).await;
    }
    buf
}
