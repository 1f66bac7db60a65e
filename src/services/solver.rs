//! Bridge to the external solver process.
//!
//! ARCHITECTURE
//! ============
//! Each `/path` request launches one independent solver child:
//!
//! ```text
//! solver <startX> <startY> <endX> <endY> <algorithmCode>
//! ```
//!
//! with its working directory set to the server root so it can find its grid
//! data. Standard output and standard error are drained concurrently into
//! separate buffers while the child runs. Exit code 0 means stdout is the
//! protocol text, passed on byte for byte; anything else is a failure
//! carrying stderr.
//!
//! Admission goes through [`SolverSlots`], and every run is bounded by a
//! wall-clock limit. A child that outlives it is killed and the request fails
//! with [`SolverError::Timeout`].

use std::process::Stdio;
use std::time::Duration;

use protocol::SolverRequest;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::SolverConfig;
use crate::limiter::{SlotError, SolverSlots};

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("solver busy: {0}")]
    Busy(#[from] SlotError),
    #[error("failed to start solver: {0}")]
    Launch(std::io::Error),
    #[error("failed to collect solver output: {0}")]
    Io(std::io::Error),
    #[error("{}", exit_message(*code, stderr))]
    Exit { code: Option<i32>, stderr: String },
    #[error("solver timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

fn exit_message(code: Option<i32>, stderr: &str) -> String {
    let status = code.map_or_else(|| "solver terminated by signal".to_owned(), |c| format!("solver exited with code {c}"));
    let stderr = stderr.trim();
    if stderr.is_empty() { status } else { format!("{status}: {stderr}") }
}

// =============================================================================
// BRIDGE
// =============================================================================

pub struct SolverBridge {
    config: SolverConfig,
    slots: SolverSlots,
}

impl SolverBridge {
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        let slots = SolverSlots::new(config.max_concurrent, config.queue_timeout);
        Self { config, slots }
    }

    #[must_use]
    pub fn slots(&self) -> &SolverSlots {
        &self.slots
    }

    /// Run the solver for one request and return its stdout bytes unchanged.
    ///
    /// # Errors
    ///
    /// - [`SolverError::Busy`] when no slot frees up within the queue timeout.
    /// - [`SolverError::Launch`] when the executable cannot be started.
    /// - [`SolverError::Exit`] for a nonzero exit status.
    /// - [`SolverError::Timeout`] when the run exceeds its limit; the child is killed.
    pub async fn run(&self, request: &SolverRequest) -> Result<Vec<u8>, SolverError> {
        let _permit = self.slots.acquire().await?;
        let run_id = Uuid::new_v4();

        info!(
            %run_id,
            start = %request.start,
            end = %request.end,
            algorithm = %request.algorithm,
            executable = %self.config.executable.display(),
            "launching solver"
        );

        let mut child = Command::new(&self.config.executable)
            .args(request.solver_args())
            .current_dir(&self.config.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(SolverError::Launch)?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let limit = self.config.run_timeout;

        let collect = async { tokio::join!(child.wait(), drain(stdout), drain(stderr)) };
        let outcome = tokio::time::timeout(limit, collect).await;

        let Ok((status, stdout, stderr)) = outcome else {
            warn!(%run_id, timeout_secs = limit.as_secs(), "solver timed out; killing");
            if let Err(e) = child.kill().await {
                warn!(%run_id, error = %e, "failed to kill timed-out solver");
            }
            return Err(SolverError::Timeout(limit));
        };

        let status = status.map_err(SolverError::Io)?;
        let stdout = stdout.map_err(SolverError::Io)?;
        let stderr = String::from_utf8_lossy(&stderr.map_err(SolverError::Io)?).into_owned();

        if !status.success() {
            warn!(%run_id, code = ?status.code(), stderr = %stderr.trim(), "solver failed");
            return Err(SolverError::Exit { code: status.code(), stderr });
        }

        info!(%run_id, bytes = stdout.len(), "solver finished");
        Ok(stdout)
    }
}

async fn drain<R: AsyncRead + Unpin>(pipe: Option<R>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "solver_test.rs"]
pub(crate) mod tests;
