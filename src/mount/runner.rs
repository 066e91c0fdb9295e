//! Process runner seam.
//!
//! Every kernel-facing operation in this crate is an invocation of the system
//! `mount`/`umount` utilities, expressed through this trait so tests can
//! substitute a recording stub instead of touching real mount tables.

use async_trait::async_trait;
#[cfg(any(test, feature = "mockall"))]
use mockall::automock;
use tokio::process::Command;

use crate::mount::error::{MountError, MountResult};

#[cfg_attr(any(test, feature = "mockall"), automock)]
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Runs `command` with `args`, waits for completion and returns the exit
    /// code. Fails only when the command cannot be launched at all; a
    /// non-zero exit is reported through the returned code, not an error.
    async fn execute(&self, command: &str, args: &[String]) -> MountResult<i32>;
}

/// Runner backed by real subprocesses.
pub struct SystemProcessRunner;

#[async_trait]
impl ProcessRunner for SystemProcessRunner {
    async fn execute(&self, command: &str, args: &[String]) -> MountResult<i32> {
        tracing::debug!("Executing {} {}", command, args.join(" "));

        let output = Command::new(command).args(args).output().await.map_err(|source| {
            MountError::Launch { command: command.to_string(), source }
        })?;

        if !output.stdout.is_empty() {
            tracing::debug!("{} stdout: {}", command, String::from_utf8_lossy(&output.stdout));
        }
        if !output.stderr.is_empty() {
            tracing::debug!("{} stderr: {}", command, String::from_utf8_lossy(&output.stderr));
        }

        // exit by signal has no code, report it as -1
        Ok(output.status.code().unwrap_or(-1))
    }
}
