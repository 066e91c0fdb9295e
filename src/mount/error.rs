use std::path::PathBuf;
use thiserror::Error;

use crate::fs::FsError;

pub type MountResult<T> = Result<T, MountError>;

#[derive(Error, Debug)]
pub enum MountError {
    #[error("Failed to launch {command}: {source}")]
    Launch { command: String, source: std::io::Error },

    #[error("Failed to mount squashfs {archive} (exit status {status})")]
    SquashfsMountFailed { archive: PathBuf, status: i32 },

    #[error("Failed to mount union filesystem at {mount_point} (exit status {status})")]
    UnionMountFailed { mount_point: PathBuf, status: i32 },

    #[error("Failed to unmount {target} (exit status {status})")]
    UnmountFailed { target: String, status: i32 },

    #[error("Filesystem error: {0}")]
    Fs(#[from] FsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
