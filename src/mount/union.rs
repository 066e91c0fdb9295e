//! Union mounting.
//!
//! Prepares the scratch state a union mount needs (auxiliary index file,
//! copy-on-write directory) and invokes the mount with a prepared branch
//! definition. Both pieces of scratch state live under a fixed tmpfs root so
//! they are writable and never themselves inside a union; nested unions are
//! not supported by the drivers this targets.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::UnionConfig;
use crate::fs::{create_temp_directory, create_unique_file};
use crate::mount::error::{MountError, MountResult};
use crate::mount::runner::ProcessRunner;

/// Mounts a union filesystem with the given branch definition and returns
/// the copy-on-write directory, which doubles as the union root.
pub async fn mount_union(
    runner: &dyn ProcessRunner,
    config: &UnionConfig,
    branch_definition: &str,
) -> MountResult<PathBuf> {
    let scratch_dir = Path::new(&config.scratch_dir);

    // The index file must exist when the mount is invoked, but the union
    // driver keeps its own descriptor, so the directory entry is removed
    // right away and the driver recreates its backing file at this path.
    let index_path = create_unique_file(scratch_dir, &config.index_base_name)?;
    fs::remove_file(&index_path)?;

    let cow_dir = create_temp_directory(scratch_dir, &config.cow_base_name);

    tracing::info!("Mounting {} union at {}", config.fs_type, cow_dir.display());
    let args = vec![
        "-t".to_string(),
        config.fs_type.clone(),
        "-o".to_string(),
        format!("index={}", index_path.display()),
        "-o".to_string(),
        branch_definition.to_string(),
        "none".to_string(),
        cow_dir.display().to_string(),
    ];
    let status = runner.execute("mount", &args).await?;
    if status != 0 {
        return Err(MountError::UnionMountFailed { mount_point: cow_dir, status });
    }

    Ok(cow_dir)
}
