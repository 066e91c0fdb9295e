// Mount operations
//
// Read-only squashfs layers, branch definitions and the union mount that
// composes them into one root tree. Everything kernel-facing goes through
// the ProcessRunner seam.

pub mod branch;
pub mod error;
pub mod runner;
pub mod squashfs;
pub mod union;
pub mod unmount;

pub use branch::branch_definition;
pub use error::{MountError, MountResult};
pub use runner::{ProcessRunner, SystemProcessRunner};
pub use squashfs::mount_all_squashfs;
pub use union::mount_union;
pub use unmount::unmount;

use std::path::{Path, PathBuf};

use crate::config::Config;

/// Mounts all archives of a live system and unions them with the given
/// writable mount point, which becomes the first branch. Returns the union
/// root. Failure behavior is inherited from the individual steps: whatever
/// was mounted before the failure stays mounted.
pub async fn assemble(
    runner: &dyn ProcessRunner,
    config: &Config,
    system_path: &Path,
    read_write_mount_point: &str,
) -> MountResult<PathBuf> {
    let read_only_mount_points =
        mount_all_squashfs(runner, &config.archive, system_path).await?;
    let read_only: Vec<String> =
        read_only_mount_points.iter().map(|p| p.display().to_string()).collect();

    let definition = branch_definition(read_write_mount_point, &read_only);
    mount_union(runner, &config.union, &definition).await
}
