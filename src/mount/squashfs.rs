//! Read-only layer mounting.
//!
//! Discovers the squashfs archives of a live system and loop-mounts each one
//! read-only at its own freshly created mount point. The order of the
//! returned mount points is the discovery order of the archives and
//! determines branch precedence in the union later on.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ArchiveConfig;
use crate::fs::create_temp_directory;
use crate::mount::error::{MountError, MountResult};
use crate::mount::runner::ProcessRunner;

/// Mounts every archive found under `<system_path>/<live_subdir>`.
///
/// One fresh temporary root is shared by the whole batch, with a numbered
/// `ro1`, `ro2`, ... subdirectory per archive. A failing mount aborts the
/// batch; archives mounted before the failure stay mounted and must be
/// cleaned up by the caller.
pub async fn mount_all_squashfs(
    runner: &dyn ProcessRunner,
    config: &ArchiveConfig,
    system_path: &Path,
) -> MountResult<Vec<PathBuf>> {
    let live_dir = system_path.join(&config.live_subdir);
    let archives = list_archives(&live_dir, &config.extension)?;

    let batch_root = create_temp_directory(&env::temp_dir(), "liveroot");

    let mut mount_points = Vec::with_capacity(archives.len());
    for (index, archive) in archives.iter().enumerate() {
        let mount_point = batch_root.join(format!("ro{}", index + 1));
        fs::create_dir(&mount_point)?;
        mount_points.push(mount_point.clone());

        tracing::info!("Mounting {} at {}", archive.display(), mount_point.display());
        let args = vec![
            "-o".to_string(),
            "loop".to_string(),
            archive.display().to_string(),
            mount_point.display().to_string(),
        ];
        let status = runner.execute("mount", &args).await?;
        if status != 0 {
            return Err(MountError::SquashfsMountFailed { archive: archive.clone(), status });
        }
    }

    Ok(mount_points)
}

/// Lists the archive files directly under `live_dir`, in directory order.
fn list_archives(live_dir: &Path, extension: &str) -> MountResult<Vec<PathBuf>> {
    let suffix = format!(".{extension}");
    let mut archives = Vec::new();
    for entry in fs::read_dir(live_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if name.to_string_lossy().ends_with(&suffix) {
            archives.push(entry.path());
        }
    }
    Ok(archives)
}
