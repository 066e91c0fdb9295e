use crate::mount::error::{MountError, MountResult};
use crate::mount::runner::ProcessRunner;

/// Unmounts a device or mount point.
///
/// A non-zero exit from `umount` is logged and surfaced with the target
/// named; nothing is retried.
pub async fn unmount(runner: &dyn ProcessRunner, device_or_mountpoint: &str) -> MountResult<()> {
    let status = runner.execute("umount", &[device_or_mountpoint.to_string()]).await?;
    if status != 0 {
        let err =
            MountError::UnmountFailed { target: device_or_mountpoint.to_string(), status };
        tracing::error!("{}", err);
        return Err(err);
    }
    Ok(())
}
