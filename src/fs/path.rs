//! Symlink-aware path utilities.
//!
//! Mount teardown deletes scratch directories that may contain symlinks
//! introduced by the unioned layers, so every destructive helper here treats
//! symlinks as plain entries and never traverses through them.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::fs::error::{FsError, FsResult};

/// Checks whether the final segment of `path` is a symlink.
///
/// Canonicalizes only the parent directory, re-appends the final segment and
/// compares that against the canonical form of the whole path. The two differ
/// exactly when the final segment itself is a link.
pub fn is_symlink(path: &Path) -> FsResult<bool> {
    let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
        // root or an empty path, never a symlink
        return Ok(false);
    };
    let parent = if parent.as_os_str().is_empty() { Path::new(".") } else { parent };

    let canonical_parent = fs::canonicalize(parent).map_err(|source| FsError::Canonicalize {
        path: parent.to_path_buf(),
        source,
    })?;
    let expected = canonical_parent.join(name);

    let resolved = fs::canonicalize(path)
        .map_err(|source| FsError::Canonicalize { path: path.to_path_buf(), source })?;

    Ok(resolved != expected)
}

/// Recursively deletes `path` without ever following symlinks.
///
/// A symlink is removed as a single entry even when it points at a directory;
/// its target is left untouched. Nested entries are always removed, the
/// `remove_self` flag only applies to `path` itself. Returns whether the
/// final deletion succeeded (or was skipped); traversal errors surface as
/// `Err`.
pub fn recursive_delete(path: &Path, remove_self: bool) -> FsResult<bool> {
    let descend = path.is_dir() && !is_symlink(path)?;
    if descend {
        for entry in fs::read_dir(path)? {
            recursive_delete(&entry?.path(), true)?;
        }
    }

    if !remove_self {
        return Ok(true);
    }

    let removed =
        if descend { fs::remove_dir(path).is_ok() } else { fs::remove_file(path).is_ok() };
    Ok(removed)
}

/// Creates a uniquely named directory under `parent`.
///
/// Tries `base_name` first, then `base_name1`, `base_name2`, ... until a name
/// is free. Each candidate is claimed with `fs::create_dir`, which fails
/// atomically with `AlreadyExists` when another caller got there first.
/// Missing intermediate parents are created. Hard I/O failure is logged and
/// the best-effort path is still returned; callers keep running degraded.
pub fn create_temp_directory(parent: &Path, base_name: &str) -> PathBuf {
    if let Err(err) = fs::create_dir_all(parent) {
        tracing::warn!("Cannot create parent directory {}: {}", parent.display(), err);
    }

    let mut candidate = parent.join(base_name);
    let mut suffix: u64 = 1;
    loop {
        match fs::create_dir(&candidate) {
            Ok(()) => return candidate,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                candidate = parent.join(format!("{base_name}{suffix}"));
                suffix += 1;
            }
            Err(err) => {
                tracing::warn!("Cannot create {}: {}", candidate.display(), err);
                return candidate;
            }
        }
    }
}

/// Creates a uniquely named empty file under `parent`.
///
/// Same collision-avoidance scheme as [`create_temp_directory`], claimed with
/// `create_new` so each candidate is taken atomically. Unlike the directory
/// variant, hard failure is an error: callers need the file to exist.
pub fn create_unique_file(parent: &Path, base_name: &str) -> FsResult<PathBuf> {
    let mut candidate = parent.join(base_name);
    let mut suffix: u64 = 1;
    loop {
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(_) => return Ok(candidate),
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                candidate = parent.join(format!("{base_name}{suffix}"));
                suffix += 1;
            }
            Err(source) => {
                return Err(FsError::UniqueFile { parent: parent.to_path_buf(), source });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::symlink;
    use tempfile::TempDir;

    #[test]
    fn test_is_symlink_regular_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, b"data").unwrap();
        assert!(!is_symlink(&file).unwrap());
    }

    #[test]
    fn test_is_symlink_regular_directory() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        assert!(!is_symlink(&sub).unwrap());
    }

    #[test]
    fn test_is_symlink_link_to_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("target.txt");
        fs::write(&file, b"data").unwrap();
        let link = dir.path().join("link");
        symlink(&file, &link).unwrap();
        assert!(is_symlink(&link).unwrap());
    }

    #[test]
    fn test_is_symlink_link_to_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("target");
        fs::create_dir(&target).unwrap();
        let link = dir.path().join("link");
        symlink(&target, &link).unwrap();
        assert!(is_symlink(&link).unwrap());
    }

    #[test]
    fn test_is_symlink_root() {
        assert!(!is_symlink(Path::new("/")).unwrap());
    }

    #[test]
    fn test_is_symlink_missing_path_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(is_symlink(&missing), Err(FsError::Canonicalize { .. })));
    }

    #[test]
    fn test_recursive_delete_tree() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("tree");
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("top.txt"), b"x").unwrap();
        fs::write(root.join("a/mid.txt"), b"y").unwrap();
        fs::write(root.join("a/b/leaf.txt"), b"z").unwrap();

        assert!(recursive_delete(&root, true).unwrap());
        assert!(!root.exists());
    }

    #[test]
    fn test_recursive_delete_keep_self() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("tree");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("a.txt"), b"x").unwrap();
        fs::write(root.join("b.txt"), b"y").unwrap();

        assert!(recursive_delete(&root, false).unwrap());
        assert!(root.exists());
        assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
    }

    #[test]
    fn test_recursive_delete_does_not_follow_directory_symlink() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("target");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("precious.txt"), b"keep me").unwrap();
        let link = dir.path().join("link");
        symlink(&target, &link).unwrap();

        assert!(recursive_delete(&link, true).unwrap());
        assert!(!link.exists());
        assert!(target.join("precious.txt").exists());
    }

    #[test]
    fn test_recursive_delete_symlink_inside_tree() {
        let dir = TempDir::new().unwrap();
        let outside = dir.path().join("outside");
        fs::create_dir(&outside).unwrap();
        fs::write(outside.join("precious.txt"), b"keep me").unwrap();

        let root = dir.path().join("tree");
        fs::create_dir(&root).unwrap();
        symlink(&outside, root.join("escape")).unwrap();
        fs::write(root.join("file.txt"), b"x").unwrap();

        assert!(recursive_delete(&root, true).unwrap());
        assert!(!root.exists());
        assert!(outside.join("precious.txt").exists());
    }

    #[test]
    fn test_recursive_delete_single_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("single.txt");
        fs::write(&file, b"x").unwrap();
        assert!(recursive_delete(&file, true).unwrap());
        assert!(!file.exists());
    }

    #[test]
    fn test_create_temp_directory_first_name() {
        let dir = TempDir::new().unwrap();
        let created = create_temp_directory(dir.path(), "cow");
        assert_eq!(created, dir.path().join("cow"));
        assert!(created.is_dir());
    }

    #[test]
    fn test_create_temp_directory_collision_suffixes() {
        let dir = TempDir::new().unwrap();
        let first = create_temp_directory(dir.path(), "cow");
        let second = create_temp_directory(dir.path(), "cow");
        let third = create_temp_directory(dir.path(), "cow");
        assert_eq!(first, dir.path().join("cow"));
        assert_eq!(second, dir.path().join("cow1"));
        assert_eq!(third, dir.path().join("cow2"));
        assert!(second.is_dir());
        assert!(third.is_dir());
    }

    #[test]
    fn test_create_temp_directory_creates_parents() {
        let dir = TempDir::new().unwrap();
        let parent = dir.path().join("deep/nested");
        let created = create_temp_directory(&parent, "cow");
        assert_eq!(created, parent.join("cow"));
        assert!(created.is_dir());
    }

    #[test]
    fn test_create_unique_file_collision_suffixes() {
        let dir = TempDir::new().unwrap();
        let first = create_unique_file(dir.path(), ".union.index").unwrap();
        let second = create_unique_file(dir.path(), ".union.index").unwrap();
        assert_eq!(first, dir.path().join(".union.index"));
        assert_eq!(second, dir.path().join(".union.index1"));
        assert!(first.is_file());
        assert!(second.is_file());
    }

    #[test]
    fn test_create_unique_file_missing_parent_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            create_unique_file(&missing, "x"),
            Err(FsError::UniqueFile { .. })
        ));
    }
}
