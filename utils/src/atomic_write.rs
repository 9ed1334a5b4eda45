//! Atomic file replacement.
//!
//! Bytes go to a temp file in the destination directory, which is then renamed
//! over the target. Where rename-over-existing fails (Windows), the old file is
//! moved to `<name>.bak` first and restored if the second rename also fails.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Where the previous contents of `path` are parked during a fallback write.
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    path.with_extension("bak")
}

/// Restore `path` from its backup when a crash hit between the two renames
/// of a fallback write.
///
/// Returns true if a backup was restored.
pub fn recover_bak_file(path: &Path) -> bool {
    let backup = backup_path(path);
    if path.exists() || !backup.exists() {
        return false;
    }
    match fs::rename(&backup, path) {
        Ok(()) => {
            warn!(path = %path.display(), "Recovered .bak file from interrupted write");
            true
        }
        Err(e) => {
            warn!(path = %path.display(), "Failed to recover .bak file: {e}");
            false
        }
    }
}

/// Replace `path` with `bytes`, creating missing parent directories.
///
/// The temp file is synced before it replaces the target.
pub fn atomic_write(path: impl AsRef<Path>, bytes: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    let Err(err) = tmp.persist(path) else {
        debug!(path = %path.display(), bytes = bytes.len(), "Wrote file");
        return Ok(());
    };
    if !path.exists() {
        return Err(err.error);
    }

    let backup = backup_path(path);
    let _ = fs::remove_file(&backup);
    fs::rename(path, &backup)?;
    if let Err(retry) = err.file.persist(path) {
        let _ = fs::rename(&backup, path);
        return Err(retry.error);
    }
    if let Err(e) = fs::remove_file(&backup) {
        warn!(path = %backup.display(), "Failed to remove .bak after write: {e}");
    }
    debug!(path = %path.display(), bytes = bytes.len(), "Wrote file via backup fallback");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{atomic_write, backup_path, recover_bak_file};

    #[test]
    fn overwrites_existing_and_leaves_no_backup() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");

        atomic_write(&path, b"one").expect("write one");
        atomic_write(&path, b"two").expect("write two");

        assert_eq!(fs::read_to_string(&path).expect("read"), "two");
        assert!(!backup_path(&path).exists());
    }

    #[test]
    fn creates_missing_parents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("deeper").join("state.json");
        atomic_write(&path, b"{}").expect("write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "{}");
    }

    #[test]
    fn parent_that_is_a_file_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("absent");
        fs::write(&blocker, "file").expect("seed");
        assert!(atomic_write(blocker.join("state.json"), b"x").is_err());
    }

    #[test]
    fn recover_restores_orphaned_backup() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");
        fs::write(backup_path(&path), "saved").expect("seed backup");

        assert!(recover_bak_file(&path));
        assert_eq!(fs::read_to_string(&path).expect("read"), "saved");
        assert!(!recover_bak_file(&path));
    }

    #[test]
    fn recover_leaves_live_file_alone() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");
        fs::write(&path, "live").expect("seed");
        fs::write(backup_path(&path), "stale").expect("seed backup");

        assert!(!recover_bak_file(&path));
        assert_eq!(fs::read_to_string(&path).expect("read"), "live");
    }
}
