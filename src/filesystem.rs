//! Host filesystem helpers: moving files and forcing permissions.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::error::Result;

/// Move a file from `from` to `to`, replacing any file already at `to`.
///
/// Tries a rename first and falls back to copy + delete when the rename is
/// refused, e.g. because the destination is on another device.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    debug!("moving {} -> {}", from.display(), to.display());
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            if !from.exists() {
                return Err(rename_err.into());
            }
            debug!(
                "rename failed ({}), copying {} instead",
                rename_err,
                from.display()
            );
            fs::copy(from, to)?;
            fs::remove_file(from)?;
            Ok(())
        }
    }
}

/// Give `path` and everything below it full read/write/execute permission.
///
/// Directories are made permissive before they are read so that a tree with
/// locked-down directories can still be walked. Symlinks are left alone: the
/// permission change would apply to their target.
pub fn force_permissions(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.file_type().is_symlink() {
        return Ok(());
    }

    make_permissive(path, metadata.permissions())?;

    if metadata.is_dir() {
        for entry in fs::read_dir(path)? {
            force_permissions(&entry?.path())?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn make_permissive(path: &Path, mut permissions: fs::Permissions) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    permissions.set_mode(0o777);
    fs::set_permissions(path, permissions)
}

#[cfg(not(unix))]
fn make_permissive(path: &Path, mut permissions: fs::Permissions) -> io::Result<()> {
    #[allow(clippy::permissions_set_readonly_false)]
    permissions.set_readonly(false);
    fs::set_permissions(path, permissions)
}
