//! # Workspace Management
//!
//! A `Workspace` is the transient directory that holds exactly one cloned
//! working tree while its files are being consumed. Each workspace owns a
//! uniquely named directory (`tmp-XXXXXX` under the layout's workspace
//! parent), so two operations never clone into the same path.
//!
//! The directory is cleared before every clone and again when the handle is
//! dropped, whether the operation that used it succeeded or not. Clearing
//! forces permissive mode bits on the whole tree first, since cloned
//! repositories may contain read-only files or directories.

use std::path::Path;
use std::thread;
use std::time::Duration;

use log::{debug, warn};
use tempfile::TempDir;

use crate::defaults::WORKSPACE_PREFIX;
use crate::error::{Error, Result};
use crate::filesystem;
use crate::repository::GitOperations;

/// Exclusive handle on one transient clone directory.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
    settle_delay: Duration,
}

impl Workspace {
    /// Reserves a new, uniquely named workspace under `parent`.
    ///
    /// `parent` is created if it does not exist.
    pub fn new_in(parent: &Path, settle_delay: Duration) -> Result<Self> {
        std::fs::create_dir_all(parent)?;
        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir_in(parent)
            .map_err(|e| Error::Workspace {
                path: parent.to_path_buf(),
                message: format!("failed to create workspace: {}", e),
            })?;
        debug!("reserved workspace {}", dir.path().display());
        Ok(Self { dir, settle_delay })
    }

    /// Path of the working tree.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Clears the workspace, waits for the settle delay, then clones `url`
    /// into it.
    pub fn clone_from(&self, git: &dyn GitOperations, url: &str) -> Result<()> {
        self.clear()?;
        if !self.settle_delay.is_zero() {
            thread::sleep(self.settle_delay);
        }
        git.clone_repository(url, self.path())?;
        debug!("cloned {} into {}", url, self.path().display());
        Ok(())
    }

    /// Removes the workspace directory and everything in it.
    ///
    /// Permissions are forced before deletion so that read-only entries
    /// cannot block it. Calling this when the directory is already gone is a
    /// no-op.
    pub fn clear(&self) -> Result<()> {
        let path = self.path();
        if !path.exists() {
            return Ok(());
        }

        filesystem::force_permissions(path).map_err(|e| Error::Workspace {
            path: path.to_path_buf(),
            message: format!("failed to force permissions: {}", e),
        })?;
        std::fs::remove_dir_all(path).map_err(|e| Error::Workspace {
            path: path.to_path_buf(),
            message: format!("failed to remove directory: {}", e),
        })?;
        debug!("cleared workspace {}", path.display());
        Ok(())
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if let Err(e) = self.clear() {
            warn!("{}", e);
        }
    }
}
