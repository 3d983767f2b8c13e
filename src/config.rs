//! # Provisioning Configuration
//!
//! Resolved settings shared by every operation: where the manifest store,
//! module tree, and workspaces live (`Layout`) and how clones are performed
//! (`CloneOptions`). The CLI builds these from flags, environment variables,
//! and the values in [`crate::defaults`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::defaults;

/// Directory layout of a provisioning project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
    repos_dir: PathBuf,
    modules_dir: PathBuf,
}

impl Layout {
    /// Creates the default layout under `root`: `root/repos` for manifests,
    /// `root/modules` for extracted modules, workspaces directly in `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            repos_dir: root.join(defaults::DEFAULT_REPOS_DIR),
            modules_dir: root.join(defaults::DEFAULT_MODULES_DIR),
            root,
        }
    }

    /// Overrides the manifest store directory. Relative paths are resolved
    /// against the root.
    pub fn with_repos_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.repos_dir = self.root.join(dir);
        self
    }

    /// Overrides the module output directory. Relative paths are resolved
    /// against the root.
    pub fn with_modules_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.modules_dir = self.root.join(dir);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn repos_dir(&self) -> &Path {
        &self.repos_dir
    }

    pub fn modules_dir(&self) -> &Path {
        &self.modules_dir
    }

    /// Directory under which workspaces are created.
    ///
    /// Workspaces sit next to the store and module tree so that moving files
    /// out of them is a rename on the same filesystem.
    pub fn workspace_parent(&self) -> &Path {
        &self.root
    }

    /// Output directory of one module.
    pub fn module_dir(&self, repo_id: &str) -> PathBuf {
        self.modules_dir.join(repo_id)
    }
}

/// How repositories are cloned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneOptions {
    /// Pause between clearing a workspace and cloning into it.
    pub settle_delay: Duration,
    /// Fetch only the tip commit.
    pub shallow: bool,
}

impl Default for CloneOptions {
    fn default() -> Self {
        Self {
            settle_delay: defaults::default_settle_delay(),
            shallow: false,
        }
    }
}
