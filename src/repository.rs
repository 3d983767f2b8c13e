//! # Version-Control Seam
//!
//! The provisioning workflow only needs one capability from version control:
//! "clone this URL into that directory". The `GitOperations` trait captures it
//! so that the importer and extractor can run against the real `git` binary
//! in the application and against a fixture-copying fake in tests, without
//! touching the network.

use std::path::Path;

use crate::config::CloneOptions;
use crate::error::Result;

/// Trait for git operations - allows mocking in tests
pub trait GitOperations {
    /// Clones `url` into `target_dir`, producing a working tree with full
    /// file contents. `target_dir` is empty or absent when this is called.
    fn clone_repository(&self, url: &str, target_dir: &Path) -> Result<()>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command to perform real clones.
#[derive(Debug, Clone, Default)]
pub struct DefaultGitOperations {
    shallow: bool,
}

impl DefaultGitOperations {
    /// Creates git operations that honour the shallow-clone setting.
    pub fn new(options: &CloneOptions) -> Self {
        Self {
            shallow: options.shallow,
        }
    }
}

impl GitOperations for DefaultGitOperations {
    fn clone_repository(&self, url: &str, target_dir: &Path) -> Result<()> {
        crate::git::clone(url, target_dir, self.shallow)
    }
}
