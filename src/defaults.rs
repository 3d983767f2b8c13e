//! Default values for kernel-provision configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::time::Duration;

/// Directory, relative to the project root, holding the manifest store.
pub const DEFAULT_REPOS_DIR: &str = "repos";

/// Directory, relative to the project root, holding extracted modules.
pub const DEFAULT_MODULES_DIR: &str = "modules";

/// Prefix of the uniquely named workspace directories.
pub const WORKSPACE_PREFIX: &str = "tmp-";

/// File extension identifying manifests.
pub const MANIFEST_EXTENSION: &str = "json";

/// Default pause between clearing a workspace and cloning into it, in
/// milliseconds.
///
/// Some hosts release file handles of a just-deleted tree lazily; cloning
/// straight away can then fail on the half-deleted directory.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 2000;

/// Returns the default settle delay as a `Duration`.
pub fn default_settle_delay() -> Duration {
    Duration::from_millis(DEFAULT_SETTLE_DELAY_MS)
}
