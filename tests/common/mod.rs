//! Shared test utilities for the CLI end-to-end tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_manifest("a.json", manifests::DEMO);
//!     fixture.command().arg("list-catalog").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::git_available;
    #[allow(unused_imports)]
    pub use super::manifests;
    #[allow(unused_imports)]
    pub use super::GitRepo;
    pub use super::TestFixture;
}

/// Manifest documents used across tests.
#[allow(dead_code)]
pub mod manifests {
    /// One module in one category.
    pub const DEMO: &str = r#"{
    "vision": {
        "demo": {
            "repo-url": "https://example.com/demo.git",
            "description": "demo kernels",
            "kernel-file-list": ["src/filter.cpp"]
        }
    }
}"#;

    /// Two categories, three modules.
    pub const KERNELS: &str = r#"{
    "vision": {
        "xfopencv": {
            "repo-url": "https://example.com/xfopencv.git",
            "description": "OpenCV kernels",
            "kernel-file-list": []
        },
        "2d_filter_xfopencv": {
            "repo-url": "https://example.com/filter.git",
            "description": "2D filter",
            "kernel-file-list": []
        }
    },
    "dsp": {
        "fir": {
            "repo-url": "https://example.com/fir.git",
            "description": "FIR filter",
            "kernel-file-list": []
        }
    }
}"#;

    /// Manifest pointing `id` at a local repository path.
    pub fn local(id: &str, url: &std::path::Path, files: &[&str]) -> String {
        serde_json::json!({
            "local": {
                id: {
                    "repo-url": url.to_string_lossy(),
                    "description": format!("{id} from a local repository"),
                    "kernel-file-list": files,
                }
            }
        })
        .to_string()
    }
}

/// Returns true when a usable `git` binary is on PATH.
///
/// Tests that clone real repositories skip themselves when it is not.
#[allow(dead_code)]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

/// A project directory: manifest store, module tree and workspaces.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a manifest to the `repos/` store.
    #[allow(dead_code)]
    pub fn with_manifest(self, name: &str, content: &str) -> Self {
        fs::create_dir_all(self.path().join("repos")).expect("Failed to create store");
        self.temp_dir
            .child(format!("repos/{name}"))
            .write_str(content)
            .expect("Failed to write manifest");
        self
    }

    /// Get the path to the project root.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of an extracted module directory.
    #[allow(dead_code)]
    pub fn module_dir(&self, repo_id: &str) -> PathBuf {
        self.path().join("modules").join(repo_id)
    }

    /// Names of workspace directories left in the project root.
    #[allow(dead_code)]
    pub fn workspace_leftovers(&self) -> Vec<String> {
        fs::read_dir(self.path())
            .expect("Failed to read project root")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("tmp-"))
            .collect()
    }

    /// Create a command rooted at this fixture, without delays or colours.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("kernel-provision");
        cmd.current_dir(self.path())
            .env_remove("KERNEL_PROVISION_ROOT")
            .env_remove("KERNEL_PROVISION_REPOS_DIR")
            .env_remove("KERNEL_PROVISION_MODULES_DIR")
            .env_remove("RUST_LOG")
            .arg("--root")
            .arg(self.path())
            .arg("--settle-delay-ms")
            .arg("0")
            .arg("--color")
            .arg("never");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A local git repository with one commit, usable as a clone source.
#[allow(dead_code)]
pub struct GitRepo {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl GitRepo {
    /// Creates a repository containing `files` (path, content) and commits
    /// them.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        for (path, content) in files {
            let full = temp_dir.path().join(path);
            fs::create_dir_all(full.parent().unwrap()).expect("Failed to create directory");
            fs::write(&full, content).expect("Failed to write file");
        }

        let repo = Self { temp_dir };
        repo.git(&["init", "--quiet"]);
        repo.git(&["add", "--all"]);
        repo.git(&[
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
            "commit",
            "--quiet",
            "-m",
            "initial",
        ]);
        repo
    }

    /// Path usable as a clone URL.
    pub fn url(&self) -> &Path {
        self.temp_dir.path()
    }

    fn git(&self, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(self.temp_dir.path())
            .output()
            .expect("Failed to run git");
        assert!(
            status.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&status.stderr)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_with_manifest() {
        let fixture = TestFixture::new().with_manifest("a.json", manifests::DEMO);
        assert!(fixture.path().join("repos/a.json").exists());
    }

    #[test]
    fn test_manifests_are_valid_json() {
        for manifest in [manifests::DEMO, manifests::KERNELS] {
            serde_json::from_str::<serde_json::Value>(manifest)
                .expect("Manifest should be valid JSON");
        }
    }
}
