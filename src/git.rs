//! Thin wrapper around the system `git` binary.

use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

use log::debug;

use crate::error::Error;

/// Clone a repository into `target_dir`
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Personal access tokens
/// - Any authentication configured in ~/.gitconfig
///
/// `target_dir` must either not exist or be empty. With `shallow` set only
/// the tip commit is fetched.
pub fn clone(url: &str, target_dir: &Path, shallow: bool) -> Result<(), Error> {
    if let Some(parent) = target_dir.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut command = Command::new("git");
    command.arg("clone").arg("--quiet");
    if shallow {
        command.arg("--depth=1");
    }
    command.arg(url).arg(target_dir);

    debug!("running git clone {} -> {}", url, target_dir.display());
    let output = command.output().map_err(|e| {
        let hint = (e.kind() == io::ErrorKind::NotFound)
            .then(|| "Install git and make sure it is on PATH".to_string());
        Error::GitClone {
            url: url.to_string(),
            message: e.to_string(),
            hint,
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(Error::GitClone {
            url: url.to_string(),
            hint: clone_failure_hint(&stderr),
            message: stderr,
        });
    }

    Ok(())
}

/// Pick a hint for the common ways a clone fails.
fn clone_failure_hint(stderr: &str) -> Option<String> {
    if stderr.contains("Authentication failed")
        || stderr.contains("Permission denied")
        || stderr.contains("Could not read from remote repository")
    {
        Some(
            "Make sure you have access to the repository (SSH key in ssh-agent, \
             git credentials, or a personal access token)"
                .to_string(),
        )
    } else if stderr.contains("not found") || stderr.contains("does not exist") {
        Some("Check the repository URL in the manifest".to_string())
    } else if stderr.contains("Could not resolve host") {
        Some("Check your network connection".to_string())
    } else {
        None
    }
}
