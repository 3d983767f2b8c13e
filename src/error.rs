//! # Error Handling
//!
//! This module defines the centralized error type for the `kernel-provision`
//! library. It uses `thiserror` to describe every failure the provisioning
//! workflow can surface, with enough context (URL, manifest path, repository
//! identifier) to tell the user what went wrong.
//!
//! ## Key Components
//!
//! - **`Error`**: every failure mode of the library, from clone failures to
//!   missing files in a cloned tree.
//! - **`Result<T>`**: a type alias for `std::result::Result<T, Error>`.
//!
//! None of these errors are retried. The command layer wraps them in
//! `anyhow::Error` and turns them into a non-zero exit status.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for kernel-provision operations
#[derive(Error, Debug)]
pub enum Error {
    /// Cloning a repository failed (network, authentication, invalid URL,
    /// missing `git` binary).
    #[error("Git clone error for {url}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    GitClone {
        url: String,
        message: String,
        /// Optional hint for how to resolve the clone issue
        hint: Option<String>,
    },

    /// A manifest could not be parsed, either because it is not valid JSON
    /// or because it does not have the category/identifier/record shape.
    #[error("Manifest parsing error in {}: {message}", path.display())]
    ManifestParse { path: PathBuf, message: String },

    /// The requested repository identifier is not listed in any manifest.
    #[error("Repository '{repo_id}' not found in any manifest")]
    RepoNotFound { repo_id: String },

    /// A repository identifier cannot be used as a module directory name.
    #[error("Invalid repository identifier '{repo_id}': {message}")]
    InvalidRepoId { repo_id: String, message: String },

    /// A file named in a repository's file list does not exist in the clone.
    #[error("File '{path}' listed for '{repo_id}' does not exist in the cloned repository")]
    MissingFile { repo_id: String, path: String },

    /// A file list entry cannot be resolved to a file inside the clone.
    #[error("Invalid file list entry '{path}' for '{repo_id}': {message}")]
    InvalidFileEntry {
        repo_id: String,
        path: String,
        message: String,
    },

    /// Two file list entries would land on the same destination once
    /// flattened into the module directory.
    #[error("File list entries '{first}' and '{second}' for '{repo_id}' both map to '{file_name}'")]
    DestinationCollision {
        repo_id: String,
        first: String,
        second: String,
        file_name: String,
    },

    /// Preparing or clearing a workspace failed.
    #[error("Workspace error at {}: {message}", path.display())]
    Workspace { path: PathBuf, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
