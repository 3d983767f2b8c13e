//! # Kernel Provisioning Library
//!
//! This library fetches source repositories described by JSON manifests and
//! extracts selected files from them into a per-module directory tree. It is
//! used by the `kernel-provision` command-line tool.
//!
//! ## Quick Example
//!
//! ```no_run
//! use kernel_provision::config::{CloneOptions, Layout};
//! use kernel_provision::extractor::ModuleExtractor;
//! use kernel_provision::importer::ListingImporter;
//! use kernel_provision::repository::DefaultGitOperations;
//!
//! let layout = Layout::new(".");
//! let options = CloneOptions::default();
//! let git = DefaultGitOperations::new(&options);
//!
//! ListingImporter::new(&git, &layout, &options)
//!     .import_listing("https://github.com/parker-xilinx/kernel-repo.git")?;
//! let report = ModuleExtractor::new(&git, &layout, &options).extract("xfopencv")?;
//! println!("{} file(s) in {}", report.files.len(), report.module_dir.display());
//! # Ok::<(), kernel_provision::error::Error>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Manifests (`manifest`, `store`)**: JSON documents mapping category to
//!   repository identifier to `{repo-url, description, kernel-file-list}`,
//!   kept flat in the `repos/` store.
//! - **Workspaces (`workspace`)**: uniquely named transient directories that
//!   hold one clone at a time and are cleared on every exit path.
//! - **Import (`importer`)**: clone a listing repository and move its
//!   manifests into the store.
//! - **Extraction (`extractor`)**: clone a listed repository and move the
//!   named files into `modules/<repo_id>/`.
//! - **Catalog (`catalog`)**: list every known repository with its
//!   description.
//! - **Version control (`git`, `repository`)**: the system `git` binary
//!   behind the mockable `GitOperations` trait.

pub mod catalog;
pub mod config;
pub mod defaults;
pub mod error;
pub mod extractor;
pub mod filesystem;
pub mod git;
pub mod importer;
pub mod manifest;
pub mod output;
pub mod repository;
pub mod store;
pub mod suggestions;
pub mod workspace;
