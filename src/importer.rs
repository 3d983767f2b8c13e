//! # Listing Importer
//!
//! A listing repository is a repository whose only purpose is to carry
//! manifests. Importing it clones the repository into a fresh workspace,
//! moves every `*.json` file found anywhere in the working tree into the
//! manifest store (keeping only the file name), and clears the workspace.
//!
//! Manifests that share a file name overwrite each other, the later one in
//! walk order winning. Such collisions are logged and reported, not treated
//! as errors.

use std::collections::HashSet;
use std::path::PathBuf;

use log::{info, warn};
use walkdir::WalkDir;

use crate::config::{CloneOptions, Layout};
use crate::error::Result;
use crate::repository::GitOperations;
use crate::store::{is_manifest_file, Installed, ManifestStore};
use crate::workspace::Workspace;

/// Outcome of one listing import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Manifests moved into the store, in the order they were moved.
    pub installed: Vec<Installed>,
    /// File names that appeared more than once in the listing.
    pub collisions: Vec<String>,
}

impl ImportReport {
    /// Store paths of the manifests that ended up in the store.
    pub fn manifest_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = Vec::new();
        for installed in &self.installed {
            if !paths.contains(&installed.path) {
                paths.push(installed.path.clone());
            }
        }
        paths
    }
}

/// Imports listing repositories into the manifest store.
pub struct ListingImporter<'a> {
    git: &'a dyn GitOperations,
    layout: &'a Layout,
    options: &'a CloneOptions,
}

impl<'a> ListingImporter<'a> {
    pub fn new(git: &'a dyn GitOperations, layout: &'a Layout, options: &'a CloneOptions) -> Self {
        Self {
            git,
            layout,
            options,
        }
    }

    /// Clones the listing at `url` and moves its manifests into the store.
    pub fn import_listing(&self, url: &str) -> Result<ImportReport> {
        let store = ManifestStore::new(self.layout.repos_dir());
        let workspace =
            Workspace::new_in(self.layout.workspace_parent(), self.options.settle_delay)?;
        workspace.clone_from(self.git, url)?;

        let mut report = ImportReport::default();
        let mut seen = HashSet::new();
        for source in find_manifests(&workspace)? {
            let file_name = source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if !seen.insert(file_name.clone()) {
                warn!(
                    "listing {} contains more than one '{}'; {} replaces the earlier one",
                    url,
                    file_name,
                    source.display()
                );
                report.collisions.push(file_name);
            }
            report.installed.push(store.install(&source)?);
        }

        workspace.clear()?;
        info!(
            "imported {} manifest(s) from {}",
            report.manifest_paths().len(),
            url
        );
        Ok(report)
    }
}

/// Manifest files in the working tree, in file-name-sorted walk order.
/// Git metadata is skipped.
fn find_manifests(workspace: &Workspace) -> Result<Vec<PathBuf>> {
    let mut manifests = Vec::new();
    let walker = WalkDir::new(workspace.path())
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.file_name() != ".git");
    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() && is_manifest_file(entry.path()) {
            manifests.push(entry.into_path());
        }
    }
    Ok(manifests)
}
