//! # Module Extractor
//!
//! Provisions a module: looks the repository identifier up in the manifest
//! store, clones the repository into a fresh workspace, and moves every file
//! named in the entry's file list to `<modules>/<repo_id>/<file name>`.
//!
//! The identifier and file list are checked before anything is cloned. The
//! identifier must be a single path component. Entries must be relative
//! paths inside the repository, and no two entries may share a file name,
//! since the module directory is flat and one would silently replace the
//! other. Entries that resolve through a symlink to somewhere outside the
//! clone are refused when they are reached.
//!
//! There is no rollback. If a listed file is missing from the clone, files
//! moved before it stay in the module directory; the workspace is cleared
//! regardless.

use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use log::{debug, info};

use crate::config::{CloneOptions, Layout};
use crate::error::{Error, Result};
use crate::filesystem;
use crate::manifest::RepoEntry;
use crate::repository::GitOperations;
use crate::store::ManifestStore;
use crate::workspace::Workspace;

/// Outcome of extracting one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractReport {
    pub repo_id: String,
    /// URL the module was cloned from.
    pub url: String,
    pub module_dir: PathBuf,
    /// Destination of every extracted file, in file-list order.
    pub files: Vec<PathBuf>,
}

/// A file-list entry resolved to its destination name.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PlannedFile {
    source: String,
    file_name: String,
}

/// Extracts modules described by the manifest store.
pub struct ModuleExtractor<'a> {
    git: &'a dyn GitOperations,
    layout: &'a Layout,
    options: &'a CloneOptions,
}

impl<'a> ModuleExtractor<'a> {
    pub fn new(git: &'a dyn GitOperations, layout: &'a Layout, options: &'a CloneOptions) -> Self {
        Self {
            git,
            layout,
            options,
        }
    }

    /// Extracts the module named `repo_id`.
    ///
    /// Fails with [`Error::RepoNotFound`] before cloning anything when no
    /// manifest lists the identifier.
    pub fn extract(&self, repo_id: &str) -> Result<ExtractReport> {
        let store = ManifestStore::new(self.layout.repos_dir());
        let entry = store.require(repo_id)?;
        self.extract_entry(&entry)
    }

    /// Extracts each module in turn, stopping at the first failure.
    pub fn extract_all<S: AsRef<str>>(&self, repo_ids: &[S]) -> Result<Vec<ExtractReport>> {
        repo_ids
            .iter()
            .map(|repo_id| self.extract(repo_id.as_ref()))
            .collect()
    }

    /// Extracts the files of an entry that has already been looked up.
    pub fn extract_entry(&self, entry: &RepoEntry) -> Result<ExtractReport> {
        check_repo_id(&entry.id)?;
        let plan = plan_files(entry)?;

        let workspace =
            Workspace::new_in(self.layout.workspace_parent(), self.options.settle_delay)?;
        workspace.clone_from(self.git, &entry.url)?;
        let clone_root = workspace.path().canonicalize()?;

        let module_dir = self.layout.module_dir(&entry.id);
        fs::create_dir_all(&module_dir)?;

        let mut files = Vec::with_capacity(plan.len());
        for planned in &plan {
            let source = workspace.path().join(&planned.source);
            if !source.is_file() {
                return Err(Error::MissingFile {
                    repo_id: entry.id.clone(),
                    path: planned.source.clone(),
                });
            }
            // Symlinks in the clone must not lead the move out of it.
            if !source.canonicalize()?.starts_with(&clone_root) {
                return Err(Error::InvalidFileEntry {
                    repo_id: entry.id.clone(),
                    path: planned.source.clone(),
                    message: "path resolves outside the cloned repository".to_string(),
                });
            }
            let destination = module_dir.join(&planned.file_name);
            filesystem::move_file(&source, &destination)?;
            debug!("extracted {} -> {}", planned.source, destination.display());
            files.push(destination);
        }

        workspace.clear()?;
        info!(
            "extracted {} file(s) for '{}' into {}",
            files.len(),
            entry.id,
            module_dir.display()
        );
        Ok(ExtractReport {
            repo_id: entry.id.clone(),
            url: entry.url.clone(),
            module_dir,
            files,
        })
    }
}

/// Rejects identifiers that do not name a single directory under the modules
/// directory.
fn check_repo_id(repo_id: &str) -> Result<()> {
    let mut components = Path::new(repo_id).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(Error::InvalidRepoId {
            repo_id: repo_id.to_string(),
            message: "identifier must be a single path component".to_string(),
        }),
    }
}

/// Validates the entry's file list and resolves destination names.
fn plan_files(entry: &RepoEntry) -> Result<Vec<PlannedFile>> {
    let mut claimed: HashMap<String, &str> = HashMap::new();
    let mut plan = Vec::with_capacity(entry.files.len());

    for source in &entry.files {
        let file_name = destination_name(Path::new(source)).map_err(|message| {
            Error::InvalidFileEntry {
                repo_id: entry.id.clone(),
                path: source.clone(),
                message: message.to_string(),
            }
        })?;

        if let Some(first) = claimed.insert(file_name.clone(), source.as_str()) {
            return Err(Error::DestinationCollision {
                repo_id: entry.id.clone(),
                first: first.to_string(),
                second: source.clone(),
                file_name,
            });
        }
        plan.push(PlannedFile {
            source: source.clone(),
            file_name,
        });
    }
    Ok(plan)
}

/// File name a listed path is stored under in the module directory.
fn destination_name(path: &Path) -> std::result::Result<String, &'static str> {
    for component in path.components() {
        match component {
            Component::ParentDir => return Err("path must not contain '..'"),
            Component::RootDir | Component::Prefix(_) => return Err("path must be relative"),
            Component::CurDir | Component::Normal(_) => {}
        }
    }
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or("path does not name a file")
}
