//! # Manifest Store
//!
//! The store is a flat directory of `*.json` manifests (`repos/` by default).
//! Manifests are read in file-name order, which makes lookups and catalog
//! listings deterministic: when an identifier appears in several manifests
//! the first one in that order wins.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::defaults::MANIFEST_EXTENSION;
use crate::error::{Error, Result};
use crate::filesystem;
use crate::manifest::{Manifest, RepoEntry};

/// Returns true when `path` names a manifest file.
pub fn is_manifest_file(path: &Path) -> bool {
    let suffix = format!(".{MANIFEST_EXTENSION}");
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(&suffix))
}

/// Result of moving a manifest into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installed {
    /// Location of the manifest inside the store.
    pub path: PathBuf,
    /// Whether a manifest with the same file name was replaced.
    pub replaced: bool,
}

/// Directory of manifests.
#[derive(Debug, Clone)]
pub struct ManifestStore {
    root: PathBuf,
}

impl ManifestStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Manifest files directly inside the store, sorted by file name.
    ///
    /// A store directory that does not exist yet is treated as empty.
    pub fn manifest_paths(&self) -> Result<Vec<PathBuf>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_file() && is_manifest_file(entry.path()) {
                paths.push(entry.into_path());
            }
        }
        Ok(paths)
    }

    /// Parses every manifest in the store. The first malformed manifest
    /// aborts the load.
    pub fn load_all(&self) -> Result<Vec<Manifest>> {
        self.manifest_paths()?
            .iter()
            .map(|path| Manifest::from_file(path))
            .collect()
    }

    /// Looks up `repo_id` across all manifests.
    ///
    /// Returns the first match in store order. Later duplicates are logged
    /// and ignored.
    pub fn find(&self, repo_id: &str) -> Result<Option<RepoEntry>> {
        let mut found: Option<(PathBuf, RepoEntry)> = None;
        for manifest in self.load_all()? {
            for entry in manifest.entries().iter().filter(|e| e.id == repo_id) {
                match &found {
                    None => found = Some((manifest.path().to_path_buf(), entry.clone())),
                    Some((first_path, _)) => warn!(
                        "'{}' is listed again in {} (category '{}'); using the entry from {}",
                        repo_id,
                        manifest.path().display(),
                        entry.category,
                        first_path.display()
                    ),
                }
            }
        }
        Ok(found.map(|(_, entry)| entry))
    }

    /// Like [`find`](Self::find), but a missing identifier is an error.
    pub fn require(&self, repo_id: &str) -> Result<RepoEntry> {
        self.find(repo_id)?.ok_or_else(|| Error::RepoNotFound {
            repo_id: repo_id.to_string(),
        })
    }

    /// Moves the manifest at `source` into the store, keeping only its file
    /// name. An existing manifest with the same name is overwritten.
    pub fn install(&self, source: &Path) -> Result<Installed> {
        let file_name = source.file_name().ok_or_else(|| Error::ManifestParse {
            path: source.to_path_buf(),
            message: "manifest path has no file name".to_string(),
        })?;

        fs::create_dir_all(&self.root)?;
        let path = self.root.join(file_name);
        let replaced = path.exists();
        filesystem::move_file(source, &path)?;
        debug!("installed manifest {}", path.display());

        Ok(Installed { path, replaced })
    }
}
