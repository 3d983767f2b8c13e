//! # Catalog
//!
//! Read-only view over the manifest store: one [`CatalogEntry`] per
//! repository identifier, in manifest, category, then identifier order.
//! Each entry renders as `<repo_id>: <description>`.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::manifest::RepoEntry;
use crate::store::ManifestStore;

/// A repository entry together with the manifest that lists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// File name of the manifest the entry came from.
    pub manifest: String,
    #[serde(flatten)]
    pub repo: RepoEntry,
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.repo.id, self.repo.description)
    }
}

/// Every entry of every manifest in the store.
///
/// Duplicated identifiers are listed once per occurrence.
pub fn list_catalog(store: &ManifestStore) -> Result<Vec<CatalogEntry>> {
    let mut catalog = Vec::new();
    for manifest in store.load_all()? {
        let name = manifest
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        catalog.extend(manifest.entries().iter().map(|repo| CatalogEntry {
            manifest: name.clone(),
            repo: repo.clone(),
        }));
    }
    Ok(catalog)
}

/// Keeps only the entries listed under `category`.
pub fn filter_category(catalog: Vec<CatalogEntry>, category: &str) -> Vec<CatalogEntry> {
    catalog
        .into_iter()
        .filter(|entry| entry.repo.category == category)
        .collect()
}

/// Renders the catalog as one line per entry.
pub fn render(catalog: &[CatalogEntry]) -> String {
    catalog
        .iter()
        .map(|entry| format!("{}\n", entry))
        .collect()
}
