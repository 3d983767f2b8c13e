//! # Error Suggestions
//!
//! Helpers that turn library errors into messages telling the user what went
//! wrong and how to fix it.

use std::path::Path;

use log::warn;

use crate::error::Error;
use crate::manifest::RepoEntry;
use crate::store::ManifestStore;

/// Every entry in the store, for building suggestions.
///
/// Suggestions are best effort: a store that fails to load is logged and
/// treated as empty.
pub fn known_entries(store: &ManifestStore) -> Vec<RepoEntry> {
    match store.load_all() {
        Ok(manifests) => manifests
            .iter()
            .flat_map(|manifest| manifest.entries().to_vec())
            .collect(),
        Err(e) => {
            warn!("could not load manifests for suggestions: {}", e);
            Vec::new()
        }
    }
}

/// Generate an error for an identifier that no manifest lists.
///
/// Suggests identifiers that share a prefix or substring with the request,
/// and points at the commands that populate and inspect the store.
pub fn repo_not_found(repo_id: &str, store_root: &Path, known: &[RepoEntry]) -> anyhow::Error {
    let needle = repo_id.to_lowercase();
    let mut similar: Vec<&str> = Vec::new();
    for id in known.iter().map(|entry| entry.id.as_str()) {
        let lowered = id.to_lowercase();
        let close = lowered.contains(&needle) || needle.contains(&lowered);
        if close && !similar.contains(&id) {
            similar.push(id);
        }
    }

    let mut message = format!(
        "Repository '{repo_id}' not found in any manifest under {store}",
        store = store_root.display()
    );
    if !similar.is_empty() {
        message.push_str(&format!("\n\n  did you mean: {}", similar.join(", ")));
    }
    if known.is_empty() {
        message.push_str("\n\nhint: The manifest store is empty; run 'kernel-provision import-listing <url>' first");
    } else {
        message.push_str("\n\nhint: Run 'kernel-provision list-catalog' to see available repositories");
    }
    anyhow::anyhow!(message)
}

/// Convert a library error into a user-facing error, adding hints where
/// the fix is not obvious from the message alone.
pub fn explain(error: Error) -> anyhow::Error {
    match error {
        Error::MissingFile { repo_id, path } => anyhow::anyhow!(
            "File '{path}' listed for '{repo_id}' does not exist in the cloned repository\n\n\
             hint: Check 'kernel-file-list' for '{repo_id}' in the manifest store\n\
             hint: Files extracted before this one were kept in the module directory"
        ),
        Error::DestinationCollision { .. } => anyhow::anyhow!(
            "{error}\n\n\
             hint: Module directories are flat; each listed file needs a distinct file name"
        ),
        Error::ManifestParse { .. } => anyhow::anyhow!(
            "{error}\n\n\
             hint: Manifests map category -> repository id -> {{\"repo-url\", \"description\", \"kernel-file-list\"}}"
        ),
        other => other.into(),
    }
}
