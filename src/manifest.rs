//! # Manifest Model
//!
//! A manifest is a JSON document grouping repository entries by category:
//!
//! ```json
//! {
//!   "vision": {
//!     "demo": {
//!       "repo-url": "https://example.com/demo.git",
//!       "description": "demo kernels",
//!       "kernel-file-list": ["src/filter.cpp"]
//!     }
//!   }
//! }
//! ```
//!
//! Parsing flattens the document into a list of [`RepoEntry`] values in the
//! order categories and identifiers appear in the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Record stored under each repository identifier.
#[derive(Debug, Deserialize)]
struct RepoRecord {
    #[serde(rename = "repo-url")]
    url: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "kernel-file-list", default)]
    files: Vec<String>,
}

/// One repository described by a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoEntry {
    /// Repository identifier; also the name of the module directory.
    pub id: String,
    /// Category the entry is listed under.
    pub category: String,
    /// Clone URL.
    pub url: String,
    pub description: String,
    /// Paths, relative to the repository root, of the files to extract.
    pub files: Vec<String>,
}

/// A parsed manifest file.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    entries: Vec<RepoEntry>,
}

impl Manifest {
    /// Reads and parses the manifest at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(path, &content)
    }

    /// Parses manifest `content`; `path` is only used in error messages and
    /// as the manifest's origin.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let parse_error = |message: String| Error::ManifestParse {
            path: path.to_path_buf(),
            message,
        };

        let document: Value =
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        let categories = document.as_object().ok_or_else(|| {
            parse_error("expected an object mapping categories to repositories".to_string())
        })?;

        let mut entries = Vec::new();
        for (category, repos) in categories {
            let repos = repos.as_object().ok_or_else(|| {
                parse_error(format!("category '{}' must be an object", category))
            })?;
            entries.extend(parse_category(category, repos).map_err(parse_error)?);
        }

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// File the manifest was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries in category order, then identifier order.
    pub fn entries(&self) -> &[RepoEntry] {
        &self.entries
    }

    /// First entry with the given identifier.
    pub fn find(&self, repo_id: &str) -> Option<&RepoEntry> {
        self.entries.iter().find(|entry| entry.id == repo_id)
    }
}

fn parse_category(
    category: &str,
    repos: &Map<String, Value>,
) -> std::result::Result<Vec<RepoEntry>, String> {
    repos
        .iter()
        .map(|(id, record)| {
            let record = RepoRecord::deserialize(record).map_err(|e| {
                format!("entry '{}' in category '{}': {}", id, category, e)
            })?;
            Ok(RepoEntry {
                id: id.clone(),
                category: category.to_string(),
                url: record.url,
                description: record.description,
                files: record.files,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &str = r#"{
        "vision": {
            "demo": {
                "repo-url": "https://example.com/demo.git",
                "description": "demo kernels",
                "kernel-file-list": ["src/filter.cpp", "include/types.h"]
            }
        }
    }"#;

    #[test]
    fn test_parse_single_entry() {
        let manifest = Manifest::parse(Path::new("a.json"), DEMO).unwrap();
        assert_eq!(manifest.path(), Path::new("a.json"));
        assert_eq!(
            manifest.entries(),
            &[RepoEntry {
                id: "demo".to_string(),
                category: "vision".to_string(),
                url: "https://example.com/demo.git".to_string(),
                description: "demo kernels".to_string(),
                files: vec!["src/filter.cpp".to_string(), "include/types.h".to_string()],
            }]
        );
    }

    #[test]
    fn test_parse_preserves_document_order() {
        let content = r#"{
            "zeta": {
                "z2": {"repo-url": "u", "description": "d"},
                "z1": {"repo-url": "u", "description": "d"}
            },
            "alpha": {
                "a1": {"repo-url": "u", "description": "d"}
            }
        }"#;
        let manifest = Manifest::parse(Path::new("order.json"), content).unwrap();
        let ids: Vec<_> = manifest.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["z2", "z1", "a1"]);
        assert_eq!(manifest.entries()[2].category, "alpha");
    }

    #[test]
    fn test_parse_defaults_optional_fields() {
        let content = r#"{"misc": {"bare": {"repo-url": "https://example.com/bare.git"}}}"#;
        let manifest = Manifest::parse(Path::new("bare.json"), content).unwrap();
        let entry = manifest.find("bare").unwrap();
        assert_eq!(entry.description, "");
        assert!(entry.files.is_empty());
    }

    #[test]
    fn test_parse_empty_document() {
        let manifest = Manifest::parse(Path::new("empty.json"), "{}").unwrap();
        assert!(manifest.entries().is_empty());
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = Manifest::parse(Path::new("broken.json"), "{\"vision\": ").unwrap_err();
        match err {
            Error::ManifestParse { path, .. } => assert_eq!(path, Path::new("broken.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        let err = Manifest::parse(Path::new("list.json"), "[1, 2]").unwrap_err();
        assert!(err.to_string().contains("expected an object"));
    }

    #[test]
    fn test_parse_rejects_non_object_category() {
        let err = Manifest::parse(Path::new("cat.json"), r#"{"vision": []}"#).unwrap_err();
        assert!(err.to_string().contains("category 'vision' must be an object"));
    }

    #[test]
    fn test_parse_rejects_missing_url() {
        let content = r#"{"vision": {"demo": {"description": "no url"}}}"#;
        let err = Manifest::parse(Path::new("nourl.json"), content).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("entry 'demo' in category 'vision'"));
        assert!(message.contains("repo-url"));
    }

    #[test]
    fn test_find_returns_none_for_unknown_id() {
        let manifest = Manifest::parse(Path::new("a.json"), DEMO).unwrap();
        assert!(manifest.find("demo").is_some());
        assert!(manifest.find("other").is_none());
    }

    #[test]
    fn test_from_file_reads_disk() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("a.json");
        std::fs::write(&path, DEMO).unwrap();

        let manifest = Manifest::from_file(&path).unwrap();
        assert_eq!(manifest.entries().len(), 1);
        assert_eq!(manifest.path(), path);
    }
}
