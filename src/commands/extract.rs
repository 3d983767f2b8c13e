//! # Extract Command Implementation
//!
//! Extracts modules named on the command line. Each module is looked up in
//! the manifest store, cloned into a fresh workspace, and its listed files
//! are moved into `<modules>/<repo_id>/`. Modules are processed in the order
//! given; the first failure stops the command.

use anyhow::{Context as _, Result};
use clap::Args;

use kernel_provision::error::Error;
use kernel_provision::extractor::{ExtractReport, ModuleExtractor};
use kernel_provision::repository::DefaultGitOperations;
use kernel_provision::store::ManifestStore;
use kernel_provision::suggestions;

use crate::cli::Context;

/// Extract one or more modules listed in the manifest store
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Repository identifiers to extract
    #[arg(value_name = "REPO_ID", required = true)]
    pub repo_ids: Vec<String>,
}

/// Execute the `extract` command.
pub fn execute(args: ExtractArgs, context: &Context) -> Result<()> {
    extract_modules(&args.repo_ids, context)?;
    Ok(())
}

/// Extracts each module in order, printing progress. Shared with `provision`.
pub(crate) fn extract_modules(
    repo_ids: &[String],
    context: &Context,
) -> Result<Vec<ExtractReport>> {
    let output = &context.output;
    let git = DefaultGitOperations::new(&context.clone_options);
    let extractor = ModuleExtractor::new(&git, &context.layout, &context.clone_options);

    let mut reports = Vec::with_capacity(repo_ids.len());
    for repo_id in repo_ids {
        output.step(&format!("Extracting {}", repo_id));
        let report = extractor
            .extract(repo_id)
            .map_err(|e| describe_failure(e, context))
            .with_context(|| format!("Failed to extract '{}'", repo_id))?;

        for file in &report.files {
            output.detail(&file.display().to_string());
        }
        output.done(&format!(
            "Extracted {} file(s) from {} into {}",
            report.files.len(),
            report.url,
            report.module_dir.display()
        ));
        reports.push(report);
    }
    Ok(reports)
}

fn describe_failure(error: Error, context: &Context) -> anyhow::Error {
    match error {
        Error::RepoNotFound { repo_id } => {
            let store = ManifestStore::new(context.layout.repos_dir());
            let known = suggestions::known_entries(&store);
            suggestions::repo_not_found(&repo_id, store.root(), &known)
        }
        other => suggestions::explain(other),
    }
}
