//! # Import-Listing Command Implementation
//!
//! Clones a listing repository and moves every JSON manifest it contains
//! into the manifest store. Manifests with a file name already present in
//! the store replace the stored copy.

use anyhow::{Context as _, Result};
use clap::Args;

use kernel_provision::importer::{ImportReport, ListingImporter};
use kernel_provision::repository::DefaultGitOperations;

use crate::cli::Context;

/// Clone a listing repository and add its manifests to the store
#[derive(Args, Debug)]
pub struct ImportListingArgs {
    /// Clone URL of the listing repository
    #[arg(value_name = "URL")]
    pub url: String,
}

/// Execute the `import-listing` command.
pub fn execute(args: ImportListingArgs, context: &Context) -> Result<()> {
    import(&args.url, context)?;
    Ok(())
}

/// Imports the listing at `url`, printing progress. Shared with `provision`.
pub(crate) fn import(url: &str, context: &Context) -> Result<ImportReport> {
    let output = &context.output;
    let git = DefaultGitOperations::new(&context.clone_options);

    output.step(&format!("Cloning listing {}", url));
    let report = ListingImporter::new(&git, &context.layout, &context.clone_options)
        .import_listing(url)
        .with_context(|| format!("Failed to import listing {}", url))?;

    for installed in &report.installed {
        let verb = if installed.replaced { "replaced" } else { "added" };
        output.detail(&format!("{} {}", verb, installed.path.display()));
    }
    for name in &report.collisions {
        output.note(&format!(
            "listing contains several files named {}; the last one was kept",
            name
        ));
    }

    let count = report.manifest_paths().len();
    if count == 0 {
        output.note(&format!("No manifests found in {}", url));
    } else {
        output.done(&format!(
            "Imported {} manifest(s) into {}",
            count,
            context.layout.repos_dir().display()
        ));
    }
    Ok(report)
}
