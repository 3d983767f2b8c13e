//! # List-Catalog Command Implementation
//!
//! Prints every repository in the manifest store as `<repo_id>: <description>`,
//! in manifest, category, then identifier order. This command never modifies
//! anything.

use anyhow::Result;
use clap::Args;

use kernel_provision::catalog;
use kernel_provision::store::ManifestStore;
use kernel_provision::suggestions;

use crate::cli::Context;

/// List every repository in the manifest store
#[derive(Args, Debug)]
pub struct ListCatalogArgs {
    /// Only list repositories in this category
    #[arg(long, value_name = "NAME")]
    pub category: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Execute the `list-catalog` command.
pub fn execute(args: ListCatalogArgs, context: &Context) -> Result<()> {
    let store = ManifestStore::new(context.layout.repos_dir());
    let mut entries = catalog::list_catalog(&store).map_err(suggestions::explain)?;
    if let Some(category) = &args.category {
        entries = catalog::filter_category(entries, category);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No repositories found in {}", store.root().display());
        return Ok(());
    }
    print!("{}", catalog::render(&entries));
    Ok(())
}
