//! # Provision Command Implementation
//!
//! Imports a listing repository and then extracts the named modules from
//! the refreshed store, in one invocation.

use anyhow::Result;
use clap::Args;

use crate::cli::Context;
use crate::commands::{extract, import_listing};

/// Import a listing, then extract modules from it
#[derive(Args, Debug)]
pub struct ProvisionArgs {
    /// Clone URL of the listing repository
    #[arg(long, value_name = "URL")]
    pub listing: String,

    /// Repository identifiers to extract after the import
    #[arg(value_name = "REPO_ID", required = true)]
    pub repo_ids: Vec<String>,
}

/// Execute the `provision` command.
pub fn execute(args: ProvisionArgs, context: &Context) -> Result<()> {
    import_listing::import(&args.listing, context)?;
    extract::extract_modules(&args.repo_ids, context)?;
    Ok(())
}
