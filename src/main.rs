//! # Kernel Provisioning CLI
//!
//! This is the binary entry point for the `kernel-provision` command-line
//! tool. It parses arguments with `clap`, sets up logging, and dispatches to
//! the command implementations. Errors returned from `main` are printed by
//! `anyhow` and produce exit status 1.
//!
//! The provisioning logic lives in the library crate; the binary is a thin
//! wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
