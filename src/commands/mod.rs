//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `kernel-provision` command-line tool, one file per subcommand.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` together with the
//!   resolved [`crate::cli::Context`] and calls into the `kernel_provision`
//!   library.

pub mod completions;
pub mod extract;
pub mod import_listing;
pub mod list_catalog;
pub mod provision;
