//! CLI argument parsing and command dispatch

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use kernel_provision::config::{CloneOptions, Layout};
use kernel_provision::defaults::{DEFAULT_MODULES_DIR, DEFAULT_REPOS_DIR, DEFAULT_SETTLE_DELAY_MS};
use kernel_provision::output::OutputConfig;

use crate::commands;

/// Kernel Provision - Fetch kernel modules from repositories listed in JSON manifests
#[derive(Parser, Debug)]
#[command(name = "kernel-provision")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalArgs,
}

/// Options shared by every subcommand.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Project root holding the manifest store, module tree and workspaces
    #[arg(long, global = true, value_name = "DIR", env = "KERNEL_PROVISION_ROOT")]
    root: Option<PathBuf>,

    /// Manifest store directory, relative to the root
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        env = "KERNEL_PROVISION_REPOS_DIR",
        default_value = DEFAULT_REPOS_DIR
    )]
    repos_dir: PathBuf,

    /// Module output directory, relative to the root
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        env = "KERNEL_PROVISION_MODULES_DIR",
        default_value = DEFAULT_MODULES_DIR
    )]
    modules_dir: PathBuf,

    /// Pause between clearing a workspace and cloning into it
    #[arg(long, global = true, value_name = "MS", default_value_t = DEFAULT_SETTLE_DELAY_MS)]
    settle_delay_ms: u64,

    /// Clone only the latest commit of each repository
    #[arg(long, global = true)]
    shallow: bool,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone a listing repository and add its manifests to the store
    ImportListing(commands::import_listing::ImportListingArgs),

    /// Extract one or more modules listed in the manifest store
    Extract(commands::extract::ExtractArgs),

    /// List every repository in the manifest store
    ListCatalog(commands::list_catalog::ListCatalogArgs),

    /// Import a listing, then extract modules from it
    Provision(commands::provision::ProvisionArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

/// Settings resolved from the global arguments.
pub struct Context {
    pub layout: Layout,
    pub clone_options: CloneOptions,
    pub output: OutputConfig,
}

impl GlobalArgs {
    fn context(&self) -> Result<Context> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };
        Ok(Context {
            layout: Layout::new(root)
                .with_repos_dir(&self.repos_dir)
                .with_modules_dir(&self.modules_dir),
            clone_options: CloneOptions {
                settle_delay: Duration::from_millis(self.settle_delay_ms),
                shallow: self.shallow,
            },
            output: OutputConfig::from_env_and_flag(&self.color),
        })
    }

    fn init_logging(&self) {
        // RUST_LOG, when set, takes precedence over --log-level
        let env = env_logger::Env::default().default_filter_or(self.log_level.as_str());
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .try_init();
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        self.global.init_logging();
        let context = self.global.context()?;

        match self.command {
            Commands::ImportListing(args) => commands::import_listing::execute(args, &context),
            Commands::Extract(args) => commands::extract::execute(args, &context),
            Commands::ListCatalog(args) => commands::list_catalog::execute(args, &context),
            Commands::Provision(args) => commands::provision::execute(args, &context),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
