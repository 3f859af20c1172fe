//! CLI for the urlpick URL dispatcher.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use urlpick_core::config::ConfigPaths;
use urlpick_core::ProcessInfo;

use commands::{run_check, run_open, run_paths, run_resolve};

/// Top-level CLI for urlpick.
#[derive(Debug, Parser)]
#[command(name = "urlpick")]
#[command(about = "urlpick: choose which browser opens a URL", long_about = None)]
pub struct Cli {
    /// Full config file (TOML, or JSON by extension). Default: ~/.config/urlpick/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Simple "pattern = browser" JSON map. Default: ~/.config/urlpick/simple.json
    #[arg(long, global = true, value_name = "PATH")]
    pub simple_config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// One "open this URL" request as given on the command line.
#[derive(Debug, Args)]
pub struct RequestArgs {
    /// URL to resolve.
    pub url: String,

    /// Process id of the requesting application.
    #[arg(long, default_value = "0", value_name = "PID")]
    pub pid: i32,

    /// Name of the application that asked to open the URL.
    #[arg(long, value_name = "NAME", requires_all = ["opener_bundle_id", "opener_path"])]
    pub opener_name: Option<String>,

    /// Bundle id of the opener.
    #[arg(long, value_name = "ID", requires = "opener_name")]
    pub opener_bundle_id: Option<String>,

    /// Filesystem path of the opener.
    #[arg(long, value_name = "PATH", requires = "opener_name")]
    pub opener_path: Option<String>,

    /// Do not follow redirects of known short-link hosts.
    #[arg(long)]
    pub no_expand: bool,
}

impl RequestArgs {
    pub fn opener(&self) -> Option<ProcessInfo> {
        Some(ProcessInfo {
            name: self.opener_name.clone()?,
            bundle_id: self.opener_bundle_id.clone().unwrap_or_default(),
            path: self.opener_path.clone().unwrap_or_default(),
        })
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a URL and print the browser descriptor as JSON.
    Resolve(RequestArgs),

    /// Resolve a URL and launch the chosen browser.
    Open {
        #[command(flatten)]
        request: RequestArgs,

        /// Print the launch command instead of running it.
        #[arg(long)]
        dry_run: bool,
    },

    /// Load and validate the configuration.
    Check,

    /// Show config and log file locations.
    Paths,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let paths = ConfigPaths::resolve(cli.config, cli.simple_config)?;
        tracing::debug!("config paths: {:?}", paths);

        match cli.command {
            CliCommand::Resolve(request) => run_resolve(&paths, &request)?,
            CliCommand::Open { request, dry_run } => run_open(&paths, &request, dry_run)?,
            CliCommand::Check => run_check(&paths)?,
            CliCommand::Paths => run_paths(&paths)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
