//! `urlpick open` – resolve a URL and launch the browser.

use anyhow::Result;
use urlpick_core::config::ConfigPaths;

use super::resolve::resolve_request;
use crate::cli::RequestArgs;
use crate::launch::LaunchCommand;

pub fn run_open(paths: &ConfigPaths, request: &RequestArgs, dry_run: bool) -> Result<()> {
    let browser = resolve_request(paths, request)?;
    let Some(command) = LaunchCommand::for_browser(&browser) else {
        tracing::info!(browser = %browser.name, url = %browser.url, "appType none, nothing to launch");
        if dry_run {
            println!("(nothing to launch for {})", browser.name);
        }
        return Ok(());
    };

    if dry_run {
        println!("{}", command);
        return Ok(());
    }
    command.spawn()
}
