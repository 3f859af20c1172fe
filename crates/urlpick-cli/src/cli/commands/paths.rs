//! `urlpick paths` – show where config and logs live.

use anyhow::Result;
use std::path::Path;
use urlpick_core::config::ConfigPaths;
use urlpick_core::logging;

fn describe(path: &Path) -> &'static str {
    if path.exists() {
        "present"
    } else {
        "missing"
    }
}

pub fn run_paths(paths: &ConfigPaths) -> Result<()> {
    println!("config:        {} ({})", paths.config.display(), describe(&paths.config));
    println!("simple config: {} ({})", paths.simple.display(), describe(&paths.simple));
    println!("log:           {}", logging::log_path()?.display());
    Ok(())
}
