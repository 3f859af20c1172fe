//! `urlpick check` – load and validate the configuration.

use anyhow::{bail, Result};
use urlpick_core::config::{load_merged, ConfigPaths};
use urlpick_core::{ConfigValidator, MemorySink, StructuralValidator};

pub fn run_check(paths: &ConfigPaths) -> Result<()> {
    let sink = MemorySink::new();
    let config = load_merged(paths, &sink)?;

    for diagnostic in sink.take() {
        println!("warning: {}", diagnostic);
    }

    if let Err(err) = StructuralValidator.validate(&config) {
        for issue in &err.issues {
            println!("  {}", issue);
        }
        bail!("config has {} issue(s)", err.issues.len());
    }

    println!(
        "config OK ({} rewrite rules, {} handlers, default browser {:?})",
        config.rewrite.len(),
        config.handlers.len(),
        config.default_browser.as_deref().unwrap_or_default()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn valid_simple_map_passes() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("simple.json"),
            r#"{ "defaultBrowser": "Safari", "zoom.us": "zoom.us" }"#,
        )
        .unwrap();
        assert!(run_check(&ConfigPaths::in_dir(dir.path())).is_ok());
    }

    #[test]
    fn empty_default_browser_passes() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "defaultBrowser = \"\"\n").unwrap();
        assert!(run_check(&ConfigPaths::in_dir(dir.path())).is_ok());
    }

    #[test]
    fn simple_map_without_default_fails() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("simple.json"), r#"{ "zoom.us": "zoom.us" }"#).unwrap();
        let err = run_check(&ConfigPaths::in_dir(dir.path())).unwrap_err();
        assert_eq!(err.to_string(), "config has 1 issue(s)");
    }
}
