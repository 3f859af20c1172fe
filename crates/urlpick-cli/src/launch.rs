//! Turns a resolved browser descriptor into a process to start.

use anyhow::{Context, Result};
use std::fmt;
use std::process::{Command, Stdio};
use urlpick_core::{AppType, BrowserConfigStrict};

/// Program plus arguments that open the URL in the chosen browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchCommand {
    /// `None` for [`AppType::None`], which resolves without launching.
    ///
    /// - bundle id: `open -b <id> [-g] <url> [--args <args> --profile=<p>]`
    /// - name / path: `<name> <args> [--profile=<p>] <url>`
    pub fn for_browser(browser: &BrowserConfigStrict) -> Option<Self> {
        let mut extra = browser.args.clone();
        if !browser.profile.is_empty() {
            extra.push(format!("--profile={}", browser.profile));
        }

        match browser.app_type {
            AppType::None => None,
            AppType::BundleId => {
                let mut args = vec!["-b".to_string(), browser.name.clone()];
                if browser.open_in_background {
                    args.push("-g".to_string());
                }
                args.push(browser.url.clone());
                if !extra.is_empty() {
                    args.push("--args".to_string());
                    args.extend(extra);
                }
                Some(Self {
                    program: "open".to_string(),
                    args,
                })
            }
            AppType::Name | AppType::Path => {
                extra.push(browser.url.clone());
                Some(Self {
                    program: browser.name.clone(),
                    args: extra,
                })
            }
        }
    }

    /// Starts the process detached from our stdio; does not wait for it.
    pub fn spawn(&self) -> Result<()> {
        tracing::info!("launching: {}", self);
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("launch {}", self.program))?;
        Ok(())
    }
}

fn quoted(arg: &str) -> String {
    if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
        format!("{:?}", arg)
    } else {
        arg.to_string()
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quoted(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quoted(arg))?;
        }
        Ok(())
    }
}
