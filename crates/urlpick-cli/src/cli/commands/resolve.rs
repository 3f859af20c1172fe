//! `urlpick resolve` – print the browser a URL would open in.

use anyhow::{Context, Result};
use urlpick_core::config::{load_merged, ConfigPaths};
use urlpick_core::shorturl::expand_if_short;
use urlpick_core::{
    BrowserConfigStrict, ConfigValidator, Dispatcher, StructuralValidator, TracingSink, Url,
};

use crate::cli::RequestArgs;
use crate::expand::CurlExpander;

/// Loads config, expands short links (unless disabled) and dispatches.
pub(crate) fn resolve_request(
    paths: &ConfigPaths,
    request: &RequestArgs,
) -> Result<BrowserConfigStrict> {
    let config = load_merged(paths, &TracingSink)?;
    // Reject a bad config before any network traffic.
    StructuralValidator.validate(&config)?;

    let mut url = request.url.clone();
    if !request.no_expand {
        if let Ok(parsed) = Url::parse(&request.url) {
            url = expand_if_short(parsed, config.url_shorteners(), &CurlExpander::default())
                .to_string();
        }
    }

    let browser = Dispatcher::default()
        .open_url(&url, request.pid, request.opener(), &config)
        .with_context(|| format!("resolve {}", request.url))?;
    Ok(browser)
}

pub fn run_resolve(paths: &ConfigPaths, request: &RequestArgs) -> Result<()> {
    let browser = resolve_request(paths, request)?;
    println!("{}", serde_json::to_string_pretty(&browser)?);
    Ok(())
}
