//! Browser resolution: turn a [`BrowserPattern`] into a fully defaulted
//! [`BrowserConfigStrict`] for the final URL.

mod types;

use url::Url;

use crate::context::RequestContext;
use crate::error::DispatchError;

pub use types::{
    AppType, BrowserChoice, BrowserConfig, BrowserConfigStrict, BrowserFn, BrowserPattern,
};

/// Resolves `pattern` against the final URL.
///
/// A resolver function is called once with `(url, ctx)` and its answer is
/// treated like a literal name or config. The `url` field of the result is
/// always `url`, whatever the pattern says.
pub fn resolve_browser(
    pattern: &BrowserPattern,
    url: &Url,
    ctx: &RequestContext,
) -> Result<BrowserConfigStrict, DispatchError> {
    let strict = match pattern {
        BrowserPattern::Name(name) => BrowserConfigStrict::with_name(name.as_str(), url),
        BrowserPattern::Config(config) => config.to_strict(url),
        BrowserPattern::Resolver(f) => match f(url, ctx)? {
            BrowserChoice::Name(name) => BrowserConfigStrict::with_name(name, url),
            BrowserChoice::Config(config) => config.to_strict(url),
        },
    };
    Ok(strict)
}
