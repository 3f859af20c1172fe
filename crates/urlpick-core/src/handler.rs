//! Handler rules: the first rule whose matcher accepts the URL picks the
//! browser.

use url::Url;

use crate::browser::BrowserPattern;
use crate::context::RequestContext;
use crate::error::DispatchError;
use crate::matcher::Matcher;

#[derive(Debug, Clone)]
pub struct HandlerRule {
    pub matcher: Matcher,
    pub browser: BrowserPattern,
}

impl HandlerRule {
    pub fn new(matcher: impl Into<Matcher>, browser: impl Into<BrowserPattern>) -> Self {
        Self {
            matcher: matcher.into(),
            browser: browser.into(),
        }
    }
}

/// Returns the browser of the first matching rule, or `default_browser`.
///
/// First match wins: later rules are not evaluated once one matches.
pub fn resolve_handler(
    rules: &[HandlerRule],
    default_browser: &str,
    url: &Url,
    ctx: &RequestContext,
) -> Result<BrowserPattern, DispatchError> {
    for (index, rule) in rules.iter().enumerate() {
        if rule.matcher.is_match(url, ctx)? {
            tracing::debug!(rule = index, browser = ?rule.browser, "handler matched");
            return Ok(rule.browser.clone());
        }
    }
    tracing::debug!(default_browser, "no handler matched, using default browser");
    Ok(BrowserPattern::Name(default_browser.to_string()))
}
