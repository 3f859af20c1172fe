//! Matcher patterns and their evaluation against a URL.
//!
//! Which part of the URL is inspected depends on the matcher kind:
//!
//! | kind        | tested against                         |
//! |-------------|----------------------------------------|
//! | `Literal`   | href without `scheme:` / `scheme://`   |
//! | `Wildcard`  | href without `scheme:` / `scheme://`   |
//! | `Regex`     | full href, scheme included             |
//! | `Predicate` | whatever the function looks at         |
//!
//! String patterns therefore cannot match on the scheme while regexes can.
//! Existing configs depend on both behaviors.

mod wildcard;

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use url::Url;

use crate::context::RequestContext;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::DispatchError;

pub use wildcard::{translate as translate_wildcard, Wildcard};

/// User predicate over a URL and the request context.
pub type MatchFn = Arc<dyn Fn(&Url, &RequestContext) -> anyhow::Result<bool> + Send + Sync>;

/// A compiled matcher pattern.
#[derive(Clone)]
pub enum Matcher {
    /// Substring of the scheme-stripped href. Empty never matches.
    Literal(String),
    /// String pattern containing `*`.
    Wildcard(Wildcard),
    Regex(Regex),
    Predicate(MatchFn),
    /// Matches when any element matches. Empty never matches.
    AnyOf(Vec<Matcher>),
}

impl Matcher {
    /// Builds a string matcher: a [`Wildcard`] if the pattern contains `*`,
    /// a [`Matcher::Literal`] otherwise.
    pub fn pattern(pattern: &str, sink: &dyn DiagnosticSink) -> Self {
        if pattern.contains('*') {
            Matcher::Wildcard(Wildcard::new(pattern, sink))
        } else {
            Matcher::Literal(pattern.to_string())
        }
    }

    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Url, &RequestContext) -> anyhow::Result<bool> + Send + Sync + 'static,
    {
        Matcher::Predicate(Arc::new(f))
    }

    pub fn any_of<I>(matchers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Matcher>,
    {
        Matcher::AnyOf(matchers.into_iter().map(Into::into).collect())
    }

    /// A matcher that matches nothing.
    pub fn never() -> Self {
        Matcher::AnyOf(Vec::new())
    }

    /// Evaluates the matcher. Only a failing predicate produces an error.
    pub fn is_match(&self, url: &Url, ctx: &RequestContext) -> Result<bool, DispatchError> {
        match self {
            Matcher::AnyOf(matchers) => {
                for matcher in matchers {
                    if matcher.is_match(url, ctx)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Matcher::Literal(text) if text.is_empty() => Ok(false),
            Matcher::Literal(text) => Ok(strip_scheme(url.as_str()).contains(text.as_str())),
            Matcher::Wildcard(wildcard) => Ok(wildcard.is_match(strip_scheme(url.as_str()))),
            Matcher::Regex(regex) => Ok(regex.is_match(url.as_str())),
            Matcher::Predicate(f) => Ok(f(url, ctx)?),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Matcher::Wildcard(w) => f.debug_tuple("Wildcard").field(&w.pattern()).finish(),
            Matcher::Regex(r) => f.debug_tuple("Regex").field(&r.as_str()).finish(),
            Matcher::Predicate(_) => f.write_str("Predicate(..)"),
            Matcher::AnyOf(items) => f.debug_tuple("AnyOf").field(items).finish(),
        }
    }
}

/// String patterns go through [`Matcher::pattern`]; wildcard compile
/// failures are logged via [`TracingSink`].
impl From<&str> for Matcher {
    fn from(pattern: &str) -> Self {
        Matcher::pattern(pattern, &TracingSink)
    }
}

impl From<String> for Matcher {
    fn from(pattern: String) -> Self {
        Matcher::from(pattern.as_str())
    }
}

impl From<Regex> for Matcher {
    fn from(regex: Regex) -> Self {
        Matcher::Regex(regex)
    }
}

impl From<Vec<Matcher>> for Matcher {
    fn from(matchers: Vec<Matcher>) -> Self {
        Matcher::AnyOf(matchers)
    }
}

/// Removes a leading `scheme:` (scheme = one or more of `[A-Za-z0-9_]`) and
/// a following `//` if present. Anything else is returned unchanged.
pub fn strip_scheme(href: &str) -> &str {
    let Some(colon) = href.find(':') else {
        return href;
    };
    let scheme = &href[..colon];
    if scheme.is_empty()
        || !scheme
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
    {
        return href;
    }
    let rest = &href[colon + 1..];
    rest.strip_prefix("//").unwrap_or(rest)
}
