//! URL rewriting ahead of handler resolution.
//!
//! Rules run in declaration order and every matching rule applies: the URL
//! produced by one rule is what the next rule is matched against and
//! transforms.

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::context::RequestContext;
use crate::error::DispatchError;
use crate::matcher::Matcher;

/// User transform from the current URL to its replacement.
pub type RewriteFn =
    Arc<dyn Fn(&Url, &RequestContext) -> anyhow::Result<RewriteOutput> + Send + Sync>;

/// What a rewrite function hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutput {
    /// Must parse as an absolute URL.
    Text(String),
    Url(Url),
}

impl From<String> for RewriteOutput {
    fn from(text: String) -> Self {
        RewriteOutput::Text(text)
    }
}

impl From<&str> for RewriteOutput {
    fn from(text: &str) -> Self {
        RewriteOutput::Text(text.to_string())
    }
}

impl From<Url> for RewriteOutput {
    fn from(url: Url) -> Self {
        RewriteOutput::Url(url)
    }
}

/// Replacement for a matched URL.
#[derive(Clone)]
pub enum UrlTransform {
    /// Absolute URL that replaces the current one.
    Literal(String),
    Function(RewriteFn),
}

impl UrlTransform {
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Url, &RequestContext) -> anyhow::Result<RewriteOutput> + Send + Sync + 'static,
    {
        UrlTransform::Function(Arc::new(f))
    }

    pub fn apply(&self, url: &Url, ctx: &RequestContext) -> Result<Url, DispatchError> {
        match self {
            UrlTransform::Literal(text) => parse_absolute(text),
            UrlTransform::Function(f) => match f(url, ctx)? {
                RewriteOutput::Text(text) => parse_absolute(&text),
                RewriteOutput::Url(url) => Ok(url),
            },
        }
    }
}

impl fmt::Debug for UrlTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlTransform::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            UrlTransform::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl From<&str> for UrlTransform {
    fn from(text: &str) -> Self {
        UrlTransform::Literal(text.to_string())
    }
}

impl From<String> for UrlTransform {
    fn from(text: String) -> Self {
        UrlTransform::Literal(text)
    }
}

/// A matcher paired with the transform applied when it matches.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pub matcher: Matcher,
    pub url: UrlTransform,
}

impl RewriteRule {
    pub fn new(matcher: impl Into<Matcher>, url: impl Into<UrlTransform>) -> Self {
        Self {
            matcher: matcher.into(),
            url: url.into(),
        }
    }

    /// Shorthand for a rule whose transform is a function.
    pub fn with_fn<F>(matcher: impl Into<Matcher>, f: F) -> Self
    where
        F: Fn(&Url, &RequestContext) -> anyhow::Result<RewriteOutput> + Send + Sync + 'static,
    {
        Self::new(matcher, UrlTransform::function(f))
    }
}

/// Applies every matching rule in order and returns the final URL.
pub fn apply_rewrites(
    rules: &[RewriteRule],
    url: Url,
    ctx: &RequestContext,
) -> Result<Url, DispatchError> {
    let mut current = url;
    for (index, rule) in rules.iter().enumerate() {
        if rule.matcher.is_match(&current, ctx)? {
            let next = rule.url.apply(&current, ctx)?;
            tracing::debug!(rule = index, from = %current, to = %next, "rewrite applied");
            current = next;
        }
    }
    Ok(current)
}

/// Parses `input` as an absolute URL.
pub(crate) fn parse_absolute(input: &str) -> Result<Url, DispatchError> {
    Url::parse(input).map_err(|err| DispatchError::url_parse(input, err))
}
