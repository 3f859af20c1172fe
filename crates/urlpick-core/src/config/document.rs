//! Declarative config documents (TOML or JSON) and their compilation into a
//! [`Config`].
//!
//! Documents cannot carry functions, so matchers are strings,
//! `{ regex = "..." }` tables or arrays of those; rewrite targets are
//! absolute URL strings; browsers are names or browser tables.

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use super::schema::SchemaValidator;
use super::{Config, ConfigOptions};
use crate::browser::{BrowserConfig, BrowserPattern};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::DispatchError;
use crate::handler::HandlerRule;
use crate::matcher::Matcher;
use crate::rewrite::{RewriteRule, UrlTransform};
use crate::validate::{ValidationError, ValidationIssue};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    pub default_browser: String,
    #[serde(default)]
    pub options: Option<ConfigOptions>,
    #[serde(default)]
    pub rewrite: Vec<RewriteDocument>,
    #[serde(default)]
    pub handlers: Vec<HandlerDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RewriteDocument {
    #[serde(rename = "match")]
    pub matcher: MatcherDocument,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HandlerDocument {
    #[serde(rename = "match")]
    pub matcher: MatcherDocument,
    pub browser: BrowserDocument,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MatcherDocument {
    Pattern(String),
    Regex { regex: String },
    AnyOf(Vec<MatcherDocument>),
    /// Anything else. Compiles to a matcher that never matches.
    Unsupported(Value),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BrowserDocument {
    Name(String),
    Config(BrowserConfig),
}

impl ConfigDocument {
    /// Compiles matchers. Invalid regexes are collected as issues; bad
    /// wildcards and unsupported shapes go to `sink` and never match.
    pub fn compile(self, sink: &dyn DiagnosticSink) -> Result<Config, ValidationError> {
        let mut issues = Vec::new();

        let mut rewrite = Vec::with_capacity(self.rewrite.len());
        for (i, rule) in self.rewrite.into_iter().enumerate() {
            let matcher = rule
                .matcher
                .compile(&format!("rewrite/{i}/match"), sink, &mut issues);
            rewrite.push(RewriteRule {
                matcher,
                url: UrlTransform::Literal(rule.url),
            });
        }

        let mut handlers = Vec::with_capacity(self.handlers.len());
        for (i, rule) in self.handlers.into_iter().enumerate() {
            let matcher = rule
                .matcher
                .compile(&format!("handlers/{i}/match"), sink, &mut issues);
            let browser = match rule.browser {
                BrowserDocument::Name(name) => BrowserPattern::Name(name),
                BrowserDocument::Config(config) => BrowserPattern::Config(config),
            };
            handlers.push(HandlerRule { matcher, browser });
        }

        ValidationError::check(issues)?;

        Ok(Config {
            default_browser: Some(self.default_browser),
            options: self.options,
            rewrite,
            handlers,
        })
    }
}

impl MatcherDocument {
    fn compile(
        self,
        path: &str,
        sink: &dyn DiagnosticSink,
        issues: &mut Vec<ValidationIssue>,
    ) -> Matcher {
        match self {
            MatcherDocument::Pattern(pattern) => Matcher::pattern(&pattern, sink),
            MatcherDocument::Regex { regex } => match Regex::new(&regex) {
                Ok(compiled) => Matcher::Regex(compiled),
                Err(err) => {
                    issues.push(ValidationIssue::new(
                        path,
                        format!("invalid regex {:?}: {}", regex, err),
                    ));
                    Matcher::never()
                }
            },
            MatcherDocument::AnyOf(items) => Matcher::AnyOf(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| item.compile(&format!("{path}/{i}"), sink, issues))
                    .collect(),
            ),
            MatcherDocument::Unsupported(value) => {
                sink.emit(Diagnostic::UnsupportedMatcher {
                    path: path.to_string(),
                    shape: value.to_string(),
                });
                Matcher::never()
            }
        }
    }
}

/// Schema-checks, deserializes and compiles an untyped config document.
pub fn parse_value(document: &Value, sink: &dyn DiagnosticSink) -> Result<Config, DispatchError> {
    SchemaValidator::shared()?.validate(document)?;
    let parsed: ConfigDocument = serde_json::from_value(document.clone())
        .map_err(|err| ValidationError::from(ValidationIssue::new("", err.to_string())))?;
    Ok(parsed.compile(sink)?)
}
