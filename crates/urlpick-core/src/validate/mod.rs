//! Semantic validation of a typed [`Config`] before dispatch.
//!
//! Shape checks on untyped documents happen earlier, in
//! [`crate::config::schema`]; this layer catches what the type system cannot
//! (a missing default browser, empty shortener entries). Browser names
//! themselves are opaque: any string, including `""`, is passed through.

mod error;

use crate::config::Config;

pub use error::{ValidationError, ValidationIssue};

/// Accepts or rejects a config. Consulted once per [`crate::Dispatcher::open_url`].
pub trait ConfigValidator: Send + Sync {
    fn validate(&self, config: &Config) -> Result<(), ValidationError>;
}

impl<F> ConfigValidator for F
where
    F: Fn(&Config) -> Result<(), ValidationError> + Send + Sync,
{
    fn validate(&self, config: &Config) -> Result<(), ValidationError> {
        self(config)
    }
}

/// Default validator: a default browser must be present and shortener hosts
/// must be non-empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuralValidator;

impl ConfigValidator for StructuralValidator {
    fn validate(&self, config: &Config) -> Result<(), ValidationError> {
        let mut issues = Vec::new();

        if config.default_browser.is_none() {
            issues.push(ValidationIssue::new("defaultBrowser", "is required"));
        }

        if let Some(options) = &config.options {
            for (i, host) in options.url_shorteners.iter().enumerate() {
                if host.trim().is_empty() {
                    issues.push(ValidationIssue::new(
                        format!("options/urlShorteners/{i}"),
                        "must not be empty",
                    ));
                }
            }
        }

        ValidationError::check(issues)
    }
}
