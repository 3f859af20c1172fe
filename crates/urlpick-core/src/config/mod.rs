//! Dispatch configuration.
//!
//! ```text
//! config.toml / config.json          simple.json
//!     → schema.rs (shape check)          → SimpleConfig
//!     → document.rs (compile matchers)   │
//!     → Config                           │
//!                 └──── merge.rs ────────┘
//!                         → Config (validated again at dispatch time)
//! ```
//!
//! A [`Config`] can also be built directly in Rust, which is the only way to
//! attach predicate, rewrite or browser functions.

pub mod document;
mod load;
pub mod merge;
pub mod schema;

use serde::{Deserialize, Serialize};

use crate::handler::HandlerRule;
use crate::rewrite::RewriteRule;

pub use document::{parse_value, ConfigDocument};
pub use load::{load_merged, read_config_file, read_simple_file, ConfigPaths};
pub use merge::{merge_config, SimpleConfig};
pub use schema::SchemaValidator;

/// Optional behavior switches (`[options]` in config files).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigOptions {
    /// Extra short-link hosts on top of [`crate::shorturl::DEFAULT_SHORTENER_HOSTS`].
    pub url_shorteners: Vec<String>,
    /// Log every dispatched request at info level instead of debug.
    pub log_requests: bool,
}

/// Full rule-based configuration. Rule order is evaluation order.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// `None` only when no source named a default browser (a simple map
    /// without `defaultBrowser`). Any string, including `""`, is accepted.
    pub default_browser: Option<String>,
    pub options: Option<ConfigOptions>,
    pub rewrite: Vec<RewriteRule>,
    pub handlers: Vec<HandlerRule>,
}

impl Config {
    pub fn new(default_browser: impl Into<String>) -> Self {
        Self {
            default_browser: Some(default_browser.into()),
            ..Self::default()
        }
    }

    /// Appends a rewrite rule.
    pub fn rewrite(mut self, rule: RewriteRule) -> Self {
        self.rewrite.push(rule);
        self
    }

    /// Appends a handler rule.
    pub fn handler(mut self, rule: HandlerRule) -> Self {
        self.handlers.push(rule);
        self
    }

    pub fn options(mut self, options: ConfigOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn log_requests(&self) -> bool {
        self.options.as_ref().is_some_and(|o| o.log_requests)
    }

    pub fn url_shorteners(&self) -> &[String] {
        self.options
            .as_ref()
            .map(|o| o.url_shorteners.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_declaration_order() {
        let config = Config::new("Safari")
            .handler(HandlerRule::new("a.com", "A"))
            .handler(HandlerRule::new("b.com", "B"))
            .rewrite(RewriteRule::new("x.com", "https://y.com/"));
        assert_eq!(config.default_browser.as_deref(), Some("Safari"));
        assert_eq!(config.handlers.len(), 2);
        assert_eq!(config.rewrite.len(), 1);
        assert!(matches!(
            &config.handlers[0].browser,
            crate::BrowserPattern::Name(n) if n == "A"
        ));
    }

    #[test]
    fn options_default_off() {
        let config = Config::new("Safari");
        assert!(!config.log_requests());
        assert!(config.url_shorteners().is_empty());
        let config = config.options(ConfigOptions {
            url_shorteners: vec!["go.example.com".to_string()],
            log_requests: true,
        });
        assert!(config.log_requests());
        assert_eq!(config.url_shorteners(), ["go.example.com".to_string()]);
    }

    #[test]
    fn options_toml_camel_case() {
        let options: ConfigOptions = toml::from_str(
            r#"
                urlShorteners = ["go.example.com", "s.example.org"]
                logRequests = true
            "#,
        )
        .unwrap();
        assert_eq!(options.url_shorteners.len(), 2);
        assert!(options.log_requests);

        let empty: ConfigOptions = toml::from_str("").unwrap();
        assert_eq!(empty, ConfigOptions::default());
    }
}
