//! Simple "pattern → browser name" maps and merging them into a [`Config`].

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use super::Config;
use crate::browser::BrowserPattern;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::handler::HandlerRule;
use crate::matcher::Matcher;

/// Reserved key of a simple map.
pub const DEFAULT_BROWSER_KEY: &str = "defaultBrowser";

/// Minimal config: a default browser plus match string → browser name
/// entries, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleConfig {
    pub default_browser: Option<String>,
    pub handlers: Vec<(String, String)>,
}

impl SimpleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_browser(mut self, browser: impl Into<String>) -> Self {
        self.default_browser = Some(browser.into());
        self
    }

    pub fn entry(mut self, pattern: impl Into<String>, browser: impl Into<String>) -> Self {
        self.handlers.push((pattern.into(), browser.into()));
        self
    }

    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Converts to a full config. A missing default browser stays missing,
    /// which typed validation rejects at dispatch time.
    pub fn into_config(self, sink: &dyn DiagnosticSink) -> Config {
        let (default_browser, handlers) = self.into_parts(sink);
        Config {
            default_browser,
            handlers,
            ..Config::default()
        }
    }

    fn into_parts(self, sink: &dyn DiagnosticSink) -> (Option<String>, Vec<HandlerRule>) {
        let handlers = self
            .handlers
            .into_iter()
            .map(|(pattern, browser)| HandlerRule {
                matcher: Matcher::pattern(&pattern, sink),
                browser: BrowserPattern::Name(browser),
            })
            .collect();
        (self.default_browser, handlers)
    }
}

impl<'de> Deserialize<'de> for SimpleConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SimpleVisitor;

        impl<'de> Visitor<'de> for SimpleVisitor {
            type Value = SimpleConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of match pattern to browser name")
            }

            fn visit_map<A>(self, mut map: A) -> Result<SimpleConfig, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut simple = SimpleConfig::default();
                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    if key == DEFAULT_BROWSER_KEY {
                        simple.default_browser = Some(value);
                    } else {
                        simple.handlers.push((key, value));
                    }
                }
                Ok(simple)
            }
        }

        deserializer.deserialize_map(SimpleVisitor)
    }
}

/// Combines a full config and a simple map.
///
/// Simple entries are appended after the full config's handlers, so the full
/// config's rules are evaluated first. The full config's default browser is
/// kept whenever it has one, even `""`; the simple map's default only fills
/// a missing one. A [`Diagnostic::DefaultBrowserConflict`] is emitted when
/// both name a non-empty browser.
pub fn merge_config(
    config: Option<Config>,
    simple: Option<SimpleConfig>,
    sink: &dyn DiagnosticSink,
) -> Option<Config> {
    match (config, simple) {
        (None, None) => None,
        (Some(config), None) => Some(config),
        (None, Some(simple)) => Some(simple.into_config(sink)),
        (Some(mut config), Some(simple)) => {
            let (simple_default, handlers) = simple.into_parts(sink);
            if config.default_browser.is_none() {
                config.default_browser = simple_default;
            } else if let (Some(kept), Some(ignored)) = (&config.default_browser, simple_default) {
                if !kept.is_empty() && !ignored.is_empty() {
                    sink.emit(Diagnostic::DefaultBrowserConflict {
                        kept: kept.clone(),
                        ignored,
                    });
                }
            }
            tracing::debug!(
                full = config.handlers.len(),
                simple = handlers.len(),
                "merged simple config handlers"
            );
            config.handlers.extend(handlers);
            Some(config)
        }
    }
}
