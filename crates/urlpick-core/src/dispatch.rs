//! Request orchestration: config + URL + opener in, browser descriptor out.

use std::sync::Arc;

use serde_json::Value;

use crate::browser::{resolve_browser, BrowserConfigStrict};
use crate::config::{parse_value, Config};
use crate::context::{ProcessInfo, RequestContext};
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::DispatchError;
use crate::handler::resolve_handler;
use crate::rewrite::{apply_rewrites, parse_absolute};
use crate::validate::{ConfigValidator, StructuralValidator};

/// Resolves requests against a config. Holds the validator consulted before
/// every request and the sink for non-fatal diagnostics.
#[derive(Clone)]
pub struct Dispatcher {
    validator: Arc<dyn ConfigValidator>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Arc::new(StructuralValidator), Arc::new(TracingSink))
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

impl Dispatcher {
    pub fn new(validator: Arc<dyn ConfigValidator>, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            validator,
            diagnostics,
        }
    }

    pub fn with_validator(mut self, validator: impl ConfigValidator + 'static) -> Self {
        self.validator = Arc::new(validator);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn diagnostics(&self) -> &dyn DiagnosticSink {
        self.diagnostics.as_ref()
    }

    /// Resolves `url` to a browser descriptor.
    ///
    /// The config is validated first; a rejected config fails with
    /// [`DispatchError::ConfigInvalid`] before the URL is parsed or any rule
    /// runs. The returned `url` is the href after all rewrites.
    pub fn open_url(
        &self,
        url: &str,
        pid: i32,
        opener: Option<ProcessInfo>,
        config: &Config,
    ) -> Result<BrowserConfigStrict, DispatchError> {
        self.validator.validate(config)?;

        let parsed = parse_absolute(url)?;
        let ctx = RequestContext::new(pid, opener);
        if config.log_requests() {
            tracing::info!(url = %parsed, pid, opener = ?ctx.name(), "open request");
        } else {
            tracing::debug!(url = %parsed, pid, opener = ?ctx.name(), "open request");
        }

        let rewritten = apply_rewrites(&config.rewrite, parsed, &ctx)?;
        let default_browser = config.default_browser.as_deref().unwrap_or_default();
        let pattern = resolve_handler(&config.handlers, default_browser, &rewritten, &ctx)?;
        let browser = resolve_browser(&pattern, &rewritten, &ctx)?;

        if config.log_requests() {
            tracing::info!(url = %browser.url, browser = %browser.name, "resolved");
        } else {
            tracing::debug!(url = %browser.url, browser = %browser.name, "resolved");
        }
        Ok(browser)
    }

    /// Like [`Dispatcher::open_url`] for an untyped config document. The
    /// document is schema-checked and compiled first.
    pub fn open_url_value(
        &self,
        url: &str,
        pid: i32,
        opener: Option<ProcessInfo>,
        document: &Value,
    ) -> Result<BrowserConfigStrict, DispatchError> {
        let config = parse_value(document, self.diagnostics())?;
        self.open_url(url, pid, opener, &config)
    }
}

/// [`Dispatcher::open_url`] with the default validator and a tracing sink.
pub fn open_url(
    url: &str,
    pid: i32,
    opener: Option<ProcessInfo>,
    config: &Config,
) -> Result<BrowserConfigStrict, DispatchError> {
    Dispatcher::default().open_url(url, pid, opener, config)
}
