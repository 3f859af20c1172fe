//! Non-fatal diagnostics emitted while compiling or merging configuration.
//!
//! The core never writes to a global output stream directly: callers inject a
//! [`DiagnosticSink`]. [`TracingSink`] forwards to `tracing`, [`MemorySink`]
//! keeps events in memory so they can be inspected.

use std::fmt;
use std::sync::Mutex;

/// A recoverable condition worth telling the user about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A wildcard pattern could not be compiled; it will never match.
    InvalidWildcard { pattern: String, reason: String },
    /// A matcher in a config document has a shape no matcher kind accepts; it
    /// will never match.
    UnsupportedMatcher { path: String, shape: String },
    /// Both the full config and the simple config set `defaultBrowser`.
    DefaultBrowserConflict { kept: String, ignored: String },
}

impl Diagnostic {
    /// Short machine-friendly name, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::InvalidWildcard { .. } => "invalid_wildcard",
            Diagnostic::UnsupportedMatcher { .. } => "unsupported_matcher",
            Diagnostic::DefaultBrowserConflict { .. } => "default_browser_conflict",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidWildcard { pattern, reason } => {
                write!(f, "invalid wildcard pattern {:?}: {}", pattern, reason)
            }
            Diagnostic::UnsupportedMatcher { path, shape } => {
                write!(f, "unsupported matcher at {}: {}", path, shape)
            }
            Diagnostic::DefaultBrowserConflict { kept, ignored } => write!(
                f,
                "defaultBrowser is set in both config ({:?}) and simple config ({:?}), using config value",
                kept, ignored
            ),
        }
    }
}

/// Receiver for [`Diagnostic`] events.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);
}

/// Logs every diagnostic as a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        tracing::warn!(kind = diagnostic.kind(), "{}", diagnostic);
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything collected so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *events)
    }

    pub fn is_empty(&self) -> bool {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(diagnostic);
    }
}
