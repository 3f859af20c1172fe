//! Error type returned by every dispatch operation.

use thiserror::Error;

use crate::validate::ValidationError;

/// Why a request could not be resolved to a browser.
///
/// Recoverable conditions (a wildcard that does not compile, an unsupported
/// matcher shape, conflicting default browsers) are not errors; they are
/// reported through a [`crate::DiagnosticSink`] instead.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The configuration was rejected before any rule was evaluated.
    #[error("invalid config: {0}")]
    ConfigInvalid(#[from] ValidationError),

    /// The request URL, or the output of a rewrite, is not an absolute URL.
    #[error("cannot parse {input:?} as an absolute URL")]
    UrlParse {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// A user-supplied matcher, rewrite or browser function failed. The
    /// error is passed through untouched.
    #[error(transparent)]
    Callback(#[from] anyhow::Error),
}

impl DispatchError {
    pub(crate) fn url_parse(input: &str, source: url::ParseError) -> Self {
        DispatchError::UrlParse {
            input: input.to_string(),
            source,
        }
    }
}
