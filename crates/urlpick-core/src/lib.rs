//! Decision core of the urlpick URL dispatcher.
//!
//! Given a declarative [`Config`] of rewrite and handler rules, [`open_url`]
//! resolves one "open this URL" request to one [`BrowserConfigStrict`]:
//!
//! ```text
//! validate config → parse URL → rewrite (in order) → first matching handler
//!     → browser descriptor (defaults filled, url = final rewritten href)
//! ```
//!
//! The core never launches processes and never touches the network; those
//! concerns belong to the CLI.

pub mod browser;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod logging;
pub mod matcher;
pub mod rewrite;
pub mod shorturl;
pub mod validate;

pub use browser::{
    resolve_browser, AppType, BrowserChoice, BrowserConfig, BrowserConfigStrict, BrowserPattern,
};
pub use config::{merge_config, Config, ConfigOptions, SimpleConfig};
pub use context::{ProcessInfo, RequestContext};
pub use diagnostics::{Diagnostic, DiagnosticSink, MemorySink, TracingSink};
pub use dispatch::{open_url, Dispatcher};
pub use error::DispatchError;
pub use handler::{resolve_handler, HandlerRule};
pub use matcher::Matcher;
pub use rewrite::{apply_rewrites, RewriteOutput, RewriteRule, UrlTransform};
pub use validate::{ConfigValidator, StructuralValidator, ValidationError, ValidationIssue};

pub use url::Url;
