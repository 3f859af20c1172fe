//! Browser selection types.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::context::RequestContext;

/// How the browser `name` is interpreted by the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AppType {
    #[default]
    Name,
    #[serde(alias = "bundleID")]
    BundleId,
    Path,
    /// Resolve but do not launch anything.
    None,
}

/// Browser options as written by the user; unset fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_type: Option<AppType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_in_background: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
}

impl BrowserConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn app_type(mut self, app_type: AppType) -> Self {
        self.app_type = Some(app_type);
        self
    }

    pub fn open_in_background(mut self, background: bool) -> Self {
        self.open_in_background = Some(background);
        self
    }

    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Fills every unset field with its default and stamps `url`.
    pub fn to_strict(&self, url: &Url) -> BrowserConfigStrict {
        BrowserConfigStrict {
            name: self.name.clone(),
            app_type: self.app_type.unwrap_or_default(),
            open_in_background: self.open_in_background.unwrap_or(false),
            profile: self.profile.clone().unwrap_or_default(),
            args: self.args.clone().unwrap_or_default(),
            url: url.as_str().to_string(),
        }
    }
}

/// Fully resolved browser invocation: the result of dispatching a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserConfigStrict {
    pub name: String,
    pub app_type: AppType,
    pub open_in_background: bool,
    pub profile: String,
    pub args: Vec<String>,
    /// The final, fully rewritten URL.
    pub url: String,
}

impl BrowserConfigStrict {
    /// Defaults for a bare browser name.
    pub fn with_name(name: impl Into<String>, url: &Url) -> Self {
        BrowserConfig::new(name).to_strict(url)
    }
}

/// User function choosing a browser for a URL.
pub type BrowserFn =
    Arc<dyn Fn(&Url, &RequestContext) -> anyhow::Result<BrowserChoice> + Send + Sync>;

/// What a browser function hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserChoice {
    Name(String),
    Config(BrowserConfig),
}

impl From<&str> for BrowserChoice {
    fn from(name: &str) -> Self {
        BrowserChoice::Name(name.to_string())
    }
}

impl From<String> for BrowserChoice {
    fn from(name: String) -> Self {
        BrowserChoice::Name(name)
    }
}

impl From<BrowserConfig> for BrowserChoice {
    fn from(config: BrowserConfig) -> Self {
        BrowserChoice::Config(config)
    }
}

/// Browser selection attached to a handler rule or used as the default.
#[derive(Clone)]
pub enum BrowserPattern {
    Name(String),
    Config(BrowserConfig),
    Resolver(BrowserFn),
}

impl BrowserPattern {
    pub fn resolver<F>(f: F) -> Self
    where
        F: Fn(&Url, &RequestContext) -> anyhow::Result<BrowserChoice> + Send + Sync + 'static,
    {
        BrowserPattern::Resolver(Arc::new(f))
    }
}

impl fmt::Debug for BrowserPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowserPattern::Name(name) => f.debug_tuple("Name").field(name).finish(),
            BrowserPattern::Config(config) => f.debug_tuple("Config").field(config).finish(),
            BrowserPattern::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

impl From<&str> for BrowserPattern {
    fn from(name: &str) -> Self {
        BrowserPattern::Name(name.to_string())
    }
}

impl From<String> for BrowserPattern {
    fn from(name: String) -> Self {
        BrowserPattern::Name(name)
    }
}

impl From<BrowserConfig> for BrowserPattern {
    fn from(config: BrowserConfig) -> Self {
        BrowserPattern::Config(config)
    }
}
