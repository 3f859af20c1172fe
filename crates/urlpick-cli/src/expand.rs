//! Short-link expansion over HTTP.
//!
//! Uses the curl crate (libcurl): a HEAD request that follows a few
//! redirects, then GET if HEAD did not end in 200. The final effective URL
//! is the expansion.

use anyhow::{bail, Context, Result};
use std::time::Duration;
use urlpick_core::shorturl::ShortUrlExpander;
use urlpick_core::Url;

fn user_agent() -> String {
    format!("urlpick/{}", env!("CARGO_PKG_VERSION"))
}

/// [`ShortUrlExpander`] backed by libcurl.
#[derive(Debug, Clone)]
pub struct CurlExpander {
    pub timeout: Duration,
    pub max_redirects: u32,
}

impl Default for CurlExpander {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(2),
            max_redirects: 3,
        }
    }
}

impl CurlExpander {
    /// One request; returns the response code and the URL it ended at.
    fn request(&self, url: &Url, head: bool) -> Result<(u32, Option<String>)> {
        let method = if head { "HEAD" } else { "GET" };
        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str()).context("invalid URL")?;
        if head {
            easy.nobody(true)?;
        } else {
            easy.get(true)?;
        }
        easy.follow_location(true)?;
        easy.max_redirections(self.max_redirects)?;
        easy.timeout(self.timeout)?;
        easy.useragent(&user_agent())?;

        {
            let mut transfer = easy.transfer();
            // Body is not needed, only where we ended up.
            transfer.write_function(|data| Ok(data.len()))?;
            transfer
                .perform()
                .with_context(|| format!("{} {} failed", method, url))?;
        }

        let code = easy.response_code().context("no response code")?;
        let effective = easy.effective_url()?.map(str::to_string);
        tracing::debug!(method, url = %url, code, effective = ?effective, "short url probe");
        Ok((code, effective))
    }
}

impl ShortUrlExpander for CurlExpander {
    fn expand(&self, url: &Url) -> Result<Url> {
        let mut last_code = 0;
        for head in [true, false] {
            let (code, effective) = self.request(url, head)?;
            if code == 200 {
                let target = effective.unwrap_or_else(|| url.to_string());
                return Url::parse(&target)
                    .with_context(|| format!("expanded URL is not absolute: {}", target));
            }
            last_code = code;
        }
        bail!("could not expand {}: HTTP {}", url, last_code)
    }
}
