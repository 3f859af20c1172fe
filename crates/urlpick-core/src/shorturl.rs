//! Short-link detection. Expanding a short link needs the network, so the
//! core only defines the [`ShortUrlExpander`] seam; the CLI implements it.

use url::Url;

/// Hosts treated as URL shorteners out of the box.
pub const DEFAULT_SHORTENER_HOSTS: &[&str] = &[
    "bit.ly",
    "buff.ly",
    "goo.gl",
    "is.gd",
    "ow.ly",
    "spoti.fi",
    "t.co",
    "wu8.in",
    "dub.sh",
    "d.to",
    "tiny.cc",
    "tinyurl.com",
    "urlshortener.teams.microsoft.com",
    "msteams.link",
];

/// Resolves a short link to the URL it redirects to.
pub trait ShortUrlExpander {
    fn expand(&self, url: &Url) -> anyhow::Result<Url>;
}

fn host_matches(host: &str, domain: &str) -> bool {
    let domain = domain.trim().trim_end_matches('.').to_ascii_lowercase();
    if domain.is_empty() {
        return false;
    }
    let host = host.to_ascii_lowercase();
    host == domain || host.ends_with(&format!(".{domain}"))
}

/// True when the URL's host is one of the default shortener hosts or one of
/// `extra`, or a subdomain of one.
///
/// Matching is on whole labels, not a plain string suffix: `www.bit.ly`
/// counts as `bit.ly`, `habit.ly` does not.
pub fn is_short_url(url: &Url, extra: &[String]) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.trim_end_matches('.');
    DEFAULT_SHORTENER_HOSTS
        .iter()
        .copied()
        .chain(extra.iter().map(String::as_str))
        .any(|domain| host_matches(host, domain))
}

/// Expands `url` if it is a short link, keeping the original on failure.
pub fn expand_if_short(url: Url, extra: &[String], expander: &dyn ShortUrlExpander) -> Url {
    if !is_short_url(&url, extra) {
        return url;
    }
    match expander.expand(&url) {
        Ok(expanded) => {
            tracing::info!(from = %url, to = %expanded, "expanded short url");
            expanded
        }
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "short url expansion failed, keeping original");
            url
        }
    }
}
