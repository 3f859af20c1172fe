//! Shared helpers for urlpick-core integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use urlpick_core::{ProcessInfo, RequestContext};

/// Writes `contents` to `dir/name` and returns the path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

pub fn mail_opener() -> ProcessInfo {
    ProcessInfo {
        name: "Mail".to_string(),
        bundle_id: "com.apple.mail".to_string(),
        path: "/System/Applications/Mail.app".to_string(),
    }
}

pub fn ctx() -> RequestContext {
    RequestContext::new(1234, None)
}

pub const SAMPLE_TOML: &str = r#"
defaultBrowser = "Firefox"

[options]
urlShorteners = ["go.example.com"]
logRequests = true

[[rewrite]]
match = "*utm_source=*"
url = "https://example.com/clean"

[[handlers]]
match = ["github.com", { regex = "amazon" }]
browser = "Google Chrome"

[[handlers]]
match = "*.slack.com"
browser = { name = "Firefox", profile = "work", openInBackground = true }
"#;
