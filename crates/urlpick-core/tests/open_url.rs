//! End-to-end dispatch: config in, browser descriptor out.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use regex::Regex;
use serde_json::json;
use urlpick_core::{
    open_url, AppType, BrowserChoice, BrowserConfig, BrowserConfigStrict, BrowserPattern, Config,
    DispatchError, Dispatcher, HandlerRule, Matcher, MemorySink, RewriteOutput, RewriteRule,
};

#[test]
fn spotify_link_opens_in_spotify() {
    let config = Config::new("Firefox").handler(HandlerRule::new("open.spotify.com", "Spotify"));
    let out = open_url("https://open.spotify.com/track/123", 1234, None, &config).unwrap();
    assert_eq!(
        out,
        BrowserConfigStrict {
            name: "Spotify".to_string(),
            app_type: AppType::Name,
            open_in_background: false,
            profile: String::new(),
            args: Vec::new(),
            url: "https://open.spotify.com/track/123".to_string(),
        }
    );
}

#[test]
fn wildcard_subdomain_or_default() {
    let config = Config::new("Safari").handler(HandlerRule::new("*.example.com", "Chrome"));
    let sub = open_url("https://sub1.example.com", 1, None, &config).unwrap();
    assert_eq!(sub.name, "Chrome");
    let bare = open_url("https://example.com", 1, None, &config).unwrap();
    assert_eq!(bare.name, "Safari");
}

#[test]
fn first_matching_handler_wins() {
    let config = Config::new("Safari")
        .handler(HandlerRule::new("github.com", "Chrome"))
        .handler(HandlerRule::new("github.com/rust-lang", "Firefox"));
    let out = open_url("https://github.com/rust-lang/rust", 1, None, &config).unwrap();
    assert_eq!(out.name, "Chrome");
}

#[test]
fn regex_sees_scheme_but_strings_do_not() {
    let config = Config::new("Safari")
        .handler(HandlerRule::new("https", "Literal"))
        .handler(HandlerRule::new(Regex::new("^https://").unwrap(), "Regex"));
    let out = open_url("https://example.com/", 1, None, &config).unwrap();
    assert_eq!(out.name, "Regex");
}

#[test]
fn rewrites_compose_then_handler_sees_result() {
    let config = Config::new("Safari")
        .rewrite(RewriteRule::new("t.co", "https://twitter.com/abc123"))
        .rewrite(RewriteRule::with_fn("twitter.com", |url, _| {
            Ok(RewriteOutput::Text(format!("{}/expanded", url.as_str())))
        }))
        .handler(HandlerRule::new("twitter.com", "Firefox"));
    let out = open_url("https://t.co/abc123", 1, None, &config).unwrap();
    assert_eq!(out.name, "Firefox");
    assert_eq!(out.url, "https://twitter.com/abc123/expanded");
}

#[test]
fn result_url_is_final_href_for_resolver_configs() {
    let config = Config::new("Safari")
        .rewrite(RewriteRule::new("old.example.com", "https://new.example.com/page"))
        .handler(HandlerRule::new(
            "example.com",
            BrowserPattern::resolver(|url, _| {
                Ok(BrowserChoice::Config(
                    BrowserConfig::new(format!("Browser for {}", url.host_str().unwrap_or("")))
                        .args(["--new-window"]),
                ))
            }),
        ));
    let out = open_url("https://old.example.com/", 1, None, &config).unwrap();
    assert_eq!(out.name, "Browser for new.example.com");
    assert_eq!(out.args, vec!["--new-window".to_string()]);
    assert_eq!(out.url, "https://new.example.com/page");
}

#[test]
fn opener_drives_browser_choice() {
    let config = Config::new("Safari").handler(HandlerRule::new(
        Matcher::predicate(|_, ctx| Ok(ctx.name() == Some("Mail"))),
        BrowserConfig::new("Firefox").profile("mail"),
    ));
    let out = open_url("https://example.com/", 99, Some(common::mail_opener()), &config).unwrap();
    assert_eq!(out.name, "Firefox");
    assert_eq!(out.profile, "mail");
}

#[test]
fn untyped_config_with_wrong_type_is_rejected_before_rewriting() {
    let err = Dispatcher::default()
        .open_url_value(
            "https://example.com/",
            1,
            None,
            &json!({
                "defaultBrowser": 123,
                "rewrite": [{ "match": "example.com", "url": "https://other.example/" }]
            }),
        )
        .unwrap_err();
    assert!(matches!(err, DispatchError::ConfigInvalid(_)));
}

#[test]
fn typed_config_rejected_without_evaluating_rules() {
    let evaluated = Arc::new(AtomicUsize::new(0));
    let counter = evaluated.clone();
    let config = Config::default().handler(HandlerRule::new(
        Matcher::predicate(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(true)
        }),
        "Chrome",
    ));
    let err = open_url("https://example.com/", 1, None, &config).unwrap_err();
    assert!(matches!(err, DispatchError::ConfigInvalid(_)));
    assert_eq!(evaluated.load(Ordering::SeqCst), 0);
}

#[test]
fn untyped_config_matches_typed_behavior() {
    let sink = Arc::new(MemorySink::new());
    let dispatcher = Dispatcher::default().with_diagnostics(sink.clone());
    let document = json!({
        "defaultBrowser": "Firefox",
        "handlers": [
            { "match": "*.slack.com", "browser": { "name": "Slack", "appType": "bundleID" } }
        ]
    });
    let out = dispatcher
        .open_url_value("https://acme.slack.com/archives/1", 1, None, &document)
        .unwrap();
    assert_eq!(out.name, "Slack");
    assert_eq!(out.app_type, AppType::BundleId);
    assert!(sink.is_empty());
}
