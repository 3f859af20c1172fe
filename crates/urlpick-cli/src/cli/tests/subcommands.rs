//! Tests for resolve, open, check, paths and the global flags.

use super::{parse, parse_cli};
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_resolve_defaults() {
    match parse(&["urlpick", "resolve", "https://example.com/"]) {
        CliCommand::Resolve(request) => {
            assert_eq!(request.url, "https://example.com/");
            assert_eq!(request.pid, 0);
            assert!(request.opener().is_none());
            assert!(!request.no_expand);
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_with_opener() {
    match parse(&[
        "urlpick",
        "resolve",
        "https://example.com/",
        "--pid",
        "4242",
        "--opener-name",
        "Mail",
        "--opener-bundle-id",
        "com.apple.mail",
        "--opener-path",
        "/System/Applications/Mail.app",
        "--no-expand",
    ]) {
        CliCommand::Resolve(request) => {
            assert_eq!(request.pid, 4242);
            let opener = request.opener().unwrap();
            assert_eq!(opener.name, "Mail");
            assert_eq!(opener.bundle_id, "com.apple.mail");
            assert_eq!(opener.path, "/System/Applications/Mail.app");
            assert!(request.no_expand);
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_partial_opener_rejected() {
    assert!(Cli::try_parse_from([
        "urlpick",
        "resolve",
        "https://example.com/",
        "--opener-name",
        "Mail",
    ])
    .is_err());
    assert!(Cli::try_parse_from([
        "urlpick",
        "resolve",
        "https://example.com/",
        "--opener-path",
        "/x",
    ])
    .is_err());
}

#[test]
fn cli_parse_open_dry_run() {
    match parse(&["urlpick", "open", "https://t.co/x", "--dry-run"]) {
        CliCommand::Open { request, dry_run } => {
            assert_eq!(request.url, "https://t.co/x");
            assert!(dry_run);
        }
        _ => panic!("expected Open"),
    }
}

#[test]
fn cli_parse_check_and_paths() {
    assert!(matches!(parse(&["urlpick", "check"]), CliCommand::Check));
    assert!(matches!(parse(&["urlpick", "paths"]), CliCommand::Paths));
}

#[test]
fn cli_parse_global_config_flags_after_subcommand() {
    let cli = parse_cli(&[
        "urlpick",
        "check",
        "--config",
        "/tmp/urlpick.toml",
        "--simple-config",
        "/tmp/simple.json",
    ]);
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/urlpick.toml")));
    assert_eq!(cli.simple_config, Some(PathBuf::from("/tmp/simple.json")));
}

#[test]
fn cli_parse_requires_url() {
    assert!(Cli::try_parse_from(["urlpick", "resolve"]).is_err());
    assert!(Cli::try_parse_from(["urlpick"]).is_err());
}
