//! Tests for CLI argument parsing.

use clap::Parser;
use insta_media::{Config, LogFormat, LogLevel, OutputFormat};

#[test]
fn test_cli_url_only() {
    let config = Config::try_parse_from(["insta_media", "https://www.instagram.com/p/ABC123/"])
        .expect("Should parse a bare URL");
    assert_eq!(
        config.url.as_deref(),
        Some("https://www.instagram.com/p/ABC123/")
    );
    assert_eq!(config.format, OutputFormat::Plain);
    assert!(matches!(config.log_format, LogFormat::Plain));
}

#[test]
fn test_cli_all_options() {
    let config = Config::try_parse_from([
        "insta_media",
        "https://www.instagram.com/tv/XYZ/",
        "--proxy",
        "http://127.0.0.1:3128",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--format",
        "json",
    ])
    .expect("Should parse all options");

    assert_eq!(config.proxy.as_deref(), Some("http://127.0.0.1:3128"));
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::from(LogLevel::Debug)
    );
    assert!(matches!(config.log_format, LogFormat::Json));
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn test_cli_rejects_unknown_format() {
    let result = Config::try_parse_from([
        "insta_media",
        "https://www.instagram.com/p/ABC123/",
        "--format",
        "xml",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_cli_version_flags() {
    for flag in ["-v", "--version"] {
        let err = Config::try_parse_from(["insta_media", flag])
            .expect_err("Version flag should short-circuit");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}

#[test]
fn test_cli_url_is_optional_for_usage_path() {
    let config = Config::try_parse_from(["insta_media"]).expect("No URL is not a parse error");
    assert!(config.url.is_none());
}
