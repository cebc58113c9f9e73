//! Integration tests for CLI
//!
//! These tests verify command parsing without running any command.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

#[path = "../src/cli.rs"]
mod cli;

use std::{ffi::OsString, path::PathBuf};

use clap::Parser;
use cli::{Cli, Commands};

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_providers_command() {
    let cli = parse_args(&["weatherapp", "providers"]).unwrap();
    assert!(matches!(cli.command, Commands::Providers));
    assert_eq!(cli.verbose, 0);
    assert!(!cli.debug);
}

#[test]
fn cli_parses_configure_without_provider() {
    let cli = parse_args(&["weatherapp", "configure"]).unwrap();
    if let Commands::Configure { provider } = cli.command {
        assert!(provider.is_none());
    } else {
        panic!("Expected Configure command");
    }
}

#[test]
fn cli_parses_configure_with_provider_and_debug() {
    let cli = parse_args(&["weatherapp", "configure", "rp5", "--debug"]).unwrap();
    assert!(cli.debug);
    if let Commands::Configure { provider } = cli.command {
        assert_eq!(provider.as_deref(), Some("rp5"));
    } else {
        panic!("Expected Configure command");
    }
}

#[test]
fn cli_parses_global_metrics_flag_after_subcommand() {
    let cli = parse_args(&["weatherapp", "weather", "--metrics"]).unwrap();
    assert!(cli.metrics);
    assert!(!parse_args(&["weatherapp", "weather"]).unwrap().metrics);
}

#[test]
fn cli_parses_weather_defaults() {
    let cli = parse_args(&["weatherapp", "weather"]).unwrap();
    if let Commands::Weather {
        provider,
        tomorrow,
        json,
    } = cli.command
    {
        assert!(provider.is_none());
        assert!(!tomorrow);
        assert!(!json);
    } else {
        panic!("Expected Weather command");
    }
}

#[test]
fn cli_parses_weather_tomorrow_json() {
    let cli = parse_args(&["weatherapp", "weather", "rp5", "--tomorrow", "--json"]).unwrap();
    if let Commands::Weather {
        provider,
        tomorrow,
        json,
    } = cli.command
    {
        assert_eq!(provider.as_deref(), Some("rp5"));
        assert!(tomorrow);
        assert!(json);
    } else {
        panic!("Expected Weather command");
    }
}

#[test]
fn cli_parses_short_tomorrow_flag() {
    let cli = parse_args(&["weatherapp", "weather", "-t"]).unwrap();
    assert!(matches!(cli.command, Commands::Weather { tomorrow: true, .. }));
}

#[test]
fn cli_counts_verbosity() {
    let cli = parse_args(&["weatherapp", "-vv", "providers"]).unwrap();
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_global_flags_after_subcommand() {
    let cli = parse_args(&["weatherapp", "weather", "-v", "--config", "/etc/weatherapp.toml"]).unwrap();
    assert_eq!(cli.verbose, 1);
    assert_eq!(cli.config, Some(PathBuf::from("/etc/weatherapp.toml")));
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["weatherapp"]).is_err());
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(parse_args(&["weatherapp", "forecast"]).is_err());
}

#[test]
fn cli_rejects_extra_positional() {
    assert!(parse_args(&["weatherapp", "weather", "rp5", "extra"]).is_err());
}
