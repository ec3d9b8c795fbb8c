//! Integration tests for configuration loading.

use std::io::Write;

use mips_scheduler::common::{Error, ScheduleError};
use mips_scheduler::config::{Config, PolicySelector};
use mips_scheduler::Policy;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::NamedTempFile;

/// Tests an empty file yields the defaults.
#[test]
fn test_config_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config, Config::default());
    assert!(!config.general.trace);
    assert_eq!(config.output.suffix, "_RESULT");

    let scheduler = config.build_scheduler().unwrap();
    assert_eq!(scheduler.policy(), Policy::BestChoice);
    assert_eq!(scheduler.reorder_window(), 8);
}

/// Tests every key of a complete file.
#[test]
fn test_config_full() {
    let config = Config::parse(
        r#"
        [general]
        trace = true

        [scheduler]
        policy = "reorder"
        reorder_window = 3

        [output]
        suffix = ".out"
        "#,
    )
    .unwrap();
    assert!(config.general.trace);
    assert_eq!(config.output.suffix, ".out");

    let scheduler = config.build_scheduler().unwrap();
    assert_eq!(scheduler.policy(), Policy::Reorder);
    assert_eq!(scheduler.reorder_window(), 3);
}

/// Tests policies given as names or numeric selectors.
#[rstest]
#[case("policy = 0", Policy::Stall)]
#[case("policy = 2", Policy::Forward)]
#[case("policy = \"stall\"", Policy::Stall)]
#[case("policy = \"3\"", Policy::BestChoice)]
fn test_config_policy_selector(#[case] line: &str, #[case] expected: Policy) {
    let config = Config::parse(&format!("[scheduler]\n{}\n", line)).unwrap();
    assert_eq!(config.build_scheduler().unwrap().policy(), expected);
}

/// Tests out-of-range and unknown policies are rejected.
#[rstest]
#[case(PolicySelector::Index(4), "4")]
#[case(PolicySelector::Index(-1), "-1")]
#[case(PolicySelector::Index(300), "300")]
#[case(PolicySelector::Name("fast".to_string()), "fast")]
fn test_config_invalid_policy(#[case] selector: PolicySelector, #[case] shown: &str) {
    assert_eq!(
        selector.resolve(),
        Err(ScheduleError::InvalidPolicy(shown.to_string()))
    );
}

/// Tests a syntax error is reported as a config error.
#[test]
fn test_config_parse_error() {
    assert!(matches!(
        Config::parse("[scheduler\npolicy = "),
        Err(Error::Config(_))
    ));
}

/// Tests loading the configuration from a file.
#[test]
fn test_config_load_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[scheduler]\npolicy = \"forward\"").unwrap();
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.build_scheduler().unwrap().policy(), Policy::Forward);
    assert_eq!(config.output.suffix, "_RESULT");
}

/// Tests the bundled default configuration parses.
#[test]
fn test_bundled_default_config() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/default.toml");
    let config = Config::load(path).unwrap();
    assert_eq!(config, Config::default());
}
