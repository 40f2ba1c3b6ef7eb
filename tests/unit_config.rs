// tests/unit_config.rs
use advilens_core::config::{Config, ScoringPolicy};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_policy_carries_documented_constants() {
    let policy = ScoringPolicy::default();

    assert_eq!(policy.security_hours.high, 2.0);
    assert_eq!(policy.security_hours.medium, 1.0);
    assert_eq!(policy.security_hours.low, 0.5);
    assert_eq!(policy.performance_hours.high, 3.0);
    assert_eq!(policy.cost_hours.low, 0.25);
    assert_eq!(policy.monthly_savings.high, 1500.0);
    assert_eq!(policy.security_score.per_action, 2);
    assert_eq!(policy.security_score.per_high, 5);
    assert_eq!(policy.performance_score.per_high, 8);
    assert_eq!(policy.cost_score.per_action, 4);
    assert_eq!(policy.hourly_rate, 100.0);
    assert!(
        (policy.savings_split.immediate
            + policy.savings_split.short_term
            + policy.savings_split.long_term
            - 1.0)
            .abs()
            < 1e-9
    );
}

#[test]
fn test_partial_toml_overrides_keep_remaining_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("advilens.toml");
    fs::write(
        &path,
        "[policy]\nhourly_rate = 80.0\n\n[policy.security_score]\nper_action = 1\nper_high = 3\n",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.policy.security_score.per_action, 1);
    assert_eq!(config.policy.security_score.per_high, 3);
    assert_eq!(config.policy.hourly_rate, 80.0);
    // Untouched sections keep their defaults.
    assert_eq!(config.policy.monthly_savings.high, 1500.0);
    assert_eq!(config.policy.performance_score.per_high, 8);
}

#[test]
fn test_invalid_toml_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("advilens.toml");
    fs::write(&path, "policy = \"not a table\"").unwrap();

    assert!(Config::load(&path).is_err());
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(Config::load(&dir.path().join("absent.toml")).is_err());
}
