// tests/unit_serialize.rs
use advilens_core::analysis::{analyze, ReportType};
use advilens_core::config::ScoringPolicy;
use advilens_core::dataset::Dataset;
use advilens_core::serialize::{normalize, to_normalized_json};
use serde_json::json;

#[test]
fn test_integral_floats_become_integers() {
    let normalized = normalize(json!({"hours": 3.0, "savings": 1500.0}));
    assert_eq!(normalized, json!({"hours": 3, "savings": 1500}));
}

#[test]
fn test_fractional_floats_are_preserved() {
    let normalized = normalize(json!({"hours": 3.5}));
    assert_eq!(normalized["hours"].as_f64(), Some(3.5));
}

#[test]
fn test_recursion_through_nested_structures() {
    let value = json!({
        "outer": {
            "inner": [1.0, 2.5, {"deep": 10.0}],
        },
        "label": "unchanged",
        "flag": true,
        "missing": null,
    });
    let normalized = normalize(value);

    assert_eq!(normalized["outer"]["inner"][0], json!(1));
    assert_eq!(normalized["outer"]["inner"][1].as_f64(), Some(2.5));
    assert_eq!(normalized["outer"]["inner"][2]["deep"], json!(10));
    assert_eq!(normalized["label"], json!("unchanged"));
    assert_eq!(normalized["flag"], json!(true));
    assert_eq!(normalized["missing"], json!(null));
}

#[test]
fn test_normalize_is_idempotent() {
    let value = json!({
        "metrics": {"hours": 12.0, "roi": 1333.3, "items": [0.5, 7.0]},
        "names": ["a", "b"],
    });
    let once = normalize(value);
    let twice = normalize(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_analysis_output_normalizes_idempotently() {
    let ds = Dataset::new(
        vec![
            "Category".to_string(),
            "Business Impact".to_string(),
            "Recommendation".to_string(),
            "Resource Type".to_string(),
        ],
        vec![vec![
            "Cost".to_string(),
            "High".to_string(),
            "Shut down unused VM".to_string(),
            "Virtual machine".to_string(),
        ]],
    );
    let report = analyze(ReportType::Cost, &ds, &ScoringPolicy::default());

    let once = to_normalized_json(&report).unwrap();
    let twice = normalize(once.clone());
    assert_eq!(once, twice);

    // Whole-dollar projections come out as plain integers.
    assert_eq!(once["basic_metrics"]["estimated_monthly_savings"], 1500);
    assert_eq!(once["basic_metrics"]["estimated_annual_savings"], 18000);
}
