// tests/integration_core.rs
//
// End-to-end: CSV export on disk -> pipeline -> normalized JSON / HTML.

use advilens_core::analysis::ReportType;
use advilens_core::config::ScoringPolicy;
use advilens_core::pipeline;
use advilens_core::reporting::html::render_html;
use advilens_core::serialize::{normalize, to_normalized_json};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SAMPLE_CSV: &str = "\
Category,Business Impact,Recommendation,Resource Type
Security,High,Enable encryption at host,Virtual machine
Security,Medium,Update TLS version,App service
Security,Low,Enable diagnostic logs,Storage Account
Cost,Medium,Consider reserved instances,Subscription
Cost,High,Right-size virtual machines,Virtual machine
";

fn write_sample(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("advisor.csv");
    fs::write(&path, SAMPLE_CSV).unwrap();
    path
}

#[test]
fn test_pipeline_security_report() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    let bundle =
        pipeline::analyze_csv_path(&path, ReportType::Security, &ScoringPolicy::default())
            .unwrap();

    let meta = &bundle.generation_metadata;
    assert_eq!(meta.analysis_type, "security");
    assert_eq!(meta.data_source, "Specialized Security Analysis");
    assert_eq!(meta.records_analyzed, 5);
    assert_eq!(
        meta.dataset_fingerprint.as_deref().map(str::len),
        Some(64)
    );

    let value = to_normalized_json(&bundle).unwrap();
    let analysis = &value["analysis"];
    assert_eq!(analysis["basic_metrics"]["total_security_actions"], 3);
    assert_eq!(analysis["security_score"], 89);
    assert_eq!(analysis["dashboard_metrics"]["risk_level"], "Medium");
    // round(3.5) stays fractional through normalization
    assert_eq!(
        analysis["basic_metrics"]["estimated_working_hours"].as_f64(),
        Some(3.5)
    );
}

#[test]
fn test_pipeline_comprehensive_report_keeps_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    let bundle = pipeline::analyze_csv_path(
        &path,
        ReportType::Comprehensive,
        &ScoringPolicy::default(),
    )
    .unwrap();

    let value = to_normalized_json(&bundle).unwrap();
    let analysis = &value["analysis"];
    assert_eq!(analysis["dashboard_metrics"]["total_recommendations"], 5);
    assert_eq!(analysis["dashboard_metrics"]["high_impact"], 2);
    assert_eq!(analysis["dashboard_metrics"]["categories_count"], 2);
    assert_eq!(analysis["recommendations_data"].as_array().unwrap().len(), 5);
    assert_eq!(analysis["category_breakdown"]["Security"], 3);
}

#[test]
fn test_pipeline_missing_file_is_an_error() {
    let result = pipeline::analyze_csv_path(
        std::path::Path::new("/nonexistent/advisor.csv"),
        ReportType::Cost,
        &ScoringPolicy::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_pipeline_json_is_normalization_stable() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    let bundle =
        pipeline::analyze_csv_path(&path, ReportType::Cost, &ScoringPolicy::default()).unwrap();
    let once = to_normalized_json(&bundle).unwrap();
    assert_eq!(once, normalize(once.clone()));
}

#[test]
fn test_html_report_renders_dashboard_values() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    let bundle =
        pipeline::analyze_csv_path(&path, ReportType::Cost, &ScoringPolicy::default()).unwrap();
    let html = render_html(&bundle);

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Specialized Cost Analysis"));
    assert!(html.contains("Monthly Savings"));
    assert!(html.contains("$2000"));
    assert!(html.contains("Working Hours"));
}

#[test]
fn test_html_escapes_markup_in_recommendations() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("advisor.csv");
    fs::write(
        &path,
        "Category,Business Impact,Recommendation,Resource Type\n\
         Security,High,\"Use <TLS> & friends\",Virtual machine\n",
    )
    .unwrap();

    let bundle =
        pipeline::analyze_csv_path(&path, ReportType::Security, &ScoringPolicy::default())
            .unwrap();
    let html = render_html(&bundle);

    assert!(html.contains("Use &lt;TLS&gt; &amp; friends"));
    assert!(!html.contains("Use <TLS>"));
}
