// tests/unit_analysis.rs
use advilens_core::analysis::{cost, performance, security};
use advilens_core::config::ScoringPolicy;
use advilens_core::dataset::Dataset;
use advilens_core::types::{EfficiencyRating, RiskLevel};

// (category, impact, recommendation, resource type)
fn dataset(rows: &[(&str, &str, &str, &str)]) -> Dataset {
    let columns = vec![
        "Category".to_string(),
        "Business Impact".to_string(),
        "Recommendation".to_string(),
        "Resource Type".to_string(),
    ];
    let rows = rows
        .iter()
        .map(|(c, i, r, t)| {
            vec![c.to_string(), i.to_string(), r.to_string(), t.to_string()]
        })
        .collect();
    Dataset::new(columns, rows)
}

fn advisor_sample() -> Dataset {
    dataset(&[
        ("Security", "High", "Enable encryption at host", "Virtual machine"),
        ("Security", "Medium", "Update TLS version", "App service"),
        ("Security", "Low", "Enable diagnostic logs", "Storage Account"),
        ("Cost", "Medium", "Consider reserved instances", "Subscription"),
        ("Cost", "High", "Right-size virtual machines", "Virtual machine"),
    ])
}

fn policy() -> ScoringPolicy {
    ScoringPolicy::default()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

// --- Security ---

#[test]
fn test_security_basic_metrics() {
    let report = security::analyze(&advisor_sample(), &policy());
    let m = &report.basic_metrics;

    assert_eq!(m.total_security_actions, 3);
    assert_eq!(m.high_impact_actions, 1);
    assert_eq!(m.medium_impact_actions, 1);
    assert_eq!(m.low_impact_actions, 1);
    assert_close(m.estimated_working_hours, 3.5);
    assert_eq!(m.unique_resources_affected, 3);
    assert_eq!(m.critical_vulnerabilities, 1);
    assert_eq!(m.data_quality_score, 100);
}

#[test]
fn test_security_score_and_risk() {
    let report = security::analyze(&advisor_sample(), &policy());

    // 100 - 2*3 - 5*1
    assert_eq!(report.security_score, 89);
    assert_eq!(report.dashboard_metrics.risk_level, RiskLevel::Medium);
    assert_eq!(report.dashboard_metrics.compliance_coverage, 91);
}

#[test]
fn test_security_compliance_gaps() {
    let report = security::analyze(&advisor_sample(), &policy());
    let gaps = &report.compliance_gaps;

    assert_eq!(gaps["encryption_gaps"], 1);
    assert_eq!(gaps["update_patches_needed"], 1);
    assert_eq!(gaps["monitoring_gaps"], 1);
    // "Update TLS version" also counts as a network finding: groups are
    // non-exclusive.
    assert_eq!(gaps["network_security_issues"], 1);
    assert_eq!(gaps["access_control_issues"], 0);
}

#[test]
fn test_security_impact_percentages() {
    let report = security::analyze(&advisor_sample(), &policy());
    let analysis = &report.impact_analysis;

    assert_eq!(analysis.impact_distribution["High"], 1);
    assert_close(analysis.impact_percentages["High"], 33.3);
}

#[test]
fn test_security_priority_recommendations_capped_at_ten() {
    let rows: Vec<(&str, &str, &str, &str)> = (0..15)
        .map(|_| ("Security", "High", "Rotate access keys", "Key vault"))
        .collect();
    let report = security::analyze(&dataset(&rows), &policy());

    assert_eq!(report.priority_recommendations.len(), 10);
    assert_eq!(report.priority_recommendations[0].business_impact, "High");
}

#[test]
fn test_security_data_quality_penalizes_incomplete_rows() {
    let ds = dataset(&[
        ("Security", "High", "Enable encryption", ""),
        ("Security", "Medium", "Update agents", "Virtual machine"),
    ]);
    let report = security::analyze(&ds, &policy());
    assert_eq!(report.basic_metrics.data_quality_score, 90);
}

#[test]
fn test_security_score_clamped_at_zero() {
    let rows: Vec<(&str, &str, &str, &str)> = (0..60)
        .map(|_| ("Security", "High", "Fix it", "Virtual machine"))
        .collect();
    let report = security::analyze(&dataset(&rows), &policy());

    assert_eq!(report.security_score, 0);
    assert_eq!(report.dashboard_metrics.risk_level, RiskLevel::Critical);
}

#[test]
fn test_security_empty_dataset_is_canonical() {
    let report = security::analyze(&Dataset::empty(), &policy());

    assert_eq!(report.basic_metrics.total_security_actions, 0);
    assert_eq!(report.security_score, 0, "no findings proves nothing");
    assert_eq!(report.dashboard_metrics.risk_level, RiskLevel::Unknown);
    assert!(report.compliance_gaps.is_empty());
    assert!(report.priority_recommendations.is_empty());
    assert_eq!(report.resource_analysis.most_affected_resource, "N/A");
}

// --- Performance ---

#[test]
fn test_performance_merges_reliability_rows() {
    let ds = dataset(&[
        ("Performance", "High", "Right-size virtual machines", "Virtual machine"),
        ("Reliability", "Medium", "Enable autoscale for app", "App Service"),
        ("Security", "High", "Enable encryption", "Virtual machine"),
    ]);
    let report = performance::analyze(&ds, &policy());
    let m = &report.basic_metrics;

    assert_eq!(m.total_performance_actions, 2);
    assert_eq!(m.high_impact_optimizations, 1);
    assert_eq!(m.estimated_performance_improvement, 40);
    assert_close(m.estimated_working_hours, 4.5);
    // 100 - 3*2 - 8*1
    assert_eq!(report.performance_score, 86);
    assert_eq!(
        report.dashboard_metrics.efficiency_rating,
        EfficiencyRating::Good
    );
}

#[test]
fn test_performance_opportunities() {
    let ds = dataset(&[
        ("Performance", "High", "Right-size virtual machines", "Virtual machine"),
        ("Performance", "Medium", "Enable autoscale for app", "App Service"),
        ("Performance", "Low", "Add CDN caching for static assets", "CDN profile"),
    ]);
    let report = performance::analyze(&ds, &policy());
    let opportunities = &report.optimization_opportunities;

    assert_eq!(opportunities["compute_optimization"], 1);
    assert_eq!(opportunities["scaling_opportunities"], 1);
    assert_eq!(opportunities["caching_opportunities"], 1);
    assert_eq!(opportunities["network_optimization"], 0);
}

#[test]
fn test_performance_bottlenecks_capped_with_fixed_estimate() {
    let rows: Vec<(&str, &str, &str, &str)> = (0..8)
        .map(|_| ("Performance", "High", "Upgrade disk tier", "Disk"))
        .collect();
    let report = performance::analyze(&dataset(&rows), &policy());

    assert_eq!(report.bottleneck_analysis.len(), 5);
    for bottleneck in &report.bottleneck_analysis {
        assert_eq!(bottleneck.estimated_improvement, "15-30%");
    }
}

#[test]
fn test_performance_improvement_capped_at_100() {
    let rows: Vec<(&str, &str, &str, &str)> = (0..10)
        .map(|_| ("Performance", "High", "Upgrade disk tier", "Disk"))
        .collect();
    let report = performance::analyze(&dataset(&rows), &policy());

    assert_eq!(report.basic_metrics.estimated_performance_improvement, 100);
    assert_eq!(report.performance_score, 0, "clamped, never negative");
}

#[test]
fn test_performance_empty_dataset_is_canonical() {
    let report = performance::analyze(&Dataset::empty(), &policy());

    assert_eq!(report.basic_metrics.total_performance_actions, 0);
    assert_eq!(report.performance_score, 100, "nothing flagged, nothing to tune");
    assert_eq!(
        report.dashboard_metrics.efficiency_rating,
        EfficiencyRating::Excellent
    );
    assert!(report.optimization_opportunities.is_empty());
    assert!(report.bottleneck_analysis.is_empty());
}

// --- Cost ---

#[test]
fn test_cost_savings_projection() {
    let ds = dataset(&[
        ("Cost", "High", "Shut down unused VM", "Virtual machine"),
        ("Cost", "High", "Delete idle disks", "Disk"),
    ]);
    let report = cost::analyze(&ds, &policy());
    let m = &report.basic_metrics;

    assert_close(m.estimated_monthly_savings, 3000.0);
    assert_close(m.estimated_annual_savings, 36000.0);
    assert_close(report.savings_analysis.immediate_savings, 900.0);
    assert_close(report.savings_analysis.short_term_savings, 1500.0);
    assert_close(report.savings_analysis.long_term_savings, 600.0);
}

#[test]
fn test_cost_annual_is_twelve_times_monthly() {
    let report = cost::analyze(&advisor_sample(), &policy());
    let m = &report.basic_metrics;
    assert_close(m.estimated_annual_savings, m.estimated_monthly_savings * 12.0);
}

#[test]
fn test_cost_savings_split_sums_to_total() {
    let report = cost::analyze(&advisor_sample(), &policy());
    let s = &report.savings_analysis;
    assert_close(
        s.immediate_savings + s.short_term_savings + s.long_term_savings,
        s.total_monthly_potential,
    );
}

#[test]
fn test_cost_roi_analysis() {
    let report = cost::analyze(&advisor_sample(), &policy());
    let roi = &report.roi_analysis;

    // 2 cost rows (High, Medium): 1.5h at $100/h against $2000/month.
    assert_close(roi.implementation_cost, 150.0);
    assert_close(roi.monthly_savings, 2000.0);
    assert_close(roi.monthly_roi_percentage, 1333.3);
    assert_close(roi.payback_period_months, 0.1);
    assert_close(roi.three_year_value, 2000.0 * 36.0 - 150.0);
}

#[test]
fn test_cost_payback_sentinel_when_no_savings() {
    // Non-empty subset, but no recognizable impact values: projects zero.
    let ds = dataset(&[("Cost", "Unspecified", "Review spend", "Subscription")]);
    let report = cost::analyze(&ds, &policy());

    assert_close(report.roi_analysis.payback_period_months, 999.0);
    assert_close(report.roi_analysis.monthly_roi_percentage, 0.0);
}

#[test]
fn test_cost_resource_estimates() {
    let ds = dataset(&[
        ("Cost", "High", "Shut down unused VM", "Virtual machine"),
        ("Cost", "Medium", "Move blobs to cool tier", "Storage Account"),
        ("Cost", "Low", "Review SKU", "App Service"),
    ]);
    let report = cost::analyze(&ds, &policy());
    let analysis = &report.resource_cost_analysis;

    assert_close(analysis.estimated_monthly_costs["Virtual machine"], 200.0);
    assert_close(analysis.estimated_monthly_costs["Storage Account"], 50.0);
    assert_close(analysis.estimated_monthly_costs["App Service"], 100.0);
    assert_eq!(analysis.highest_cost_resource, "Virtual machine");
}

#[test]
fn test_cost_opportunities() {
    let report = cost::analyze(&advisor_sample(), &policy());
    let opportunities = &report.cost_optimization_opportunities;

    assert_eq!(opportunities["reserved_instance_opportunities"], 1);
    assert_eq!(opportunities["rightsizing_opportunities"], 1);
    assert_eq!(opportunities["compute_optimization"], 1);
    assert_eq!(opportunities["unused_resources"], 0);
}

#[test]
fn test_cost_score_clamped_at_zero() {
    let rows: Vec<(&str, &str, &str, &str)> = (0..50)
        .map(|_| ("Cost", "High", "Shut down unused VM", "Virtual machine"))
        .collect();
    let report = cost::analyze(&dataset(&rows), &policy());
    assert_eq!(report.dashboard_metrics.optimization_score, 0);
}

#[test]
fn test_cost_empty_dataset_is_canonical() {
    let report = cost::analyze(&Dataset::empty(), &policy());

    assert_eq!(report.basic_metrics.total_cost_actions, 0);
    assert_eq!(report.dashboard_metrics.optimization_score, 100);
    assert_close(report.roi_analysis.payback_period_months, 0.0);
    assert!(report.cost_optimization_opportunities.is_empty());
}

#[test]
fn test_missing_category_column_analyzes_whole_dataset() {
    let columns = vec!["Business Impact".to_string(), "Recommendation".to_string()];
    let rows = vec![
        vec!["High".to_string(), "Shut down unused VM".to_string()],
        vec!["High".to_string(), "Delete idle disks".to_string()],
    ];
    let ds = Dataset::new(columns, rows);
    let report = cost::analyze(&ds, &policy());

    assert_eq!(report.basic_metrics.total_cost_actions, 2);
    assert_close(report.basic_metrics.estimated_monthly_savings, 3000.0);
}

// --- Bands ---

#[test]
fn test_risk_level_bands() {
    assert_eq!(RiskLevel::from_high_impact(12), RiskLevel::Critical);
    assert_eq!(RiskLevel::from_high_impact(10), RiskLevel::Critical);
    assert_eq!(RiskLevel::from_high_impact(5), RiskLevel::High);
    assert_eq!(RiskLevel::from_high_impact(1), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_high_impact(0), RiskLevel::Low);
}

#[test]
fn test_efficiency_rating_bands() {
    assert_eq!(EfficiencyRating::from_score(95), EfficiencyRating::Excellent);
    assert_eq!(EfficiencyRating::from_score(90), EfficiencyRating::Excellent);
    assert_eq!(EfficiencyRating::from_score(75), EfficiencyRating::Good);
    assert_eq!(EfficiencyRating::from_score(60), EfficiencyRating::Fair);
    assert_eq!(
        EfficiencyRating::from_score(59),
        EfficiencyRating::NeedsImprovement
    );
}
