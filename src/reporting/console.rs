//! Colored terminal summary of an analysis bundle.

use colored::{ColoredString, Colorize};
use std::collections::BTreeMap;

use crate::pipeline::ReportBundle;
use crate::types::{
    AnalysisReport, ComprehensiveReport, CostReport, PerformanceReport, RiskLevel, SecurityReport,
};

pub fn print_report(bundle: &ReportBundle) {
    let meta = &bundle.generation_metadata;
    println!();
    println!("{}", meta.data_source.bold());
    println!(
        "  {} records analyzed, generated {}",
        meta.records_analyzed,
        meta.generated_at.dimmed()
    );
    println!();

    match &bundle.analysis {
        AnalysisReport::Security(report) => print_security(report),
        AnalysisReport::Performance(report) => print_performance(report),
        AnalysisReport::Cost(report) => print_cost(report),
        AnalysisReport::Comprehensive(report) => print_comprehensive(report),
    }
    println!();
}

fn print_security(report: &SecurityReport) {
    let m = &report.basic_metrics;
    section("SECURITY");
    metric("Total actions", m.total_security_actions);
    metric(
        "Impact split (H/M/L)",
        format!(
            "{}/{}/{}",
            m.high_impact_actions, m.medium_impact_actions, m.low_impact_actions
        ),
    );
    metric("Estimated working hours", m.estimated_working_hours);
    metric("Unique resources affected", m.unique_resources_affected);
    metric("Data quality score", m.data_quality_score);

    if !report.compliance_gaps.is_empty() {
        section("Compliance gaps");
        print_counts(&report.compliance_gaps);
    }

    section("Score");
    metric("Security score", score_colored(report.security_score));
    metric(
        "Risk level",
        risk_colored(report.dashboard_metrics.risk_level),
    );
}

fn print_performance(report: &PerformanceReport) {
    let m = &report.basic_metrics;
    section("PERFORMANCE");
    metric("Total actions", m.total_performance_actions);
    metric(
        "Impact split (H/M/L)",
        format!(
            "{}/{}/{}",
            m.high_impact_optimizations, m.medium_impact_optimizations, m.low_impact_optimizations
        ),
    );
    metric(
        "Estimated improvement",
        format!("{}%", m.estimated_performance_improvement),
    );
    metric("Estimated working hours", m.estimated_working_hours);

    if !report.optimization_opportunities.is_empty() {
        section("Optimization opportunities");
        print_counts(&report.optimization_opportunities);
    }

    for bottleneck in &report.bottleneck_analysis {
        println!(
            "  {} {} ({})",
            "bottleneck:".yellow(),
            bottleneck.recommendation,
            bottleneck.resource_type.dimmed()
        );
    }

    section("Score");
    metric("Performance score", score_colored(report.performance_score));
    metric(
        "Efficiency rating",
        report.dashboard_metrics.efficiency_rating.label(),
    );
}

fn print_cost(report: &CostReport) {
    let m = &report.basic_metrics;
    section("COST");
    metric("Total actions", m.total_cost_actions);
    metric(
        "Monthly savings",
        format!("${:.0}", m.estimated_monthly_savings).green(),
    );
    metric(
        "Annual savings",
        format!("${:.0}", m.estimated_annual_savings).green(),
    );
    metric("Estimated working hours", m.estimated_working_hours);

    let roi = &report.roi_analysis;
    section("ROI");
    metric("Implementation cost", format!("${:.0}", roi.implementation_cost));
    metric("Monthly ROI", format!("{}%", roi.monthly_roi_percentage));
    metric(
        "Payback period",
        format!("{} months", roi.payback_period_months),
    );
    metric("Three year value", format!("${:.0}", roi.three_year_value));

    section("Score");
    metric(
        "Optimization score",
        score_colored(report.dashboard_metrics.optimization_score),
    );
}

fn print_comprehensive(report: &ComprehensiveReport) {
    let d = &report.dashboard_metrics;
    section("COMPREHENSIVE");
    metric("Total recommendations", d.total_recommendations);
    metric(
        "Impact split (H/M/L)",
        format!("{}/{}/{}", d.high_impact, d.medium_impact, d.low_impact),
    );
    metric("Working hours", d.working_hours);
    metric("Monthly investment", format!("${:.0}", d.monthly_investment));
    metric("Categories", d.categories_count);

    if !report.category_breakdown.is_empty() {
        section("By category");
        print_counts(&report.category_breakdown);
    }
}

fn section(title: &str) {
    println!("{}", title.bold());
}

fn metric(label: &str, value: impl std::fmt::Display) {
    println!("  {label:<28} {value}");
}

fn print_counts(counts: &BTreeMap<String, usize>) {
    for (label, count) in counts {
        println!("  {label:<28} {count}");
    }
}

fn score_colored(score: u32) -> ColoredString {
    let text = score.to_string();
    if score >= 75 {
        text.green()
    } else if score >= 50 {
        text.yellow()
    } else {
        text.red()
    }
}

fn risk_colored(risk: RiskLevel) -> ColoredString {
    match risk {
        RiskLevel::Critical | RiskLevel::High => risk.label().red().bold(),
        RiskLevel::Medium => risk.label().yellow(),
        RiskLevel::Low => risk.label().green(),
        RiskLevel::Unknown => risk.label().dimmed(),
    }
}
