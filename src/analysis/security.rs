//! Security calculator: severity triage, compliance-gap detection, and the
//! remaining-risk score.

use std::collections::BTreeMap;

use crate::config::ScoringPolicy;
use crate::dataset::{col, Dataset, ImpactCounts};
use crate::types::{
    ImpactAnalysis, RecommendationSummary, RiskLevel, SecurityBasicMetrics, SecurityDashboard,
    SecurityReport, SecurityResourceAnalysis,
};

use super::filter::{filter_by_category, SECURITY_PATTERNS};
use super::keywords::{count_rule_matches, COMPLIANCE_RULES};
use super::{impact_analysis, inverse_score, round1};

const PRIORITY_LIMIT: usize = 10;

#[must_use]
pub fn analyze(dataset: &Dataset, policy: &ScoringPolicy) -> SecurityReport {
    let subset = filter_by_category(dataset, SECURITY_PATTERNS);
    if subset.is_empty() {
        return empty_report();
    }

    let impact = ImpactCounts::tally(&subset);
    let score = inverse_score(subset.len(), impact.high, &policy.security_score);

    SecurityReport {
        basic_metrics: basic_metrics(&subset, impact, policy),
        impact_analysis: impact_analysis(&subset),
        resource_analysis: resource_analysis(&subset),
        priority_recommendations: priority_recommendations(&subset),
        compliance_gaps: count_rule_matches(&subset, COMPLIANCE_RULES),
        security_score: score,
        dashboard_metrics: dashboard_metrics(&subset, impact, score, policy),
    }
}

fn basic_metrics(
    subset: &Dataset,
    impact: ImpactCounts,
    policy: &ScoringPolicy,
) -> SecurityBasicMetrics {
    let working_hours = policy
        .security_hours
        .apply(impact.high, impact.medium, impact.low);
    let quality_deduction = policy.data_quality_penalty * subset.incomplete_row_count() as i64;

    SecurityBasicMetrics {
        total_security_actions: subset.len(),
        high_impact_actions: impact.high,
        medium_impact_actions: impact.medium,
        low_impact_actions: impact.low,
        unique_resources_affected: subset.distinct_count(col::RESOURCE_TYPE),
        estimated_working_hours: round1(working_hours),
        // High impact counts as critical.
        critical_vulnerabilities: impact.high,
        data_quality_score: (100 - quality_deduction).clamp(0, 100) as u32,
    }
}

fn resource_analysis(subset: &Dataset) -> SecurityResourceAnalysis {
    let counts = subset.value_counts(col::RESOURCE_TYPE);
    SecurityResourceAnalysis {
        most_affected_resource: counts
            .first()
            .map_or_else(|| "N/A".to_string(), |(name, _)| name.clone()),
        total_resource_types: counts.len(),
        resource_counts: counts.into_iter().collect(),
    }
}

fn priority_recommendations(subset: &Dataset) -> Vec<RecommendationSummary> {
    subset
        .rows()
        .filter(|row| row.business_impact() == "High")
        .take(PRIORITY_LIMIT)
        .map(|row| RecommendationSummary {
            recommendation: row.recommendation().to_string(),
            resource_type: row.resource_type().to_string(),
            business_impact: row.business_impact().to_string(),
            category: row.category().to_string(),
        })
        .collect()
}

fn dashboard_metrics(
    subset: &Dataset,
    impact: ImpactCounts,
    score: u32,
    policy: &ScoringPolicy,
) -> SecurityDashboard {
    let working_hours = policy
        .security_hours
        .apply(impact.high, impact.medium, impact.low);
    let coverage = 100 - policy.compliance_coverage_penalty * subset.len() as i64;

    SecurityDashboard {
        total_actions: subset.len(),
        critical_issues: impact.high,
        working_hours: round1(working_hours),
        security_score: score,
        compliance_coverage: coverage.max(0) as u32,
        risk_level: RiskLevel::from_high_impact(impact.high),
    }
}

/// Canonical empty analysis: zeroed metrics, empty maps, score 0 and risk
/// `Unknown`. Absence of security findings is not evidence of safety.
#[must_use]
pub fn empty_report() -> SecurityReport {
    SecurityReport {
        basic_metrics: SecurityBasicMetrics::default(),
        impact_analysis: ImpactAnalysis::default(),
        resource_analysis: SecurityResourceAnalysis::default(),
        priority_recommendations: Vec::new(),
        compliance_gaps: BTreeMap::new(),
        security_score: 0,
        dashboard_metrics: SecurityDashboard {
            total_actions: 0,
            critical_issues: 0,
            working_hours: 0.0,
            security_score: 0,
            compliance_coverage: 0,
            risk_level: RiskLevel::Unknown,
        },
    }
}
