//! Performance calculator: optimization-opportunity classification,
//! bottleneck extraction, and the performance score.

use std::collections::BTreeMap;

use crate::config::ScoringPolicy;
use crate::dataset::{col, Dataset, ImpactCounts};
use crate::types::{
    Bottleneck, EfficiencyRating, PerformanceBasicMetrics, PerformanceDashboard,
    PerformanceReport, PerformanceResourceAnalysis,
};

use super::filter::{filter_by_category, PERFORMANCE_PATTERNS};
use super::keywords::{count_rule_matches, OPTIMIZATION_RULES};
use super::{inverse_score, round1};

const BOTTLENECK_LIMIT: usize = 5;

/// Standard estimate attached to every bottleneck row.
const BOTTLENECK_IMPROVEMENT: &str = "15-30%";

#[must_use]
pub fn analyze(dataset: &Dataset, policy: &ScoringPolicy) -> PerformanceReport {
    let subset = filter_by_category(dataset, PERFORMANCE_PATTERNS);
    if subset.is_empty() {
        return empty_report();
    }

    let impact = ImpactCounts::tally(&subset);
    let score = inverse_score(subset.len(), impact.high, &policy.performance_score);

    PerformanceReport {
        basic_metrics: basic_metrics(&subset, impact, policy),
        optimization_opportunities: count_rule_matches(&subset, OPTIMIZATION_RULES),
        resource_analysis: resource_analysis(&subset),
        bottleneck_analysis: bottlenecks(&subset),
        performance_score: score,
        dashboard_metrics: dashboard_metrics(&subset, impact, score, policy),
    }
}

fn basic_metrics(
    subset: &Dataset,
    impact: ImpactCounts,
    policy: &ScoringPolicy,
) -> PerformanceBasicMetrics {
    let improvement = policy
        .performance_improvement
        .apply(impact.high, impact.medium, impact.low);
    let working_hours = policy
        .performance_hours
        .apply(impact.high, impact.medium, impact.low);

    PerformanceBasicMetrics {
        total_performance_actions: subset.len(),
        high_impact_optimizations: impact.high,
        medium_impact_optimizations: impact.medium,
        low_impact_optimizations: impact.low,
        estimated_performance_improvement: improvement.min(100.0) as u32,
        estimated_working_hours: round1(working_hours),
        unique_resources_affected: subset.distinct_count(col::RESOURCE_TYPE),
    }
}

fn resource_analysis(subset: &Dataset) -> PerformanceResourceAnalysis {
    let counts = subset.value_counts(col::RESOURCE_TYPE);
    PerformanceResourceAnalysis {
        most_affected_resource: counts
            .first()
            .map_or_else(|| "N/A".to_string(), |(name, _)| name.clone()),
        performance_critical_resources: counts.len(),
        resource_counts: counts.into_iter().collect(),
    }
}

fn bottlenecks(subset: &Dataset) -> Vec<Bottleneck> {
    subset
        .rows()
        .filter(|row| row.business_impact() == "High")
        .take(BOTTLENECK_LIMIT)
        .map(|row| Bottleneck {
            resource_type: row.resource_type().to_string(),
            recommendation: row.recommendation().to_string(),
            business_impact: row.business_impact().to_string(),
            estimated_improvement: BOTTLENECK_IMPROVEMENT.to_string(),
        })
        .collect()
}

fn dashboard_metrics(
    subset: &Dataset,
    impact: ImpactCounts,
    score: u32,
    policy: &ScoringPolicy,
) -> PerformanceDashboard {
    let improvement = policy
        .performance_improvement
        .apply(impact.high, impact.medium, impact.low);
    let working_hours = policy
        .performance_hours
        .apply(impact.high, impact.medium, impact.low);

    PerformanceDashboard {
        total_actions: subset.len(),
        critical_optimizations: impact.high,
        working_hours: round1(working_hours),
        performance_score: score,
        optimization_potential: improvement.min(100.0) as u32,
        efficiency_rating: EfficiencyRating::from_score(score),
    }
}

/// Canonical empty analysis. An empty subset scores a perfect 100: no
/// flagged optimizations means nothing left to tune. This is the opposite
/// default from the security calculator, and it is intentional.
#[must_use]
pub fn empty_report() -> PerformanceReport {
    PerformanceReport {
        basic_metrics: PerformanceBasicMetrics::default(),
        optimization_opportunities: BTreeMap::new(),
        resource_analysis: PerformanceResourceAnalysis::default(),
        bottleneck_analysis: Vec::new(),
        performance_score: 100,
        dashboard_metrics: PerformanceDashboard {
            total_actions: 0,
            critical_optimizations: 0,
            working_hours: 0.0,
            performance_score: 100,
            optimization_potential: 0,
            efficiency_rating: EfficiencyRating::Excellent,
        },
    }
}
