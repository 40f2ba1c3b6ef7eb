//! Cost calculator: savings projection, ROI and payback, and the
//! optimization score.

use std::collections::BTreeMap;

use crate::config::ScoringPolicy;
use crate::dataset::{col, Dataset, ImpactCounts};
use crate::types::{
    CostBasicMetrics, CostDashboard, CostReport, ResourceCostAnalysis, RoiAnalysis,
    SavingsAnalysis,
};

use super::filter::{filter_by_category, COST_PATTERNS};
use super::keywords::{count_rule_matches, COST_OPPORTUNITY_RULES};
use super::{inverse_score, round1};

const MONTHS_PER_YEAR: f64 = 12.0;
const THREE_YEARS_MONTHS: f64 = 36.0;

/// Payback sentinel for a non-empty subset that projects zero savings.
const PAYBACK_SENTINEL: f64 = 999.0;

#[must_use]
pub fn analyze(dataset: &Dataset, policy: &ScoringPolicy) -> CostReport {
    let subset = filter_by_category(dataset, COST_PATTERNS);
    if subset.is_empty() {
        return empty_report();
    }

    let impact = ImpactCounts::tally(&subset);
    let metrics = basic_metrics(&subset, impact, policy);
    let roi = roi_analysis(&metrics, policy);
    let score = inverse_score(subset.len(), impact.high, &policy.cost_score);

    CostReport {
        savings_analysis: savings_analysis(&metrics, policy),
        cost_optimization_opportunities: count_rule_matches(&subset, COST_OPPORTUNITY_RULES),
        resource_cost_analysis: resource_cost_analysis(&subset, policy),
        dashboard_metrics: dashboard_metrics(&metrics, &roi, score),
        roi_analysis: roi,
        basic_metrics: metrics,
    }
}

fn basic_metrics(subset: &Dataset, impact: ImpactCounts, policy: &ScoringPolicy) -> CostBasicMetrics {
    let monthly = policy
        .monthly_savings
        .apply(impact.high, impact.medium, impact.low);
    let working_hours = policy
        .cost_hours
        .apply(impact.high, impact.medium, impact.low);

    CostBasicMetrics {
        total_cost_actions: subset.len(),
        high_value_savings: impact.high,
        medium_value_savings: impact.medium,
        low_value_savings: impact.low,
        estimated_monthly_savings: monthly,
        estimated_annual_savings: monthly * MONTHS_PER_YEAR,
        estimated_working_hours: round1(working_hours),
        unique_resources_affected: subset.distinct_count(col::RESOURCE_TYPE),
    }
}

fn savings_analysis(metrics: &CostBasicMetrics, policy: &ScoringPolicy) -> SavingsAnalysis {
    let monthly = metrics.estimated_monthly_savings;
    let split = policy.savings_split;

    SavingsAnalysis {
        immediate_savings: monthly * split.immediate,
        short_term_savings: monthly * split.short_term,
        long_term_savings: monthly * split.long_term,
        total_monthly_potential: monthly,
        total_annual_potential: metrics.estimated_annual_savings,
    }
}

fn resource_cost_analysis(subset: &Dataset, policy: &ScoringPolicy) -> ResourceCostAnalysis {
    let counts = subset.value_counts(col::RESOURCE_TYPE);

    let mut estimates: Vec<(String, f64)> = Vec::with_capacity(counts.len());
    for (resource_type, count) in &counts {
        let lower = resource_type.to_lowercase();
        let rate = if lower.contains("virtual machine") {
            policy.resource_cost.virtual_machine
        } else if lower.contains("storage") {
            policy.resource_cost.storage
        } else {
            policy.resource_cost.fallback
        };
        estimates.push((resource_type.clone(), *count as f64 * rate));
    }

    // First-seen wins on ties.
    let mut highest: Option<(&str, f64)> = None;
    for (name, estimate) in &estimates {
        if highest.map_or(true, |(_, best)| *estimate > best) {
            highest = Some((name, *estimate));
        }
    }
    let highest = highest.map_or_else(|| "N/A".to_string(), |(name, _)| name.to_string());

    ResourceCostAnalysis {
        resource_counts: counts.into_iter().collect(),
        estimated_monthly_costs: estimates.into_iter().collect(),
        highest_cost_resource: highest,
    }
}

fn roi_analysis(metrics: &CostBasicMetrics, policy: &ScoringPolicy) -> RoiAnalysis {
    let monthly = metrics.estimated_monthly_savings;
    let implementation_cost = metrics.estimated_working_hours * policy.hourly_rate;

    let monthly_roi = if implementation_cost > 0.0 {
        round1(monthly / implementation_cost.max(1.0) * 100.0)
    } else {
        0.0
    };
    let payback = if monthly > 0.0 {
        round1((implementation_cost / monthly.max(1.0)).max(0.0))
    } else {
        PAYBACK_SENTINEL
    };

    RoiAnalysis {
        implementation_cost,
        monthly_savings: monthly,
        monthly_roi_percentage: monthly_roi,
        payback_period_months: payback,
        three_year_value: monthly * THREE_YEARS_MONTHS - implementation_cost,
    }
}

fn dashboard_metrics(metrics: &CostBasicMetrics, roi: &RoiAnalysis, score: u32) -> CostDashboard {
    CostDashboard {
        total_actions: metrics.total_cost_actions,
        monthly_savings: metrics.estimated_monthly_savings,
        annual_savings: metrics.estimated_annual_savings,
        working_hours: metrics.estimated_working_hours,
        roi_percentage: roi.monthly_roi_percentage,
        payback_months: roi.payback_period_months,
        optimization_score: score,
    }
}

/// Canonical empty analysis. No cost recommendations means the estate is
/// already optimized, so the empty subset scores 100 and reports zeroed
/// financials (payback 0, not the 999 sentinel).
#[must_use]
pub fn empty_report() -> CostReport {
    CostReport {
        basic_metrics: CostBasicMetrics::default(),
        savings_analysis: SavingsAnalysis::default(),
        cost_optimization_opportunities: BTreeMap::new(),
        resource_cost_analysis: ResourceCostAnalysis::default(),
        roi_analysis: RoiAnalysis::default(),
        dashboard_metrics: CostDashboard {
            total_actions: 0,
            monthly_savings: 0.0,
            annual_savings: 0.0,
            working_hours: 0.0,
            roi_percentage: 0.0,
            payback_months: 0.0,
            optimization_score: 100,
        },
    }
}
