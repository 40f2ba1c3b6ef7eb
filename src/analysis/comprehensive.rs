//! Whole-dataset aggregation for the default report type.
//!
//! No category filtering and no scoring: raw totals, the impact tri-split,
//! sums over the optional financial columns, and the full row set for the
//! presentation layer.

use crate::dataset::{col, Dataset, ImpactCounts};
use crate::types::{ComprehensiveDashboard, ComprehensiveReport};

#[must_use]
pub fn analyze(dataset: &Dataset) -> ComprehensiveReport {
    let impact = ImpactCounts::tally(dataset);

    ComprehensiveReport {
        dashboard_metrics: ComprehensiveDashboard {
            total_recommendations: dataset.len(),
            high_impact: impact.high,
            medium_impact: impact.medium,
            low_impact: impact.low,
            working_hours: dataset.numeric_sum(col::WORKING_HOURS),
            monthly_investment: dataset.numeric_sum(col::MONTHLY_INVESTMENT),
            categories_count: dataset.distinct_count(col::CATEGORY),
        },
        category_breakdown: dataset.value_counts(col::CATEGORY).into_iter().collect(),
        impact_breakdown: dataset
            .value_counts(col::BUSINESS_IMPACT)
            .into_iter()
            .collect(),
        recommendations_data: dataset.to_records(),
    }
}
