use serde::Serialize;
use std::collections::BTreeMap;

/// Whole-dataset aggregation. No filtering, no scoring: raw totals,
/// financial sums from the optional money columns, and the full row set
/// for downstream presentation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComprehensiveReport {
    pub dashboard_metrics: ComprehensiveDashboard,
    pub category_breakdown: BTreeMap<String, usize>,
    pub impact_breakdown: BTreeMap<String, usize>,
    pub recommendations_data: Vec<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ComprehensiveDashboard {
    pub total_recommendations: usize,
    pub high_impact: usize,
    pub medium_impact: usize,
    pub low_impact: usize,
    pub working_hours: f64,
    pub monthly_investment: f64,
    pub categories_count: usize,
}
