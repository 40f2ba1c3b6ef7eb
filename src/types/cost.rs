use serde::Serialize;
use std::collections::BTreeMap;

/// Full cost analysis. Savings figures are flat per-row projections, an
/// estimation model rather than a sum of billed costs.
#[derive(Debug, Clone, Serialize)]
pub struct CostReport {
    pub basic_metrics: CostBasicMetrics,
    pub savings_analysis: SavingsAnalysis,
    pub cost_optimization_opportunities: BTreeMap<String, usize>,
    pub resource_cost_analysis: ResourceCostAnalysis,
    pub roi_analysis: RoiAnalysis,
    pub dashboard_metrics: CostDashboard,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CostBasicMetrics {
    pub total_cost_actions: usize,
    pub high_value_savings: usize,
    pub medium_value_savings: usize,
    pub low_value_savings: usize,
    pub estimated_monthly_savings: f64,
    pub estimated_annual_savings: f64,
    pub estimated_working_hours: f64,
    pub unique_resources_affected: usize,
}

/// Monthly savings split into realization horizons. The three shares sum
/// to the monthly total.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SavingsAnalysis {
    pub immediate_savings: f64,
    pub short_term_savings: f64,
    pub long_term_savings: f64,
    pub total_monthly_potential: f64,
    pub total_annual_potential: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceCostAnalysis {
    pub resource_counts: BTreeMap<String, usize>,
    pub estimated_monthly_costs: BTreeMap<String, f64>,
    pub highest_cost_resource: String,
}

impl Default for ResourceCostAnalysis {
    fn default() -> Self {
        Self {
            resource_counts: BTreeMap::new(),
            estimated_monthly_costs: BTreeMap::new(),
            highest_cost_resource: "N/A".to_string(),
        }
    }
}

/// Payback of 999 months flags a non-empty subset that projects no
/// savings; the canonical empty object reports 0.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoiAnalysis {
    pub implementation_cost: f64,
    pub monthly_savings: f64,
    pub monthly_roi_percentage: f64,
    pub payback_period_months: f64,
    pub three_year_value: f64,
}

/// At-a-glance subset consumed by dashboards. Field names are contractual.
#[derive(Debug, Clone, Serialize)]
pub struct CostDashboard {
    pub total_actions: usize,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub working_hours: f64,
    pub roi_percentage: f64,
    pub payback_months: f64,
    pub optimization_score: u32,
}
