use serde::Serialize;
use std::collections::BTreeMap;

use super::EfficiencyRating;

/// Full performance analysis. Inverse polarity like security, but the
/// empty subset scores 100: nothing flagged means nothing left to tune.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReport {
    pub basic_metrics: PerformanceBasicMetrics,
    pub optimization_opportunities: BTreeMap<String, usize>,
    pub resource_analysis: PerformanceResourceAnalysis,
    pub bottleneck_analysis: Vec<Bottleneck>,
    pub performance_score: u32,
    pub dashboard_metrics: PerformanceDashboard,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PerformanceBasicMetrics {
    pub total_performance_actions: usize,
    pub high_impact_optimizations: usize,
    pub medium_impact_optimizations: usize,
    pub low_impact_optimizations: usize,
    pub estimated_performance_improvement: u32,
    pub estimated_working_hours: f64,
    pub unique_resources_affected: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceResourceAnalysis {
    pub resource_counts: BTreeMap<String, usize>,
    pub most_affected_resource: String,
    pub performance_critical_resources: usize,
}

impl Default for PerformanceResourceAnalysis {
    fn default() -> Self {
        Self {
            resource_counts: BTreeMap::new(),
            most_affected_resource: "N/A".to_string(),
            performance_critical_resources: 0,
        }
    }
}

/// One high-impact row. The improvement estimate is a fixed annotation,
/// not computed per row.
#[derive(Debug, Clone, Serialize)]
pub struct Bottleneck {
    pub resource_type: String,
    pub recommendation: String,
    pub business_impact: String,
    pub estimated_improvement: String,
}

/// At-a-glance subset consumed by dashboards. Field names are contractual.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceDashboard {
    pub total_actions: usize,
    pub critical_optimizations: usize,
    pub working_hours: f64,
    pub performance_score: u32,
    pub optimization_potential: u32,
    pub efficiency_rating: EfficiencyRating,
}
