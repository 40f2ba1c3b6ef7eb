use serde::Serialize;
use std::collections::BTreeMap;

use super::{ImpactAnalysis, RecommendationSummary, RiskLevel};

/// Full security analysis. The `security_score` is a remaining-risk
/// inverse score: more findings and worse severities push it toward 0,
/// a clean subset scores high. The canonical empty object carries score 0
/// and risk level `Unknown`.
#[derive(Debug, Clone, Serialize)]
pub struct SecurityReport {
    pub basic_metrics: SecurityBasicMetrics,
    pub impact_analysis: ImpactAnalysis,
    pub resource_analysis: SecurityResourceAnalysis,
    pub priority_recommendations: Vec<RecommendationSummary>,
    pub compliance_gaps: BTreeMap<String, usize>,
    pub security_score: u32,
    pub dashboard_metrics: SecurityDashboard,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SecurityBasicMetrics {
    pub total_security_actions: usize,
    pub high_impact_actions: usize,
    pub medium_impact_actions: usize,
    pub low_impact_actions: usize,
    pub unique_resources_affected: usize,
    pub estimated_working_hours: f64,
    pub critical_vulnerabilities: usize,
    pub data_quality_score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SecurityResourceAnalysis {
    pub resource_counts: BTreeMap<String, usize>,
    pub most_affected_resource: String,
    pub total_resource_types: usize,
}

impl Default for SecurityResourceAnalysis {
    fn default() -> Self {
        Self {
            resource_counts: BTreeMap::new(),
            most_affected_resource: "N/A".to_string(),
            total_resource_types: 0,
        }
    }
}

/// At-a-glance subset consumed by dashboards. Field names are contractual.
#[derive(Debug, Clone, Serialize)]
pub struct SecurityDashboard {
    pub total_actions: usize,
    pub critical_issues: usize,
    pub working_hours: f64,
    pub security_score: u32,
    pub compliance_coverage: u32,
    pub risk_level: RiskLevel,
}
