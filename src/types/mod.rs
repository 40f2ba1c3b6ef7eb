//! Analysis result records.
//!
//! Each report type produces its own fixed shape; [`AnalysisReport`] is the
//! sum of those shapes. The `dashboard_metrics` field of every variant is a
//! stable contract surface: presentation adapters key on those exact field
//! names, so renaming or removing one is a breaking change.

use serde::Serialize;
use std::collections::BTreeMap;

mod comprehensive;
mod cost;
mod performance;
mod security;

pub use comprehensive::{ComprehensiveDashboard, ComprehensiveReport};
pub use cost::{
    CostBasicMetrics, CostDashboard, CostReport, ResourceCostAnalysis, RoiAnalysis,
    SavingsAnalysis,
};
pub use performance::{
    Bottleneck, PerformanceBasicMetrics, PerformanceDashboard, PerformanceReport,
    PerformanceResourceAnalysis,
};
pub use security::{
    SecurityBasicMetrics, SecurityDashboard, SecurityReport, SecurityResourceAnalysis,
};

/// Result of one analysis invocation. Serializes to the variant's record
/// directly (no enum tag) so each report type keeps its own JSON shape.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalysisReport {
    Security(SecurityReport),
    Performance(PerformanceReport),
    Cost(CostReport),
    Comprehensive(ComprehensiveReport),
}

/// Overall risk derived from the high-impact security action count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
    /// Empty security subset: absence of findings proves nothing.
    Unknown,
}

impl RiskLevel {
    #[must_use]
    pub fn from_high_impact(count: usize) -> Self {
        if count >= 10 {
            Self::Critical
        } else if count >= 5 {
            Self::High
        } else if count >= 1 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Unknown => "Unknown",
        }
    }
}

/// Efficiency band derived from the performance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EfficiencyRating {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl EfficiencyRating {
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            Self::Excellent
        } else if score >= 75 {
            Self::Good
        } else if score >= 60 {
            Self::Fair
        } else {
            Self::NeedsImprovement
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Business-impact distribution with percentage shares of the non-empty
/// impact values.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImpactAnalysis {
    pub impact_distribution: BTreeMap<String, usize>,
    pub impact_percentages: BTreeMap<String, f64>,
}

/// One recommendation row, summarized for priority listings.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationSummary {
    pub recommendation: String,
    pub resource_type: String,
    pub business_impact: String,
    pub category: String,
}
