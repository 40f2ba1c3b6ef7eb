//! The analysis engine: report-type dispatch over the four calculators.
//!
//! Missing *data* degrades silently (absent columns, empty subsets);
//! invalid *configuration* fails fast (an unknown report type is an
//! error, never a silent fallback to comprehensive).

pub mod comprehensive;
pub mod cost;
pub mod filter;
pub mod keywords;
pub mod performance;
pub mod security;

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::config::{ScorePenalties, ScoringPolicy};
use crate::dataset::{col, Dataset};
use crate::error::{AdviLensError, Result};
use crate::types::{AnalysisReport, ImpactAnalysis};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportType {
    Security,
    Performance,
    Cost,
    Comprehensive,
}

impl ReportType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Performance => "performance",
            Self::Cost => "cost",
            Self::Comprehensive => "comprehensive",
        }
    }
}

impl FromStr for ReportType {
    type Err = AdviLensError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "security" => Ok(Self::Security),
            "performance" => Ok(Self::Performance),
            "cost" => Ok(Self::Cost),
            "comprehensive" => Ok(Self::Comprehensive),
            other => Err(AdviLensError::UnsupportedReportType(other.to_string())),
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs the calculator for `report_type` over the dataset.
#[must_use]
pub fn analyze(report_type: ReportType, dataset: &Dataset, policy: &ScoringPolicy) -> AnalysisReport {
    let report = match report_type {
        ReportType::Security => AnalysisReport::Security(security::analyze(dataset, policy)),
        ReportType::Performance => {
            AnalysisReport::Performance(performance::analyze(dataset, policy))
        }
        ReportType::Cost => AnalysisReport::Cost(cost::analyze(dataset, policy)),
        ReportType::Comprehensive => {
            AnalysisReport::Comprehensive(comprehensive::analyze(dataset))
        }
    };
    info!(
        "{report_type} analysis complete over {} rows",
        dataset.len()
    );
    report
}

/// String-keyed entry point.
///
/// # Errors
///
/// Returns `UnsupportedReportType` for anything outside the four known
/// selectors. This is the one loud failure in the engine.
pub fn analyze_named(name: &str, dataset: &Dataset, policy: &ScoringPolicy) -> Result<AnalysisReport> {
    let report_type: ReportType = name.parse()?;
    Ok(analyze(report_type, dataset, policy))
}

/// `score = clamp(100 - per_action*total - per_high*high, 0, 100)`.
/// Inverse polarity: more findings push the score down.
pub(crate) fn inverse_score(total: usize, high: usize, penalties: &ScorePenalties) -> u32 {
    let raw = 100 - penalties.per_action * total as i64 - penalties.per_high * high as i64;
    raw.clamp(0, 100) as u32
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Distribution plus percentage share of the non-empty impact values.
pub(crate) fn impact_analysis(subset: &Dataset) -> ImpactAnalysis {
    let counts = subset.value_counts(col::BUSINESS_IMPACT);
    let total: usize = counts.iter().map(|(_, n)| n).sum();

    let impact_percentages = counts
        .iter()
        .map(|(value, n)| {
            let share = if total == 0 {
                0.0
            } else {
                *n as f64 / total as f64 * 100.0
            };
            (value.clone(), round1(share))
        })
        .collect();

    ImpactAnalysis {
        impact_distribution: counts.into_iter().collect(),
        impact_percentages,
    }
}
