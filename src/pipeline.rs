//! End-to-end report generation: dataset access, analysis dispatch, and
//! the metadata envelope the surrounding application persists.

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::analysis::{self, ReportType};
use crate::config::ScoringPolicy;
use crate::dataset::source::{load_first, RowSource};
use crate::dataset::{self, Dataset};
use crate::error::{AdviLensError, Result};
use crate::types::AnalysisReport;

#[derive(Debug, Clone, Serialize)]
pub struct GenerationMetadata {
    pub generated_at: String,
    pub data_source: String,
    pub records_analyzed: usize,
    pub analysis_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_fingerprint: Option<String>,
}

/// One finished analysis plus its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct ReportBundle {
    pub generation_metadata: GenerationMetadata,
    pub analysis: AnalysisReport,
}

impl ReportBundle {
    fn new(
        report_type: ReportType,
        dataset: &Dataset,
        analysis: AnalysisReport,
        fingerprint: Option<String>,
    ) -> Self {
        let data_source = match report_type {
            ReportType::Comprehensive => "Comprehensive Analysis".to_string(),
            other => format!("Specialized {} Analysis", capitalize(other.as_str())),
        };
        Self {
            generation_metadata: GenerationMetadata {
                generated_at: Utc::now().to_rfc3339(),
                data_source,
                records_analyzed: dataset.len(),
                analysis_type: report_type.as_str().to_string(),
                dataset_fingerprint: fingerprint,
            },
            analysis,
        }
    }
}

/// Analyzes a CSV export on disk. Unlike the source-chain entry point this
/// is strict: an unreadable or unparseable file is the caller's error.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed.
pub fn analyze_csv_path(
    path: &Path,
    report_type: ReportType,
    policy: &ScoringPolicy,
) -> Result<ReportBundle> {
    let bytes = fs::read(path).map_err(|source| AdviLensError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let dataset = Dataset::from_csv_bytes(&bytes)?;
    info!(
        "{}: {} rows x {} columns",
        path.display(),
        dataset.len(),
        dataset.columns().len()
    );

    let analysis = analysis::analyze(report_type, &dataset, policy);
    Ok(ReportBundle::new(
        report_type,
        &dataset,
        analysis,
        Some(dataset::fingerprint(&bytes)),
    ))
}

/// Analyzes whatever the source chain yields. Exhausted sources degrade to
/// the empty dataset and the calculator's canonical empty result.
#[must_use]
pub fn analyze_sources(
    sources: &[&dyn RowSource],
    report_type: ReportType,
    policy: &ScoringPolicy,
) -> ReportBundle {
    let dataset = load_first(sources);
    let analysis = analysis::analyze(report_type, &dataset, policy);
    ReportBundle::new(report_type, &dataset, analysis, None)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
