//! Category filtering.
//!
//! Matching is case-insensitive substring over the `Category` column. The
//! performance report type deliberately merges Performance and Reliability
//! rows: both feed the same optimization class. A dataset without a
//! `Category` column is returned whole — missing data degrades, it does
//! not error — which means a typed analysis over a categoryless export
//! analyzes every row.

use crate::dataset::{col, Dataset};

pub const SECURITY_PATTERNS: &[&str] = &["security"];
pub const PERFORMANCE_PATTERNS: &[&str] = &["performance", "reliability"];
pub const COST_PATTERNS: &[&str] = &["cost"];

/// Rows whose category matches any pattern, as a copied subset.
#[must_use]
pub fn filter_by_category(dataset: &Dataset, patterns: &[&str]) -> Dataset {
    if !dataset.has_column(col::CATEGORY) {
        return dataset.clone();
    }
    let indices: Vec<usize> = dataset
        .rows()
        .enumerate()
        .filter(|(_, row)| {
            let category = row.category().to_lowercase();
            patterns.iter().any(|p| category.contains(p))
        })
        .map(|(i, _)| i)
        .collect();
    dataset.select(&indices)
}
