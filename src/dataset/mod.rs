//! Normalized row/column table for Advisor recommendation exports.
//!
//! A [`Dataset`] is the only input the calculators see. Headers are trimmed
//! and BOM-stripped, lookup is case-insensitive, and a missing column is
//! never an error: accessors return defaults and the calculators degrade to
//! their documented zeroed metrics.

pub mod source;

use regex::Regex;
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

/// Well-known Advisor export column names.
pub mod col {
    pub const CATEGORY: &str = "Category";
    pub const BUSINESS_IMPACT: &str = "Business Impact";
    pub const RECOMMENDATION: &str = "Recommendation";
    pub const RESOURCE_TYPE: &str = "Resource Type";
    pub const WORKING_HOURS: &str = "Working Hours";
    pub const MONTHLY_INVESTMENT: &str = "Monthly Investment";
}

static NON_NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9.\-]").unwrap());

/// Row-oriented table with case-insensitive column lookup.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Builds a dataset from raw headers and rows. Headers are trimmed and
    /// BOM-stripped; rows are padded or truncated to the header width.
    #[must_use]
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let columns: Vec<String> = columns
            .into_iter()
            .map(|c| c.trim_start_matches('\u{feff}').trim().to_string())
            .collect();
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut r| {
                r.resize(width, String::new());
                r
            })
            .collect();
        Self { columns, rows }
    }

    /// The empty sentinel every exhausted source falls back to.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a CSV document. Ragged rows are tolerated.
    ///
    /// # Errors
    ///
    /// Returns an error when the content is not parseable as CSV at all.
    pub fn from_csv_bytes(bytes: &[u8]) -> crate::error::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(bytes);
        let columns: Vec<String> = reader
            .headers()?
            .iter()
            .map(std::string::ToString::to_string)
            .collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(std::string::ToString::to_string).collect());
        }
        Ok(Self::new(columns, rows))
    }

    /// Builds a dataset from key/value records. Columns are the union of
    /// keys, in order of first appearance.
    #[must_use]
    pub fn from_records(records: &[BTreeMap<String, String>]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in records {
            for key in record.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|c| record.get(c).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();
        Self::new(columns, rows)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name.trim()))
    }

    /// Cell value, or `None` when the column does not exist.
    #[must_use]
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> + '_ {
        (0..self.len()).map(move |index| RowView {
            dataset: self,
            index,
        })
    }

    #[must_use]
    pub fn row(&self, index: usize) -> RowView<'_> {
        RowView {
            dataset: self,
            index,
        }
    }

    /// Copies the given rows into a new dataset with the same columns.
    #[must_use]
    pub fn select(&self, indices: &[usize]) -> Self {
        let rows = indices
            .iter()
            .filter_map(|&i| self.rows.get(i).cloned())
            .collect();
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// All rows as key/value records, for the comprehensive report payload.
    #[must_use]
    pub fn to_records(&self) -> Vec<BTreeMap<String, String>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }

    /// Count of distinct non-empty values in a column.
    #[must_use]
    pub fn distinct_count(&self, column: &str) -> usize {
        let Some(idx) = self.column_index(column) else {
            return 0;
        };
        let mut seen: HashSet<&str> = HashSet::new();
        for row in &self.rows {
            if let Some(v) = row.get(idx) {
                let v = v.trim();
                if !v.is_empty() {
                    seen.insert(v);
                }
            }
        }
        seen.len()
    }

    /// Occurrence counts of non-empty values in a column, ordered by count
    /// descending then first appearance.
    #[must_use]
    pub fn value_counts(&self, column: &str) -> Vec<(String, usize)> {
        let Some(idx) = self.column_index(column) else {
            return Vec::new();
        };
        let mut order: Vec<String> = Vec::new();
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for row in &self.rows {
            let Some(v) = row.get(idx) else { continue };
            let v = v.trim();
            if v.is_empty() {
                continue;
            }
            if !counts.contains_key(v) {
                order.push(v.to_string());
            }
            *counts.entry(v.to_string()).or_insert(0) += 1;
        }
        let mut out: Vec<(String, usize)> = order
            .into_iter()
            .map(|v| {
                let n = counts[&v];
                (v, n)
            })
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }

    /// Sum of a numeric-as-string column after currency cleanup.
    #[must_use]
    pub fn numeric_sum(&self, column: &str) -> f64 {
        let Some(idx) = self.column_index(column) else {
            return 0.0;
        };
        self.rows
            .iter()
            .filter_map(|row| row.get(idx))
            .map(|v| parse_money(v))
            .sum()
    }

    /// Rows with at least one empty field, for the data-quality metric.
    #[must_use]
    pub fn incomplete_row_count(&self) -> usize {
        self.rows().filter(RowView::has_empty_field).count()
    }
}

/// Borrowed view of a single recommendation row.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    dataset: &'a Dataset,
    index: usize,
}

impl<'a> RowView<'a> {
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.dataset.value(self.index, column)
    }

    /// Cell value with the documented empty-string default.
    #[must_use]
    pub fn get_or_default(&self, column: &str) -> &'a str {
        self.get(column).unwrap_or("")
    }

    #[must_use]
    pub fn category(&self) -> &'a str {
        self.get_or_default(col::CATEGORY)
    }

    #[must_use]
    pub fn business_impact(&self) -> &'a str {
        self.get_or_default(col::BUSINESS_IMPACT)
    }

    #[must_use]
    pub fn recommendation(&self) -> &'a str {
        self.get_or_default(col::RECOMMENDATION)
    }

    #[must_use]
    pub fn resource_type(&self) -> &'a str {
        self.get_or_default(col::RESOURCE_TYPE)
    }

    #[must_use]
    pub fn has_empty_field(&self) -> bool {
        self.dataset
            .columns
            .iter()
            .any(|c| self.get(c).map_or(true, |v| v.trim().is_empty()))
    }
}

/// Impact tri-split over a dataset, counted by exact match on the
/// `Business Impact` column. Unrecognized or missing values count nowhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImpactCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl ImpactCounts {
    #[must_use]
    pub fn tally(dataset: &Dataset) -> Self {
        let mut counts = Self::default();
        for row in dataset.rows() {
            match row.business_impact() {
                "High" => counts.high += 1,
                "Medium" => counts.medium += 1,
                "Low" => counts.low += 1,
                _ => {}
            }
        }
        counts
    }
}

/// Coerces a currency-formatted string to a number. Strips symbols and
/// thousands separators; anything unparseable coerces to 0.0.
#[must_use]
pub fn parse_money(raw: &str) -> f64 {
    let cleaned = NON_NUMERIC.replace_all(raw.trim(), "");
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Hex SHA-256 digest of the raw source bytes, recorded in report metadata.
#[must_use]
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
