// tests/unit_sources.rs
use advilens_core::dataset::source::{
    load_first, CachedRowsSource, CsvFileSource, RowSource, SyntheticSource,
};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn cached(records: &[(&str, &str)]) -> CachedRowsSource {
    let records = records
        .iter()
        .map(|(category, impact)| {
            let mut record = BTreeMap::new();
            record.insert("Category".to_string(), category.to_string());
            record.insert("Business Impact".to_string(), impact.to_string());
            record
        })
        .collect();
    CachedRowsSource::new(records)
}

#[test]
fn test_csv_file_source_reads_export() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("advisor.csv");
    let mut file = File::create(&path).unwrap();
    write!(file, "Category,Business Impact\nSecurity,High\n").unwrap();

    let source = CsvFileSource::new(path);
    let dataset = source.load().expect("readable file loads");
    assert_eq!(dataset.len(), 1);
}

#[test]
fn test_missing_file_declines_instead_of_erroring() {
    let source = CsvFileSource::new(PathBuf::from("/nonexistent/advisor.csv"));
    assert!(source.load().is_none());
}

#[test]
fn test_chain_falls_through_to_cached_rows() {
    let file = CsvFileSource::new(PathBuf::from("/nonexistent/advisor.csv"));
    let cached = cached(&[("Security", "High"), ("Cost", "Low")]);

    let dataset = load_first(&[&file, &cached]);
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.value(0, "Category"), Some("Security"));
}

#[test]
fn test_empty_cache_falls_through_to_synthetic() {
    let empty_cache = CachedRowsSource::new(Vec::new());
    let mut counts = BTreeMap::new();
    counts.insert("Security".to_string(), 3usize);
    let synthetic = SyntheticSource::new(counts);

    let dataset = load_first(&[&empty_cache, &synthetic]);
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.value(0, "Category"), Some("Security"));
    assert_eq!(dataset.value(0, "Business Impact"), Some("High"));
}

#[test]
fn test_synthetic_rows_are_capped() {
    let mut counts = BTreeMap::new();
    counts.insert("Security".to_string(), 400usize);
    let synthetic = SyntheticSource::new(counts);

    let dataset = synthetic.load().unwrap();
    assert_eq!(dataset.len(), 100);
}

#[test]
fn test_exhausted_chain_yields_empty_sentinel() {
    let file = CsvFileSource::new(PathBuf::from("/nonexistent/advisor.csv"));
    let empty_cache = CachedRowsSource::new(Vec::new());
    let no_counts = SyntheticSource::new(BTreeMap::new());

    let dataset = load_first(&[&file, &empty_cache, &no_counts]);
    assert!(dataset.is_empty(), "exhaustion is an empty table, not an error");
}
