//! Keyword-based classification of recommendation text.
//!
//! Each calculator owns an ordered table of (label, keyword-set) rules; one
//! generic matcher counts, per rule, the rows whose `Recommendation` text
//! contains any of the keywords (case-insensitive). Groups are
//! non-exclusive: a row may count toward several labels.

use crate::dataset::{col, Dataset};
use std::collections::BTreeMap;

pub struct KeywordRule {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

/// Compliance-gap patterns for the security report.
pub const COMPLIANCE_RULES: &[KeywordRule] = &[
    KeywordRule {
        label: "encryption_gaps",
        keywords: &["encrypt"],
    },
    KeywordRule {
        label: "access_control_issues",
        keywords: &["access", "permission", "identity"],
    },
    KeywordRule {
        label: "update_patches_needed",
        keywords: &["update", "patch", "version"],
    },
    KeywordRule {
        label: "monitoring_gaps",
        keywords: &["log", "monitor", "diagnostic"],
    },
    KeywordRule {
        label: "network_security_issues",
        keywords: &["network", "firewall", "tls", "ssl"],
    },
];

/// Optimization-opportunity patterns for the performance report.
pub const OPTIMIZATION_RULES: &[KeywordRule] = &[
    KeywordRule {
        label: "compute_optimization",
        keywords: &["virtual machine", "vm", "compute"],
    },
    KeywordRule {
        label: "storage_optimization",
        keywords: &["storage", "disk", "ssd"],
    },
    KeywordRule {
        label: "network_optimization",
        keywords: &["network", "bandwidth", "latency"],
    },
    KeywordRule {
        label: "scaling_opportunities",
        keywords: &["scale", "autoscale", "resize"],
    },
    KeywordRule {
        label: "caching_opportunities",
        keywords: &["cache", "cdn"],
    },
];

/// Savings-opportunity patterns for the cost report.
pub const COST_OPPORTUNITY_RULES: &[KeywordRule] = &[
    KeywordRule {
        label: "rightsizing_opportunities",
        keywords: &["resize", "right-size", "right size", "rightsize", "underutilized"],
    },
    KeywordRule {
        label: "reserved_instance_opportunities",
        keywords: &["reserved", "reservation"],
    },
    KeywordRule {
        label: "storage_optimization",
        keywords: &["storage", "blob", "disk"],
    },
    KeywordRule {
        label: "compute_optimization",
        keywords: &["virtual machine", "vm", "compute"],
    },
    KeywordRule {
        label: "unused_resources",
        keywords: &["unused", "idle", "delete"],
    },
];

/// Per-rule row counts over the dataset's recommendation text.
#[must_use]
pub fn count_rule_matches(dataset: &Dataset, rules: &[KeywordRule]) -> BTreeMap<String, usize> {
    let texts: Vec<String> = dataset
        .rows()
        .map(|row| row.get_or_default(col::RECOMMENDATION).to_lowercase())
        .collect();

    rules
        .iter()
        .map(|rule| {
            let count = texts
                .iter()
                .filter(|text| rule.keywords.iter().any(|k| text.contains(k)))
                .count();
            (rule.label.to_string(), count)
        })
        .collect()
}
