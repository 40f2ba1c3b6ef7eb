//! Policy constants for the analysis engine.
//!
//! Every scoring formula in the calculators is driven by the weights in
//! [`ScoringPolicy`]. These encode business policy, not math: the defaults
//! are the documented heuristics, and an `advilens.toml` file can override
//! any subset of them.

use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "advilens.toml";

/// Per-impact-level weights (High / Medium / Low).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ImpactWeights {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl ImpactWeights {
    #[must_use]
    pub const fn new(high: f64, medium: f64, low: f64) -> Self {
        Self { high, medium, low }
    }

    /// Weighted sum over an impact tri-split.
    #[must_use]
    pub fn apply(&self, high: usize, medium: usize, low: usize) -> f64 {
        self.high * high as f64 + self.medium * medium as f64 + self.low * low as f64
    }
}

/// Inverse-score penalties: `score = clamp(100 - per_action*n - per_high*h, 0, 100)`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScorePenalties {
    pub per_action: i64,
    pub per_high: i64,
}

/// Fixed split of projected monthly savings. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SavingsSplit {
    pub immediate: f64,
    pub short_term: f64,
    pub long_term: f64,
}

/// Flat monthly cost estimates per resource-type family (USD).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ResourceCostRates {
    pub virtual_machine: f64,
    pub storage: f64,
    pub fallback: f64,
}

/// The complete scoring policy consumed by the calculators.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    /// Implementation effort per security action (hours).
    pub security_hours: ImpactWeights,
    /// Implementation effort per performance action (hours).
    pub performance_hours: ImpactWeights,
    /// Implementation effort per cost action (hours).
    pub cost_hours: ImpactWeights,
    /// Projected performance improvement per action (percent, capped at 100).
    pub performance_improvement: ImpactWeights,
    /// Projected monthly savings per cost action (USD).
    pub monthly_savings: ImpactWeights,
    pub security_score: ScorePenalties,
    pub performance_score: ScorePenalties,
    pub cost_score: ScorePenalties,
    pub savings_split: SavingsSplit,
    /// Assumed implementation labor rate (USD/hour).
    pub hourly_rate: f64,
    /// Security score deduction per row with any empty field.
    pub data_quality_penalty: i64,
    /// Dashboard compliance-coverage deduction per security action.
    pub compliance_coverage_penalty: i64,
    pub resource_cost: ResourceCostRates,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            security_hours: ImpactWeights::new(2.0, 1.0, 0.5),
            performance_hours: ImpactWeights::new(3.0, 1.5, 0.75),
            cost_hours: ImpactWeights::new(1.0, 0.5, 0.25),
            performance_improvement: ImpactWeights::new(25.0, 15.0, 5.0),
            monthly_savings: ImpactWeights::new(1500.0, 500.0, 150.0),
            security_score: ScorePenalties {
                per_action: 2,
                per_high: 5,
            },
            performance_score: ScorePenalties {
                per_action: 3,
                per_high: 8,
            },
            cost_score: ScorePenalties {
                per_action: 4,
                per_high: 10,
            },
            savings_split: SavingsSplit {
                immediate: 0.3,
                short_term: 0.5,
                long_term: 0.2,
            },
            hourly_rate: 100.0,
            data_quality_penalty: 10,
            compliance_coverage_penalty: 3,
            resource_cost: ResourceCostRates {
                virtual_machine: 200.0,
                storage: 50.0,
                fallback: 100.0,
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub policy: ScoringPolicy,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| crate::error::AdviLensError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let config: Config = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Loads `advilens.toml` from the working directory if present,
    /// otherwise falls back to the default policy.
    ///
    /// # Errors
    ///
    /// Returns an error only when a config file exists but is invalid.
    pub fn load_or_default() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
