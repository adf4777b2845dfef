use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_weight() -> f64 {
    1.0
}

/// One tracked attribute of a device, e.g. screen size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub name: String,

    /// Some aspects affect the final score more than others.
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// The value at which this aspect scores 100% before weighting.
    pub perfection: f64,

    /// CSS selector of the node holding the value.
    pub selector: String,

    /// Regex with exactly one capture group around the number.
    pub pattern: String,
}

impl Aspect {
    pub fn new(name: &str, perfection: f64, selector: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            weight: default_weight(),
            perfection,
            selector: selector.to_string(),
            pattern: pattern.to_string(),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectScore {
    pub name: String,
    pub weight: f64,
    pub value: f64,
    /// value / perfection, never clamped
    pub raw_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub device: String,
    pub aspects: Vec<AspectScore>,
    pub total_weight: f64,
    /// Weighted mean of the raw scores; 1.0 means 100%.
    pub score: f64,
    pub evaluated_at: DateTime<Utc>,
}

/// Running totals for a single scoring pass.
#[derive(Debug, Default)]
pub struct ScoreAccumulator {
    total_raw_score: f64,
    total_weight: f64,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_weight(&mut self, weight: f64) {
        self.total_weight += weight;
    }

    pub fn add_contribution(&mut self, weight: f64, raw_score: f64) {
        self.total_raw_score += weight * raw_score;
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Consumes the accumulator. Returns `(score, total_weight)`.
    pub fn finish(self) -> (f64, f64) {
        (self.total_raw_score / self.total_weight, self.total_weight)
    }
}
