//! Summary statistics

use serde::{Deserialize, Serialize};
use std::fmt;

/// A labelled summary metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistic {
    /// Display label
    pub label: String,
    /// Metric value
    pub value: u64,
}

impl Statistic {
    /// Create a statistic from a count
    pub fn new(label: impl Into<String>, value: usize) -> Self {
        Self {
            label: label.into(),
            value: value as u64,
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}
