//! Observation records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One timestamped telemetry record of a pod.
///
/// Every mapping may lack any of the schema's fields. A missing field is not
/// an error: it shows up as an empty cell.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Observation {
    /// Seconds since epoch.
    pub time: i64,
    #[serde(default)]
    pub identifiers: HashMap<String, String>,
    /// `None` for a measurement that is present but has no value (`null`).
    #[serde(default)]
    pub measurements: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub categories: HashMap<String, String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Observation {
    pub fn new(time: i64) -> Self {
        Self {
            time,
            ..Default::default()
        }
    }

    pub fn identifier(&self, name: &str) -> Option<&str> {
        self.identifiers.get(name).map(String::as_str)
    }

    /// Flattens "missing" and "null" into `None`.
    pub fn measurement(&self, name: &str) -> Option<f64> {
        self.measurements.get(name).copied().flatten()
    }

    pub fn category(&self, name: &str) -> Option<&str> {
        self.categories.get(name).map(String::as_str)
    }

    pub fn with_identifier(mut self, name: &str, value: &str) -> Self {
        self.identifiers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_measurement(mut self, name: &str, value: f64) -> Self {
        self.measurements.insert(name.to_string(), Some(value));
        self
    }

    pub fn with_category(mut self, name: &str, value: &str) -> Self {
        self.categories.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }
}
