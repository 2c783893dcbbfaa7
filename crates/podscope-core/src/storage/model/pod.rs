//! Pod record and the schema derived from it.

use serde::{Deserialize, Serialize};

/// Pod record as delivered by the data source.
///
/// Any of the field lists may be missing from the source document;
/// a missing list is the same as an empty one.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Pod {
    /// Display name of the pod (headers and logs only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub identifiers: Vec<String>,
    #[serde(default)]
    pub measurements: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Pod {
    /// Extracts the column-relevant part of the pod.
    pub fn schema(&self) -> PodSchema {
        PodSchema {
            identifiers: self.identifiers.clone(),
            measurements: self.measurements.clone(),
            categories: self.categories.clone(),
        }
    }
}

/// Ordered field names of a pod, grouped by field class.
///
/// Field names are dot-namespaced (`"engine.temp"`). Order inside each class
/// is significant: it is the column order of the grid.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct PodSchema {
    #[serde(default)]
    pub identifiers: Vec<String>,
    #[serde(default)]
    pub measurements: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl PodSchema {
    pub fn new(
        identifiers: Vec<String>,
        measurements: Vec<String>,
        categories: Vec<String>,
    ) -> Self {
        Self {
            identifiers,
            measurements,
            categories,
        }
    }

    /// Number of grid columns this schema produces (time + fields + tags).
    pub fn column_count(&self) -> usize {
        1 + self.field_count() + 1
    }

    /// Number of named fields across all three classes.
    pub fn field_count(&self) -> usize {
        self.identifiers.len() + self.measurements.len() + self.categories.len()
    }
}

impl From<&Pod> for PodSchema {
    fn from(pod: &Pod) -> Self {
        pod.schema()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_lists_default_to_empty() {
        let pod: Pod = serde_json::from_str(r#"{"measurements": ["engine.temp"]}"#).unwrap();
        assert!(pod.identifiers.is_empty());
        assert!(pod.categories.is_empty());
        assert_eq!(pod.schema().column_count(), 3);
    }

    #[test]
    fn schema_keeps_field_order() {
        let pod = Pod {
            name: Some("rig-7".to_string()),
            identifiers: vec!["site".into(), "host".into()],
            measurements: vec!["b".into(), "a".into()],
            categories: vec!["mode".into()],
        };
        let schema = PodSchema::from(&pod);
        assert_eq!(schema.identifiers, vec!["site", "host"]);
        assert_eq!(schema.measurements, vec!["b", "a"]);
        assert_eq!(schema.field_count(), 5);
        assert_eq!(schema.column_count(), 7);
    }
}
