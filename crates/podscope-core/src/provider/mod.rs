//! Provider abstraction for pod data sources.
//!
//! This module defines the `PodSource` trait that lets frontends load a pod
//! and its observations without knowing where they come from.

mod file;
mod memory;

pub use file::FileSource;
pub use memory::MemorySource;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::storage::model::{Observation, Pod, PodSchema};

/// Error types that can occur while loading pod data.
#[derive(Debug, Clone)]
pub enum ProviderError {
    /// I/O error while reading data.
    Io(String),
    /// Error parsing the pod document.
    Parse(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::Io(msg) => write!(f, "I/O error: {}", msg),
            ProviderError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

/// A pod together with its observations, oldest first.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct PodDocument {
    #[serde(default)]
    pub pod: Pod,
    #[serde(default)]
    pub observations: Vec<Observation>,
}

impl PodDocument {
    /// Splits the document into the shared pieces a `ViewState` is built from.
    pub fn into_parts(self) -> (Arc<PodSchema>, Arc<[Observation]>) {
        (Arc::new(self.pod.schema()), self.observations.into())
    }

    /// Restores oldest-first order. Returns `true` if the input was out of order.
    ///
    /// The sort is stable, so observations sharing a timestamp keep their
    /// relative order.
    pub fn sort_observations(&mut self) -> bool {
        let sorted = self.observations.windows(2).all(|w| w[0].time <= w[1].time);
        if !sorted {
            self.observations.sort_by_key(|o| o.time);
        }
        !sorted
    }
}

/// Abstraction for pod data sources.
///
/// The trait is object-safe and designed to be used with `Box<dyn PodSource>`.
pub trait PodSource {
    /// Loads the pod and all of its observations.
    ///
    /// Implementations return observations sorted oldest first.
    fn load(&mut self) -> Result<PodDocument, ProviderError>;

    /// Short human-readable description of the source, for logs.
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_observations_is_stable() {
        let mut doc = PodDocument {
            pod: Pod::default(),
            observations: vec![
                Observation::new(30),
                Observation::new(10).with_tags(&["first"]),
                Observation::new(10).with_tags(&["second"]),
            ],
        };
        assert!(doc.sort_observations());
        let order: Vec<(i64, Vec<String>)> = doc
            .observations
            .iter()
            .map(|o| (o.time, o.tags.clone()))
            .collect();
        assert_eq!(
            order,
            vec![
                (10, vec!["first".to_string()]),
                (10, vec!["second".to_string()]),
                (30, vec![]),
            ]
        );
        assert!(!doc.sort_observations());
    }

    #[test]
    fn into_parts_keeps_schema_and_rows() {
        let doc = PodDocument {
            pod: Pod {
                name: None,
                identifiers: vec!["site".into()],
                measurements: vec![],
                categories: vec![],
            },
            observations: vec![Observation::new(1), Observation::new(2)],
        };
        let (schema, observations) = doc.into_parts();
        assert_eq!(schema.identifiers, vec!["site"]);
        assert_eq!(observations.len(), 2);
    }
}
