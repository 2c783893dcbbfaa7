//! JSON pod document on disk.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{PodDocument, PodSource, ProviderError};

/// Reads a pod document from a JSON file on every `load`.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PodSource for FileSource {
    fn load(&mut self) -> Result<PodDocument, ProviderError> {
        let data = std::fs::read(&self.path).map_err(|e| {
            ProviderError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        let mut doc: PodDocument = serde_json::from_slice(&data).map_err(|e| {
            ProviderError::Parse(format!("Invalid pod document {}: {}", self.path.display(), e))
        })?;

        if doc.sort_observations() {
            warn!(
                path = %self.path.display(),
                "observations were not sorted by time, reordered"
            );
        }
        debug!(
            path = %self.path.display(),
            pod = doc.pod.name.as_deref().unwrap_or("-"),
            observations = doc.observations.len(),
            "pod document loaded"
        );
        Ok(doc)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
