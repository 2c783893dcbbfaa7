//! In-memory pod document (tests, embedding).

use super::{PodDocument, PodSource, ProviderError};

pub struct MemorySource {
    doc: PodDocument,
}

impl MemorySource {
    pub fn new(mut doc: PodDocument) -> Self {
        doc.sort_observations();
        Self { doc }
    }

    /// Replaces the document returned by the next `load`.
    pub fn replace(&mut self, mut doc: PodDocument) {
        doc.sort_observations();
        self.doc = doc;
    }
}

impl PodSource for MemorySource {
    fn load(&mut self) -> Result<PodDocument, ProviderError> {
        Ok(self.doc.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} observations)", self.doc.observations.len())
    }
}
