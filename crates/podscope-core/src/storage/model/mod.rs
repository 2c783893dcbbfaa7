//! Data model for pods and their observations.
//!
//! These structures describe what the data source delivers. They are
//! deserialized from pod documents and never mutated by the grid layer.

mod observation;
mod pod;

pub use observation::Observation;
pub use pod::{Pod, PodSchema};
