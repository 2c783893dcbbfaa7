//! Pod and observation models shared by the provider and view layers.

pub mod model;

pub use model::{Observation, Pod, PodSchema};
