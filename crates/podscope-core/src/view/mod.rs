//! Grid view layer: column layout, cell resolution, view state.
//!
//! Nothing here renders. A frontend asks [`ViewState`] for columns and
//! resolves only the cells it can show, typically via [`window`].

pub mod columns;
pub mod common;
pub mod resolver;
pub mod state;
pub mod viewport;
mod window;

pub use columns::{Column, ColumnClass, ColumnKey, build_columns};
pub use common::{GridWindow, ViewCell, ViewRow};
pub use resolver::{CellDescriptor, CellKind, CellResolver, GridCoordinate, RawValue, resolve_cell};
pub use state::ViewState;
pub use viewport::{Viewport, col_at_x};
pub use window::window;

/// Errors from view state edits. These indicate a caller bug, not bad data.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewError {
    /// No column matches the `(title, group)` key.
    UnknownColumn(ColumnKey),
    /// Width is not a positive finite number.
    InvalidWidth(f64),
    /// The grid has not been built yet.
    NotBuilt,
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewError::UnknownColumn(key) => write!(f, "unknown column '{}'", key),
            ViewError::InvalidWidth(w) => write!(f, "invalid column width {}", w),
            ViewError::NotBuilt => write!(f, "grid is not built"),
        }
    }
}

impl std::error::Error for ViewError {}
