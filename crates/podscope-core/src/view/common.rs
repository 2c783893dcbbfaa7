//! UI-agnostic view model types.
//!
//! These types represent presentation data without any dependency on a specific
//! rendering framework. A terminal frontend pads them to character cells, a web
//! frontend would map them to CSS classes.

/// A single grid cell ready for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewCell {
    pub text: String,
    /// Numeric cells are right-aligned by frontends.
    pub numeric: bool,
}

impl ViewCell {
    pub fn plain(text: String) -> Self {
        Self {
            text,
            numeric: false,
        }
    }

    pub fn numeric(text: String) -> Self {
        Self {
            text,
            numeric: true,
        }
    }
}

/// One grid row, parameterized by row ID type.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow<Id> {
    pub id: Id,
    pub cells: Vec<ViewCell>,
}

/// Visible slice of the grid. Row IDs are virtual row indices.
#[derive(Debug, Clone, PartialEq)]
pub struct GridWindow {
    /// Index of the first column in the window.
    pub first_col: usize,
    pub headers: Vec<String>,
    pub groups: Vec<String>,
    pub widths: Vec<f64>,
    pub rows: Vec<ViewRow<usize>>,
}
