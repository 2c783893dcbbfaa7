//! Grid sizing configuration.

/// Time column width in pixels.
pub const TIME_COLUMN_WIDTH: f64 = 170.0;
/// Horizontal space reserved for the row gutter and scrollbar.
pub const FIXED_MARGIN: f64 = 40.0;
/// Lower bound for evenly distributed column widths.
pub const MIN_COLUMN_WIDTH: f64 = 60.0;
/// Viewport width used when the layout collaborator does not report one.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1200.0;
/// Row height in pixels.
pub const ROW_HEIGHT: f64 = 34.0;

/// Sizing knobs for column layout and viewport math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub time_column_width: f64,
    pub fixed_margin: f64,
    pub min_column_width: f64,
    pub default_viewport_width: f64,
    pub row_height: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            time_column_width: TIME_COLUMN_WIDTH,
            fixed_margin: FIXED_MARGIN,
            min_column_width: MIN_COLUMN_WIDTH,
            default_viewport_width: DEFAULT_VIEWPORT_WIDTH,
            row_height: ROW_HEIGHT,
        }
    }
}

impl GridConfig {
    /// Resolves an optional viewport width reported by the layout collaborator.
    pub fn viewport_width(&self, reported: Option<f64>) -> f64 {
        match reported {
            Some(w) if w.is_finite() && w > 0.0 => w,
            _ => self.default_viewport_width,
        }
    }

    /// Time column width, kept positive: non-finite falls back to
    /// [`TIME_COLUMN_WIDTH`], anything narrower is raised to `min_column_width`.
    pub fn time_width(&self) -> f64 {
        if self.time_column_width.is_finite() {
            self.time_column_width.max(self.min_column_width)
        } else {
            TIME_COLUMN_WIDTH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_width_falls_back_to_default() {
        let config = GridConfig::default();
        assert_eq!(config.viewport_width(None), DEFAULT_VIEWPORT_WIDTH);
        assert_eq!(config.viewport_width(Some(-5.0)), DEFAULT_VIEWPORT_WIDTH);
        assert_eq!(config.viewport_width(Some(f64::NAN)), DEFAULT_VIEWPORT_WIDTH);
        assert_eq!(config.viewport_width(Some(800.0)), 800.0);
    }

    #[test]
    fn time_width_stays_positive() {
        let with = |w: f64| GridConfig {
            time_column_width: w,
            ..GridConfig::default()
        };
        assert_eq!(with(200.0).time_width(), 200.0);
        assert_eq!(with(-10.0).time_width(), MIN_COLUMN_WIDTH);
        assert_eq!(with(0.0).time_width(), MIN_COLUMN_WIDTH);
        assert_eq!(with(f64::NAN).time_width(), TIME_COLUMN_WIDTH);
        assert_eq!(with(f64::INFINITY).time_width(), TIME_COLUMN_WIDTH);
    }
}
