//! View state: the published `{columns, resolver}` pair.
//!
//! A [`ViewState`] is never mutated after it is handed out. Resize, refresh
//! and rebuild all return a new value; the hosting surface replaces its copy
//! wholesale (last write wins).

use std::sync::Arc;

use tracing::debug;

use crate::config::GridConfig;
use crate::storage::{Observation, PodSchema};

use super::columns::{Column, ColumnKey, build_columns};
use super::resolver::{CellDescriptor, CellResolver, GridCoordinate};
use super::ViewError;

#[derive(Debug, Clone, Default)]
pub enum ViewState {
    /// No schema or no observations yet; nothing to render.
    #[default]
    Unbuilt,
    Built {
        columns: Arc<[Column]>,
        resolver: CellResolver,
    },
}

impl ViewState {
    /// Builds columns and binds a resolver.
    ///
    /// Returns [`ViewState::Unbuilt`] when there are no observations.
    pub fn build(
        schema: Arc<PodSchema>,
        observations: Arc<[Observation]>,
        viewport_width: Option<f64>,
        config: &GridConfig,
    ) -> Self {
        if observations.is_empty() {
            debug!("no observations, grid not built");
            return Self::Unbuilt;
        }

        let width = config.viewport_width(viewport_width);
        let columns: Arc<[Column]> = build_columns(&schema, width, config).into();
        debug!(
            columns = columns.len(),
            rows = observations.len(),
            width,
            "column layout built"
        );
        let resolver = CellResolver::new(schema, observations);
        Self::Built { columns, resolver }
    }

    /// Applies a data refresh.
    ///
    /// With an unchanged schema the current column widths (including user
    /// resizes) are kept and only the resolver is rebound. Otherwise the
    /// layout is rebuilt from scratch.
    pub fn refresh(
        &self,
        schema: Arc<PodSchema>,
        observations: Arc<[Observation]>,
        viewport_width: Option<f64>,
        config: &GridConfig,
    ) -> Self {
        match self {
            Self::Built { columns, resolver }
                if !observations.is_empty() && *resolver.schema() == *schema =>
            {
                if resolver.is_bound_to(&observations) {
                    return self.clone();
                }
                debug!(rows = observations.len(), "observations refreshed");
                Self::Built {
                    columns: Arc::clone(columns),
                    resolver: CellResolver::new(schema, observations),
                }
            }
            _ => Self::build(schema, observations, viewport_width, config),
        }
    }

    /// Returns a new state where only the column matching `key` has `width`.
    ///
    /// Columns are matched by `(title, group)`; with duplicates the first one
    /// in column order wins.
    pub fn resize(&self, key: &ColumnKey, width: f64) -> Result<Self, ViewError> {
        let Self::Built { columns, resolver } = self else {
            return Err(ViewError::NotBuilt);
        };
        if !width.is_finite() || width <= 0.0 {
            return Err(ViewError::InvalidWidth(width));
        }
        let idx = columns
            .iter()
            .position(|c| c.matches(key))
            .ok_or_else(|| ViewError::UnknownColumn(key.clone()))?;

        let mut resized = columns.to_vec();
        resized[idx].width = width;
        Ok(Self::Built {
            columns: resized.into(),
            resolver: resolver.clone(),
        })
    }

    pub fn is_built(&self) -> bool {
        matches!(self, Self::Built { .. })
    }

    /// Empty when unbuilt.
    pub fn columns(&self) -> &[Column] {
        match self {
            Self::Built { columns, .. } => columns.as_ref(),
            Self::Unbuilt => &[],
        }
    }

    pub fn resolver(&self) -> Option<&CellResolver> {
        match self {
            Self::Built { resolver, .. } => Some(resolver),
            Self::Unbuilt => None,
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns().len()
    }

    pub fn row_count(&self) -> usize {
        self.resolver().map_or(0, CellResolver::row_count)
    }

    /// Total width of all columns in pixels.
    pub fn total_width(&self) -> f64 {
        self.columns().iter().map(|c| c.width).sum()
    }

    /// Resolves a cell; placeholder when unbuilt.
    pub fn resolve(&self, coord: GridCoordinate) -> CellDescriptor {
        match self.resolver() {
            Some(resolver) => resolver.resolve(coord),
            None => CellDescriptor::placeholder(),
        }
    }
}
