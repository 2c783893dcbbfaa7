//! Coordinate-to-cell resolution for the virtualized grid.
//!
//! The grid never materializes rows. A rendering surface asks for one
//! [`GridCoordinate`] at a time and gets a [`CellDescriptor`] back. Every
//! coordinate resolves; rows past the end and columns past the tags column
//! become empty placeholders.

use std::ops::Range;
use std::sync::Arc;

use crate::fmt::{format_measurement, format_timestamp, join_tags};
use crate::storage::{Observation, PodSchema};

/// Virtual cell address. Row 0 is the most recent observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCoordinate {
    pub col: usize,
    pub row: usize,
}

impl GridCoordinate {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Numeric,
    Text,
}

/// Underlying value of a cell, before formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Absent,
    /// Epoch seconds of the time column.
    Integer(i64),
    Number(f64),
    Text(String),
}

/// What the rendering surface draws for one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellDescriptor {
    pub kind: CellKind,
    pub raw: RawValue,
    pub display: String,
    /// Observations are read-only; always `false`.
    pub editable: bool,
}

impl CellDescriptor {
    /// Empty numeric cell with no value.
    pub fn placeholder() -> Self {
        Self {
            kind: CellKind::Numeric,
            raw: RawValue::Absent,
            display: String::new(),
            editable: false,
        }
    }

    fn text(value: Option<&str>) -> Self {
        match value {
            Some(v) => Self {
                kind: CellKind::Text,
                raw: RawValue::Text(v.to_string()),
                display: v.to_string(),
                editable: false,
            },
            None => Self {
                kind: CellKind::Text,
                raw: RawValue::Text(String::new()),
                display: String::new(),
                editable: false,
            },
        }
    }

    fn number(value: Option<f64>) -> Self {
        match value {
            Some(v) => Self {
                kind: CellKind::Numeric,
                raw: RawValue::Number(v),
                display: format_measurement(v),
                editable: false,
            },
            None => Self::placeholder(),
        }
    }

    fn time(epoch_secs: i64) -> Self {
        Self {
            kind: CellKind::Numeric,
            raw: RawValue::Integer(epoch_secs),
            display: format_timestamp(epoch_secs),
            editable: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }
}

/// Column ranges of the five segments for one schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    identifiers: Range<usize>,
    measurements: Range<usize>,
    categories: Range<usize>,
    tags: usize,
}

/// A column resolved to its segment and the index inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Time,
    Identifier(usize),
    Measurement(usize),
    Category(usize),
    Tags,
}

impl Segments {
    pub fn new(schema: &PodSchema) -> Self {
        let identifiers = 1..1 + schema.identifiers.len();
        let measurements = identifiers.end..identifiers.end + schema.measurements.len();
        let categories = measurements.end..measurements.end + schema.categories.len();
        let tags = categories.end;
        Self {
            identifiers,
            measurements,
            categories,
            tags,
        }
    }

    /// Total column count, tags included.
    pub fn column_count(&self) -> usize {
        self.tags + 1
    }

    /// `None` for columns past the tags column.
    pub fn locate(&self, col: usize) -> Option<Segment> {
        if col == 0 {
            Some(Segment::Time)
        } else if self.identifiers.contains(&col) {
            Some(Segment::Identifier(col - self.identifiers.start))
        } else if self.measurements.contains(&col) {
            Some(Segment::Measurement(col - self.measurements.start))
        } else if self.categories.contains(&col) {
            Some(Segment::Category(col - self.categories.start))
        } else if col == self.tags {
            Some(Segment::Tags)
        } else {
            None
        }
    }
}

/// Resolves a single cell against `observations` (oldest first).
///
/// Stateless variant of [`CellResolver::resolve`] for callers that do not keep
/// a bound resolver around.
pub fn resolve_cell(
    coord: GridCoordinate,
    observations: &[Observation],
    schema: &PodSchema,
) -> CellDescriptor {
    resolve_with(coord, observations, schema, &Segments::new(schema))
}

fn resolve_with(
    coord: GridCoordinate,
    observations: &[Observation],
    schema: &PodSchema,
    segments: &Segments,
) -> CellDescriptor {
    let Some(obs) = observation_for_row(observations, coord.row) else {
        return CellDescriptor::placeholder();
    };

    match segments.locate(coord.col) {
        Some(Segment::Time) => CellDescriptor::time(obs.time),
        Some(Segment::Identifier(i)) => {
            CellDescriptor::text(schema.identifiers.get(i).and_then(|k| obs.identifier(k)))
        }
        Some(Segment::Measurement(i)) => {
            CellDescriptor::number(schema.measurements.get(i).and_then(|k| obs.measurement(k)))
        }
        Some(Segment::Category(i)) => {
            CellDescriptor::text(schema.categories.get(i).and_then(|k| obs.category(k)))
        }
        Some(Segment::Tags) => {
            let joined = join_tags(&obs.tags);
            CellDescriptor::text(Some(joined.as_str()))
        }
        None => CellDescriptor::placeholder(),
    }
}

/// Row `r` is `observations[len - r - 1]`; `None` past the oldest one.
fn observation_for_row(observations: &[Observation], row: usize) -> Option<&Observation> {
    let len = observations.len();
    if row >= len {
        return None;
    }
    observations.get(len - row - 1)
}

/// Resolver bound to one observation sequence and one schema.
///
/// Cloning is cheap: observations and schema are shared.
#[derive(Debug, Clone)]
pub struct CellResolver {
    observations: Arc<[Observation]>,
    schema: Arc<PodSchema>,
    segments: Segments,
}

impl CellResolver {
    pub fn new(schema: Arc<PodSchema>, observations: Arc<[Observation]>) -> Self {
        let segments = Segments::new(&schema);
        Self {
            observations,
            schema,
            segments,
        }
    }

    pub fn resolve(&self, coord: GridCoordinate) -> CellDescriptor {
        resolve_with(coord, &self.observations, &self.schema, &self.segments)
    }

    pub fn row_count(&self) -> usize {
        self.observations.len()
    }

    pub fn column_count(&self) -> usize {
        self.segments.column_count()
    }

    pub fn schema(&self) -> &PodSchema {
        &self.schema
    }

    /// Whether `observations` is the very sequence this resolver is bound to.
    pub fn is_bound_to(&self, observations: &Arc<[Observation]>) -> bool {
        Arc::ptr_eq(&self.observations, observations)
    }
}
