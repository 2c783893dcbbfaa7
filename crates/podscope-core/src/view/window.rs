//! Materializes the visible part of a [`ViewState`].

use std::ops::Range;

use super::common::{GridWindow, ViewCell, ViewRow};
use super::resolver::{CellKind, GridCoordinate};
use super::state::ViewState;

/// Resolves every cell in `rows` x `cols` and nothing else.
///
/// Ranges are clamped to the column count; rows are not, rows past the
/// oldest observation come back as empty placeholder rows. Returns `None`
/// for an unbuilt state.
pub fn window(state: &ViewState, rows: Range<usize>, cols: Range<usize>) -> Option<GridWindow> {
    let resolver = state.resolver()?;
    let columns = state.columns();
    let end = cols.end.min(columns.len());
    let cols = cols.start.min(end)..end;
    let visible = &columns[cols.clone()];

    let rows = rows
        .map(|row| ViewRow {
            id: row,
            cells: cols
                .clone()
                .map(|col| {
                    let cell = resolver.resolve(GridCoordinate::new(col, row));
                    match cell.kind {
                        CellKind::Numeric => ViewCell::numeric(cell.display),
                        CellKind::Text => ViewCell::plain(cell.display),
                    }
                })
                .collect(),
        })
        .collect();

    Some(GridWindow {
        first_col: cols.start,
        headers: visible.iter().map(|c| c.title.clone()).collect(),
        groups: visible.iter().map(|c| c.group.clone()).collect(),
        widths: visible.iter().map(|c| c.width).collect(),
        rows,
    })
}
