//! Plain-text rendering of a grid window.

use podscope_core::fmt::fit;
use podscope_core::view::GridWindow;

/// Approximate pixel width of one terminal cell.
const CHAR_WIDTH_PX: f64 = 8.0;
/// Widest cell the renderer pads to, in terminal cells.
const MAX_CELL_CHARS: usize = 512;

fn char_width(px: f64) -> usize {
    // float-to-int casts saturate (NaN becomes 0)
    ((px / CHAR_WIDTH_PX).floor() as usize).clamp(1, MAX_CELL_CHARS)
}

/// Renders group row (if any column has a group), header row and data rows.
pub fn render_window(grid: &GridWindow) -> String {
    let widths: Vec<usize> = grid.widths.iter().map(|w| char_width(*w)).collect();
    let mut out = String::new();

    let mut push_line = |cells: Vec<String>| {
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    };

    if grid.groups.iter().any(|g| !g.is_empty()) {
        push_line(
            grid.groups
                .iter()
                .zip(&widths)
                .map(|(g, w)| fit(g, *w, false))
                .collect(),
        );
    }
    push_line(
        grid.headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| fit(&h.to_uppercase(), *w, false))
            .collect(),
    );
    for row in &grid.rows {
        push_line(
            row.cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| fit(&c.text, *w, c.numeric))
                .collect(),
        );
    }
    out
}
