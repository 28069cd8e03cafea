use std::io::{self, Write};

use crate::data::model::{Grid, KeyOrder};

/// Separator between probabilities on one output line.
pub const SEPARATOR: &str = ", ";

/// Knobs for turning a [`Grid`] into text.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Ordering for both rows (y) and columns (x).
    pub order: KeyOrder,
    /// Emit one empty line after the last row, as older outputs did.
    pub trailing_blank_line: bool,
}

/// Render the grid: one line per y-token, probabilities ascending by x.
pub fn render_grid(grid: &Grid, options: &RenderOptions) -> String {
    let mut out = String::new();
    for (_, row) in grid.rows(options.order) {
        let line: Vec<&str> = row
            .sorted_cells(options.order)
            .into_iter()
            .map(|cell| cell.probability.as_str())
            .collect();
        out.push_str(&line.join(SEPARATOR));
        out.push('\n');
    }
    if options.trailing_blank_line {
        out.push('\n');
    }
    out
}

/// Render the whole grid in memory, then write it in one go.
pub fn write_grid<W: Write>(
    out: &mut W,
    grid: &Grid,
    options: &RenderOptions,
) -> io::Result<()> {
    let text = render_grid(grid, options);
    out.write_all(text.as_bytes())?;
    out.flush()
}
