use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::error::{GridError, Result};
use super::model::{Grid, Sample};

/// Field separator of the listing. No quoting: every comma splits.
const DELIMITER: char = ',';

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a raster listing from a file and group it into a [`Grid`].
///
/// Layout: one sample per line, `x,y,probability[,ignored...]`, no header.
pub fn load_file(path: &Path) -> Result<Grid> {
    let file = File::open(path).map_err(|source| GridError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("reading raster listing from {}", path.display());
    read_grid(file)
}

/// Ingest a listing from any reader. The whole input is consumed before
/// returning; the first malformed line aborts the run.
///
/// Every physical line is a record, blank ones included, so reported line
/// numbers match what an editor shows.
pub fn read_grid<R: Read>(input: R) -> Result<Grid> {
    let mut grid = Grid::new();
    for (idx, text) in BufReader::new(input).lines().enumerate() {
        let line = idx as u64 + 1;
        let text = text.map_err(|source| GridError::Read { line, source })?;
        grid.insert(parse_sample(&text, line)?);
    }

    log::debug!(
        "ingested {} samples into {} rows",
        grid.sample_count(),
        grid.row_count()
    );
    Ok(grid)
}

// ---------------------------------------------------------------------------
// Record parsing
// ---------------------------------------------------------------------------

/// Extract fields 0, 1, 2 as raw tokens after stripping trailing
/// whitespace (including a stray `\r`) from the line.
fn parse_sample(text: &str, line: u64) -> Result<Sample> {
    let fields: Vec<&str> = text.trim_end().split(DELIMITER).take(3).collect();
    match fields[..] {
        [x, y, probability] => Ok(Sample {
            x: x.to_string(),
            y: y.to_string(),
            probability: probability.to_string(),
        }),
        _ => Err(GridError::MalformedRecord {
            line,
            fields: fields.len(),
        }),
    }
}
