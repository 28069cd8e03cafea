use std::cmp::Ordering;
use std::collections::BTreeMap;

use clap::ValueEnum;

// ---------------------------------------------------------------------------
// KeyOrder – how coordinate tokens are compared
// ---------------------------------------------------------------------------

/// Comparison policy for x and y tokens.
///
/// `Lexicographic` compares the raw text, so `"10"` sorts before `"2"`.
/// `Numeric` is opt-in: tokens that parse as `f64` compare by value and
/// come before any token that does not parse.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeyOrder {
    #[default]
    Lexicographic,
    Numeric,
}

impl KeyOrder {
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            KeyOrder::Lexicographic => a.cmp(b),
            KeyOrder::Numeric => {
                match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
                    (Ok(fa), Ok(fb)) => fa.total_cmp(&fb).then_with(|| a.cmp(b)),
                    (Ok(_), Err(_)) => Ordering::Less,
                    (Err(_), Ok(_)) => Ordering::Greater,
                    (Err(_), Err(_)) => a.cmp(b),
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Sample – one line of the listing
// ---------------------------------------------------------------------------

/// A single raster sample. All fields are opaque tokens as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub x: String,
    pub y: String,
    pub probability: String,
}

// ---------------------------------------------------------------------------
// RowGroup – every sample sharing a y-token
// ---------------------------------------------------------------------------

/// One (x, probability) pair inside a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub x: String,
    pub probability: String,
}

/// Cells sharing a y-token, kept in input order until emit time.
#[derive(Debug, Clone, Default)]
pub struct RowGroup {
    cells: Vec<Cell>,
}

impl RowGroup {
    pub fn push(&mut self, x: String, probability: String) {
        self.cells.push(Cell { x, probability });
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells ascending by x. Duplicate x-tokens stay as separate columns,
    /// ordered by their probability token.
    pub fn sorted_cells(&self, order: KeyOrder) -> Vec<&Cell> {
        let mut cells: Vec<&Cell> = self.cells.iter().collect();
        cells.sort_by(|a, b| {
            order
                .compare(&a.x, &b.x)
                .then_with(|| a.probability.cmp(&b.probability))
        });
        cells
    }
}

// ---------------------------------------------------------------------------
// Grid – the full grouping, owned by one run
// ---------------------------------------------------------------------------

/// Mapping from y-token to its row.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    rows: BTreeMap<String, RowGroup>,
    samples: usize,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sample to the row keyed by its y-token, creating the row on
    /// first sight.
    pub fn insert(&mut self, sample: Sample) {
        self.rows
            .entry(sample.y)
            .or_default()
            .push(sample.x, sample.probability);
        self.samples += 1;
    }

    /// Rows ascending by y-token.
    pub fn rows(&self, order: KeyOrder) -> Vec<(&str, &RowGroup)> {
        let mut rows: Vec<(&str, &RowGroup)> =
            self.rows.iter().map(|(y, row)| (y.as_str(), row)).collect();
        // BTreeMap iteration is already lexicographic.
        if order != KeyOrder::Lexicographic {
            rows.sort_by(|a, b| order.compare(a.0, b.0));
        }
        rows
    }

    pub fn row(&self, y: &str) -> Option<&RowGroup> {
        self.rows.get(y)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn sample_count(&self) -> usize {
        self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<Sample> for Grid {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let mut grid = Grid::new();
        for sample in iter {
            grid.insert(sample);
        }
        grid
    }
}
