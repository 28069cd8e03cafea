//! Reshape flat `(x, y, probability)` raster listings into row-major grids
//! of probabilities, so outputs from models sampling the same extent line
//! up cell for cell.

pub mod cli;
pub mod data;
pub mod render;
