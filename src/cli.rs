use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::data::loader::load_file;
use crate::data::model::KeyOrder;
use crate::render::{RenderOptions, write_grid};

/// Reshape an (x, y, probability) listing into a row-major probability grid.
///
/// Rows are ordered by y, columns by x; only the probabilities are printed.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Path to the `x,y,probability` listing
    input: PathBuf,

    /// How x and y tokens are ordered
    #[arg(long, value_enum, default_value_t = KeyOrder::Lexicographic)]
    order: KeyOrder,

    /// Print an extra empty line after the last row
    #[arg(long)]
    trailing_blank_line: bool,
}

impl CommandArgs {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            order: self.order,
            trailing_blank_line: self.trailing_blank_line,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    run_with(&args)
}

pub fn run_with(args: &CommandArgs) -> anyhow::Result<()> {
    let grid = load_file(&args.input)?;
    log::info!(
        "{}: {} rows from {} samples",
        args.input.display(),
        grid.row_count(),
        grid.sample_count()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_grid(&mut out, &grid, &args.render_options()).context("writing grid to stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = CommandArgs::try_parse_from(["raster-grid", "points.csv"]).unwrap();
        assert_eq!(args.input, PathBuf::from("points.csv"));
        assert_eq!(args.order, KeyOrder::Lexicographic);
        assert!(!args.trailing_blank_line);
    }

    #[test]
    fn test_parse_numeric_order() {
        let args = CommandArgs::try_parse_from([
            "raster-grid",
            "--order",
            "numeric",
            "--trailing-blank-line",
            "points.csv",
        ])
        .unwrap();
        assert_eq!(args.order, KeyOrder::Numeric);
        assert!(args.trailing_blank_line);
    }

    #[test]
    fn test_missing_input_is_usage_error() {
        let err = CommandArgs::try_parse_from(["raster-grid"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_extra_positional_rejected() {
        assert!(CommandArgs::try_parse_from(["raster-grid", "a.csv", "b.csv"]).is_err());
    }
}
