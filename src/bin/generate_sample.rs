use std::io;

use anyhow::Context;
use clap::Parser;
use rand::{SeedableRng as _, seq::SliceRandom};
use rand_distr::{Distribution, Normal};
use rand_pcg::Pcg32;

/// Write a synthetic `x,y,probability` raster listing to stdout.
///
/// Samples are shuffled so the listing exercises the reshaper's sorting.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of columns (distinct x values)
    #[arg(long, default_value_t = 16)]
    width: u32,

    /// Number of rows (distinct y values)
    #[arg(long, default_value_t = 12)]
    height: u32,

    /// Seed for the shuffle and the noise
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Standard deviation of the noise added to each probability
    #[arg(long, default_value_t = 0.05)]
    noise: f64,
}

/// One generated cell of the raster.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: u32,
    y: u32,
    probability: f64,
}

/// A smooth hot spot centred on the grid, falling off towards the edges.
fn bump(x: u32, y: u32, width: u32, height: u32) -> f64 {
    let cx = f64::from(width.saturating_sub(1)) / 2.0;
    let cy = f64::from(height.saturating_sub(1)) / 2.0;
    let sx = (f64::from(width) / 4.0).max(1.0);
    let sy = (f64::from(height) / 4.0).max(1.0);
    let dx = (f64::from(x) - cx) / sx;
    let dy = (f64::from(y) - cy) / sy;
    (-(dx * dx + dy * dy) / 2.0).exp()
}

/// Every cell of a `width` x `height` raster exactly once, in shuffled
/// order, with noisy probabilities clamped to `[0, 1]`.
fn generate(width: u32, height: u32, seed: u64, noise: f64) -> anyhow::Result<Vec<Point>> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let normal = Normal::new(0.0, noise).context("invalid noise level")?;

    let mut points: Vec<Point> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| {
            let p = bump(x, y, width, height) + normal.sample(&mut rng);
            Point {
                x,
                y,
                probability: p.clamp(0.0, 1.0),
            }
        })
        .collect();
    points.shuffle(&mut rng);
    Ok(points)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let points = generate(args.width, args.height, args.seed, args.noise)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(io::stdout().lock());
    for point in &points {
        writer
            .write_record([
                point.x.to_string(),
                point.y.to_string(),
                format!("{:.4}", point.probability),
            ])
            .context("writing sample")?;
    }
    writer.flush().context("flushing output")?;

    log::info!(
        "wrote {} samples ({}x{}, seed {})",
        points.len(),
        args.width,
        args.height,
        args.seed
    );
    Ok(())
}
