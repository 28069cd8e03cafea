fn main() -> anyhow::Result<()> {
    env_logger::init();
    raster_grid::cli::run()
}
