use anyhow::Result;
use tracing_subscriber::EnvFilter;

// Import modules
mod constants;
mod exif_parser;
mod fetcher;
mod processing;
mod record;
mod settings;

use fetcher::HttpFetcher;
use processing::{print_summary, process_photos, write_results};
use settings::Settings;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let settings = Settings::default();
    let fetcher = HttpFetcher::new(settings.clone())?;

    let results = process_photos(&settings, &fetcher);
    print_summary(&results);
    write_results(&settings.output_path, &results)?;

    Ok(())
}
