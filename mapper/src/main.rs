use clap::Parser;
use std::path::PathBuf;

use render::LeafletRenderer;
use source::CsvSource;
use workflow::{MapConfig, Runner};

mod render;
mod source;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Render range-test logs as a layered interactive map")]
struct Args {
    /// Load map settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory holding the logs (defaults to the executable's directory)
    #[arg(long)]
    input_dir: Option<PathBuf>,
    /// Output HTML file
    #[arg(long)]
    output: Option<PathBuf>,
    /// Skip logs that cannot be parsed instead of aborting
    #[arg(long, default_value_t = false)]
    skip_unreadable: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match args.config {
        Some(path) => MapConfig::load(path)?,
        None => MapConfig::default(),
    }
    .with_overrides(args.input_dir, args.output, args.skip_unreadable);

    let input_dir = config.resolve_input_dir()?;
    let renderer = LeafletRenderer::new(config.map.clone());
    let runner = Runner::new(config, CsvSource::new(), renderer);
    let summary = runner.run(&input_dir)?;

    if !summary.skipped_empty.is_empty() {
        println!("No valid data in: {}", summary.skipped_empty.join(", "));
    }
    if !summary.skipped_unreadable.is_empty() {
        println!("Unreadable, skipped: {}", summary.skipped_unreadable.join(", "));
    }
    println!(
        "Map with {} layer(s) has been generated and can be viewed in '{}'.",
        summary.layers.len(),
        summary.output.display()
    );
    Ok(())
}
