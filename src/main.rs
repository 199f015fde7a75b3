use clap::Parser;
use cli::Cli;
use generate::generate;
use indicatif::MultiProgress;
use log::LevelFilter;
use std::path::Path;

mod cli;
mod err;
mod generate;
mod progress_bar;
mod sizes;
mod svg;

/// Source logo and output directory, relative to the working directory the
/// tool is invoked from.
const SOURCE_SVG: &str = "images/logo.svg";
const OUTPUT_DIR: &str = "images";

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut binding = env_logger::Builder::new();
    let logger = binding
        .filter_level(LevelFilter::Info)
        .filter_module("favigen", args.verbose.log_level_filter())
        .format_timestamp(None)
        .format_module_path(false)
        .build();

    let level = logger.filter();

    let multi_progress = MultiProgress::new();
    indicatif_log_bridge::LogWrapper::new(multi_progress.clone(), logger).try_init()?;

    log::set_max_level(level);

    generate(
        Path::new(SOURCE_SVG),
        Path::new(OUTPUT_DIR),
        multi_progress,
    )
}
