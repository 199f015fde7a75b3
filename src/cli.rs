use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};

/// The generated files and their dimensions are fixed, so there is nothing
/// to configure beyond log verbosity.
#[derive(Parser)]
#[command(version, about = "Generate favicon PNGs from images/logo.svg.")]
pub struct Cli {
    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}
