use std::path::PathBuf;

use clap::Parser;

/// Turn-based crew-versus-aliens tactics on a starship deck
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Seed for the random number generator
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Deck layout to load instead of the built-in one
    #[arg(short, long)]
    pub deck: Option<PathBuf>,

    /// Species roster (JSON) to load instead of the built-in one
    #[arg(short, long)]
    pub roster: Option<PathBuf>,

    /// Number of debris tiles to scatter over free floor
    #[arg(long, default_value_t = 0)]
    pub debris: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
