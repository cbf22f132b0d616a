use std::path::PathBuf;

use clap::Parser;

/// Drive a tank around the scene path and stream snapshots as JSON lines.
#[derive(Parser, Debug, Clone)]
#[command(name = "tankdrive", version)]
pub struct Args {
    /// Scene config file (JSON). Defaults apply when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Run this many ticks as fast as possible, then exit
    #[arg(long)]
    pub ticks: Option<u64>,
    /// Emit one snapshot every N ticks
    #[arg(long, default_value_t = 1)]
    pub emit_every: u64,
}
