use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "dynosim",
    version,
    about = "A terminal simulator of a Platform-as-a-Service deployment workflow",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Milliseconds between two narrative characters.
    #[arg(long, value_name = "MS")]
    pub typewriter_speed: Option<u64>,

    /// Seed for simulated response latencies.
    #[arg(long, env = "DYNOSIM_SEED")]
    pub seed: Option<u64>,

    /// Animation tick interval in milliseconds.
    #[arg(long, value_name = "MS")]
    pub tick_rate: Option<u64>,

    /// Show timestamps in the system log panel.
    #[arg(long)]
    pub show_timestamps: Option<bool>,
}
