pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "ica-price-watcher")]
#[command(about = "Ranks this week's ICA store deals and writes a summary to disk")]
pub struct CliConfig {
    /// Path to a TOML store directory; the bundled directory is used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory the report files are written to (overrides report.output_path)
    #[arg(long)]
    pub output_path: Option<String>,

    /// Menu choice to run without prompting (1, 2 or 3)
    #[arg(long)]
    pub mode: Option<String>,

    /// Region key for single-store mode, e.g. "lund"
    #[arg(long)]
    pub region: Option<String>,

    /// Store number within the region for single-store mode
    #[arg(long)]
    pub store: Option<String>,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
