use crate::types::LogLevel;
use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  go-fuzz -bin app-fuzz.zip |& fz
      Run fuzz test for app-fuzz.zip";

#[derive(Parser)]
#[command(name = "fz")]
#[command(about = "Tool for formatting go-fuzz output", long_about = None)]
#[command(override_usage = "go-fuzz … |& fz [OPTIONS]")]
#[command(after_help = EXAMPLES)]
#[command(version)]
pub struct Cli {
    /// Disable colors in output
    #[arg(short = 'n', long = "no-color")]
    pub no_color: bool,

    /// Verbosity of diagnostic logs written to stderr
    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    /// Path to config file [default: $XDG_CONFIG_HOME/fz/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seconds to keep waiting for output after go-fuzz starts shutting down
    #[arg(long, value_name = "SECS")]
    pub grace: Option<u64>,

    /// Print the summary when input ends, not only on interrupt
    #[arg(long)]
    pub summary_on_eof: bool,
}
