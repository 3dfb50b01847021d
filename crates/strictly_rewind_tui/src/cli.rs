//! Command-line interface for strictly_rewind.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Rewind - two-player tic-tac-toe with time-travel
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Two-player tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_rewind.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that receives log output
    #[arg(long, default_value = "strictly_rewind.log")]
    pub log_file: PathBuf,

    /// Start with the move list in reverse order
    #[arg(long)]
    pub descending: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["strictly_rewind"]);
        assert_eq!(cli.config, None);
        assert_eq!(cli.log_file, PathBuf::from("strictly_rewind.log"));
        assert!(!cli.descending);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["strictly_rewind", "-c", "custom.toml", "--descending"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.descending);
    }
}
