//! Command-line argument definitions for the Annals CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the placement seed and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Annals network layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON dataset
    #[arg(help = "Path to the input dataset")]
    pub input: String,

    /// Path to the output JSON layout
    #[arg(short, long, default_value = "layout.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Seed for the initial placement, overriding the configuration
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["annals", "events.json"]);
        assert_eq!(args.input, "events.json");
        assert_eq!(args.output, "layout.json");
        assert!(args.config.is_none());
        assert!(args.seed.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_flags() {
        let args = Args::parse_from([
            "annals",
            "network.json",
            "-o",
            "out.json",
            "-c",
            "annals.toml",
            "--seed",
            "42",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.output, "out.json");
        assert_eq!(args.config.as_deref(), Some("annals.toml"));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.log_level, "debug");
    }
}
