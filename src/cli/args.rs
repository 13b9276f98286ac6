//! Command line argument parsing for Scour CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Scour - clean raw reviews into stemmed tokens
///
/// Every line of every INPUT (or of stdin when no INPUT is given) is one
/// document. Each document produces one output line.
#[derive(Parser, Debug, Clone)]
#[command(name = "scour")]
#[command(about = "Clean raw reviews into stemmed tokens, one document per line")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ScourArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Preprocessor configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Keep ASCII digits in tokens (overrides the configuration file)
    #[arg(long)]
    pub keep_digits: bool,

    /// Number of documents preprocessed in parallel at a time
    #[arg(short, long, default_value = "1024")]
    pub batch_size: usize,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Input files; `-` reads stdin
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,
}

impl ScourArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Space separated tokens, one document per line
    Human,
    /// One JSON array of tokens per line (JSON Lines)
    Json,
}
