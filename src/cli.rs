//! Command line interface definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Find the most visually important point of an image
#[derive(Debug, Parser)]
#[command(name = "focuspoint", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect the focus point of an image and print it as JSON
    Detect(DetectArgs),

    /// Start the HTTP detection service
    #[cfg(feature = "web")]
    Serve(ServeArgs),

    /// Show version and environment information
    Info,
}

#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Path to the input image
    pub image: Option<PathBuf>,

    /// Download the input image from a URL instead of reading a file
    #[arg(long, conflicts_with = "image")]
    pub url: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Timeout for URL downloads, in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Increase verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(feature = "web")]
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long)]
    pub bind: Option<String>,

    /// Path to a configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
