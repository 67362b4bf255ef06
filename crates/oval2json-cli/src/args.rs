use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "oval2json",
    version,
    about = "Convert OVAL vulnerability definitions into JSON advisory criteria trees"
)]
pub struct Args {
    /// Path to the OVAL definitions document (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Emit single-line JSON instead of indented output
    #[arg(long)]
    pub compact: bool,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Log dropped records and index statistics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
