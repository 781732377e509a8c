//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// docsift - Summarize or query documents and web pages with an LLM.
#[derive(Debug, Parser)]
#[command(name = "docsift")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "Example: docsift file.txt https://example.com -q \"Extract key points\" -o output.txt"
)]
pub struct Cli {
    /// Input sources (files or URLs)
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<String>,

    /// Custom query prompt (default: summarize)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Output file path (default: print to console)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Model to use instead of the configured one
    #[arg(short, long, env = "DOCSIFT_MODEL")]
    pub model: Option<String>,

    /// Configuration file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
