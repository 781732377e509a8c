//! docsift CLI library.
//!
//! This library provides the pieces behind the `docsift` binary: argument
//! parsing, configuration loading, the extraction → completion pipeline and
//! output handling.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::{Emitted, OutputSink};
pub use pipeline::{Pipeline, Summary};

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, plus
/// progress from the docsift crates when `verbose` is on.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,docsift_cli=info,docsift_extractor=info,docsift_llm=info"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
