//! Writing the final result to a file or the console.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Width of the `=` banners framing console output.
pub const BANNER_WIDTH: usize = 80;

/// Where the result ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted {
    /// Written to the requested file
    File(PathBuf),
    /// Printed to the console
    Console,
    /// Printed to the console because the file could not be written
    ConsoleFallback,
}

/// Frame a result between two banner lines, as printed on the console.
pub fn framed(result: &str) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    format!("\n{banner}\n\n{result}\n\n{banner}\n")
}

/// Destination for the final result.
pub struct OutputSink {
    path: Option<PathBuf>,
}

impl OutputSink {
    /// Create a sink writing to `path`, or to the console when `None`.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// The output file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Emit `result`, falling back to the console if the file write fails.
    pub fn emit<W: Write>(&self, result: &str, console: &mut W) -> io::Result<Emitted> {
        let Some(path) = &self.path else {
            console.write_all(framed(result).as_bytes())?;
            return Ok(Emitted::Console);
        };

        match fs::write(path, result) {
            Ok(()) => {
                writeln!(console, "Output written to {}", path.display())?;
                Ok(Emitted::File(path.clone()))
            }
            Err(e) => {
                warn!("Error writing to output file {}: {}", path.display(), e);
                console.write_all(framed(result).as_bytes())?;
                Ok(Emitted::ConsoleFallback)
            }
        }
    }
}
