//! Input/output selection shared by the sub-commands.
//!
//! An omitted path or `-` selects the standard stream.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// The path to open, or `None` for the standard stream.
fn named(path: Option<&PathBuf>) -> Option<&Path> {
    path.map(PathBuf::as_path)
        .filter(|p| p.as_os_str() != "-")
}

/// Open the input file, or stdin.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn open_input(path: Option<&PathBuf>) -> Result<Box<dyn BufRead>> {
    match named(path) {
        Some(p) => {
            let file =
                File::open(p).with_context(|| format!("failed to open file: {}", p.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Create the output file, or stdout.
///
/// # Errors
///
/// Returns an error if the file cannot be created.
pub fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    match named(path) {
        Some(p) => {
            let file =
                File::create(p).with_context(|| format!("failed to create file: {}", p.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Input name for messages.
pub fn input_name(path: Option<&PathBuf>) -> String {
    named(path).map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string())
}
