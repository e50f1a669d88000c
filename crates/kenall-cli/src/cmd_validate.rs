/// Implementation of `kenall validate`.
///
/// Runs the full normalization into a sink and reports either a series of
/// success checkmarks (`✓`) or a diagnostic failure line (`✗`).
///
/// # Success output
///
/// ```text
/// ✓ Rows: 124513 rows decoded from 124513 lines
/// ✓ Continuations: every multi-row street name is closed
/// ✓ Output: 125361 rows after normalization
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: malformed row at input-line 3 — column count is wrong: expected 15, found 14
/// ```
use std::io;

use anyhow::{Result, anyhow};
use kenall_driver::{DriverConfig, DriverError, RunStats, normalize_stream};

use crate::ValidateArgs;
use crate::io::open_input;

/// Run the `kenall validate` command.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or fails validation.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let reader = open_input(args.input.as_ref())?;
    let config = DriverConfig {
        trim: !args.no_trim,
        fold_width: false,
    };

    match normalize_stream(reader, io::sink(), &config) {
        Ok(stats) => {
            print_report(&stats);
            Ok(())
        }
        Err(e) => {
            println!("✗ Error: {}", driver_error_diagnostic(&e));
            Err(anyhow!("validation failed"))
        }
    }
}

fn print_report(stats: &RunStats) {
    println!(
        "✓ Rows: {} row{} decoded from {} lines",
        stats.records_read,
        if stats.records_read == 1 { "" } else { "s" },
        stats.input_lines
    );
    println!("✓ Continuations: every multi-row street name is closed");
    println!(
        "✓ Output: {} row{} after normalization",
        stats.output_records,
        if stats.output_records == 1 { "" } else { "s" }
    );
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// One-line diagnostic for a failed run.
fn driver_error_diagnostic(e: &DriverError) -> String {
    match e {
        DriverError::MalformedRow { line, source } => {
            format!("malformed row at input-line {line} — {source}")
        }
        DriverError::UnterminatedContinuation { pending, line } => {
            format!("street name opened but never closed ({pending} row(s) pending at input-line {line})")
        }
        DriverError::Io(inner) => format!("I/O error — {inner}"),
    }
}
