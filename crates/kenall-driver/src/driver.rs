use std::io::{BufRead, Write};

use kenall_normalizer::{NormalizeError, Normalizer};
use kenall_types::Record;
use tracing::{info, warn};

use crate::config::DriverConfig;
use crate::error::DriverError;
use crate::width::fold_record;

/// Output record terminator. Written between records, not after the last.
const RECORD_TERMINATOR: &[u8] = b"\n";

/// Line and record counts of a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Physical input lines read, blank ones included.
    pub input_lines: usize,
    /// Records decoded from non-blank lines.
    pub records_read: usize,
    /// Records written after normalization.
    pub output_records: usize,
}

/// Normalize a whole stream of rows.
///
/// Each line is decoded, pushed into a [`Normalizer`], and every record it
/// releases is encoded and written immediately, so output order always
/// follows input order.
///
/// ```text
///   reader ──lines──▶ Record::decode ──push──▶ Normalizer ──pop──▶ encode ──▶ writer
///                         │ trim                                    │ fold_width
///                         └──────────────── DriverConfig ───────────┘
/// ```
///
/// Blank lines are skipped. Records are separated by `\n` with no
/// terminator after the last one. The writer is flushed before returning,
/// on success and on an unterminated continuation.
///
/// # Errors
///
/// - [`DriverError::MalformedRow`] for the first line that fails to decode;
///   nothing from that line is written.
/// - [`DriverError::UnterminatedContinuation`] if the input ends while a
///   multi-row street name is still open.
/// - [`DriverError::Io`] if reading or writing fails.
pub fn normalize_stream<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    config: &DriverConfig,
) -> Result<RunStats, DriverError> {
    let mut normalizer = Normalizer::new();
    let mut stats = RunStats::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        stats.input_lines = index + 1;
        if line.is_empty() {
            continue;
        }

        let record = Record::decode(&line, config.trim).map_err(|source| {
            DriverError::MalformedRow {
                line: stats.input_lines,
                source,
            }
        })?;
        stats.records_read += 1;

        normalizer.push(record);
        while let Some(mut output) = normalizer.pop() {
            if config.fold_width {
                fold_record(&mut output);
            }
            if stats.output_records > 0 {
                writer.write_all(RECORD_TERMINATOR)?;
            }
            writer.write_all(output.encode().as_bytes())?;
            stats.output_records += 1;
        }
    }
    writer.flush()?;

    if let Err(NormalizeError::UnterminatedContinuation { pending }) = normalizer.finish() {
        warn!(
            pending,
            line = stats.input_lines,
            "input ended inside a street continuation"
        );
        return Err(DriverError::UnterminatedContinuation {
            pending,
            line: stats.input_lines,
        });
    }

    info!(
        input_lines = stats.input_lines,
        records_read = stats.records_read,
        output_records = stats.output_records,
        "normalization finished"
    );
    Ok(stats)
}

/// Read every row of an already-normalized file.
///
/// No trimming, folding or annotation handling is applied; each non-blank
/// line becomes exactly one record.
///
/// # Errors
///
/// - [`DriverError::MalformedRow`] for the first line that fails to decode.
/// - [`DriverError::Io`] if reading fails.
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<Record>, DriverError> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let record = Record::decode(&line, false)
            .map_err(|source| DriverError::MalformedRow {
                line: index + 1,
                source,
            })?;
        records.push(record);
    }
    Ok(records)
}
