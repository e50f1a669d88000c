use kenall_types::TypeError;

/// Errors that end a stream run.
///
/// Line numbers are 1-based and count every physical input line,
/// including skipped blank ones, so they match what an editor shows.
///
/// ```text
/// ┌──────────────────────────┬───────────────────────────────────────────┐
/// │ Variant                  │ Cause                                     │
/// ├──────────────────────────┼───────────────────────────────────────────┤
/// │ MalformedRow             │ Line failed to decode (shape or quoting)  │
/// │ UnterminatedContinuation │ Input ended inside a multi-row street     │
/// │ Io                       │ Reading input or writing output failed    │
/// └──────────────────────────┴───────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("failed to parse data: input-line={line}")]
    MalformedRow {
        line: usize,
        #[source]
        source: TypeError,
    },

    /// `pending` rows were still waiting for a closing bracket when the
    /// input ended at `line`.
    #[error("input ended inside a street continuation: {pending} row(s) still open at input-line={line}")]
    UnterminatedContinuation { pending: usize, line: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
