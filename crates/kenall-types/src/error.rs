use kenall_wire::WireError;

/// Errors that can occur when turning a line into a [`Record`](crate::Record).
///
/// ```text
/// ┌─────────────────────────────────────────────────────┐
/// │ TypeError (this crate)                              │
/// │   ├── ColumnCount when the row shape is wrong       │
/// │   └── wraps WireError for quoting failures          │
/// └─────────────────────────────────────────────────────┘
/// ```
///
/// Neither variant carries a line number; the stream driver attaches one
/// when it reports the failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// The row split into a different number of fields than the format has.
    ///
    /// Rows are never padded or truncated to fit.
    #[error("column count is wrong: expected {expected}, found {found}")]
    ColumnCount { expected: usize, found: usize },

    /// The line could not be tokenized.
    #[error(transparent)]
    Wire(#[from] WireError),
}
