/// Errors raised while tokenizing a single delimited line.
///
/// Column numbers are 1-based, counted in fields rather than characters,
/// so a message points at the field a human would count to in a
/// spreadsheet view of the row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// A `"` appeared inside a field that did not start with a quote.
    #[error("bare quote in unquoted field at column {column}")]
    BareQuote { column: usize },

    /// The line ended while a quoted field was still open.
    #[error("unterminated quoted field at column {column}")]
    UnterminatedQuote { column: usize },

    /// A closing quote was followed by something other than a delimiter.
    #[error("unexpected character after closing quote at column {column}")]
    TrailingAfterQuote { column: usize },
}
