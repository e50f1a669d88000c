/// Errors reported by the [`Normalizer`](crate::Normalizer).
///
/// Annotation text that no rule understands is not an error: such records
/// pass through with the bracket stripped. Only structural problems end
/// up here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// Input ended while a multi-record street name was still open.
    ///
    /// `pending` is the number of buffered records that will never be
    /// emitted because their closing bracket never arrived.
    #[error("unterminated street continuation: {pending} record(s) still pending")]
    UnterminatedContinuation { pending: usize },
}
