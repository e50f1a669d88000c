/// Configuration for a stream run.
///
/// ```text
/// ┌────────────┬─────────┬─────────────────────────────────────────────┐
/// │ Field      │ Default │ Purpose                                     │
/// ├────────────┼─────────┼─────────────────────────────────────────────┤
/// │ trim       │ true    │ Strip whitespace from every decoded field   │
/// │ fold_width │ true    │ Unify letter widths of emitted lines        │
/// └────────────┴─────────┴─────────────────────────────────────────────┘
/// ```
///
/// Width folding runs on each field of an emitted record, after the
/// normalizer has classified the annotations. The classifier depends on
/// fullwidth digits and brackets, so folding earlier would hide them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    /// Trim leading and trailing whitespace from each field on decode.
    pub trim: bool,

    /// Fold halfwidth katakana to fullwidth and fullwidth ASCII to ASCII
    /// in each emitted record. See [`fold_width`](crate::width::fold_width).
    pub fold_width: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            trim: true,
            fold_width: true,
        }
    }
}
