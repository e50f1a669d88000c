/// Per-column quoting bitfield.
///
/// Bit `n` set means column `n` (0-based) is wrapped in `"` when a line is
/// written. Reading never consults the mask: a quoted field is recognised
/// by its leading quote regardless of position.
///
/// ```text
/// ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐
/// │ bit │  0  │  1  │  2  │  3  │  4  │  5  │  6  │  7  │  8  │ …
/// ├─────┼─────┼─────┼─────┼─────┼─────┼─────┼─────┼─────┼─────┤
/// │ col │ jis │ old │ zip │ pk  │ ck  │ sk  │ p   │ c   │ s   │ …
/// └─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┘
/// ```
///
/// Up to 32 columns are addressable, which is more than any row format
/// this crate is used for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuoteMask(u32);

impl QuoteMask {
    /// No column is quoted.
    pub const NONE: Self = Self(0);

    /// Create a mask from a raw bit pattern.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Mask with every column in `first..=last` quoted.
    ///
    /// # Panics
    ///
    /// Panics in const evaluation if `last >= 32` or `first > last`.
    #[must_use]
    pub const fn span(first: u32, last: u32) -> Self {
        assert!(last < 32 && first <= last, "quote span out of range");
        let width = last - first + 1;
        let bits = if width == 32 { u32::MAX } else { (1u32 << width) - 1 };
        Self(bits << first)
    }

    /// Get the underlying bit pattern.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether the 0-based `column` is quoted on write.
    #[must_use]
    pub const fn is_quoted(self, column: usize) -> bool {
        column < 32 && self.0 & (1 << column) != 0
    }
}
