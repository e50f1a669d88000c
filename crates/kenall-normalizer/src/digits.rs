/// Fullwidth digit zero, U+FF10. The ten fullwidth digits are contiguous.
const FULLWIDTH_ZERO: u32 = '０' as u32;

/// Whether `c` is one of `０`..=`９`.
#[must_use]
pub fn is_fullwidth_digit(c: char) -> bool {
    ('０'..='９').contains(&c)
}

/// Replace every fullwidth digit with its ASCII form. Other characters
/// are copied unchanged.
#[must_use]
pub fn narrow_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            if is_fullwidth_digit(c) {
                char::from_digit(c as u32 - FULLWIDTH_ZERO, 10).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Replace every ASCII digit with its fullwidth form. Other characters
/// are copied unchanged.
#[must_use]
pub fn widen_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|d| char::from_u32(FULLWIDTH_ZERO + d))
                .unwrap_or(c)
        })
        .collect()
}

/// Parse a run of fullwidth digits.
///
/// Returns `None` for empty input, any non-fullwidth-digit character, or a
/// value that does not fit in `u32`.
#[must_use]
pub fn parse_fullwidth(text: &str) -> Option<u32> {
    if text.is_empty() || !text.chars().all(is_fullwidth_digit) {
        return None;
    }
    narrow_digits(text).parse().ok()
}

/// Canonical fullwidth spelling of `value`, without leading zeros.
#[must_use]
pub fn to_fullwidth(value: u32) -> String {
    widen_digits(&value.to_string())
}
