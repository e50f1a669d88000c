//! Multi-record continuation markers.
//!
//! Long street names are split across consecutive rows, cutting through
//! a bracketed annotation. The first row ends with an open bracket that is
//! never closed, the last row starts with a close bracket that was never
//! opened. ASCII and fullwidth brackets are interchangeable here: a name
//! opened with `（` may be closed with `)`.

const OPEN: [char; 2] = ['(', '（'];
const CLOSE: [char; 2] = [')', '）'];

/// The last opening bracket has no closing bracket after it.
#[must_use]
pub fn opens_continuation(street: &str) -> bool {
    let Some(open) = street.rfind(OPEN) else {
        return false;
    };
    street.rfind(CLOSE).is_none_or(|close| open > close)
}

/// The first closing bracket has no opening bracket before it.
#[must_use]
pub fn closes_continuation(street: &str) -> bool {
    let Some(close) = street.find(CLOSE) else {
        return false;
    };
    street.find(OPEN).is_none_or(|open| close < open)
}
