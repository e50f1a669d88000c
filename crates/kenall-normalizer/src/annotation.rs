use kenall_types::Record;
use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing fullwidth-bracketed suffix of the kanji street name.
static KANJI_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"（([^）]+)）$").expect("invalid kanji suffix regex"));

/// Trailing ASCII-bracketed suffix of the kana street name.
static KANA_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^)]+)\)$").expect("invalid kana suffix regex"));

/// Street names that describe the whole area rather than a sub-area.
static WHOLE_AREA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^以下に掲載がない場合$|の次に番地がくる場合$|.+一円$")
        .expect("invalid whole-area regex")
});

/// Bracket contents removed from a record's street names.
///
/// `kana` is empty when the kana street had no ASCII-bracketed suffix.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Suffix {
    pub kanji: String,
    pub kana: String,
}

/// Whether the street name stands for the whole area.
pub(crate) fn is_whole_area(street: &str) -> bool {
    WHOLE_AREA.is_match(street)
}

/// Cut the trailing bracketed suffix off both street names.
///
/// Returns `None`, leaving the record untouched, when the kanji street
/// does not end in a fullwidth-bracketed suffix.
pub(crate) fn take_suffix(record: &mut Record) -> Option<Suffix> {
    let (kanji_start, kanji) = capture_suffix(&KANJI_SUFFIX, &record.street)?;
    record.street.truncate(kanji_start);

    let kana = match capture_suffix(&KANA_SUFFIX, &record.street_kana) {
        Some((kana_start, kana)) => {
            record.street_kana.truncate(kana_start);
            kana
        }
        None => String::new(),
    };

    Some(Suffix { kanji, kana })
}

/// Byte offset where the bracketed suffix starts, and its inner text.
fn capture_suffix(pattern: &Regex, text: &str) -> Option<(usize, String)> {
    let caps = pattern.captures(text)?;
    let start = caps.get(0)?.start();
    let inner = caps.get(1)?.as_str().to_string();
    Some((start, inner))
}
