use kenall_types::Record;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::annotation::{self, Suffix};
use crate::digits::{narrow_digits, parse_fullwidth, to_fullwidth};

/// Largest number of siblings a numeric range may expand into. Wider
/// ranges are left unexpanded.
pub const MAX_FAN_OUT: u32 = 99;

/// Separator between items of a kanji list annotation.
const KANJI_SEPARATOR: char = '、';

/// Separator between items of a kana list annotation (halfwidth form).
const KANA_SEPARATOR: char = '､';

/// Floor word and its kana reading.
const FLOOR_WORD: &str = "階";
const FLOOR_KANA: &str = "ｶｲ";

/// Numbering unit that closes a range or list annotation.
///
/// ```text
/// ┌──────────┬────────┬────────────┐
/// │ Unit     │ Kanji  │ Kana       │
/// ├──────────┼────────┼────────────┤
/// │ Chome    │ 丁目   │ ﾁｮｳﾒ       │
/// │ Banchi   │ 番地   │ ﾊﾞﾝﾁ       │
/// │ Ban      │ 番     │ ﾊﾞﾝ        │
/// └──────────┴────────┴────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Chome,
    Banchi,
    Ban,
}

impl Unit {
    /// Parse the kanji unit word.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "丁目" => Some(Self::Chome),
            "番地" => Some(Self::Banchi),
            "番" => Some(Self::Ban),
            _ => None,
        }
    }

    #[must_use]
    pub fn word(self) -> &'static str {
        match self {
            Self::Chome => "丁目",
            Self::Banchi => "番地",
            Self::Ban => "番",
        }
    }

    #[must_use]
    pub fn kana(self) -> &'static str {
        match self {
            Self::Chome => "ﾁｮｳﾒ",
            Self::Banchi => "ﾊﾞﾝﾁ",
            Self::Ban => "ﾊﾞﾝ",
        }
    }
}

/// What a bracketed street annotation means, borrowed from its text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Annotation<'a> {
    /// Free-text qualifier such as `その他` or `…を除く`. Dropped.
    Qualifier,
    /// `３階`: a single floor of a building.
    Floor { digits: &'a str },
    /// `１～１９丁目`: every number from `start` to `end`.
    Range {
        start: &'a str,
        end: &'a str,
        unit: Unit,
    },
    /// `１、３、５丁目`: the listed numbers.
    List { items: Vec<&'a str>, unit: Unit },
    /// `南、北`: plain names without digits.
    Names { items: Vec<&'a str> },
    /// Nothing matched. The annotation is dropped without expansion.
    Unclassified,
}

// ── Rules ─────────────────────────────────────────────────────────────
//
// Tried top to bottom; the first rule that recognises the text wins.
// Later patterns are looser than earlier ones and rely on that order:
// `Names` would otherwise swallow qualifiers, and `List` would accept a
// lone number that `Floor` should have claimed.

static QUALIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:その他|地階・階層不明|.*を除く)$").expect("invalid qualifier regex")
});
static FLOOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([０-９]+)階$").expect("invalid floor regex"));
static RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([０-９]+)～([０-９]+)(丁目|番地|番)$").expect("invalid range regex")
});
static LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([０-９、]+)(丁目|番地|番)$").expect("invalid list regex"));
static NAMES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^「」～－０-９]+$").expect("invalid names regex"));

struct Rule {
    name: &'static str,
    matcher: fn(&str) -> Option<Annotation<'_>>,
}

const RULES: [Rule; 5] = [
    Rule {
        name: "qualifier",
        matcher: match_qualifier,
    },
    Rule {
        name: "floor",
        matcher: match_floor,
    },
    Rule {
        name: "range",
        matcher: match_range,
    },
    Rule {
        name: "list",
        matcher: match_list,
    },
    Rule {
        name: "names",
        matcher: match_names,
    },
];

fn match_qualifier(inner: &str) -> Option<Annotation<'_>> {
    QUALIFIER.is_match(inner).then_some(Annotation::Qualifier)
}

fn match_floor(inner: &str) -> Option<Annotation<'_>> {
    let caps = FLOOR.captures(inner)?;
    Some(Annotation::Floor {
        digits: caps.get(1)?.as_str(),
    })
}

fn match_range(inner: &str) -> Option<Annotation<'_>> {
    let caps = RANGE.captures(inner)?;
    Some(Annotation::Range {
        start: caps.get(1)?.as_str(),
        end: caps.get(2)?.as_str(),
        unit: Unit::from_word(caps.get(3)?.as_str())?,
    })
}

fn match_list(inner: &str) -> Option<Annotation<'_>> {
    let caps = LIST.captures(inner)?;
    Some(Annotation::List {
        items: caps.get(1)?.as_str().split(KANJI_SEPARATOR).collect(),
        unit: Unit::from_word(caps.get(2)?.as_str())?,
    })
}

fn match_names(inner: &str) -> Option<Annotation<'_>> {
    NAMES.is_match(inner).then(|| Annotation::Names {
        items: inner.split(KANJI_SEPARATOR).collect(),
    })
}

/// Classify the inner text of a kanji street annotation.
#[must_use]
pub fn classify(inner: &str) -> Annotation<'_> {
    RULES
        .iter()
        .find_map(|rule| {
            let annotation = (rule.matcher)(inner)?;
            debug!(rule = rule.name, inner, "annotation classified");
            Some(annotation)
        })
        .unwrap_or(Annotation::Unclassified)
}

// ── Expansion ─────────────────────────────────────────────────────────

/// Rewrite one record's street names, returning the records it becomes.
///
/// ```text
/// street text                    result
/// ─────────────────────────────  ───────────────────────────────────────
/// 以下に掲載がない場合           1 record, both street names cleared
/// …（…）  + qualifier            1 record, suffix dropped
///         + floor                1 record, floor appended
///         + range  (≤ 99 items)  one record per number, base dropped
///         + list                 one record per item, base dropped
///         + names  (counts ok)   one record per name, base dropped
///         + anything else        1 record, suffix dropped
/// no suffix                      1 record, unchanged
/// ```
///
/// Siblings are independent copies of the base record that differ only
/// in `street` and `street_kana`.
#[must_use]
pub fn normalize_street(mut record: Record) -> Vec<Record> {
    if annotation::is_whole_area(&record.street) {
        record.street.clear();
        record.street_kana.clear();
        return vec![record];
    }

    let Some(suffix) = annotation::take_suffix(&mut record) else {
        return vec![record];
    };

    let annotation = classify(&suffix.kanji);
    expand(record, &annotation, &suffix)
}

fn expand(mut base: Record, annotation: &Annotation<'_>, suffix: &Suffix) -> Vec<Record> {
    match annotation {
        Annotation::Qualifier => vec![base],
        Annotation::Floor { digits } => {
            base.street.push_str(digits);
            base.street.push_str(FLOOR_WORD);
            base.street_kana.push_str(&narrow_digits(digits));
            base.street_kana.push_str(FLOOR_KANA);
            vec![base]
        }
        Annotation::Range { start, end, unit } => {
            let (Some(start), Some(end)) = (parse_fullwidth(start), parse_fullwidth(end)) else {
                debug!(inner = %suffix.kanji, "range bound out of range, left unexpanded");
                return vec![base];
            };
            if end >= start && end - start >= MAX_FAN_OUT {
                debug!(
                    inner = %suffix.kanji,
                    count = u64::from(end - start) + 1,
                    "range wider than fan-out cap, left unexpanded"
                );
                return vec![base];
            }
            (start..=end)
                .map(|n| numbered(&base, &to_fullwidth(n), n, *unit))
                .collect()
        }
        Annotation::List { items, unit } => {
            let Some(numbers) = items
                .iter()
                .map(|item| parse_fullwidth(item))
                .collect::<Option<Vec<u32>>>()
            else {
                debug!(inner = %suffix.kanji, "list item is not a number, left unexpanded");
                return vec![base];
            };
            items
                .iter()
                .zip(numbers)
                .map(|(item, n)| numbered(&base, item, n, *unit))
                .collect()
        }
        Annotation::Names { items } => {
            let kana_items: Vec<&str> = suffix.kana.split(KANA_SEPARATOR).collect();
            if kana_items.len() != items.len() {
                debug!(
                    inner = %suffix.kanji,
                    kana = %suffix.kana,
                    "kanji and kana name counts differ, left unexpanded"
                );
                return vec![base];
            }
            items
                .iter()
                .zip(kana_items)
                .map(|(name, kana)| sibling(&base, name, kana))
                .collect()
        }
        Annotation::Unclassified => {
            debug!(inner = %suffix.kanji, "unclassified annotation dropped");
            vec![base]
        }
    }
}

/// Sibling for one number of a range or list: `１` + `丁目` / `1` + `ﾁｮｳﾒ`.
fn numbered(base: &Record, kanji_number: &str, n: u32, unit: Unit) -> Record {
    let mut record = base.clone();
    record.street.push_str(kanji_number);
    record.street.push_str(unit.word());
    record.street_kana.push_str(&n.to_string());
    record.street_kana.push_str(unit.kana());
    record
}

fn sibling(base: &Record, kanji: &str, kana: &str) -> Record {
    let mut record = base.clone();
    record.street.push_str(kanji);
    record.street_kana.push_str(kana);
    record
}
