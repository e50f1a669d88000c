use kenall_wire::{QuoteMask, join_fields, split_fields};
use serde::Serialize;

use crate::error::TypeError;
use crate::flags::{self, UpdateReason, UpdateStatus};

/// Number of columns in a row. Rows of any other width are rejected.
pub const COLUMN_COUNT: usize = 15;

/// Columns written with quotes: the legacy zip, the zip, and the six
/// kana/kanji name columns. The admin code and the flags stay bare.
const QUOTED_COLUMNS: QuoteMask = QuoteMask::span(1, 8);

/// One postal-code row.
///
/// Column layout, in file order:
///
/// ```text
/// ┌─────┬───────────────────┬──────────────────────────────────────────┐
/// │ Col │ Field             │ Content                                  │
/// ├─────┼───────────────────┼──────────────────────────────────────────┤
/// │  0  │ jis_code          │ local government code (5 digits)         │
/// │  1  │ old_zip_code      │ legacy 5-digit zip, space padded         │
/// │  2  │ zip_code          │ 7-digit zip                              │
/// │  3  │ pref_kana         │ prefecture, halfwidth katakana           │
/// │  4  │ city_kana         │ city, halfwidth katakana                 │
/// │  5  │ street_kana       │ street, halfwidth katakana               │
/// │  6  │ pref              │ prefecture, kanji                        │
/// │  7  │ city              │ city, kanji                              │
/// │  8  │ street            │ street, kanji                            │
/// │  9  │ multi_zip_flag    │ one street spans several zips            │
/// │ 10  │ koaza_flag        │ lots numbered per sub-area (koaza)       │
/// │ 11  │ chome_flag        │ street has chōme blocks                  │
/// │ 12  │ multi_street_flag │ one zip covers several streets           │
/// │ 13  │ update_flag       │ see [`UpdateStatus`]                     │
/// │ 14  │ update_reason     │ see [`UpdateReason`]                     │
/// └─────┴───────────────────┴──────────────────────────────────────────┘
/// ```
///
/// `pref_code` is not a column. It is derived from the first two
/// characters of `jis_code` at decode time and is not written back.
///
/// All identifiers are kept as opaque text; nothing here checks that a zip
/// is seven digits or that a flag is in range.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub jis_code: String,
    pub old_zip_code: String,
    pub zip_code: String,
    pub pref_kana: String,
    pub city_kana: String,
    pub street_kana: String,
    pub pref: String,
    pub city: String,
    pub street: String,
    #[serde(skip_serializing)]
    pub multi_zip_flag: String,
    #[serde(skip_serializing)]
    pub koaza_flag: String,
    #[serde(skip_serializing)]
    pub chome_flag: String,
    #[serde(skip_serializing)]
    pub multi_street_flag: String,
    #[serde(rename = "update_flg")]
    pub update_flag: String,
    pub update_reason: String,
    pub pref_code: String,
}

impl Record {
    /// Parse one line into a record.
    ///
    /// When `trim` is set every field loses leading and trailing whitespace
    /// (including the ideographic space) before it is stored.
    ///
    /// # Errors
    ///
    /// - [`TypeError::Wire`] if the line's quoting is broken.
    /// - [`TypeError::ColumnCount`] if the line does not hold exactly
    ///   [`COLUMN_COUNT`] fields.
    pub fn decode(line: &str, trim: bool) -> Result<Self, TypeError> {
        Self::from_fields(split_fields(line)?, trim)
    }

    /// Build a record from already-split fields.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::ColumnCount`] if `fields` does not hold exactly
    /// [`COLUMN_COUNT`] entries.
    pub fn from_fields(fields: Vec<String>, trim: bool) -> Result<Self, TypeError> {
        let found = fields.len();
        let Ok(cols) = <[String; COLUMN_COUNT]>::try_from(fields) else {
            return Err(TypeError::ColumnCount {
                expected: COLUMN_COUNT,
                found,
            });
        };

        let cols = if trim {
            cols.map(|c| {
                let trimmed = c.trim();
                if trimmed.len() == c.len() { c } else { trimmed.to_string() }
            })
        } else {
            cols
        };

        let [
            jis_code,
            old_zip_code,
            zip_code,
            pref_kana,
            city_kana,
            street_kana,
            pref,
            city,
            street,
            multi_zip_flag,
            koaza_flag,
            chome_flag,
            multi_street_flag,
            update_flag,
            update_reason,
        ] = cols;

        let pref_code = jis_code.chars().take(2).collect();

        Ok(Self {
            jis_code,
            old_zip_code,
            zip_code,
            pref_kana,
            city_kana,
            street_kana,
            pref,
            city,
            street,
            multi_zip_flag,
            koaza_flag,
            chome_flag,
            multi_street_flag,
            update_flag,
            update_reason,
            pref_code,
        })
    }

    /// The column values in file order.
    #[must_use]
    pub fn fields(&self) -> [&str; COLUMN_COUNT] {
        [
            &self.jis_code,
            &self.old_zip_code,
            &self.zip_code,
            &self.pref_kana,
            &self.city_kana,
            &self.street_kana,
            &self.pref,
            &self.city,
            &self.street,
            &self.multi_zip_flag,
            &self.koaza_flag,
            &self.chome_flag,
            &self.multi_street_flag,
            &self.update_flag,
            &self.update_reason,
        ]
    }

    /// Serialize back to one line, without a terminator.
    ///
    /// Inverse of [`decode`](Self::decode) with `trim = false` for any
    /// record whose `pref_code` was derived from its `jis_code`.
    #[must_use]
    pub fn encode(&self) -> String {
        join_fields(&self.fields(), QUOTED_COLUMNS)
    }

    /// One street is served by more than one zip code.
    #[must_use]
    pub fn has_multiple_zip_codes(&self) -> bool {
        flags::is_set(&self.multi_zip_flag)
    }

    /// Lot numbers restart in each sub-area (koaza) of the street.
    #[must_use]
    pub fn is_numbered_per_koaza(&self) -> bool {
        flags::is_set(&self.koaza_flag)
    }

    /// The street is divided into chōme blocks.
    #[must_use]
    pub fn has_chome(&self) -> bool {
        flags::is_set(&self.chome_flag)
    }

    /// This zip code covers more than one street.
    #[must_use]
    pub fn zip_covers_multiple_streets(&self) -> bool {
        flags::is_set(&self.multi_street_flag)
    }

    #[must_use]
    pub fn update_status(&self) -> Option<UpdateStatus> {
        UpdateStatus::from_flag(&self.update_flag)
    }

    #[must_use]
    pub fn update_reason(&self) -> Option<UpdateReason> {
        UpdateReason::from_flag(&self.update_reason)
    }
}
