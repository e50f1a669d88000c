use kenall_types::Record;
use unicode_normalization::UnicodeNormalization;

/// Unify letter widths: halfwidth katakana become fullwidth (with voiced
/// marks composed), fullwidth ASCII letters, digits and punctuation become
/// ASCII, and the ideographic space becomes a plain space.
///
/// Implemented as Unicode NFKC, which also folds the few other
/// compatibility characters (circled digits, ligatures) that can appear
/// in place names.
#[must_use]
pub fn fold_width(text: &str) -> String {
    text.nfkc().collect()
}

/// Fold every column of `record` in place.
///
/// Folding happens per field rather than on the encoded line, so a
/// fullwidth comma or quote that folds to ASCII is still escaped
/// correctly when the record is encoded.
pub fn fold_record(record: &mut Record) {
    for field in [
        &mut record.jis_code,
        &mut record.old_zip_code,
        &mut record.zip_code,
        &mut record.pref_kana,
        &mut record.city_kana,
        &mut record.street_kana,
        &mut record.pref,
        &mut record.city,
        &mut record.street,
        &mut record.multi_zip_flag,
        &mut record.koaza_flag,
        &mut record.chome_flag,
        &mut record.multi_street_flag,
        &mut record.update_flag,
        &mut record.update_reason,
        &mut record.pref_code,
    ] {
        if !field.is_ascii() {
            *field = fold_width(field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halfwidth_kana_widened_and_composed() {
        assert_eq!(fold_width("ﾎｯｶｲﾄﾞｳ"), "ホッカイドウ");
        assert_eq!(fold_width("ﾊﾞﾝﾁ"), "バンチ");
    }

    #[test]
    fn fullwidth_ascii_narrowed() {
        assert_eq!(fold_width("ＪＲタワー１２階"), "JRタワー12階");
        assert_eq!(fold_width("１～３"), "1~3");
    }

    #[test]
    fn kanji_untouched() {
        assert_eq!(fold_width("札幌市中央区"), "札幌市中央区");
    }

    #[test]
    fn halfwidth_comma_widened() {
        assert_eq!(fold_width("ﾐﾅﾐ､ｷﾀ"), "ミナミ、キタ");
    }

    #[test]
    fn folded_fullwidth_quote_still_escaped() {
        let mut record = Record {
            street: "＂大通＂".to_string(),
            ..Record::default()
        };
        fold_record(&mut record);
        assert_eq!(record.street, "\"大通\"");
        assert!(record.encode().contains(r#","""大通""","#));
    }
}
