//! Engine-level properties, checked through the public crate APIs.
//!
//! Each test builds records the way the driver does (`Record::decode`) and
//! drives a [`Normalizer`] by hand, so push/pop timing is observable.

use kenall_normalizer::{MAX_FAN_OUT, Normalizer};
use kenall_tests::{LIST, MULTI_ROW, NAMES, PLAIN, RANGE, WHOLE_AREA, all_fixtures};
use kenall_types::{COLUMN_COUNT, Record, TypeError};

fn decode(line: &str) -> Record {
    Record::decode(line, true).unwrap()
}

fn drain(normalizer: &mut Normalizer) -> Vec<Record> {
    std::iter::from_fn(|| normalizer.pop()).collect()
}

fn push_all(lines: &[&str]) -> Vec<Record> {
    let mut normalizer = Normalizer::new();
    let mut out = Vec::new();
    for line in lines {
        normalizer.push(decode(line));
        out.extend(drain(&mut normalizer));
    }
    normalizer.finish().unwrap();
    out
}

fn with_street(street: &str, kana: &str) -> Record {
    let mut record = decode(PLAIN);
    record.street = street.to_string();
    record.street_kana = kana.to_string();
    record
}

// ── Row codec ─────────────────────────────────────────────────────────────────

#[test]
fn round_trip_plain_record() {
    let record = decode(PLAIN);
    assert_eq!(Record::decode(&record.encode(), true).unwrap(), record);
}

#[test]
fn round_trip_every_field_shape() {
    let mut record = decode(PLAIN);
    record.city = "札幌市,中央区".to_string();
    record.street = "旭\"ケ\"丘".to_string();
    record.street_kana = String::new();

    let encoded = record.encode();
    assert_eq!(Record::decode(&encoded, false).unwrap(), record);
}

#[test]
fn column_count_is_enforced() {
    let fields: Vec<&str> = PLAIN.split(',').collect();
    assert_eq!(fields.len(), COLUMN_COUNT);

    for count in [1, COLUMN_COUNT - 1, COLUMN_COUNT + 1, COLUMN_COUNT + 5] {
        let line = (0..count)
            .map(|i| fields[i % COLUMN_COUNT])
            .collect::<Vec<_>>()
            .join(",");
        match Record::decode(&line, true) {
            Err(TypeError::ColumnCount { expected, found }) => {
                assert_eq!(expected, COLUMN_COUNT);
                assert_eq!(found, count);
            }
            other => panic!("{count} columns should fail, got {other:?}"),
        }
    }
}

#[test]
fn every_fixture_decodes() {
    for line in all_fixtures() {
        let record = Record::decode(line, false).unwrap();
        assert_eq!(record.fields().len(), COLUMN_COUNT);
        assert_eq!(record.pref_code, "01");
    }
}

// ── Range expansion ───────────────────────────────────────────────────────────

#[test]
fn range_yields_one_record_per_number() {
    let out = push_all(&[RANGE]);
    let base = decode(RANGE);

    assert_eq!(out.len(), 3);
    for (i, record) in out.iter().enumerate() {
        let n = i + 1;
        assert_eq!(record.street, format!("大通西{}丁目", ["１", "２", "３"][i]));
        assert_eq!(record.street_kana, format!("ｵｵﾄﾞｵﾘﾆｼ{n}ﾁｮｳﾒ"));

        let mut rest = record.clone();
        rest.street.clone_from(&base.street);
        rest.street_kana.clone_from(&base.street_kana);
        assert_eq!(rest, base, "siblings differ only in the street names");
    }
}

#[test]
fn range_at_the_cap_is_expanded() {
    let mut normalizer = Normalizer::new();
    normalizer.push(with_street("本町（１～９９丁目）", "ﾎﾝﾁｮｳ(1-99ﾁｮｳﾒ)"));
    let out = drain(&mut normalizer);

    assert_eq!(out.len(), usize::try_from(MAX_FAN_OUT).unwrap());
    assert_eq!(out[0].street, "本町１丁目");
    assert_eq!(out[98].street, "本町９９丁目");
    assert_eq!(out[98].street_kana, "ﾎﾝﾁｮｳ99ﾁｮｳﾒ");
}

#[test]
fn range_over_the_cap_is_stripped() {
    let mut normalizer = Normalizer::new();
    normalizer.push(with_street("本町（１～１００番地）", "ﾎﾝﾁｮｳ(1-100ﾊﾞﾝﾁ)"));
    let out = drain(&mut normalizer);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].street, "本町");
    assert_eq!(out[0].street_kana, "ﾎﾝﾁｮｳ");
}

#[test]
fn inverted_range_yields_nothing() {
    let mut normalizer = Normalizer::new();
    normalizer.push(with_street("本町（５～３丁目）", "ﾎﾝﾁｮｳ(5-3ﾁｮｳﾒ)"));
    assert!(!normalizer.can_pop());
    assert_eq!(normalizer.pending_len(), 0);
}

// ── List, names and clearing ──────────────────────────────────────────────────

#[test]
fn list_expands_in_order() {
    let out = push_all(&[LIST]);
    let streets: Vec<(&str, &str)> = out
        .iter()
        .map(|r| (r.street.as_str(), r.street_kana.as_str()))
        .collect();

    assert_eq!(
        streets,
        [
            ("栄町１丁目", "ｻｶｴﾏﾁ1ﾁｮｳﾒ"),
            ("栄町３丁目", "ｻｶｴﾏﾁ3ﾁｮｳﾒ"),
            ("栄町５丁目", "ｻｶｴﾏﾁ5ﾁｮｳﾒ"),
        ]
    );
}

#[test]
fn names_pair_kanji_with_kana() {
    let out = push_all(&[NAMES]);
    assert_eq!(out.len(), 2);
    assert_eq!((out[0].street.as_str(), out[0].street_kana.as_str()), ("大町南", "ｵｵﾏﾁﾐﾅﾐ"));
    assert_eq!((out[1].street.as_str(), out[1].street_kana.as_str()), ("大町北", "ｵｵﾏﾁｷﾀ"));
}

#[test]
fn whole_area_clears_both_street_names() {
    let out = push_all(&[WHOLE_AREA]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].street, "");
    assert_eq!(out[0].street_kana, "");
    assert_eq!(out[0].zip_code, "0600000");
}

// ── Continuation stitching ────────────────────────────────────────────────────

#[test]
fn two_row_continuation_is_held_until_closed() {
    let mut normalizer = Normalizer::new();

    normalizer.push(with_street("大通西（", "ｵｵﾄﾞｵﾘﾆｼ("));
    assert!(!normalizer.can_pop());
    assert_eq!(normalizer.pending_len(), 1);

    normalizer.push(with_street("１～２丁目）", "1-2ﾁｮｳﾒ)"));
    assert!(normalizer.can_pop());

    let out = drain(&mut normalizer);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].street, "大通西１丁目");
    assert_eq!(out[1].street_kana, "ｵｵﾄﾞｵﾘﾆｼ2ﾁｮｳﾒ");
    normalizer.finish().unwrap();
}

#[test]
fn three_row_continuation_collapses_to_one() {
    let mut normalizer = Normalizer::new();

    normalizer.push(decode(MULTI_ROW[0]));
    normalizer.push(decode(MULTI_ROW[1]));
    assert!(!normalizer.can_pop());
    assert_eq!(normalizer.pending_len(), 2);

    normalizer.push(decode(MULTI_ROW[2]));
    let out = drain(&mut normalizer);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].street, "協和");
    assert_eq!(out[0].street_kana, "ｷｮｳﾜ");
    assert_eq!(out[0].zip_code, "0660005");
}

#[test]
fn unterminated_continuation_fails_finish() {
    let mut normalizer = Normalizer::new();
    normalizer.push(decode(MULTI_ROW[0]));
    normalizer.push(decode(MULTI_ROW[1]));
    assert!(normalizer.finish().is_err());
}

// ── Ordering ──────────────────────────────────────────────────────────────────

#[test]
fn output_order_follows_input_order() {
    let out = push_all(&[RANGE, PLAIN, MULTI_ROW[0], MULTI_ROW[1], MULTI_ROW[2], LIST]);

    let zips: Vec<&str> = out.iter().map(|r| r.zip_code.as_str()).collect();
    assert_eq!(
        zips,
        [
            "0600042", "0600042", "0600042", "0640941", "0660005", "0400061", "0400061",
            "0400061",
        ]
    );
}

#[test]
fn open_continuation_absorbs_rows_until_closed() {
    let mut normalizer = Normalizer::new();
    normalizer.push(decode(MULTI_ROW[0]));
    normalizer.push(decode(PLAIN));
    assert!(!normalizer.can_pop(), "a later record must not overtake");

    normalizer.push(decode(MULTI_ROW[2]));
    let out = drain(&mut normalizer);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].zip_code, "0660005");
    assert_eq!(out[0].street, "協和");
}
