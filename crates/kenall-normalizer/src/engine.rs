use std::collections::VecDeque;

use kenall_types::Record;
use tracing::trace;

use crate::brackets::{closes_continuation, opens_continuation};
use crate::classifier::normalize_street;
use crate::error::NormalizeError;

/// Push/pop record normalizer.
///
/// Raw records go in with [`push`](Self::push); finished records come out
/// with [`pop`](Self::pop) in the order they were generated. One push can
/// make zero, one or many records ready.
///
/// ```text
///            push                       pop
///   Record ───────▶ pending ──advance──▶ ready ───────▶ Record
///                   (open                (FIFO)
///                    continuation)
/// ```
///
/// A record whose street name leaves a bracket open is held in `pending`
/// until a later record closes it. The street names of the whole run are
/// then concatenated onto the closing record, the earlier records are
/// dropped, and the joined record is classified like any other.
///
/// All work happens inside `push`; nothing blocks or yields. One instance
/// serves one input stream.
#[derive(Debug, Default)]
pub struct Normalizer {
    pending: VecDeque<Record>,
    ready: VecDeque<Record>,
}

impl Normalizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw record and normalize as far as the input allows.
    pub fn push(&mut self, record: Record) {
        self.pending.push_back(record);
        self.advance();
    }

    /// Whether a normalized record is waiting.
    #[must_use]
    pub fn can_pop(&self) -> bool {
        !self.ready.is_empty()
    }

    /// Take the oldest normalized record, `None` if nothing is ready.
    pub fn pop(&mut self) -> Option<Record> {
        self.ready.pop_front()
    }

    /// Raw records held back by an open continuation.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// End the run.
    ///
    /// Records still in the ready queue are discarded, so drain with
    /// [`pop`](Self::pop) first.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::UnterminatedContinuation`] if a street name
    /// was opened and never closed.
    pub fn finish(self) -> Result<(), NormalizeError> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(NormalizeError::UnterminatedContinuation {
                pending: self.pending.len(),
            })
        }
    }

    fn advance(&mut self) {
        while let Some(front) = self.pending.front() {
            if opens_continuation(&front.street) {
                // A stitched record is examined again: its closing row may
                // itself have opened the next continuation.
                if self.stitch() {
                    continue;
                }
                return;
            }
            let Some(record) = self.pending.pop_front() else {
                return;
            };
            self.ready.extend(normalize_street(record));
        }
    }

    /// Join the open continuation at the front of `pending` onto its
    /// closing record. Returns `false` if no closing record has arrived.
    fn stitch(&mut self) -> bool {
        let Some(end) = self
            .pending
            .iter()
            .skip(1)
            .position(|r| closes_continuation(&r.street))
            .map(|i| i + 1)
        else {
            trace!(pending = self.pending.len(), "continuation still open");
            return false;
        };

        let mut street = String::new();
        let mut street_kana = String::new();
        for record in self.pending.range(..=end) {
            street.push_str(&record.street);
            street_kana.push_str(&record.street_kana);
        }

        self.pending.drain(..end);
        if let Some(closing) = self.pending.front_mut() {
            trace!(rows = end + 1, street = %street, "continuation joined");
            closing.street = street;
            closing.street_kana = street_kana;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(zip: &str, street: &str, kana: &str) -> Record {
        Record {
            zip_code: zip.to_string(),
            street: street.to_string(),
            street_kana: kana.to_string(),
            ..Record::default()
        }
    }

    fn drain(normalizer: &mut Normalizer) -> Vec<(String, String, String)> {
        let mut out = Vec::new();
        while normalizer.can_pop() {
            let r = normalizer.pop().unwrap();
            out.push((r.zip_code, r.street, r.street_kana));
        }
        out
    }

    #[test]
    fn plain_record_ready_immediately() {
        let mut n = Normalizer::new();
        n.push(record("1", "北七条西", "ｷﾀ7ｼﾞｮｳﾆｼ"));
        assert!(n.can_pop());
        assert_eq!(n.pop().unwrap().street, "北七条西");
        assert!(!n.can_pop());
        assert_eq!(n.pop(), None);
        assert!(n.finish().is_ok());
    }

    #[test]
    fn continuation_held_until_closed() {
        let mut n = Normalizer::new();
        n.push(record("1", "大通（南", "ｵｵﾄﾞｵﾘ(ﾐﾅﾐ"));
        assert!(!n.can_pop());
        assert_eq!(n.pending_len(), 1);

        n.push(record("2", "、北）", "､ｷﾀ)"));
        assert_eq!(n.pending_len(), 0);
        assert_eq!(
            drain(&mut n),
            vec![
                ("2".into(), "大通南".into(), "ｵｵﾄﾞｵﾘﾐﾅﾐ".into()),
                ("2".into(), "大通北".into(), "ｵｵﾄﾞｵﾘｷﾀ".into()),
            ]
        );
    }

    #[test]
    fn continuation_over_three_rows() {
        let mut n = Normalizer::new();
        n.push(record("1", "栄町（１、", "ｻｶｴﾏﾁ(1､"));
        n.push(record("2", "３、", "3､"));
        assert!(!n.can_pop());
        assert_eq!(n.pending_len(), 2);
        n.push(record("3", "５丁目）", "5ﾁｮｳﾒ)"));
        let out = drain(&mut n);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|(zip, _, _)| zip == "3"));
        assert_eq!(out[2].1, "栄町５丁目");
    }

    #[test]
    fn closing_row_reopening_keeps_accumulating() {
        let mut n = Normalizer::new();
        n.push(record("1", "本町（その他", ""));
        n.push(record("2", "）大通（", ""));
        assert!(!n.can_pop());
        assert_eq!(n.pending_len(), 1);
        n.push(record("3", "その他）", ""));
        assert_eq!(
            drain(&mut n),
            vec![("3".into(), "本町（その他）大通".into(), String::new())]
        );
    }

    #[test]
    fn records_after_closed_continuation_flow_in_order() {
        let mut n = Normalizer::new();
        n.push(record("1", "旭町", ""));
        n.push(record("2", "大通（", ""));
        n.push(record("3", "その他）", ""));
        n.push(record("4", "栄町（１～２丁目）", ""));
        let zips: Vec<String> = drain(&mut n).into_iter().map(|(z, _, _)| z).collect();
        assert_eq!(zips, vec!["1", "3", "4", "4"]);
    }

    #[test]
    fn fifo_across_pushes() {
        let mut n = Normalizer::new();
        n.push(record("1", "栄町（１～２丁目）", ""));
        n.push(record("2", "旭町", ""));
        let streets: Vec<String> = drain(&mut n).into_iter().map(|(_, s, _)| s).collect();
        assert_eq!(streets, vec!["栄町１丁目", "栄町２丁目", "旭町"]);
    }

    #[test]
    fn unterminated_continuation_reported() {
        let mut n = Normalizer::new();
        n.push(record("1", "大通（南", ""));
        n.push(record("2", "、北", ""));
        assert_eq!(
            n.finish(),
            Err(NormalizeError::UnterminatedContinuation { pending: 2 })
        );
    }

    #[test]
    fn stray_closing_bracket_is_not_a_continuation() {
        let mut n = Normalizer::new();
        n.push(record("1", "北）", ""));
        assert_eq!(drain(&mut n).len(), 1);
    }
}
