#![no_main]

use kenall_wire::{QuoteMask, join_fields, split_fields};
use libfuzzer_sys::fuzz_target;

// Fuzz target: line tokenizer, and join → split on every line it accepts.
//
// Catches bugs in:
// - Doubled-quote handling at field and line boundaries
// - Unterminated quoted fields
// - Quote characters inside unquoted fields
fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(fields) = split_fields(line) {
        let rejoined = join_fields(&fields, QuoteMask::from_raw(u32::MAX));
        assert_eq!(split_fields(&rejoined).as_ref(), Ok(&fields));
    }
});
