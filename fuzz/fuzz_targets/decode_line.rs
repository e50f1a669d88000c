#![no_main]

use kenall_types::Record;
use libfuzzer_sys::fuzz_target;

/// Columns written without quotes; a delimiter or quote in them cannot
/// survive encode.
const UNQUOTED: [usize; 7] = [0, 9, 10, 11, 12, 13, 14];

// Fuzz target: Row Codec decode, then encode → decode on success.
//
// Catches bugs in:
// - Column counting around quoted delimiters
// - Prefecture-code derivation on short admin codes
// - Trimming of multi-byte whitespace
fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };
    for trim in [false, true] {
        let Ok(record) = Record::decode(line, trim) else {
            continue;
        };
        let fields = record.fields();
        if UNQUOTED.iter().any(|&i| fields[i].contains([',', '"'])) {
            continue;
        }
        let again = Record::decode(&record.encode(), false);
        assert_eq!(again.as_ref(), Ok(&record));
    }
});
