#![no_main]

use kenall_driver::{DriverConfig, normalize_stream};
use libfuzzer_sys::fuzz_target;

// Fuzz target: full stream driver over arbitrary UTF-8 tables.
//
// Catches bugs in:
// - Continuation stitching across many open brackets
// - Byte-offset slicing of multi-byte street names
// - Digit parsing of oversized ranges and lists
// - Width folding of mixed-script fields
fuzz_target!(|data: &[u8]| {
    if std::str::from_utf8(data).is_err() {
        return;
    }
    let _ = normalize_stream(data, std::io::sink(), &DriverConfig::default());
});
