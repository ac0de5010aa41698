#![no_main]

use libfuzzer_sys::fuzz_target;
use omp_sequence::SequenceVerifier;

fuzz_target!(|data: &[u8]| {
    // One message per line; the verifier must never panic.
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let messages: Vec<&str> = text.lines().collect();
    let _ = SequenceVerifier::default().validate_json(&messages);
});
