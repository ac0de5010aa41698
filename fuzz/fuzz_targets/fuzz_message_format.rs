#![no_main]

use libfuzzer_sys::fuzz_target;
use omp_crypto::ConfigurableHasher;
use omp_format::{decode_envelope, parse_envelope, validate_envelope, validate_format};

fuzz_target!(|data: &[u8]| {
    // Format validation must be total: any JSON yields Ok or a FormatError.
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(message) = parse_envelope(text, 64 * 1024) else {
        return;
    };

    let _ = validate_envelope(&message);
    if let Ok(action_type) = validate_format(&message) {
        // A message that passes the format check must decode and hash.
        assert!(decode_envelope(&message).is_ok());
        assert!(ConfigurableHasher::hash_action(&message["action"], action_type).is_ok());
    }
});
