#![no_main]

use dotemit::quote_id;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(quoted) = quote_id(raw) {
            // A quoted form must never leave an unescaped quote inside.
            if quoted.starts_with('"') {
                let inner = &quoted[1..quoted.len() - 1];
                assert!(!inner.replace("\\\"", "").contains('"'));
            }
        }
    }
});
