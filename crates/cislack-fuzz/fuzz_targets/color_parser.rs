#![no_main]
use cislack_core::color::{is_hex_color, resolve_color};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let resolved = resolve_color(s);
        if is_hex_color(&resolved) {
            assert!(resolved.starts_with('#'));
            assert!(resolved.len() == 4 || resolved.len() == 7);
        }
    }
});
