#![no_main]
use cislack_core::CustomPayload;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = CustomPayload::parse(s);
    }
});
