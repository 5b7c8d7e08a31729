#![no_main]
use cislack_core::{extract_context, PayloadKind, RunContext};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(payload) = serde_json::from_slice::<serde_json::Value>(data) {
        let kind = PayloadKind::classify(&payload);
        let ctx = RunContext {
            owner: "o".into(),
            repo: "r".into(),
            payload,
            ..Default::default()
        };
        let elements = extract_context(&ctx);
        assert_eq!(elements.len(), if kind.number().is_some() { 6 } else { 5 });
    }
});
