//! Caller-supplied `custom_payload` override

use crate::error::{Error, Result};
use serde::Deserialize;

/// Pre-built Block Kit content that replaces all formatting
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomPayload {
    /// Blocks forwarded verbatim
    pub blocks: Vec<serde_json::Value>,
}

impl CustomPayload {
    /// Parse the raw `custom_payload` input.
    ///
    /// Blank input means no override. Anything else must be a JSON object
    /// carrying a `blocks` array.
    pub fn parse(raw: &str) -> Result<Option<Self>> {
        if raw.trim().is_empty() {
            return Ok(None);
        }

        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| Error::CustomPayload(e.to_string()))?;
        if !value.get("blocks").is_some_and(serde_json::Value::is_array) {
            return Err(Error::CustomPayload(
                "expected a JSON object with a \"blocks\" array".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| Error::CustomPayload(e.to_string()))
    }
}
