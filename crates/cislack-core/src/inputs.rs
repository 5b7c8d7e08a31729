//! Raw action inputs and their conversion into a [`DispatchConfig`]

use crate::color::resolve_color;
use crate::error::{Error, Result};
use crate::message::custom::CustomPayload;
use crate::types::DispatchConfig;
use std::borrow::Cow;

/// Action inputs as strings, exactly as the runner hands them over
#[derive(Debug, Clone, Default)]
pub struct ActionInputs<'a> {
    /// Target channel, `#` prefix optional
    pub channel: &'a str,
    /// Message text (required)
    pub message: &'a str,
    /// Sender display name
    pub username: &'a str,
    /// Named color, hex code, or anything else
    pub color: &'a str,
    /// `"true"` enables the context grid
    pub verbose: &'a str,
    /// Anything but `"false"` unfurls links
    pub unfurl: &'a str,
    /// Empty, or JSON `{"blocks": [...]}`
    pub custom_payload: &'a str,
}

/// `true` only for the literal `"true"`
#[inline]
pub fn parse_verbose(raw: &str) -> bool {
    raw == "true"
}

/// `false` only for the literal `"false"`
#[inline]
pub fn parse_unfurl(raw: &str) -> bool {
    raw != "false"
}

/// Strip one leading `#` from a channel name
#[inline]
pub fn normalize_channel(channel: &str) -> &str {
    channel.strip_prefix('#').unwrap_or(channel)
}

impl<'a> DispatchConfig<'a> {
    /// Validate and type the raw inputs.
    ///
    /// Fails on an empty message or a malformed custom payload.
    pub fn from_inputs(inputs: &ActionInputs<'a>) -> Result<Self> {
        if inputs.message.is_empty() {
            return Err(Error::Config("input 'message' is required".to_string()));
        }

        Ok(Self {
            channel: Cow::Borrowed(normalize_channel(inputs.channel)),
            message: Cow::Borrowed(inputs.message),
            username: Cow::Borrowed(inputs.username),
            color: resolve_color(inputs.color),
            verbose: parse_verbose(inputs.verbose),
            unfurl: parse_unfurl(inputs.unfurl),
            custom_payload: CustomPayload::parse(inputs.custom_payload)?,
        })
    }
}
