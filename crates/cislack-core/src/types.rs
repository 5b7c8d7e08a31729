//! Core type definitions for Slack message requests

use crate::message::custom::CustomPayload;
use serde::Serialize;
use std::borrow::Cow;

/// A Slack `mrkdwn` text object.
///
/// Context elements are plain `MrkdwnText` values; order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "mrkdwn")]
pub struct MrkdwnText {
    /// Rendered text in Slack's markup dialect
    pub text: String,
}

impl MrkdwnText {
    /// Create a new mrkdwn text object
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Labeled context element (repository, ref, workflow, ...)
pub type ContextElement = MrkdwnText;

/// Section block with optional body text and a field grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "section")]
pub struct SectionBlock {
    /// Body text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<MrkdwnText>,
    /// Two-column field grid
    pub fields: Vec<MrkdwnText>,
}

/// A Block Kit block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Block {
    /// Section composed from context elements
    Section(SectionBlock),
    /// Caller-supplied block, forwarded verbatim
    Raw(serde_json::Value),
}

/// Legacy attachment, the only way to get a colored side bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    /// Hex color of the side bar
    pub color: String,
    /// Inline attachment text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Nested blocks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<Block>>,
}

/// `chat.postMessage` request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRequest {
    /// Channel name or ID, without a leading `#`
    pub channel: String,
    /// Fallback text (notifications, clients without block support)
    pub text: String,
    /// Sender display name
    pub username: String,
    /// Link `@user` and `#channel` mentions
    pub link_names: bool,
    /// Unfurl text links
    pub unfurl_links: bool,
    /// Unfurl media links
    pub unfurl_media: bool,
    /// Top-level blocks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<Block>>,
    /// Legacy attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

/// Message shape chosen from the `(colored, verbose)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Presentation {
    /// Plain text message
    Plain,
    /// Uncolored section block with the context grid
    Detailed,
    /// Colored attachment carrying the message text
    Colored,
    /// Colored attachment wrapping the context grid
    ColoredDetailed,
}

impl Presentation {
    /// Select the presentation for a `(colored, verbose)` pair
    #[inline]
    pub const fn select(colored: bool, verbose: bool) -> Self {
        match (colored, verbose) {
            (false, false) => Self::Plain,
            (false, true) => Self::Detailed,
            (true, false) => Self::Colored,
            (true, true) => Self::ColoredDetailed,
        }
    }

    /// Get string representation
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Detailed => "detailed",
            Self::Colored => "colored",
            Self::ColoredDetailed => "colored_detailed",
        }
    }
}

/// Typed dispatch configuration
///
/// Built from raw action inputs by [`DispatchConfig::from_inputs`]; the
/// composer never sees the raw strings.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchConfig<'a> {
    /// Channel with any leading `#` removed
    pub channel: Cow<'a, str>,
    /// Message text
    pub message: Cow<'a, str>,
    /// Sender display name
    pub username: Cow<'a, str>,
    /// Color after named-color resolution
    pub color: Cow<'a, str>,
    /// Include the context grid
    pub verbose: bool,
    /// Unfurl links and media
    pub unfurl: bool,
    /// Pre-built blocks that bypass formatting entirely
    pub custom_payload: Option<CustomPayload>,
}

impl Default for DispatchConfig<'_> {
    fn default() -> Self {
        Self {
            channel: Cow::Borrowed(""),
            message: Cow::Borrowed(""),
            username: Cow::Borrowed(""),
            color: Cow::Borrowed(""),
            verbose: false,
            unfurl: true,
            custom_payload: None,
        }
    }
}
