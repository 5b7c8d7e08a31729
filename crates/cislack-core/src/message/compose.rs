//! Message composition
//!
//! Turns a [`DispatchConfig`] and the run's context elements into a
//! `chat.postMessage` request. Slack only renders colored side bars on
//! legacy attachments, and only top-level or attachment-nested blocks can
//! carry a field grid, which is what the four presentations encode.

use crate::color::is_hex_color;
use crate::types::{
    Attachment, Block, ContextElement, DispatchConfig, MessageRequest, MrkdwnText, Presentation,
    SectionBlock,
};

/// Compose the request for one notification.
///
/// A custom payload short-circuits everything else. Otherwise the
/// `(colored, verbose)` pair picks one of four shapes:
///
/// | colored | verbose | fallback text | body |
/// |---|---|---|---|
/// | no  | no  | message | none |
/// | no  | yes | empty   | section block with text and fields |
/// | yes | no  | empty   | attachment with text |
/// | yes | yes | message | attachment with a fields section |
pub fn compose(config: &DispatchConfig<'_>, elements: &[ContextElement]) -> MessageRequest {
    let mut request = MessageRequest {
        channel: config.channel.to_string(),
        text: config.message.to_string(),
        username: config.username.to_string(),
        link_names: true,
        unfurl_links: config.unfurl,
        unfurl_media: config.unfurl,
        blocks: None,
        attachments: None,
    };

    if let Some(custom) = &config.custom_payload {
        tracing::debug!(blocks = custom.blocks.len(), "using custom payload");
        request.blocks = Some(custom.blocks.iter().cloned().map(Block::Raw).collect());
        return request;
    }

    let presentation = Presentation::select(is_hex_color(&config.color), config.verbose);
    tracing::debug!(presentation = presentation.as_str(), "composing message");

    match presentation {
        Presentation::Plain => {}
        Presentation::Detailed => {
            request.text.clear();
            request.blocks = Some(vec![Block::Section(SectionBlock {
                text: Some(MrkdwnText::new(config.message.as_ref())),
                fields: elements.to_vec(),
            })]);
        }
        Presentation::Colored => {
            request.text.clear();
            request.attachments = Some(vec![Attachment {
                color: config.color.to_string(),
                text: Some(config.message.to_string()),
                blocks: None,
            }]);
        }
        Presentation::ColoredDetailed => {
            request.attachments = Some(vec![Attachment {
                color: config.color.to_string(),
                text: None,
                blocks: Some(vec![Block::Section(SectionBlock {
                    text: None,
                    fields: elements.to_vec(),
                })]),
            }]);
        }
    }

    request
}
