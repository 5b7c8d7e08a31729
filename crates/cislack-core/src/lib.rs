//! # cislack Core
//!
//! Slack notifications for GitHub Actions workflow runs.
//!
//! The library is split into a pure part and a thin I/O boundary:
//! - **Context extraction** turns the run context and event payload into
//!   ordered mrkdwn fields
//! - **Composition** picks one of four message shapes from the color and
//!   verbosity inputs, or forwards a custom Block Kit payload
//! - **Dispatch** posts the composed request with one `chat.postMessage` call
//!
//! ## Example
//!
//! ```no_run
//! use cislack_core::{notify, ActionInputs, DispatchConfig, RunContext, SlackApiClient};
//!
//! # async fn example() -> cislack_core::Result<()> {
//! let inputs = ActionInputs {
//!     channel: "#builds",
//!     message: "Build failed",
//!     color: "red",
//!     verbose: "true",
//!     ..Default::default()
//! };
//! let config = DispatchConfig::from_inputs(&inputs)?;
//! let ctx = RunContext::from_env()?;
//! let client = SlackApiClient::new(
//!     "https://slack.com/api".to_string(),
//!     std::env::var("SLACK_TOKEN").unwrap_or_default(),
//! );
//!
//! let response = notify(&client, &config, &ctx).await?;
//! println!("Posted message {:?}", response.ts);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod color;
pub mod context;
pub mod error;
pub mod http;
pub mod inputs;
pub mod message;
pub mod output;
pub mod types;

pub use context::{extract_context, PayloadKind, RunContext};
pub use error::{Error, ErrorKind, Result};
pub use http::{PostMessageResponse, SlackApiClient};
pub use inputs::ActionInputs;
pub use message::{compose, CustomPayload};
pub use types::{
    Attachment, Block, ContextElement, DispatchConfig, MessageRequest, MrkdwnText, Presentation,
    SectionBlock,
};

/// Build the `chat.postMessage` request for a run
///
/// Pure: extracts the context elements and composes the message. No I/O.
pub fn build_request(config: &DispatchConfig<'_>, ctx: &RunContext) -> MessageRequest {
    let elements = extract_context(ctx);
    compose(config, &elements)
}

/// Compose and post the notification for a run
///
/// # Example
///
/// ```no_run
/// use cislack_core::{notify, DispatchConfig, RunContext, SlackApiClient};
/// use std::borrow::Cow;
///
/// # async fn example() -> cislack_core::Result<()> {
/// let config = DispatchConfig {
///     channel: Cow::Borrowed("builds"),
///     message: Cow::Borrowed("Deployed"),
///     ..Default::default()
/// };
/// let client = SlackApiClient::new("https://slack.com/api".into(), "xoxb-...".into());
/// notify(&client, &config, &RunContext::from_env()?).await?;
/// # Ok(())
/// # }
/// ```
pub async fn notify(
    client: &SlackApiClient,
    config: &DispatchConfig<'_>,
    ctx: &RunContext,
) -> Result<PostMessageResponse> {
    let request = build_request(config, ctx);
    client.post_message(&request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn test_build_request_custom_payload_skips_context() {
        let divider = serde_json::json!({"type": "divider"});
        let config = DispatchConfig {
            channel: Cow::Borrowed("builds"),
            message: Cow::Borrowed("fallback"),
            color: Cow::Borrowed("red"),
            verbose: true,
            custom_payload: Some(CustomPayload {
                blocks: vec![divider.clone()],
            }),
            ..Default::default()
        };
        let request = build_request(&config, &RunContext::default());

        assert_eq!(request.text, "fallback");
        assert!(request.attachments.is_none());
        match request.blocks.as_deref() {
            Some([Block::Raw(raw)]) => assert_eq!(raw, &divider),
            other => panic!("unexpected blocks: {:?}", other),
        }
    }

    #[test]
    fn test_build_request_verbose_has_context_fields() {
        let config = DispatchConfig {
            channel: Cow::Borrowed("builds"),
            message: Cow::Borrowed("done"),
            verbose: true,
            ..Default::default()
        };
        let ctx = RunContext {
            owner: "o".into(),
            repo: "r".into(),
            ..Default::default()
        };
        let request = build_request(&config, &ctx);
        match request.blocks.as_deref() {
            Some([Block::Section(section)]) => assert_eq!(section.fields.len(), 5),
            other => panic!("unexpected blocks: {:?}", other),
        }
    }
}
