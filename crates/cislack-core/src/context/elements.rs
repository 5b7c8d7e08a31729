//! Context element extraction
//!
//! Renders the run context as an ordered list of mrkdwn fields:
//! Repository, Ref, Workflow, Event, Action and, for issue or pull
//! request events, Number.

use super::payload::PayloadKind;
use super::RunContext;
use crate::types::ContextElement;

/// Links derived from the repository URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLinks {
    /// `{server}/{owner}/{repo}`
    pub repository: String,
    /// Run list filtered by workflow name
    pub workflow: String,
    /// Run list filtered by triggering event
    pub event: String,
    /// This run
    pub run: String,
}

impl RunLinks {
    /// Build all links for a run context
    pub fn new(ctx: &RunContext) -> Self {
        let repository = format!(
            "{}/{}/{}",
            ctx.server_url.trim_end_matches('/'),
            ctx.owner,
            ctx.repo
        );
        let workflow = format!(
            "{}/actions?query=workflow%3A%22{}%22",
            repository,
            urlencoding::encode(&ctx.workflow)
        );
        let event = format!(
            "{}/actions?query=event%3A{}",
            repository,
            urlencoding::encode(&ctx.event_name)
        );
        let run = format!("{}/actions/runs/{}", repository, ctx.run_id);

        Self {
            repository,
            workflow,
            event,
            run,
        }
    }

    /// Link to the issue or pull request, if the payload names one
    pub fn number(&self, kind: PayloadKind) -> Option<String> {
        let segment = kind.path_segment()?;
        let number = kind.number()?;
        Some(format!("{}/{}/{}", self.repository, segment, number))
    }
}

#[inline]
fn field(label: &str, value: &str) -> ContextElement {
    ContextElement::new(format!("*{label}*\n{value}"))
}

#[inline]
fn linked_field(label: &str, url: &str, text: &str) -> ContextElement {
    ContextElement::new(format!("*{label}*\n<{url}|{text}>"))
}

/// Extract the context elements for a run.
///
/// Always five elements; a sixth (`Number`) when the payload describes an
/// issue or pull request. Pure string composition, never fails.
pub fn extract_context(ctx: &RunContext) -> Vec<ContextElement> {
    let links = RunLinks::new(ctx);
    let kind = PayloadKind::classify(&ctx.payload);

    let mut elements = Vec::with_capacity(6);
    elements.push(linked_field(
        "Repository",
        &links.repository,
        &format!("{}/{}", ctx.owner, ctx.repo),
    ));
    elements.push(field("Ref", &ctx.git_ref));
    elements.push(linked_field("Workflow", &links.workflow, &ctx.workflow));
    elements.push(linked_field("Event", &links.event, &ctx.event_name));
    elements.push(linked_field("Action", &links.run, "Link"));

    if let (Some(url), Some(number)) = (links.number(kind), kind.number()) {
        elements.push(linked_field("Number", &url, &format!("#{number}")));
    }

    tracing::debug!(
        elements = elements.len(),
        kind = ?kind,
        "extracted run context"
    );

    elements
}
