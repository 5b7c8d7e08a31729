//! Slack message composition

pub mod compose;
pub mod custom;

pub use compose::compose;
pub use custom::CustomPayload;
