//! HTTP client for the Slack Web API

pub mod client;

pub use client::{PostMessageResponse, SlackApiClient, DEFAULT_API_URL};
