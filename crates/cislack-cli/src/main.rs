#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use cislack_core::http::DEFAULT_API_URL;
use cislack_core::output::{error_annotation, OutputWriter};
use cislack_core::{
    build_request, notify, ActionInputs, DispatchConfig, Error, Result, RunContext, SlackApiClient,
};
use clap::Parser;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cislack", version, about = "Slack notifications for workflow runs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Compose and post a workflow run notification
    Send(SendArgs),
}

#[derive(clap::Args)]
struct SendArgs {
    /// Slack bot token
    #[arg(long, env = "INPUT_SLACK_TOKEN", hide_env_values = true)]
    slack_token: Option<String>,

    /// Channel name or ID (leading # optional)
    #[arg(long, env = "INPUT_CHANNEL")]
    channel: Option<String>,

    /// Message text
    #[arg(long, env = "INPUT_MESSAGE")]
    message: Option<String>,

    /// Sender display name
    #[arg(long, env = "INPUT_USERNAME")]
    username: Option<String>,

    /// Named color (red, green, ...) or hex code
    #[arg(long, env = "INPUT_COLOR")]
    color: Option<String>,

    /// "true" to include the run context grid
    #[arg(long, env = "INPUT_VERBOSE")]
    verbose: Option<String>,

    /// "false" to disable link and media unfurling
    #[arg(long, env = "INPUT_UNFURL")]
    unfurl: Option<String>,

    /// JSON {"blocks": [...]} sent instead of the formatted message
    #[arg(long, env = "INPUT_CUSTOM_PAYLOAD")]
    custom_payload: Option<String>,

    /// Slack Web API base URL
    #[arg(long, env = "SLACK_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Print the request JSON instead of posting it
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Send(args) => {
            run_send(&args, |key| std::env::var(key).ok(), &mut std::io::stdout().lock())
        }
    };
    std::process::exit(code);
}

/// Log to stderr; `RUST_LOG` wins, `RUNNER_DEBUG=1` defaults to debug
fn init_tracing() {
    let default_level = match std::env::var("RUNNER_DEBUG").as_deref() {
        Ok("1") => "debug",
        _ => "info",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Filter empty string from Option (env vars may produce "" for empty values)
fn clean_opt(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

/// Run `send` and turn any failure into exit code 1 plus an `::error::` line on `out`
fn run_send<F, W>(args: &SendArgs, env: F, out: &mut W) -> i32
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    match send(args, &env, out) {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(kind = ?e.kind(), "{e}");
            let _ = writeln!(out, "{}", error_annotation(&e.to_string()));
            1
        }
    }
}

fn send<F, W>(args: &SendArgs, env: &F, out: &mut W) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    // GHA sets empty strings for unset optional inputs
    let inputs = ActionInputs {
        channel: clean_opt(&args.channel).unwrap_or(""),
        message: clean_opt(&args.message).unwrap_or(""),
        username: clean_opt(&args.username).unwrap_or(""),
        color: clean_opt(&args.color).unwrap_or(""),
        verbose: clean_opt(&args.verbose).unwrap_or(""),
        unfurl: clean_opt(&args.unfurl).unwrap_or(""),
        custom_payload: clean_opt(&args.custom_payload).unwrap_or(""),
    };

    let config = DispatchConfig::from_inputs(&inputs)?;
    let ctx = RunContext::from_lookup(env)?;

    if args.dry_run {
        let request = build_request(&config, &ctx);
        serde_json::to_writer_pretty(&mut *out, &request).map_err(std::io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }

    let token = clean_opt(&args.slack_token)
        .ok_or_else(|| Error::Config("input 'slack_token' is required".to_string()))?;
    let client = SlackApiClient::new(args.api_url.clone(), token.to_string());

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Runtime(format!("failed to create runtime: {e}")))?;
    let response = rt.block_on(notify(&client, &config, &ctx))?;

    match env("GITHUB_OUTPUT").filter(|path| !path.is_empty()) {
        Some(path) => {
            OutputWriter::append(
                Path::new(&path),
                &[
                    ("ts", response.ts.as_deref().unwrap_or("")),
                    ("channel", response.channel.as_deref().unwrap_or("")),
                ],
            )?;
        }
        None => tracing::debug!("GITHUB_OUTPUT not set, skipping step outputs"),
    }

    Ok(())
}
