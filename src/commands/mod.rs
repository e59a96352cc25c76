//! Command dispatch and handlers.

pub mod check_auth;
pub mod fields;
pub mod options;
pub mod run;
pub mod task_types;

use serde_json::Value;
use tokio::runtime::Builder;

use crate::cli::Command;
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::error::Result;

/// Dispatch a parsed command to its handler and print its JSON result.
///
/// Settings come from the environment. When `CLICKUP_LOOKUP_REPLAY` is set
/// the ClickUp API is served from that cassette; when
/// `CLICKUP_LOOKUP_RECORD` is set every interaction is recorded there.
///
/// # Errors
///
/// Returns an error string if configuration, the handler, or writing the
/// recording fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let settings = Settings::from_env().map_err(|e| e.to_string())?;
    let ctx = ServiceContext::from_settings(&settings).map_err(|e| e.to_string())?;

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;
    let result = runtime.block_on(dispatch_with_context(command, &ctx));

    // Finish recording after the command completes, even on error.
    if let Some(path) = ctx.finish().map_err(|e| e.to_string())? {
        eprintln!("Recording saved to: {}", path.display());
    }

    let output = result.map_err(|e| e.to_string())?;
    let text = serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns the handler's error.
pub async fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<Value> {
    let api = ctx.api.as_ref();
    match command {
        Command::Run { params, continue_on_fail } => run::run(api, params, *continue_on_fail).await,
        Command::Fields { list } => fields::run(api, list).await,
        Command::Options { list, field } => options::run(api, list, field).await,
        Command::TaskTypes { team } => task_types::run(api, team).await,
        Command::CheckAuth => check_auth::run(api).await,
    }
}
