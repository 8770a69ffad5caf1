//! Command dispatch: bridges CLI args -> api client calls -> output formatting.

pub mod config_cmd;
pub mod fibonacci;
pub mod greet;
pub mod overview;
pub mod stats;

use calcdash_api::CalcClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a service-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &CalcClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Overview => overview::handle(client, global).await,
        Command::Greet(args) => greet::handle(client, args, global).await,
        Command::Fib(args) => fibonacci::handle(client, args, global).await,
        Command::Stats(args) => stats::handle(client, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
