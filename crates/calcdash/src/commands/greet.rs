//! Greet command handler.

use calcdash_api::{CalcClient, GreetReply, input};

use crate::cli::{GlobalOpts, GreetArgs};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    client: &CalcClient,
    args: GreetArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    // Empty or whitespace-only names never reach the network.
    let Some(name) = input::normalize_name(&args.name) else {
        return Err(CliError::Validation {
            field: "name".into(),
            reason: "name cannot be empty".into(),
        });
    };

    match client.greet(name).await? {
        GreetReply::Greeting { message } => {
            let rendered =
                output::render_single(&global.output, &message, String::clone, String::clone);
            output::print_output(&rendered, global.quiet);
            Ok(())
        }
        GreetReply::Refused { reason } => Err(CliError::Rejected { reason }),
    }
}
