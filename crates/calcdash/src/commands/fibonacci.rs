//! Fibonacci command handler.

use calcdash_api::{CalcClient, FibonacciReply, input};

use crate::cli::{FibArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    client: &CalcClient,
    args: FibArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    // Non-numeric or negative input is rejected before any request.
    let n = input::parse_index(&args.n)?;

    let reply = client.fibonacci(n).await?;
    match reply {
        FibonacciReply::Computed { n, value } => {
            let rendered = output::render_single(
                &global.output,
                &reply,
                |_| format!("fibonacci({n}) = {value}"),
                |_| value.to_string(),
            );
            output::print_output(&rendered, global.quiet);
            Ok(())
        }
        // A business-level rejection can arrive on HTTP 200.
        FibonacciReply::Rejected { reason, .. } => Err(CliError::Rejected { reason }),
    }
}
