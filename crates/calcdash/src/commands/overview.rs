//! Overview command: one batch fetch of the five fixed demo endpoints.

use owo_colors::OwoColorize;

use calcdash_api::{CalcClient, FibonacciReply, Overview};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

pub async fn handle(client: &CalcClient, global: &GlobalOpts) -> Result<(), CliError> {
    // All five or nothing: a single endpoint failure surfaces as one
    // aggregate error naming the failing URL and status.
    let overview = client.overview().await?;

    let color = output::should_color(&global.color);
    let rendered = match global.output {
        OutputFormat::Json => output::render_json_pretty(&overview),
        OutputFormat::JsonCompact => output::render_json_compact(&overview),
        OutputFormat::Yaml => output::render_yaml(&overview),
        OutputFormat::Table | OutputFormat::Plain => format_cards(&overview, color),
    };

    output::print_output(&rendered, global.quiet);
    Ok(())
}

/// Render the five result cards as titled text blocks.
fn format_cards(overview: &Overview, color: bool) -> String {
    let mut out = String::new();

    push_card(&mut out, "Home ('/')", &overview.home, color);
    push_card(&mut out, "Hello ('/hello')", &overview.hello, color);
    push_card(&mut out, "Sum ('/sum')", &overview.sum, color);
    push_card(
        &mut out,
        "Bubble Sort ('/bubblesort')",
        &format!(
            "original: {:?}\nsorted:   {:?}",
            overview.bubblesort.original, overview.bubblesort.sorted
        ),
        color,
    );
    push_card(
        &mut out,
        "Fibonacci ('/fibonacci')",
        &format_fibonacci(&overview.fibonacci),
        color,
    );

    // Drop the trailing blank line.
    out.truncate(out.trim_end().len());
    out
}

fn format_fibonacci(reply: &FibonacciReply) -> String {
    match reply {
        FibonacciReply::Computed { n, value } => format!("fibonacci({n}) = {value}"),
        FibonacciReply::Rejected { n, reason } => format!("fibonacci({n}) rejected: {reason}"),
    }
}

fn push_card(out: &mut String, title: &str, body: &str, color: bool) {
    use std::fmt::Write;

    let heading = if color {
        format!("── {} ──", title.cyan().bold())
    } else {
        format!("── {title} ──")
    };
    let _ = writeln!(out, "{heading}");
    let _ = writeln!(out, "{body}");
    let _ = writeln!(out);
}
