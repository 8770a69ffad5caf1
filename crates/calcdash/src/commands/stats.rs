//! Statistics command handler.

use tabled::Tabled;

use calcdash_api::{CalcClient, StatsReply, StatsSummary, input};

use crate::cli::{GlobalOpts, OutputFormat, StatsArgs};
use crate::error::CliError;
use crate::output;

/// Table row for the five summary fields.
#[derive(Tabled)]
struct SummaryRow {
    count: u64,
    sum: f64,
    average: f64,
    min: f64,
    max: f64,
}

impl From<&StatsSummary> for SummaryRow {
    fn from(s: &StatsSummary) -> Self {
        Self {
            count: s.count,
            sum: s.sum,
            average: s.average,
            min: s.min,
            max: s.max,
        }
    }
}

pub async fn handle(
    client: &CalcClient,
    args: StatsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    // Accept both `stats "1, 2, 3"` and `stats 1, 2, 3` -- shells split the
    // latter into several arguments, so rejoin before parsing.
    let joined = args.numbers.join(",");
    let values = input::parse_number_list(&joined)?;

    match client.calculate_stats(&values).await? {
        StatsReply::Summary(summary) => {
            let rendered = match global.output {
                OutputFormat::Table => output::render_table(&[SummaryRow::from(&summary)]),
                OutputFormat::Plain => format_plain(&summary),
                OutputFormat::Json => output::render_json_pretty(&summary),
                OutputFormat::JsonCompact => output::render_json_compact(&summary),
                OutputFormat::Yaml => output::render_yaml(&summary),
            };
            output::print_output(&rendered, global.quiet);
            Ok(())
        }
        StatsReply::Refused { reason } => Err(CliError::Rejected { reason }),
    }
}

/// One value per line, in field order, for scripting.
fn format_plain(s: &StatsSummary) -> String {
    format!("{}\n{}\n{}\n{}\n{}", s.count, s.sum, s.average, s.min, s.max)
}
