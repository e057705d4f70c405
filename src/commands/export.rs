use super::FilterArgs;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::{input, messages::Message, report};
use crate::{msg_error_anyhow, msg_info};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    filter: FilterArgs,
    #[arg(long, help = "Path to a JSON or CSV file of time entries")]
    input: PathBuf,
    #[arg(long, value_enum, default_value = "excel", help = "Output format")]
    format: ExportFormat,
    #[arg(long, help = "Output file path; a timestamped name is generated when omitted")]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let criteria = args.filter.criteria()?;
    let window = criteria.resolve_window(Local::now().date_naive())?;
    let entries = input::load_entries(&args.input)?;
    let filtered = criteria.apply(&entries, &window);
    let result = report::generate(&filtered, &window);

    msg_info!(Message::ExportingReport);
    Exporter::new(args.format, args.output)
        .export(&result, &window)
        .map_err(|e| msg_error_anyhow!(Message::ExportFailed(e.to_string())))
}
