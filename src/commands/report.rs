use super::FilterArgs;
use crate::libs::{input, messages::Message, report, view::View};
use crate::{msg_debug, msg_print, msg_warning};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    filter: FilterArgs,
    #[arg(long, help = "Path to a JSON or CSV file of time entries")]
    input: PathBuf,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let criteria = args.filter.criteria()?;
    let window = criteria.resolve_window(Local::now().date_naive())?;
    let entries = input::load_entries(&args.input)?;
    msg_debug!(Message::EntriesLoaded(entries.len(), args.input.display().to_string()));
    let filtered = criteria.apply(&entries, &window);
    let result = report::generate(&filtered, &window);

    msg_print!(Message::ReportHeader(window.from.to_string(), window.to.to_string()), true);
    if filtered.is_empty() {
        msg_warning!(Message::NoEntriesInWindow(window.from.to_string(), window.to.to_string()));
    }

    View::kpis(&result.kpis, &window);
    if !result.by_department.is_empty() {
        println!("\nBy department:");
        View::departments(&result.by_department, result.kpis.total_hours);
        println!("\nBy function:");
        View::function_table(&result.function_table);
    }
    if !result.trend_weekly.is_empty() {
        println!("\nWeekly trend:");
        View::trend("WEEK", &result.trend_weekly);
        println!("\nMonthly trend:");
        View::trend("MONTH", &result.trend_monthly);
    }

    Ok(())
}
