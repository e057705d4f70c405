use super::FilterArgs;
use crate::libs::{input, messages::Message, report, view::View};
use crate::{msg_bail_anyhow, msg_print, msg_warning};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DetailArgs {
    #[command(flatten)]
    filter: FilterArgs,
    #[arg(long, help = "Path to a JSON or CSV file of time entries")]
    input: PathBuf,
    #[arg(long, help = "ISO week label, e.g. 2025-W07: list staff hours for that heatmap cell")]
    week: Option<String>,
    #[arg(long, help = "Staff id: list that person's per-day hours on the project")]
    staff: Option<String>,
}

pub fn cmd(args: DetailArgs) -> Result<()> {
    let criteria = args.filter.criteria()?;
    let window = criteria.resolve_window(Local::now().date_naive())?;
    let entries = input::load_entries(&args.input)?;
    let filtered = criteria.apply(&entries, &window);

    let (Some(project), Some(department)) = (criteria.project.as_deref(), criteria.department.as_deref()) else {
        msg_bail_anyhow!(Message::DetailRequires("--project and --department".to_string()));
    };

    match (args.week.as_deref(), args.staff.as_deref()) {
        (Some(week), None) => {
            msg_print!(Message::DrillDownHeader(format!("{} / {} / {}", project, department, week)), true);
            let rows = report::staff_detail(&filtered, project, week, department);
            if rows.is_empty() {
                msg_warning!(Message::NoEntriesInWindow(window.from.to_string(), window.to.to_string()));
            } else {
                View::staff_cells(&rows);
            }
        }
        (None, Some(staff_id)) => {
            msg_print!(Message::DrillDownHeader(format!("{} / {} / {}", project, department, staff_id)), true);
            let days = report::staff_daily_detail(&filtered, project, department, staff_id, &window);
            if days.is_empty() {
                msg_warning!(Message::NoEntriesInWindow(window.from.to_string(), window.to.to_string()));
            } else {
                View::staff_days(&days);
            }
        }
        _ => msg_bail_anyhow!(Message::DetailRequires("exactly one of --week or --staff".to_string())),
    }

    Ok(())
}
