//! Export layout construction.
//!
//! Maps the report views onto seven fixed logical sheets of cells and merge
//! spans, ready for spreadsheet emission. This module performs no new
//! aggregation: every number in the layout traces back to a value already
//! produced by the aggregation engine, the utilization calculator, or the
//! pivot builder. Percentages are re-derived from the hour sums shown beside
//! them rather than passed across as pre-rounded figures, so the sheet can
//! never drift from its own totals.

use crate::libs::date_range::DateWindow;
use crate::libs::formatter;
use crate::libs::report::ReportResult;
use crate::libs::utilization;
use rust_decimal::Decimal;

/// One layout cell. `Header` cells render emphasized; `Blank` cells may be
/// covered by a merge span.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Blank,
    Header(String),
    Text(String),
    Number(Decimal),
    Count(i64),
    Percent(i64),
}

/// An inclusive rectangular merge with its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeSpan {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
    pub label: String,
}

impl MergeSpan {
    pub fn covers(&self, row: u32, col: u16) -> bool {
        self.first_row <= row && row <= self.last_row && self.first_col <= col && col <= self.last_col
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
    pub merges: Vec<MergeSpan>,
}

impl SheetLayout {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rows: Vec::new(),
            merges: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookLayout {
    pub sheets: Vec<SheetLayout>,
}

/// Builds the seven-sheet workbook layout from a finished report.
pub fn build(result: &ReportResult, window: &DateWindow) -> WorkbookLayout {
    WorkbookLayout {
        sheets: vec![
            overview_sheet(result, window),
            weekly_trend_sheet(result),
            department_sheet(result),
            function_sheet(result),
            phase_sheet(result),
            customer_project_sheet(result),
            daily_sheet(result),
        ],
    }
}

fn overview_sheet(result: &ReportResult, window: &DateWindow) -> SheetLayout {
    let mut sheet = SheetLayout::new("Overview");
    let kpis = &result.kpis;
    sheet.rows = vec![
        vec![Cell::Header("Period".to_string()), Cell::Text(format!("{} .. {}", window.from, window.to))],
        vec![Cell::Header("Working days".to_string()), Cell::Count(window.working_days() as i64)],
        vec![Cell::Header("Total hours".to_string()), Cell::Number(kpis.total_hours)],
        vec![Cell::Header("Available capacity".to_string()), Cell::Number(kpis.available_capacity)],
        vec![
            Cell::Header("Avg utilization".to_string()),
            // Re-derived from the sums two rows above.
            Cell::Percent(utilization::rounded(utilization::percentage(kpis.total_hours, kpis.available_capacity))),
        ],
        vec![Cell::Header("Active projects".to_string()), Cell::Count(kpis.active_projects as i64)],
        vec![Cell::Header("Staff".to_string()), Cell::Count(kpis.staff_count as i64)],
    ];
    sheet
}

fn weekly_trend_sheet(result: &ReportResult) -> SheetLayout {
    let mut sheet = SheetLayout::new("Weekly Trend");
    sheet.rows.push(header_row(&["Week", "Hours", "Utilization"]));
    for point in &result.trend_weekly {
        sheet.rows.push(vec![
            Cell::Text(point.label.clone()),
            Cell::Number(point.hours),
            Cell::Percent(utilization::rounded(point.utilization)),
        ]);
    }
    sheet
}

fn department_sheet(result: &ReportResult) -> SheetLayout {
    let mut sheet = SheetLayout::new("Departments");
    sheet.rows.push(header_row(&["Department", "Hours", "Share"]));
    for row in &result.by_department {
        sheet.rows.push(vec![
            Cell::Text(row.department.clone()),
            Cell::Number(row.hours),
            Cell::Percent(utilization::rounded(utilization::percentage(row.hours, result.kpis.total_hours))),
        ]);
    }
    sheet
}

fn function_sheet(result: &ReportResult) -> SheetLayout {
    let mut sheet = SheetLayout::new("Utilization");
    sheet.rows.push(header_row(&["Function", "Head count", "Available hrs", "Utilized hrs", "Utilization"]));
    let table = &result.function_table;
    for index in 0..table.departments.len() {
        sheet.rows.push(vec![
            Cell::Text(table.departments[index].clone()),
            Cell::Count(table.head_count[index] as i64),
            Cell::Number(table.available_hours[index]),
            Cell::Number(table.utilized_hours[index]),
            Cell::Percent(utilization::rounded(utilization::utilization_rate(
                table.utilized_hours[index],
                table.available_hours[index],
            ))),
        ]);
    }
    sheet.rows.push(vec![
        Cell::Header("Total".to_string()),
        Cell::Count(table.total_head_count as i64),
        Cell::Number(table.total_available),
        Cell::Number(table.total_utilized),
        Cell::Percent(utilization::rounded(utilization::utilization_rate(table.total_utilized, table.total_available))),
    ]);
    sheet
}

fn phase_sheet(result: &ReportResult) -> SheetLayout {
    let mut sheet = SheetLayout::new("Phases");
    sheet.rows.push(header_row(&["Phase", "Department", "Hours", "Staff", "Share"]));
    for row in &result.by_phase_dept {
        sheet.rows.push(vec![
            Cell::Text(row.phase.clone()),
            Cell::Text(row.department.clone()),
            Cell::Number(row.total_hours),
            Cell::Count(row.staff_count as i64),
            Cell::Percent(utilization::rounded(utilization::percentage(row.total_hours, result.kpis.total_hours))),
        ]);
    }
    // Rows are already phase-sorted; merge contiguous runs of one phase.
    merge_column_runs(&mut sheet, 0, 1);
    sheet
}

fn customer_project_sheet(result: &ReportResult) -> SheetLayout {
    let mut sheet = SheetLayout::new("Customer Projects");
    sheet.rows.push(header_row(&["Customer", "Project", "Department", "Hours"]));
    for row in &result.by_customer_project_dept {
        sheet.rows.push(vec![
            Cell::Text(row.customer.clone()),
            Cell::Text(row.project.clone()),
            Cell::Text(row.department.clone()),
            Cell::Number(row.total_hours),
        ]);
    }
    merge_column_runs(&mut sheet, 0, 1);
    sheet
}

// Fixed identity columns of the daily sheet, before the date columns start.
const DAILY_FIXED_HEADERS: [&str; 6] = ["Customer", "Project", "Project Phase", "Phase", "Staff", "Department"];

fn daily_sheet(result: &ReportResult) -> SheetLayout {
    let mut sheet = SheetLayout::new("Daily Detail");
    let pivot = &result.daily_pivot;
    let fixed = DAILY_FIXED_HEADERS.len();
    let date_count = pivot.dates.len();
    let total_col = fixed + date_count;

    // Row 0: week labels spanning their date columns.
    let mut week_row = vec![Cell::Blank; total_col + 1];
    for span in &pivot.week_spans {
        week_row[fixed + span.start] = Cell::Header(span.label.clone());
        if span.len > 1 {
            sheet.merges.push(MergeSpan {
                first_row: 0,
                first_col: (fixed + span.start) as u16,
                last_row: 0,
                last_col: (fixed + span.start + span.len - 1) as u16,
                label: span.label.clone(),
            });
        }
    }
    sheet.rows.push(week_row);

    // Row 1: column headers.
    let mut head = Vec::with_capacity(total_col + 1);
    for name in DAILY_FIXED_HEADERS {
        head.push(Cell::Header(name.to_string()));
    }
    for label in &pivot.date_labels {
        head.push(Cell::Header(label.clone()));
    }
    head.push(Cell::Header("Total".to_string()));
    sheet.rows.push(head);

    // Data rows. Cells carry their full values even where a merge will cover
    // them, so flat renderings (CSV) stay self-describing.
    const HEADER_ROWS: usize = 2;
    for row in &pivot.rows {
        let mut cells = vec![
            Cell::Text(row.customer.clone()),
            Cell::Text(row.project.clone()),
            Cell::Text(row.project_phase.clone()),
            Cell::Text(row.phase.clone()),
            Cell::Text(row.staff_name.clone()),
            Cell::Text(row.department.clone()),
        ];
        for date in &pivot.dates {
            cells.push(match row.daily_hours.get(date) {
                Some(hours) => Cell::Number(*hours),
                None => Cell::Blank,
            });
        }
        cells.push(Cell::Number(row.total_hours));
        sheet.rows.push(cells);
    }
    for span in pivot.customer_groups.iter().filter(|s| s.len > 1) {
        sheet.merges.push(MergeSpan {
            first_row: (HEADER_ROWS + span.start) as u32,
            first_col: 0,
            last_row: (HEADER_ROWS + span.start + span.len - 1) as u32,
            last_col: 0,
            label: span.label.clone(),
        });
    }
    for span in pivot.project_groups.iter().filter(|s| s.len > 1) {
        sheet.merges.push(MergeSpan {
            first_row: (HEADER_ROWS + span.start) as u32,
            first_col: 1,
            last_row: (HEADER_ROWS + span.start + span.len - 1) as u32,
            last_col: 1,
            label: span.label.clone(),
        });
    }

    // Footer: per-date totals, available capacity, and week spend.
    let mut totals = labelled_footer_row(&mut sheet, "Total by day", fixed);
    for date in &pivot.dates {
        totals.push(Cell::Number(pivot.total_by_date.get(date).copied().unwrap_or_default()));
    }
    totals.push(Cell::Number(pivot.grand_total));
    sheet.rows.push(totals);

    let mut available = labelled_footer_row(&mut sheet, "Available hrs", fixed);
    let mut available_total = Decimal::ZERO;
    for hours in &pivot.available_hours_by_date {
        available.push(Cell::Number(*hours));
        available_total += *hours;
    }
    available.push(Cell::Number(available_total));
    sheet.rows.push(available);

    let pct_row_index = sheet.rows.len();
    let mut pct = labelled_footer_row(&mut sheet, "% spent", fixed);
    pct.resize(total_col + 1, Cell::Blank);
    for span in &pivot.week_spans {
        let pct_spent = span.pct_spent();
        pct[fixed + span.start] = Cell::Percent(pct_spent);
        if span.len > 1 {
            sheet.merges.push(MergeSpan {
                first_row: pct_row_index as u32,
                first_col: (fixed + span.start) as u16,
                last_row: pct_row_index as u32,
                last_col: (fixed + span.start + span.len - 1) as u16,
                label: formatter::percent_label(pct_spent),
            });
        }
    }
    pct[total_col] = Cell::Percent(utilization::rounded(utilization::percentage(pivot.grand_total, available_total)));
    sheet.rows.push(pct);

    sheet
}

fn header_row(names: &[&str]) -> Vec<Cell> {
    names.iter().map(|n| Cell::Header(n.to_string())).collect()
}

/// Starts a footer row whose label stretches across the fixed columns,
/// recording the matching merge.
fn labelled_footer_row(sheet: &mut SheetLayout, label: &str, fixed: usize) -> Vec<Cell> {
    let row_index = sheet.rows.len() as u32;
    sheet.merges.push(MergeSpan {
        first_row: row_index,
        first_col: 0,
        last_row: row_index,
        last_col: (fixed - 1) as u16,
        label: label.to_string(),
    });
    let mut cells = vec![Cell::Header(label.to_string())];
    cells.resize(fixed, Cell::Blank);
    cells
}

/// Merges contiguous runs of equal `Text` values in one column of a sheet
/// whose data rows start at `first_data_row`.
fn merge_column_runs(sheet: &mut SheetLayout, col: usize, first_data_row: usize) {
    let mut run_start: Option<usize> = None;
    let mut run_label = String::new();
    let mut merges = Vec::new();
    let total_rows = sheet.rows.len();

    for index in first_data_row..=total_rows {
        let label = sheet.rows.get(index).and_then(|r| match r.get(col) {
            Some(Cell::Text(value)) => Some(value.clone()),
            _ => None,
        });
        match (&run_start, &label) {
            (Some(_), Some(value)) if *value == run_label => {}
            _ => {
                if let Some(start) = run_start {
                    if index - start > 1 {
                        merges.push(MergeSpan {
                            first_row: start as u32,
                            first_col: col as u16,
                            last_row: (index - 1) as u32,
                            last_col: col as u16,
                            label: run_label.clone(),
                        });
                    }
                }
                run_start = label.as_ref().map(|_| index);
                run_label = label.clone().unwrap_or_default();
            }
        }
    }
    sheet.merges.extend(merges);
}
