//! Report export to Excel, CSV, and JSON files.
//!
//! The exporter consumes the seven-sheet [`WorkbookLayout`] produced by
//! [`crate::libs::layout`]; it writes cells and merge spans as given and adds
//! no numbers of its own. JSON exports skip the layout and serialize the
//! [`ReportResult`] directly so downstream tools get structured data rather
//! than a flattened grid.

use crate::libs::date_range::DateWindow;
use crate::libs::layout::{self, Cell, SheetLayout, WorkbookLayout};
use crate::libs::messages::Message;
use crate::libs::report::ReportResult;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// One CSV file per sheet, for universal compatibility.
    Csv,
    /// The full report result as pretty-printed JSON.
    Json,
    /// A multi-sheet Excel workbook with formatting and merged ranges.
    Excel,
}

/// Export handler tying a format to an output path.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter; without an explicit path a timestamped file name
    /// is generated next to the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("utilrep_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));
        Self { format, output_path }
    }

    /// Writes the report in the configured format.
    pub fn export(&self, result: &ReportResult, window: &DateWindow) -> Result<()> {
        match self.format {
            ExportFormat::Excel => self.export_excel(&layout::build(result, window))?,
            ExportFormat::Csv => self.export_csv(&layout::build(result, window))?,
            ExportFormat::Json => self.export_json(result)?,
        }
        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_excel(&self, workbook_layout: &WorkbookLayout) -> Result<()> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold().set_background_color(Color::Gray);
        let merge_format = Format::new().set_bold().set_align(FormatAlign::Center);

        for sheet_layout in &workbook_layout.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet_layout.name)?;

            for (row_index, cells) in sheet_layout.rows.iter().enumerate() {
                for (col_index, cell) in cells.iter().enumerate() {
                    let row = row_index as u32;
                    let col = col_index as u16;
                    // Merged regions are written once below, with their label.
                    if sheet_layout.merges.iter().any(|m| m.covers(row, col)) {
                        continue;
                    }
                    match cell {
                        Cell::Blank => {}
                        Cell::Header(text) => {
                            worksheet.write_string_with_format(row, col, text, &header_format)?;
                        }
                        Cell::Text(text) => {
                            worksheet.write_string(row, col, text)?;
                        }
                        Cell::Number(value) => {
                            worksheet.write_number(row, col, value.to_f64().unwrap_or(0.0))?;
                        }
                        Cell::Count(value) => {
                            worksheet.write_number(row, col, *value as f64)?;
                        }
                        Cell::Percent(value) => {
                            worksheet.write_string(row, col, &format!("{}%", value))?;
                        }
                    }
                }
            }

            for merge in &sheet_layout.merges {
                worksheet.merge_range(merge.first_row, merge.first_col, merge.last_row, merge.last_col, &merge.label, &merge_format)?;
            }

            worksheet.autofit();
        }

        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn export_csv(&self, workbook_layout: &WorkbookLayout) -> Result<()> {
        let base = self.output_path.file_stem().unwrap_or_default().to_string_lossy().to_string();
        let extension = self.output_path.extension().unwrap_or_default().to_string_lossy().to_string();

        for sheet_layout in &workbook_layout.sheets {
            let slug = sheet_layout.name.to_lowercase().replace(' ', "_");
            let sheet_path = self.output_path.with_file_name(format!("{}_{}.{}", base, slug, extension));
            write_sheet_csv(sheet_layout, &sheet_path)?;
        }
        Ok(())
    }

    fn export_json(&self, result: &ReportResult) -> Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}

fn write_sheet_csv(sheet_layout: &SheetLayout, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for cells in &sheet_layout.rows {
        let record: Vec<String> = cells
            .iter()
            .map(|cell| match cell {
                Cell::Blank => String::new(),
                Cell::Header(text) | Cell::Text(text) => text.clone(),
                Cell::Number(value) => value.to_string(),
                Cell::Count(value) => value.to_string(),
                Cell::Percent(value) => format!("{}%", value),
            })
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
