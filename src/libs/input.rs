//! Time entry loading from files.
//!
//! The engine itself never performs I/O; this module is the collaborator that
//! materializes entries for the CLI. Two formats are supported, chosen by
//! file extension: a JSON array of entry objects, or a CSV file with a header
//! row using the same camelCase field names.

use crate::libs::entry::TimeEntry;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use std::fs::File;
use std::path::Path;

/// Loads and normalizes entries from a JSON or CSV file.
pub fn load_entries(path: &Path) -> Result<Vec<TimeEntry>> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_lowercase();
    let entries = match extension.as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => return Err(msg_error_anyhow!(Message::EntryFileFormatUnsupported(other.to_string()))),
    };
    tracing::debug!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries.into_iter().map(TimeEntry::normalize).collect())
}

fn load_json(path: &Path) -> Result<Vec<TimeEntry>> {
    let file = File::open(path).map_err(|e| msg_error_anyhow!(Message::EntryFileReadFailed(path.display().to_string(), e.to_string())))?;
    let entries: Vec<TimeEntry> =
        serde_json::from_reader(file).map_err(|e| msg_error_anyhow!(Message::EntryFileParseFailed(path.display().to_string(), e.to_string())))?;
    Ok(entries)
}

fn load_csv(path: &Path) -> Result<Vec<TimeEntry>> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| msg_error_anyhow!(Message::EntryFileReadFailed(path.display().to_string(), e.to_string())))?;
    let mut entries = Vec::new();
    for record in reader.deserialize() {
        let entry: TimeEntry =
            record.map_err(|e| msg_error_anyhow!(Message::EntryFileParseFailed(path.display().to_string(), e.to_string())))?;
        entries.push(entry);
    }
    Ok(entries)
}
