//! Display implementation for utilrep application messages.
//!
//! Central place where structured message data becomes the human-readable
//! text shown on the terminal. Keeping all message text here keeps wording
//! consistent and leaves the call sites free of string formatting.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === INPUT MESSAGES ===
            Message::EntriesLoaded(count, path) => format!("Loaded {} time entries from {}", count, path),
            Message::EntryFileReadFailed(path, cause) => format!("Failed to read entry file {}: {}", path, cause),
            Message::EntryFileParseFailed(path, cause) => format!("Failed to parse entry file {}: {}", path, cause),
            Message::EntryFileFormatUnsupported(ext) => {
                format!("Unsupported entry file format '{}' (expected json or csv)", ext)
            }

            // === REPORT MESSAGES ===
            Message::ReportHeader(from, to) => format!("📊 Utilization report {} .. {}", from, to),
            Message::NoEntriesInWindow(from, to) => format!("No time entries between {} and {}", from, to),
            Message::DrillDownHeader(subject) => format!("Detail for {}", subject),
            Message::DetailRequires(args) => format!("Drill-down needs {}", args),

            // === EXPORT MESSAGES ===
            Message::ExportingReport => "Exporting report...".to_string(),
            Message::ExportCompleted(path) => format!("Report exported to: {}", path),
            Message::ExportFailed(cause) => format!("Export failed: {}", cause),
        };
        write!(f, "{}", text)
    }
}
