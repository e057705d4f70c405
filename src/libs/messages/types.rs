#[derive(Debug, Clone)]
pub enum Message {
    // === INPUT MESSAGES ===
    EntriesLoaded(usize, String),            // count, path
    EntryFileReadFailed(String, String),     // path, cause
    EntryFileParseFailed(String, String),    // path, cause
    EntryFileFormatUnsupported(String),      // extension

    // === REPORT MESSAGES ===
    ReportHeader(String, String),  // from, to
    NoEntriesInWindow(String, String), // from, to
    DrillDownHeader(String),       // subject
    DetailRequires(String),        // missing arguments

    // === EXPORT MESSAGES ===
    ExportingReport,
    ExportCompleted(String), // path
    ExportFailed(String),    // cause
}
