//! Weekly report export.
//!
//! `ReportExporter` turns the current session collection into an HTML table
//! document that spreadsheet software opens directly.
//!
//! # Module Structure
//!
//! - `model`: the structured report (`WeeklyReport`, `ReportRow`, `ReportSummary`)
//! - `document`: the downloadable payload (`ReportDocument`)
//! - `exporter`: building and rendering (`ReportExporter`)

mod document;
mod exporter;
mod model;

// Re-export public API
pub use document::ReportDocument;
pub use exporter::{ReportExporter, REPORT_COLUMNS};
pub use model::{ReportRow, ReportSummary, WeeklyReport};
