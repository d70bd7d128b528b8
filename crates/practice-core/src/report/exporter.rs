use chrono::{Datelike, NaiveDate};
use minijinja::Environment;

use super::document::ReportDocument;
use super::model::{ReportRow, ReportSummary, WeeklyReport};
use crate::calendar::week_number;
use crate::config::ReportSettings;
use crate::error::Result;
use crate::session::PracticeSession;

const TEMPLATE_NAME: &str = "weekly_log.html";
const TEMPLATE: &str = include_str!("../../templates/weekly_log.html");

/// Header labels in column order. The last column takes its text from
/// `ReportSettings::signature_label`.
pub const REPORT_COLUMNS: [&str; 5] = ["Date", "Day", "What I Practiced", "Duration", "Signature"];

/// Renders a session collection into a downloadable weekly report.
///
/// The exporter is stateless apart from its settings: every call reads the
/// slice it is given, so totals always match the rows.
#[derive(Debug, Clone, Default)]
pub struct ReportExporter {
    settings: ReportSettings,
}

impl ReportExporter {
    pub fn new(settings: ReportSettings) -> Self {
        Self { settings }
    }

    /// Builds the structured report for `sessions` as of `as_of`.
    ///
    /// Sessions are reported in collection order and are not filtered by
    /// week; the week number only labels the document.
    pub fn build(&self, sessions: &[PracticeSession], as_of: NaiveDate) -> WeeklyReport {
        WeeklyReport {
            title: self.settings.title.clone(),
            signature_label: self.settings.signature_label.clone(),
            week: week_number(as_of),
            year: as_of.year(),
            rows: sessions.iter().map(ReportRow::from).collect(),
            summary: ReportSummary::of(sessions),
        }
    }

    /// File name encoding week and year, e.g. `practice-log-week10-2024.xls`.
    pub fn filename(&self, week: u32, year: i32) -> String {
        format!(
            "{}-week{}-{}.{}",
            self.settings.filename_prefix, week, year, self.settings.file_extension
        )
    }

    /// Renders the report into a document payload.
    ///
    /// An empty collection is valid and yields a table with no data rows.
    ///
    /// # Errors
    ///
    /// Returns a render error only if the bundled template fails to compile or
    /// evaluate.
    pub fn export(&self, sessions: &[PracticeSession], as_of: NaiveDate) -> Result<ReportDocument> {
        let report = self.build(sessions, as_of);
        let html = render(&report)?;
        let filename = self.filename(report.week, report.year);

        tracing::info!(
            filename = %filename,
            rows = report.rows.len(),
            total_hours = %report.summary.total_hours,
            "Exported practice report"
        );

        Ok(ReportDocument {
            filename,
            mime_type: self.settings.mime_type.clone(),
            bytes: html.into_bytes(),
        })
    }
}

fn render(report: &WeeklyReport) -> Result<String> {
    let mut env = Environment::new();
    // `.html` names get HTML auto-escaping; only our own date/number cells are
    // marked `safe` in the template so `/` survives in `MM/DD/YYYY`.
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;
    let template = env.get_template(TEMPLATE_NAME)?;
    Ok(template.render(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{DraftField, DraftSession, SessionStore};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with(entries: &[(NaiveDate, &str, &str, &str, &str)]) -> SessionStore {
        let mut store = SessionStore::new();
        for (date, activity, duration, focus, notes) in entries {
            let mut draft = DraftSession::new(*date);
            draft.set_field(DraftField::Activity, *activity);
            draft.set_field(DraftField::Duration, *duration);
            draft.set_field(DraftField::Focus, *focus);
            draft.set_field(DraftField::Notes, *notes);
            store.add_session(&draft).unwrap();
        }
        store
    }

    #[test]
    fn build_formats_rows_in_collection_order() {
        let store = store_with(&[
            (ymd(2024, 3, 6), "Violin", "0.75", "", ""),
            (ymd(2024, 3, 4), "Piano", "1.5", "Scales", "line one\nline two"),
        ]);
        let report = ReportExporter::default().build(store.sessions(), ymd(2024, 3, 7));

        assert_eq!(report.week, 10);
        assert_eq!(report.year, 2024);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].activity, "Violin");
        assert_eq!(report.rows[0].day, "Wednesday");
        assert_eq!(report.rows[1].date, "03/04/2024");
        assert_eq!(report.rows[1].focus.as_deref(), Some("Scales"));
        assert_eq!(report.rows[1].note_lines, vec!["line one", "line two"]);
        assert_eq!(report.summary.session_count, 2);
        assert_eq!(report.summary.total_hours, "2.25");
    }

    #[test]
    fn build_includes_sessions_outside_the_week() {
        let store = store_with(&[(ymd(2023, 12, 1), "Drums", "1", "", "")]);
        let report = ReportExporter::default().build(store.sessions(), ymd(2024, 3, 4));
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.year, 2024);
    }

    #[test]
    fn filename_encodes_week_and_year() {
        let exporter = ReportExporter::default();
        assert_eq!(exporter.filename(10, 2024), "practice-log-week10-2024.xls");
    }

    #[test]
    fn export_escapes_user_text() {
        let store = store_with(&[(ymd(2024, 3, 4), "<b>Piano</b>", "1", "R&B", "")]);
        let document = ReportExporter::default()
            .export(store.sessions(), ymd(2024, 3, 4))
            .unwrap();
        let html = document.as_text();

        assert!(html.contains("&lt;b&gt;Piano&lt;"));
        assert!(html.contains("Focus: R&amp;B"));
        assert!(!html.contains("<b>Piano</b>"));
    }

    #[test]
    fn export_joins_note_lines_with_breaks() {
        let store = store_with(&[(ymd(2024, 3, 4), "Piano", "1", "", "slow\nthen fast")]);
        let document = ReportExporter::default()
            .export(store.sessions(), ymd(2024, 3, 4))
            .unwrap();

        assert!(document.as_text().contains("<td>Piano<br><small>Note: slow<br>then fast</small></td>"));
    }

    #[test]
    fn export_uses_configured_labels() {
        let settings = ReportSettings {
            title: "PIANO LOG".to_string(),
            signature_label: "Teacher Signature".to_string(),
            filename_prefix: "piano".to_string(),
            file_extension: "html".to_string(),
            mime_type: "text/html".to_string(),
        };
        let document = ReportExporter::new(settings)
            .export(&[], ymd(2024, 3, 4))
            .unwrap();

        assert_eq!(document.filename, "piano-week10-2024.html");
        assert_eq!(document.mime_type, "text/html");
        let html = document.as_text();
        assert!(html.contains("<div class=\"title\">PIANO LOG</div>"));
        assert!(html.contains(">Teacher Signature</th>"));
    }
}
