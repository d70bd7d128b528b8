//! Structured report, independent of the markup it is rendered into.

use serde::Serialize;

use crate::calendar;
use crate::session::{total_duration, PracticeSession};

/// One table row per session, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// `MM/DD/YYYY`
    pub date: String,
    /// Weekday name, e.g. `Monday`
    pub day: String,
    pub activity: String,
    pub focus: Option<String>,
    /// Notes split on line breaks; empty when the session has no notes.
    pub note_lines: Vec<String>,
    /// Stored duration without unit, e.g. `1.5`
    pub duration: String,
}

impl From<&PracticeSession> for ReportRow {
    fn from(session: &PracticeSession) -> Self {
        let note_lines = session
            .notes
            .as_deref()
            .map(|notes| notes.lines().map(str::to_string).collect())
            .unwrap_or_default();

        Self {
            date: calendar::report_date(session.date),
            day: calendar::day_name(session.date),
            activity: session.activity.clone(),
            focus: session.focus.clone(),
            note_lines,
            duration: session.duration.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub session_count: usize,
    pub total_hours: String,
}

impl ReportSummary {
    /// Computed from the same slice the rows come from, never cached.
    pub fn of(sessions: &[PracticeSession]) -> Self {
        Self {
            session_count: sessions.len(),
            total_hours: total_duration(sessions).to_string(),
        }
    }
}

/// Everything the report shows, in collection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyReport {
    pub title: String,
    pub signature_label: String,
    pub week: u32,
    pub year: i32,
    pub rows: Vec<ReportRow>,
    pub summary: ReportSummary,
}
