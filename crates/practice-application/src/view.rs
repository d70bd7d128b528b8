//! Display helpers for the session list.

use practice_core::calendar;
use practice_core::{Hours, PracticeSession, SessionId};

/// One entry of the rendered session list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionListItem {
    pub id: SessionId,
    /// e.g. `Mon, Mar 4`
    pub date_label: String,
    /// e.g. `1.5 hours`
    pub duration_label: String,
    pub activity: String,
    /// e.g. `Focus: Scales`
    pub focus_line: Option<String>,
    pub notes: Option<String>,
}

impl From<&PracticeSession> for SessionListItem {
    fn from(session: &PracticeSession) -> Self {
        Self {
            id: session.id,
            date_label: calendar::short_label(session.date),
            duration_label: format!("{} hours", session.duration),
            activity: session.activity.clone(),
            focus_line: session.focus.as_ref().map(|focus| format!("Focus: {focus}")),
            notes: session.notes.clone(),
        }
    }
}

pub fn list_items(sessions: &[PracticeSession]) -> Vec<SessionListItem> {
    sessions.iter().map(SessionListItem::from).collect()
}

/// Header line above the list, e.g. `2 sessions • 3.5 hours total`.
pub fn summary_line(session_count: usize, total: Hours) -> String {
    let plural = if session_count == 1 { "" } else { "s" };
    format!("{session_count} session{plural} • {total} hours total")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use practice_core::{DraftField, DraftSession, SessionStore};

    #[test]
    fn list_item_labels() {
        let mut store = SessionStore::new();
        let mut draft = DraftSession::new(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        draft.set_field(DraftField::Activity, "Piano");
        draft.set_field(DraftField::Duration, "1.5");
        draft.set_field(DraftField::Focus, "Scales");
        store.add_session(&draft).unwrap();

        let items = list_items(store.sessions());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].date_label, "Mon, Mar 4");
        assert_eq!(items[0].duration_label, "1.5 hours");
        assert_eq!(items[0].focus_line.as_deref(), Some("Focus: Scales"));
        assert_eq!(items[0].notes, None);
    }

    #[test]
    fn summary_line_pluralises() {
        let one = Hours::parse("1").unwrap();
        let more = Hours::parse("3.5").unwrap();
        assert_eq!(summary_line(1, one), "1 session • 1 hours total");
        assert_eq!(summary_line(2, more), "2 sessions • 3.5 hours total");
        assert_eq!(summary_line(0, Hours::ZERO), "0 sessions • 0 hours total");
    }
}
