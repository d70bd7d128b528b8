use chrono::NaiveDate;
use practice_core::report::REPORT_COLUMNS;
use practice_core::{DraftField, DraftSession, ReportExporter, SessionStore};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn data_rows(html: &str) -> Vec<&str> {
    let body = html
        .split("<tbody>")
        .nth(1)
        .and_then(|rest| rest.split("</tbody>").next())
        .expect("table body");
    body.split("<tr>").skip(1).collect()
}

#[test]
fn test_single_session_report() {
    let mut store = SessionStore::new();
    let mut draft = DraftSession::new(ymd(2024, 3, 4));
    draft.set_field(DraftField::Activity, "Piano");
    draft.set_field(DraftField::Duration, "1.5");
    draft.set_field(DraftField::Focus, "Scales");
    store.add_session(&draft).unwrap();

    let document = ReportExporter::default()
        .export(store.sessions(), ymd(2024, 3, 4))
        .unwrap();
    let html = document.as_text();

    assert_eq!(document.filename, "practice-log-week10-2024.xls");
    assert_eq!(document.mime_type, "application/vnd.ms-excel");
    assert!(html.contains("Week 10, 2024"));

    let rows = data_rows(&html);
    assert_eq!(rows.len(), 1);
    let row = rows[0];
    assert!(row.contains("<td>03/04/2024</td>"));
    assert!(row.contains("<td>Monday</td>"));
    assert!(row.contains("<td>Piano<br><i>Focus: Scales</i></td>"));
    assert!(row.contains("<td>1.5 hrs</td>"));
    assert!(row.contains("<td>&nbsp;</td>"));

    assert!(html.contains("Total Practice Sessions: 1"));
    assert!(html.contains("Total Practice Time: 1.5 hours"));
}

#[test]
fn test_empty_collection_report() {
    let store = SessionStore::new();
    let document = ReportExporter::default()
        .export(store.sessions(), ymd(2024, 3, 4))
        .unwrap();
    let html = document.as_text();

    for column in REPORT_COLUMNS {
        assert!(html.contains(column), "missing header {column}");
    }
    assert!(data_rows(&html).is_empty());
    assert!(html.contains("Total Practice Sessions: 0"));
    assert!(html.contains("Total Practice Time: 0 hours"));
}

#[test]
fn test_focus_precedes_notes() {
    let mut store = SessionStore::new();
    let mut draft = DraftSession::new(ymd(2024, 3, 5));
    draft.set_field(DraftField::Activity, "Guitar");
    draft.set_field(DraftField::Duration, "2");
    draft.set_field(DraftField::Focus, "Chords");
    draft.set_field(DraftField::Notes, "Barre chords hurt");
    store.add_session(&draft).unwrap();

    let document = ReportExporter::default()
        .export(store.sessions(), ymd(2024, 3, 5))
        .unwrap();
    let html = document.as_text();

    let activity = html.find("Guitar").unwrap();
    let focus = html.find("Focus: Chords").unwrap();
    let notes = html.find("Note: Barre chords hurt").unwrap();
    assert!(activity < focus && focus < notes);
    assert!(html.contains("<td>Tuesday</td>"));
}

#[test]
fn test_totals_track_removals() {
    let mut store = SessionStore::new();
    let mut ids = Vec::new();
    for duration in ["1", "0.5", "0.25"] {
        let mut draft = DraftSession::new(ymd(2024, 3, 4));
        draft.set_field(DraftField::Activity, "Drills");
        draft.set_field(DraftField::Duration, duration);
        ids.push(store.add_session(&draft).unwrap().id);
    }
    store.remove_session(ids[0]);

    let document = ReportExporter::default()
        .export(store.sessions(), ymd(2024, 3, 4))
        .unwrap();
    let html = document.as_text();

    assert_eq!(data_rows(&html).len(), 2);
    assert!(html.contains("Total Practice Sessions: 2"));
    assert!(html.contains("Total Practice Time: 0.75 hours"));
}

#[test]
fn test_oversized_total_is_not_reported_as_zero() {
    let mut store = SessionStore::new();
    for _ in 0..2 {
        let mut draft = DraftSession::new(ymd(2024, 3, 4));
        draft.set_field(DraftField::Activity, "Marathon");
        draft.set_field(DraftField::Duration, "1e308");
        store.add_session(&draft).unwrap();
    }

    let document = ReportExporter::default()
        .export(store.sessions(), ymd(2024, 3, 4))
        .unwrap();
    let html = document.as_text();

    assert!(!html.contains("Total Practice Time: 0 hours"));
    assert!(html.contains(&format!("Total Practice Time: {} hours", f64::MAX)));
}
