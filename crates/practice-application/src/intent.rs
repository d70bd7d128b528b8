//! Intents the UI layer sends into the update cycle.

use chrono::NaiveDate;
use practice_core::{DraftField, SessionId};

/// A discrete user action.
///
/// Each intent is handled to completion by `PracticeLog::dispatch` before the
/// next one is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Replace one text field of the draft.
    EditDraft { field: DraftField, value: String },
    /// Change the draft's date.
    SetDraftDate(NaiveDate),
    /// Submit the draft. `today` dates the fresh template on success.
    Submit { today: NaiveDate },
    /// Remove a committed session; unknown ids are a no-op.
    Remove(SessionId),
    /// Export everything currently held, labelled with the week of `as_of`.
    Export { as_of: NaiveDate },
    /// Sent by the celebration timer. Ignored unless `seq` is current.
    DismissCelebration { seq: u64 },
}
