use super::model::{DraftSession, Hours, PracticeSession, SessionId};
use crate::error::ValidationError;

/// The authoritative in-memory collection of practice sessions.
///
/// `SessionStore` keeps sessions in insertion order and answers the aggregate
/// queries the list view and the report need. Nothing is persisted; the store
/// lives exactly as long as the view that owns it.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Vec<PracticeSession>,
    next_id: u64,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Creates an empty store.
    ///
    /// # Examples
    ///
    /// ```
    /// use practice_core::session::SessionStore;
    ///
    /// let store = SessionStore::new();
    /// assert_eq!(store.session_count(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
            next_id: 1,
        }
    }

    /// Validates `draft` and appends it to the collection.
    ///
    /// The new session receives an id from the store's counter, which is never
    /// reused even after removals.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` when activity or duration is missing or the
    /// duration is not a non-negative number. The store is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use practice_core::session::{DraftField, DraftSession, SessionStore};
    ///
    /// let mut store = SessionStore::new();
    /// let mut draft = DraftSession::new(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
    /// draft.set_field(DraftField::Activity, "Piano");
    /// draft.set_field(DraftField::Duration, "1.5");
    ///
    /// let session = store.add_session(&draft).unwrap();
    /// assert_eq!(session.activity, "Piano");
    /// assert_eq!(store.session_count(), 1);
    /// ```
    pub fn add_session(&mut self, draft: &DraftSession) -> Result<PracticeSession, ValidationError> {
        let id = SessionId::new(self.next_id);
        let session = match draft.validate(id) {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "Rejected practice session draft");
                return Err(err);
            }
        };

        self.next_id += 1;
        self.sessions.push(session.clone());
        tracing::debug!(
            id = %session.id,
            activity = %session.activity,
            count = self.sessions.len(),
            "Added practice session"
        );

        Ok(session)
    }

    /// Removes the session with `id`. Unknown ids are ignored.
    ///
    /// Returns whether a session was actually removed.
    pub fn remove_session(&mut self, id: SessionId) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|session| session.id != id);
        let removed = self.sessions.len() != before;
        if removed {
            tracing::debug!(id = %id, count = self.sessions.len(), "Removed practice session");
        }
        removed
    }

    /// Sum of all stored durations.
    ///
    /// Non-finite records count as zero; a sum too large for `f64` saturates.
    pub fn total_duration(&self) -> Hours {
        total_duration(&self.sessions)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Sessions in insertion order.
    pub fn sessions(&self) -> &[PracticeSession] {
        &self.sessions
    }

}

/// Sums the durations of `sessions`, treating non-finite records as zero.
///
/// Shared by the store and the report so both always agree on the total.
pub fn total_duration(sessions: &[PracticeSession]) -> Hours {
    let sum: f64 = sessions
        .iter()
        .map(|session| session.duration.value())
        .filter(|value| value.is_finite())
        .sum();
    Hours::from_total(sum)
}
