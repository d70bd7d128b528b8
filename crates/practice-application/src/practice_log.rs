//! The practice log update cycle.
//!
//! `PracticeLog` owns the view state. The UI sends an `Intent`, `dispatch`
//! computes the next state, and the returned `Effect` tells the UI what to do
//! beyond re-rendering (show a celebration, save a document).

use std::time::Duration;

use chrono::NaiveDate;
use practice_core::session::motivational_message;
use practice_core::{
    DraftSession, Hours, PracticeConfig, PracticeSession, ReportDocument, ReportExporter, Result,
    SessionId, SessionStore, ValidationError,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::intent::Intent;

/// A celebration currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Celebration {
    /// Increases with every celebration so stale dismissals can be ignored.
    pub seq: u64,
    pub message: &'static str,
}

/// Everything the view renders from.
#[derive(Debug, Clone)]
pub struct LogState {
    pub store: SessionStore,
    pub draft: DraftSession,
    pub celebration: Option<Celebration>,
    /// Why the last submit was rejected, cleared on the next edit or success.
    pub last_rejection: Option<ValidationError>,
}

impl LogState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            store: SessionStore::new(),
            draft: DraftSession::new(today),
            celebration: None,
            last_rejection: None,
        }
    }
}

/// What happened as a result of one intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// State changed but needs nothing beyond a re-render.
    Updated,
    /// The draft was committed. When `celebration` is set, the UI should
    /// schedule its dismissal after `dismiss_after`.
    Added {
        session: PracticeSession,
        celebration: Option<Celebration>,
        dismiss_after: Duration,
    },
    /// The draft was rejected and left as is.
    Rejected(ValidationError),
    Removed { id: SessionId, removed: bool },
    Exported(ReportDocument),
    CelebrationDismissed,
    /// Nothing changed (for example a stale dismissal).
    Ignored,
}

pub struct PracticeLog<R = StdRng> {
    state: LogState,
    config: PracticeConfig,
    exporter: ReportExporter,
    next_celebration_seq: u64,
    rng: R,
}

impl PracticeLog<StdRng> {
    /// Creates a log seeded from OS entropy.
    pub fn new(config: PracticeConfig, today: NaiveDate) -> Self {
        Self::with_rng(config, today, StdRng::from_entropy())
    }
}

impl<R: Rng> PracticeLog<R> {
    /// Creates a log with an injected random source for message selection.
    pub fn with_rng(config: PracticeConfig, today: NaiveDate, rng: R) -> Self {
        let exporter = ReportExporter::new(config.report.clone());
        Self {
            state: LogState::new(today),
            config,
            exporter,
            next_celebration_seq: 1,
            rng,
        }
    }

    pub fn state(&self) -> &LogState {
        &self.state
    }

    pub fn sessions(&self) -> &[PracticeSession] {
        self.state.store.sessions()
    }

    pub fn session_count(&self) -> usize {
        self.state.store.session_count()
    }

    pub fn total_duration(&self) -> Hours {
        self.state.store.total_duration()
    }

    /// Applies one intent to the state.
    ///
    /// # Errors
    ///
    /// Only `Intent::Export` can fail, and only if the report template is
    /// broken. Validation failures are reported as `Effect::Rejected`.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Effect> {
        let effect = match intent {
            Intent::EditDraft { field, value } => {
                self.state.draft.set_field(field, value);
                self.state.last_rejection = None;
                Effect::Updated
            }
            Intent::SetDraftDate(date) => {
                self.state.draft.set_date(date);
                self.state.last_rejection = None;
                Effect::Updated
            }
            Intent::Submit { today } => self.submit(today),
            Intent::Remove(id) => {
                let removed = self.state.store.remove_session(id);
                Effect::Removed { id, removed }
            }
            Intent::Export { as_of } => {
                let document = self.exporter.export(self.state.store.sessions(), as_of)?;
                Effect::Exported(document)
            }
            Intent::DismissCelebration { seq } => {
                let is_current = self
                    .state
                    .celebration
                    .as_ref()
                    .is_some_and(|current| current.seq == seq);
                if is_current {
                    self.state.celebration = None;
                    Effect::CelebrationDismissed
                } else {
                    Effect::Ignored
                }
            }
        };
        Ok(effect)
    }

    fn submit(&mut self, today: NaiveDate) -> Effect {
        let session = match self.state.store.add_session(&self.state.draft) {
            Ok(session) => session,
            Err(err) => {
                self.state.last_rejection = Some(err.clone());
                return Effect::Rejected(err);
            }
        };

        self.state.draft = DraftSession::new(today);
        self.state.last_rejection = None;

        let celebration = if self.config.celebration.enabled {
            let seq = self.next_celebration_seq;
            self.next_celebration_seq += 1;
            let message = motivational_message(self.state.store.session_count(), &mut self.rng);
            Some(Celebration { seq, message })
        } else {
            None
        };
        self.state.celebration = celebration.clone();

        Effect::Added {
            session,
            celebration,
            dismiss_after: self.config.celebration.dismiss_after(),
        }
    }
}
