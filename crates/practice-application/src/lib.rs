//! Application layer for the practice log.
//!
//! This crate wires the core domain into a unidirectional update cycle: the
//! UI sends an `Intent`, `PracticeLog::dispatch` produces the next state and an
//! `Effect`, and the UI re-renders from `PracticeLog::state`.

pub mod celebration;
pub mod intent;
pub mod practice_log;
pub mod view;

pub use celebration::CelebrationTimer;
pub use intent::Intent;
pub use practice_log::{Celebration, Effect, LogState, PracticeLog};
pub use view::{list_items, summary_line, SessionListItem};
