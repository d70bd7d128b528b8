//! Session domain module.
//!
//! This module contains the practice session model, the draft form state and
//! the in-memory store that owns the committed collection.
//!
//! # Module Structure
//!
//! - `model`: `PracticeSession`, `DraftSession`, `SessionId`, `Hours`
//! - `store`: `SessionStore` and the shared duration aggregate
//! - `motivation`: celebratory message selection after an add

mod model;
pub mod motivation;
mod store;

// Re-export public API
pub use model::{DraftField, DraftSession, Hours, PracticeSession, SessionId};
pub use motivation::{motivational_message, MilestoneKind};
pub use store::{total_duration, SessionStore};
