//! Core domain for the practice log.
//!
//! Holds the session model and in-memory store, the calendar helpers, the
//! celebratory message rules and the weekly report exporter. There is no
//! persistence: a `SessionStore` lives exactly as long as its owner.

pub mod calendar;
pub mod config;
pub mod error;
pub mod report;
pub mod session;

// Re-export common types
pub use config::{CelebrationSettings, PracticeConfig, ReportSettings};
pub use error::{PracticeError, Result, ValidationError};
pub use report::{ReportDocument, ReportExporter};
pub use session::{DraftField, DraftSession, Hours, PracticeSession, SessionId, SessionStore};
