//! Practice session domain model.
//!
//! A `DraftSession` is the editable form state; a `PracticeSession` is what the
//! store holds once a draft has been validated and committed.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identity of a committed session.
///
/// Assigned by the store from a monotonic counter, so two sessions added in
/// the same instant still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(u64);

impl SessionId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A non-negative, finite number of hours.
///
/// Displays with the shortest representation that round-trips, so `1.5`
/// prints as `1.5` and `3.0` prints as `3`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(f64);

impl Hours {
    pub const ZERO: Hours = Hours(0.0);

    /// Parses user input such as `"1.5"` or `"0.25"`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingDuration);
        }
        let value: f64 = trimmed
            .parse()
            .map_err(|_| ValidationError::InvalidDuration {
                raw: raw.to_string(),
            })?;
        if !value.is_finite() {
            return Err(ValidationError::InvalidDuration {
                raw: raw.to_string(),
            });
        }
        if value < 0.0 {
            return Err(ValidationError::NegativeDuration {
                raw: raw.to_string(),
            });
        }
        // Normalise -0.0 so it never prints as "-0".
        Ok(Self(value.abs()))
    }

    /// Wraps a sum of stored durations.
    ///
    /// A sum that overflowed saturates at `f64::MAX`; NaN or a non-positive sum
    /// is zero.
    pub(crate) fn from_total(value: f64) -> Self {
        if value.is_infinite() && value > 0.0 {
            Self(f64::MAX)
        } else if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One logged practice event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeSession {
    pub id: SessionId,
    pub date: NaiveDate,
    pub activity: String,
    pub duration: Hours,
    pub focus: Option<String>,
    pub notes: Option<String>,
}

/// Text fields of the draft form that the user edits one keystroke at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Activity,
    Duration,
    Focus,
    Notes,
}

/// In-progress form state, not yet part of the collection.
///
/// `duration` stays raw text until the draft is submitted so a half-typed
/// value like `"1."` can live in the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSession {
    pub date: NaiveDate,
    pub activity: String,
    pub duration: String,
    pub focus: String,
    pub notes: String,
}

impl DraftSession {
    /// Empty template dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today,
            activity: String::new(),
            duration: String::new(),
            focus: String::new(),
            notes: String::new(),
        }
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Activity => self.activity = value,
            DraftField::Duration => self.duration = value,
            DraftField::Focus => self.focus = value,
            DraftField::Notes => self.notes = value,
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Activity => &self.activity,
            DraftField::Duration => &self.duration,
            DraftField::Focus => &self.focus,
            DraftField::Notes => &self.notes,
        }
    }

    /// Checks the required fields and builds the session that would be stored.
    ///
    /// Activity is checked before duration so the first missing field is the
    /// one reported.
    pub fn validate(&self, id: SessionId) -> Result<PracticeSession, ValidationError> {
        let activity = self.activity.trim();
        if activity.is_empty() {
            return Err(ValidationError::MissingActivity);
        }
        let duration = Hours::parse(&self.duration)?;

        Ok(PracticeSession {
            id,
            date: self.date,
            activity: activity.to_string(),
            duration,
            focus: non_blank(&self.focus),
            notes: non_blank(&self.notes),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
