//! Calendar helpers shared by the list view and the report.

use chrono::{Datelike, NaiveDate};

/// Week of the year, 1-indexed, counted in Sunday-started weeks.
///
/// Week 1 is the (possibly partial) week containing January 1st, so the
/// number is `ceil((day_of_year0 + weekday_of_jan1 + 1) / 7)` where the
/// weekday counts from Sunday = 0.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use practice_core::calendar::week_number;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// assert_eq!(week_number(monday), 10);
/// ```
pub fn week_number(date: NaiveDate) -> u32 {
    let days = date.ordinal0();
    let weekday = date.weekday().num_days_from_sunday();
    let jan1_weekday = (weekday + 7 - days % 7) % 7;
    (days + jan1_weekday + 1).div_ceil(7)
}

/// Full weekday name, e.g. `Monday`.
pub fn day_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Fixed `MM/DD/YYYY` rendering used in the report.
pub fn report_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Compact label used in the session list, e.g. `Mon, Mar 4`.
pub fn short_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}
