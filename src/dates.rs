//! NAV reporting-date helpers.
//!
//! AMFI publishes NAVs for business days only: on Saturdays, Sundays and
//! Mondays there is no fresh report, and the latest available NAV is the
//! previous Friday's. These helpers pick the report date to expect for a
//! given calendar date. Dates are formatted `DD-Mon-YYYY` to match the bulk
//! feed.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Whether no fresh NAV is published for `date` (Saturday, Sunday, or the
/// Monday that still shows Friday's report).
#[must_use]
pub fn is_nav_holiday(date: NaiveDate) -> bool {
    matches!(
        date.weekday(),
        Weekday::Sat | Weekday::Sun | Weekday::Mon
    )
}

/// The most recent Friday strictly before `date`.
#[must_use]
pub fn last_friday(date: NaiveDate) -> NaiveDate {
    // days since the previous Friday; a Friday maps to a full week back
    let mut back = i64::from((date.weekday().num_days_from_sunday() + 2) % 7);
    if back == 0 {
        back = 7;
    }
    date - Duration::days(back)
}

/// The date of the most recent NAV report relative to `date`: the previous
/// Friday over a weekend/Monday, otherwise the previous day.
#[must_use]
pub fn previous_nav_date(date: NaiveDate) -> NaiveDate {
    if is_nav_holiday(date) {
        last_friday(date)
    } else {
        date - Duration::days(1)
    }
}

/// Format a date the way the bulk feed prints it, e.g. `29-Aug-2026`.
#[must_use]
pub fn format_nav_date(date: NaiveDate) -> String {
    date.format("%d-%b-%Y").to_string()
}
