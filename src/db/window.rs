//! Rolling-window date arithmetic

use chrono::{Months, NaiveDate};

/// Start of the "most recent year" window: the given date minus 12 calendar
/// months, not 365 days. Day-of-month is clamped when the target month is
/// shorter (e.g. a leap day maps to Feb 28).
pub fn year_window_start(most_recent: NaiveDate) -> NaiveDate {
    // checked_sub_months only fails below year -262144; unreachable for
    // observation dates, so fall back to the input rather than panic.
    most_recent
        .checked_sub_months(Months::new(12))
        .unwrap_or(most_recent)
}
