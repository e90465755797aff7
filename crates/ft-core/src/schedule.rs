//! Date arithmetic for the recurring rule engine.

use crate::Frequency;

use chrono::{Days, Months, NaiveDate};

/// Advance a date by exactly one period of the given frequency.
///
/// Monthly and yearly steps follow calendar rollover and clamp to the last
/// day of the target month: Jan 31 + 1 month is Feb 29 in a leap year and
/// Feb 28 otherwise. This is the pinned policy for every calendar edge
/// case, not an accident of the underlying library.
pub fn advance(date: NaiveDate, frequency: Frequency) -> NaiveDate {
    match frequency {
        Frequency::Daily => date + Days::new(1),
        Frequency::Weekly => date + Days::new(7),
        Frequency::Monthly => date + Months::new(1),
        Frequency::Yearly => date + Months::new(12),
    }
}

/// The half-open date interval covering one calendar month:
/// [first day of the month, first day of the next month).
///
/// Returns `None` for an out-of-range month number.
pub fn month_window(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some((start, start + Months::new(1)))
}
