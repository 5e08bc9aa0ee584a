//! # lp-time
//!
//! Calendar dates, weekdays, months, and holiday calendars.
//!
//! All types here are timezone-free value types: a [`Date`] names a day,
//! never an instant.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait and the empty calendar.
pub mod calendar;

/// `Date` type and ISO parsing.
pub mod date;

/// `HolidaySet`: a calendar built from explicit dates.
pub mod holidays;

/// `Month`: month of the year.
pub mod month;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{HolidayCalendar, NoHolidays};
pub use date::Date;
pub use holidays::{is_holiday, HolidaySet};
pub use month::Month;
pub use weekday::Weekday;
