//! `HolidayCalendar` trait and the empty calendar.
//!
//! A holiday calendar answers one question: is this date a public holiday?
//! Pricing rules use it to suppress promotions; they never need to know
//! where the holidays came from.

use crate::date::Date;

/// A source of public holidays.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Public holidays"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a holiday in this calendar.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` is an ordinary (non-holiday) day.
    fn is_ordinary_day(&self, date: Date) -> bool {
        !self.is_holiday(date)
    }
}

/// A calendar with no holidays at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn name(&self) -> &str {
        "No holidays"
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}
