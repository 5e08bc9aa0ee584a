//! `Date` type.
//!
//! A date is stored as a day serial number in the proleptic Gregorian
//! calendar, counted from the Rata Die epoch:
//!
//! # Serial number convention
//! * Serial 1 = January 1, 0001 (a Monday).
//! * The valid date range is 0001-01-01 to 9999-12-31, which is exactly the
//!   range the four-digit `YYYY-MM-DD` form can denote.
//!
//! There is no time-of-day and no timezone, so two equal dates are the same
//! day everywhere.

use crate::month::Month;
use crate::weekday::Weekday;
use lp_core::ensure;
use lp_core::errors::{Error, Result};
use std::str::FromStr;

/// An immutable calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(3_652_059);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDateFormat`] if any component is out of range,
    /// including February 29 in a common year.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        check_ymd(year, month, day)
            .map_err(|reason| Error::invalid_date(format!("{year:04}-{month:02}-{day:02}"), reason))?;
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from a serial number (1 = 0001-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        ensure!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            Error::InvalidArgument(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            ))
        );
        Ok(Date(serial))
    }

    /// Parse the canonical `YYYY-MM-DD` form.
    ///
    /// Surrounding whitespace is ignored. Each component must consist of
    /// ASCII digits only, with widths 4, 2 and 2.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDateFormat`] for a wrong component count,
    /// non-numeric components, wrong widths, or a day that does not exist in
    /// the given month and year.
    ///
    /// ```
    /// use lp_time::{Date, Weekday};
    /// let d = Date::parse("2024-02-29").unwrap();
    /// assert_eq!(d.weekday(), Weekday::Thursday);
    /// assert!(Date::parse("2023-02-29").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let (year, month, day) =
            parse_iso_components(text).map_err(|reason| Error::invalid_date(text, reason))?;
        check_ymd(year, month, day).map_err(|reason| Error::invalid_date(text, reason))?;
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_enum(&self) -> Month {
        Month::from_number(self.month()).unwrap_or(Month::January)
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_ordinal(self.day_of_week()).unwrap_or(Weekday::Monday)
    }

    /// Return the ISO day of the week, 1 = Monday … 7 = Sunday.
    pub fn day_of_week(&self) -> u8 {
        // serial 1 (0001-01-01) is a Monday
        ((self.0 - 1).rem_euclid(7) + 1) as u8
    }

    /// Return `true` if this date falls on a Monday.
    pub fn is_monday(&self) -> bool {
        self.weekday() == Weekday::Monday
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::InvalidArgument(format!("{self} + {n} days overflows")))?;
        Date::from_serial(serial)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Parsing & display ─────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Date::parse(s)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Date::parse(&text).map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year, or `None` if `month` is not 1–12.
pub fn days_in_month(year: u16, month: u8) -> Option<u8> {
    Month::from_number(month).map(|m| m.length(year))
}

fn check_ymd(year: u16, month: u8, day: u8) -> std::result::Result<(), String> {
    if !(1..=9999).contains(&year) {
        return Err(format!("year {year} out of range [1, 9999]"));
    }
    let Some(mon) = Month::from_number(month) else {
        return Err(format!("month {month} out of range [1, 12]"));
    };
    let days_in = mon.length(year);
    if day == 0 || day > days_in {
        return Err(format!("day {day} out of range [1, {days_in}] for {mon} {year:04}"));
    }
    Ok(())
}

/// Split `YYYY-MM-DD` into numeric components without range checks.
fn parse_iso_components(s: &str) -> std::result::Result<(u16, u8, u8), String> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected 3 components, found {}", parts.len()));
    }
    for (part, width, what) in [(parts[0], 4, "year"), (parts[1], 2, "month"), (parts[2], 2, "day")] {
        if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("{what} {part:?} is not {width} digits"));
        }
    }
    // all-digit strings of these widths always fit
    let year = parts[0].parse::<u16>().map_err(|e| e.to_string())?;
    let month = parts[1].parse::<u8>().map_err(|e| e.to_string())?;
    let day = parts[2].parse::<u8>().map_err(|e| e.to_string())?;
    Ok((year, month, day))
}

/// Convert (year, month, day) to a serial number.
///
/// Serial 1 = 0001-01-01.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32 - 1;
    // Days in years 1..year, leap days included
    let mut serial = y * 365 + y / 4 - y / 100 + y / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // 146 097 days per 400-year cycle; the estimate is off by at most one
    let mut y = ((serial as i64 - 1) * 400 / 146_097 + 1) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if y < 9999 && serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1; // 1-based day of year
    let mut m = Month::January;
    loop {
        let days = m.length(y) as i32;
        if remaining <= days {
            break;
        }
        match m.succ() {
            Some(next) => {
                remaining -= days;
                m = next;
            }
            None => break,
        }
    }
    (y, m.number(), remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
