//! Holiday set: a calendar whose holidays are listed explicitly.
//!
//! Holiday lists come from an external store as canonical `YYYY-MM-DD`
//! strings; [`HolidaySet::from_records`] parses them and propagates the
//! first malformed record as an error.

use crate::calendar::HolidayCalendar;
use crate::date::Date;
use lp_core::errors::Result;
use std::collections::HashSet;

/// A calendar made of explicitly listed holiday dates.
///
/// Membership compares year, month and day exactly; insertion order is
/// irrelevant and duplicates collapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    name: String,
    holidays: HashSet<Date>,
}

impl HolidaySet {
    /// Create an empty holiday set with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: HashSet::new(),
        }
    }

    /// Create a holiday set from already-parsed dates.
    pub fn from_dates(name: impl Into<String>, dates: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: dates.into_iter().collect(),
        }
    }

    /// Create a holiday set by parsing canonical date strings.
    ///
    /// # Errors
    /// Returns [`lp_core::Error::InvalidDateFormat`] for the first record
    /// that does not parse.
    pub fn from_records<I, S>(name: impl Into<String>, records: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let holidays = records
            .into_iter()
            .map(|r| Date::parse(r.as_ref()))
            .collect::<Result<HashSet<_>>>()?;
        Ok(Self {
            name: name.into(),
            holidays,
        })
    }

    /// Add a holiday. Returns `false` if it was already present.
    pub fn insert(&mut self, date: Date) -> bool {
        self.holidays.insert(date)
    }

    /// Remove a holiday. Returns `false` if it was not present.
    pub fn remove(&mut self, date: Date) -> bool {
        self.holidays.remove(&date)
    }

    /// Return `true` if `date` is in the set.
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }

    /// Number of distinct holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Return `true` if the set holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Iterate over the holidays in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.holidays.iter().copied()
    }
}

impl Default for HolidaySet {
    fn default() -> Self {
        HolidaySet::new("Public holidays")
    }
}

impl FromIterator<Date> for HolidaySet {
    fn from_iter<T: IntoIterator<Item = Date>>(iter: T) -> Self {
        HolidaySet::from_dates("Public holidays", iter)
    }
}

impl Extend<Date> for HolidaySet {
    fn extend<T: IntoIterator<Item = Date>>(&mut self, iter: T) {
        self.holidays.extend(iter);
    }
}

impl HolidayCalendar for HolidaySet {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.contains(date)
    }
}

/// Return `true` if `date` equals any date in `holidays`.
///
/// An empty slice always yields `false`.
pub fn is_holiday(date: Date, holidays: &[Date]) -> bool {
    holidays.iter().any(|&h| h == date)
}
