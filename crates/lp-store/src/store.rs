//! Store interfaces.
//!
//! The pricing core never reads a store itself. These traits describe what
//! a backing store must provide so that [`crate::TicketOffice`] can resolve
//! a base price and a holiday list for one pricing call.

use lp_core::Cost;

/// A configured base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasePrice {
    /// Undiscounted cost.
    pub cost: Cost,
}

/// A holiday row as stored: a canonical `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayRecord {
    /// The holiday date.
    pub holiday: String,
}

impl HolidayRecord {
    /// Create a record from a date string.
    pub fn new(holiday: impl Into<String>) -> Self {
        Self {
            holiday: holiday.into(),
        }
    }
}

/// Base prices keyed by ticket type tag.
pub trait PriceStore {
    /// Set (or replace) the base price for `ticket_type`.
    fn set_base_price(&mut self, ticket_type: &str, cost: Cost);

    /// Look up the base price for `ticket_type`.
    fn find_base_price_by_type(&self, ticket_type: &str) -> Option<BasePrice>;
}

/// The list of public holidays.
pub trait HolidayStore {
    /// All holiday records, in no particular order.
    fn holidays(&self) -> Vec<HolidayRecord>;
}
