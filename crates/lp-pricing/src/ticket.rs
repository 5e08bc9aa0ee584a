//! Ticket types and pricing requests.

use lp_core::{Age, Cost};
use lp_time::Date;
use std::fmt;

/// The kind of ticket being priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TicketType {
    /// Evening ticket; no weekday promotion applies.
    Night,
    /// Standard day ticket.
    #[default]
    Day,
}

impl TicketType {
    /// Map a raw type tag to a ticket type.
    ///
    /// Only the exact tag `"night"` selects [`TicketType::Night`]; every
    /// other tag, including unknown ones, prices as a day ticket.
    ///
    /// ```
    /// use lp_pricing::TicketType;
    /// assert_eq!(TicketType::from_tag("night"), TicketType::Night);
    /// assert_eq!(TicketType::from_tag("1jour"), TicketType::Day);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "night" => TicketType::Night,
            _ => TicketType::Day,
        }
    }

    /// Return the canonical tag (`"night"` or `"day"`).
    pub fn as_tag(&self) -> &'static str {
        match self {
            TicketType::Night => "night",
            TicketType::Day => "day",
        }
    }
}

impl From<&str> for TicketType {
    fn from(tag: &str) -> Self {
        TicketType::from_tag(tag)
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Everything needed to price one ticket.
///
/// Built fresh for each pricing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketRequest {
    /// Ticket type.
    pub ticket_type: TicketType,
    /// Rider age, if known.
    pub age: Option<Age>,
    /// Undiscounted price for the ticket type.
    pub base_cost: Cost,
    /// Day of use, if known.
    pub date: Option<Date>,
}

impl TicketRequest {
    /// Create a request with no age and no date.
    pub fn new(ticket_type: impl Into<TicketType>, base_cost: Cost) -> Self {
        Self {
            ticket_type: ticket_type.into(),
            age: None,
            base_cost,
            date: None,
        }
    }

    /// Set the rider age.
    pub fn with_age(mut self, age: Age) -> Self {
        self.age = Some(age);
        self
    }

    /// Set the day of use.
    pub fn on(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }
}
