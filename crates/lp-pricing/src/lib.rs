//! # lp-pricing
//!
//! Ticket pricing: maps a ticket type, an optional rider age, a base price
//! and an optional date to a cost.
//!
//! Pricing is pure. Holidays and base prices are passed in already
//! resolved, so a [`TicketPricer`] can be shared freely across threads.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `TicketPricer` dispatcher and the `compute_cost` entry point.
pub mod pricer;

/// `PricingRule` trait with the night and day rules.
pub mod rules;

/// `Tariff` configuration and `Reduction`.
pub mod tariff;

/// `TicketType` and `TicketRequest`.
pub mod ticket;

pub use pricer::{compute_cost, TicketPricer};
pub use rules::{DayTicketRule, NightTicketRule, PricingRule};
pub use tariff::{Reduction, Tariff};
pub use ticket::{TicketRequest, TicketType};
