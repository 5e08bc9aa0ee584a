//! # liftpass
//!
//! Lift pass pricing.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `lp-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use liftpass::store::{InMemoryStore, TicketOffice};
//!
//! let store = InMemoryStore::new()
//!     .with_price("1jour", 35)
//!     .with_holiday("2019-02-18");
//! let office = TicketOffice::new(store);
//!
//! // a plain Monday gets the promotion, a holiday Monday does not
//! assert_eq!(office.quote("1jour", Some(30), Some("2019-02-11")).unwrap().cost, 23);
//! assert_eq!(office.quote("1jour", Some(30), Some("2019-02-18")).unwrap().cost, 35);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use lp_core as core;

/// Dates, weekdays, and holiday calendars.
pub use lp_time as time;

/// Ticket types, tariffs, and pricing rules.
pub use lp_pricing as pricing;

/// Store interfaces and the ticket office.
pub use lp_store as store;

// ── Top-level re-exports ──────────────────────────────────────────────────────

pub use lp_core::{Error, Result};
pub use lp_pricing::{compute_cost, Tariff, TicketPricer, TicketType};
pub use lp_time::{Date, HolidaySet};
