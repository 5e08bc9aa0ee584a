//! # lp-store
//!
//! The collaborators around the pricing core: where base prices and
//! holidays come from, and the [`TicketOffice`] that resolves them before
//! handing a request to the pricer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `InMemoryStore`: a `PriceStore` and `HolidayStore` held in memory.
pub mod memory;

/// `TicketOffice` and `Quote`.
pub mod office;

/// `PriceStore` and `HolidayStore` traits and their record types.
pub mod store;

pub use memory::InMemoryStore;
pub use office::{Quote, TicketOffice};
pub use store::{BasePrice, HolidayRecord, HolidayStore, PriceStore};
