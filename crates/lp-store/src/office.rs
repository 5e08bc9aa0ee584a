//! Ticket office: resolves store data and prices a ticket.
//!
//! This is the adapter between raw inputs (a type tag, an age, a date
//! string) and the typed pricing core. Every lookup happens here, so the
//! pricer receives a consistent snapshot for each call.

use crate::store::{HolidayStore, PriceStore};
use lp_core::errors::{Error, Result};
use lp_core::{Age, Cost};
use lp_pricing::{TicketPricer, TicketRequest, TicketType};
use lp_time::{Date, HolidayCalendar, HolidaySet, NoHolidays};
use tracing::{debug, warn};

/// The priced result of a quote, serialized as `{"cost": N}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quote {
    /// Price to charge.
    pub cost: Cost,
}

/// Prices tickets against a store of base prices and holidays.
#[derive(Debug, Clone, Default)]
pub struct TicketOffice<S> {
    store: S,
    pricer: TicketPricer,
}

impl<S: PriceStore + HolidayStore> TicketOffice<S> {
    /// Create an office over `store` using the default tariff.
    pub fn new(store: S) -> Self {
        Self::with_pricer(store, TicketPricer::default())
    }

    /// Create an office over `store` using `pricer`.
    pub fn with_pricer(store: S, pricer: TicketPricer) -> Self {
        Self { store, pricer }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Set the base price for a ticket type tag.
    pub fn set_base_price(&mut self, ticket_type: &str, cost: Cost) {
        debug!(ticket_type, cost, "setting base price");
        self.store.set_base_price(ticket_type, cost);
    }

    /// Load the holiday calendar from the store.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDateFormat`] for the first malformed record.
    pub fn holidays(&self) -> Result<HolidaySet> {
        let records = self.store.holidays();
        HolidaySet::from_records("Public holidays", records.iter().map(|r| r.holiday.as_str()))
            .map_err(|err| {
                warn!(error = %err, "malformed holiday record");
                err
            })
    }

    /// Quote a ticket.
    ///
    /// `ticket_type` is the raw tag: the base price is looked up under it
    /// as given, and any tag other than `"night"` prices as a day ticket.
    /// An empty `date` is treated as no date. Stored holidays are read only
    /// when they can change the price, i.e. for a day ticket on a Monday.
    ///
    /// # Errors
    /// * [`Error::MissingBasePrice`] if no price is configured for the tag.
    /// * [`Error::InvalidDateFormat`] if `date` does not parse, or if a
    ///   stored holiday does not parse and the holidays were needed.
    pub fn quote(&self, ticket_type: &str, age: Option<Age>, date: Option<&str>) -> Result<Quote> {
        let base_cost = self
            .store
            .find_base_price_by_type(ticket_type)
            .ok_or_else(|| {
                warn!(ticket_type, "no base price configured");
                Error::MissingBasePrice(ticket_type.to_owned())
            })?
            .cost;
        let date = date.filter(|s| !s.is_empty()).map(Date::parse).transpose()?;
        let kind = TicketType::from_tag(ticket_type);

        // holidays only matter for a day ticket on a Monday
        let needs_holidays = kind == TicketType::Day && date.is_some_and(|d| d.is_monday());
        let holidays = if needs_holidays {
            Some(self.holidays()?)
        } else {
            None
        };
        let calendar: &dyn HolidayCalendar = match &holidays {
            Some(set) => set,
            None => &NoHolidays,
        };

        let request = TicketRequest {
            ticket_type: kind,
            age,
            base_cost,
            date,
        };
        let cost = self.pricer.price(&request, calendar);
        debug!(ticket_type, base_cost, cost, "quoted ticket");
        Ok(Quote { cost })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStore;

    fn office() -> TicketOffice<InMemoryStore> {
        let store = InMemoryStore::new()
            .with_price("1jour", 35)
            .with_price("night", 19)
            .with_holiday("2019-02-18");
        TicketOffice::new(store)
    }

    #[test]
    fn quote_resolves_price_and_holidays() {
        let office = office();
        assert_eq!(office.quote("1jour", None, None).unwrap().cost, 35);
        assert_eq!(office.quote("1jour", None, Some("2019-02-11")).unwrap().cost, 23);
        assert_eq!(office.quote("1jour", None, Some("2019-02-18")).unwrap().cost, 35);
        assert_eq!(office.quote("night", Some(70), None).unwrap().cost, 8);
    }

    #[test]
    fn empty_date_is_no_date() {
        assert_eq!(office().quote("1jour", Some(30), Some("")).unwrap().cost, 35);
    }

    #[test]
    fn missing_price() {
        assert_eq!(
            office().quote("season", Some(30), None),
            Err(Error::MissingBasePrice("season".into()))
        );
    }
}
