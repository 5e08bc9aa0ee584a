//! In-memory store.

use crate::store::{BasePrice, HolidayRecord, HolidayStore, PriceStore};
use lp_core::Cost;
use std::collections::HashMap;

/// Base prices and holidays kept in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    prices: HashMap<String, Cost>,
    holidays: Vec<HolidayRecord>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a base price, builder style.
    pub fn with_price(mut self, ticket_type: &str, cost: Cost) -> Self {
        self.set_base_price(ticket_type, cost);
        self
    }

    /// Add a holiday record, builder style.
    pub fn with_holiday(mut self, holiday: &str) -> Self {
        self.add_holiday(holiday);
        self
    }

    /// Append a holiday record. The string is stored unparsed.
    pub fn add_holiday(&mut self, holiday: &str) {
        self.holidays.push(HolidayRecord::new(holiday));
    }
}

impl PriceStore for InMemoryStore {
    fn set_base_price(&mut self, ticket_type: &str, cost: Cost) {
        self.prices.insert(ticket_type.to_owned(), cost);
    }

    fn find_base_price_by_type(&self, ticket_type: &str) -> Option<BasePrice> {
        self.prices
            .get(ticket_type)
            .map(|&cost| BasePrice { cost })
    }
}

impl HolidayStore for InMemoryStore {
    fn holidays(&self) -> Vec<HolidayRecord> {
        self.holidays.clone()
    }
}
