//! Ticket pricer: selects the rule for a ticket type and applies it.

use crate::rules::{DayTicketRule, NightTicketRule, PricingRule};
use crate::tariff::{Reduction, Tariff};
use crate::ticket::{TicketRequest, TicketType};
use lp_core::errors::Result;
use lp_core::{Age, Cost};
use lp_time::{Date, HolidayCalendar};
use tracing::debug;

/// Prices tickets under one tariff.
///
/// Holds no mutable state; a single pricer can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicketPricer {
    tariff: Tariff,
    night: NightTicketRule,
    day: DayTicketRule,
}

impl TicketPricer {
    /// Create a pricer for `tariff`.
    ///
    /// # Errors
    /// Returns [`lp_core::Error::InvalidArgument`] if the tariff fails
    /// [`Tariff::validate`].
    pub fn new(tariff: Tariff) -> Result<Self> {
        tariff.validate()?;
        Ok(Self {
            tariff,
            night: NightTicketRule::new(tariff),
            day: DayTicketRule::new(tariff),
        })
    }

    /// The tariff in use.
    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// The rule that prices `ticket_type`.
    pub fn rule_for(&self, ticket_type: TicketType) -> &dyn PricingRule {
        match ticket_type {
            TicketType::Night => &self.night,
            TicketType::Day => &self.day,
        }
    }

    /// The day-ticket reduction that applies on `date`.
    pub fn reduction(&self, date: Option<Date>, calendar: &dyn HolidayCalendar) -> Reduction {
        self.day.reduction(date, calendar)
    }

    /// Price a request.
    pub fn price(&self, request: &TicketRequest, calendar: &dyn HolidayCalendar) -> Cost {
        let rule = self.rule_for(request.ticket_type);
        let cost = rule.cost(request, calendar);
        debug!(
            rule = rule.name(),
            age = ?request.age,
            base_cost = request.base_cost,
            date = ?request.date,
            calendar = calendar.name(),
            cost,
            "priced ticket"
        );
        cost
    }

    /// Price a ticket from its parts.
    pub fn compute_cost(
        &self,
        ticket_type: impl Into<TicketType>,
        age: Option<Age>,
        base_cost: Cost,
        date: Option<Date>,
        holidays: &dyn HolidayCalendar,
    ) -> Cost {
        let request = TicketRequest {
            ticket_type: ticket_type.into(),
            age,
            base_cost,
            date,
        };
        self.price(&request, holidays)
    }
}

/// Price a ticket under the default tariff.
///
/// ```
/// use lp_pricing::compute_cost;
/// use lp_time::{Date, NoHolidays};
///
/// let monday = Date::parse("2019-02-11").unwrap();
/// assert_eq!(compute_cost("night", Some(70), 100, None, &NoHolidays), 40);
/// assert_eq!(compute_cost("day", None, 100, Some(monday), &NoHolidays), 65);
/// ```
pub fn compute_cost(
    ticket_type: impl Into<TicketType>,
    age: Option<Age>,
    base_cost: Cost,
    date: Option<Date>,
    holidays: &dyn HolidayCalendar,
) -> Cost {
    TicketPricer::default().compute_cost(ticket_type, age, base_cost, date, holidays)
}
