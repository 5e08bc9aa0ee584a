//! Pricing rules.
//!
//! Each ticket type has one rule. A rule is a pure function of the request,
//! the tariff it was built with, and a holiday calendar.

use crate::tariff::{Reduction, Tariff};
use crate::ticket::TicketRequest;
use lp_core::{ceil_percent, ceil_percent_chain, Cost};
use lp_time::{Date, HolidayCalendar};

/// A rule mapping a ticket request to a cost.
pub trait PricingRule: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Price `request`, consulting `calendar` for holidays.
    fn cost(&self, request: &TicketRequest, calendar: &dyn HolidayCalendar) -> Cost;
}

/// Night tickets: free for children, a senior rate, otherwise full price.
///
/// A night ticket without a known age costs 0 (no sale). Dates and holidays
/// never affect the price.
#[derive(Debug, Clone, Copy, Default)]
pub struct NightTicketRule {
    tariff: Tariff,
}

impl NightTicketRule {
    /// Create the rule for `tariff`.
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }
}

impl PricingRule for NightTicketRule {
    fn name(&self) -> &str {
        "Night"
    }

    fn cost(&self, request: &TicketRequest, _calendar: &dyn HolidayCalendar) -> Cost {
        let t = &self.tariff;
        match request.age {
            None => 0,
            Some(age) if age < t.child_age_limit => 0,
            Some(age) if age > t.senior_age_threshold => {
                ceil_percent(request.base_cost, t.night_senior_percent)
            }
            Some(_) => request.base_cost,
        }
    }
}

/// Day tickets: age bands plus the non-holiday Monday reduction.
///
/// The youth rate is flat and never combined with the Monday reduction.
/// The senior rate is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DayTicketRule {
    tariff: Tariff,
}

impl DayTicketRule {
    /// Create the rule for `tariff`.
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }

    /// The reduction for `date`: the Monday reduction iff `date` is known,
    /// is a Monday, and is not a holiday.
    pub fn reduction(&self, date: Option<Date>, calendar: &dyn HolidayCalendar) -> Reduction {
        match date {
            Some(d) if d.is_monday() && !calendar.is_holiday(d) => {
                Reduction::new(self.tariff.monday_reduction)
            }
            _ => Reduction::NONE,
        }
    }
}

impl PricingRule for DayTicketRule {
    fn name(&self) -> &str {
        "Day"
    }

    fn cost(&self, request: &TicketRequest, calendar: &dyn HolidayCalendar) -> Cost {
        let t = &self.tariff;
        let base = request.base_cost;
        let remaining = self.reduction(request.date, calendar).remaining_percent();
        match request.age {
            None => ceil_percent(base, remaining),
            Some(age) if age < t.child_age_limit => 0,
            Some(age) if age < t.youth_age_limit => ceil_percent(base, t.youth_percent),
            Some(age) if age > t.senior_age_threshold => {
                ceil_percent_chain(base, &[t.day_senior_percent, remaining])
            }
            Some(_) => ceil_percent(base, remaining),
        }
    }
}
