//! Tariff configuration.
//!
//! A [`Tariff`] holds every age band and percentage the pricing rules use.
//! [`Tariff::default`] is the published tariff; alternative tariffs can be
//! built with the `with_*` setters or, with the `serde` feature, loaded from
//! a config file (missing fields fall back to the defaults).

use lp_core::ensure;
use lp_core::errors::{Error, Result};
use lp_core::{Age, Percent};

/// Age bands and percentages for ticket pricing.
///
/// Percentages are the share of the base price that is charged
/// (40 = 40 % of base), except `monday_reduction`, which is the share that
/// is taken off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tariff {
    /// Riders younger than this travel free.
    pub child_age_limit: Age,
    /// Riders younger than this (and not free) pay the youth rate on day tickets.
    pub youth_age_limit: Age,
    /// Riders older than this pay a senior rate.
    pub senior_age_threshold: Age,
    /// Share of base charged to seniors on night tickets.
    pub night_senior_percent: Percent,
    /// Share of base charged to youths on day tickets.
    pub youth_percent: Percent,
    /// Share of base charged to seniors on day tickets, before any reduction.
    pub day_senior_percent: Percent,
    /// Reduction on day tickets for a non-holiday Monday.
    pub monday_reduction: Percent,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            child_age_limit: 6,
            youth_age_limit: 15,
            senior_age_threshold: 64,
            night_senior_percent: 40,
            youth_percent: 70,
            day_senior_percent: 75,
            monday_reduction: 35,
        }
    }
}

impl Tariff {
    /// Set the free-travel age limit.
    pub fn with_child_age_limit(mut self, age: Age) -> Self {
        self.child_age_limit = age;
        self
    }

    /// Set the youth age limit.
    pub fn with_youth_age_limit(mut self, age: Age) -> Self {
        self.youth_age_limit = age;
        self
    }

    /// Set the senior age threshold.
    pub fn with_senior_age_threshold(mut self, age: Age) -> Self {
        self.senior_age_threshold = age;
        self
    }

    /// Set the night senior share.
    pub fn with_night_senior_percent(mut self, percent: Percent) -> Self {
        self.night_senior_percent = percent;
        self
    }

    /// Set the day youth share.
    pub fn with_youth_percent(mut self, percent: Percent) -> Self {
        self.youth_percent = percent;
        self
    }

    /// Set the day senior share.
    pub fn with_day_senior_percent(mut self, percent: Percent) -> Self {
        self.day_senior_percent = percent;
        self
    }

    /// Set the Monday reduction.
    pub fn with_monday_reduction(mut self, percent: Percent) -> Self {
        self.monday_reduction = percent;
        self
    }

    /// Check that every percentage is within `[0, 100]` and the age bands
    /// are ordered.
    pub fn validate(&self) -> Result<()> {
        for (name, p) in [
            ("night_senior_percent", self.night_senior_percent),
            ("youth_percent", self.youth_percent),
            ("day_senior_percent", self.day_senior_percent),
            ("monday_reduction", self.monday_reduction),
        ] {
            ensure!(
                p <= 100,
                Error::InvalidArgument(format!("{name} must be at most 100, got {p}"))
            );
        }
        ensure!(
            self.child_age_limit <= self.youth_age_limit,
            Error::InvalidArgument(format!(
                "child_age_limit {} exceeds youth_age_limit {}",
                self.child_age_limit, self.youth_age_limit
            ))
        );
        ensure!(
            self.youth_age_limit <= self.senior_age_threshold.saturating_add(1),
            Error::InvalidArgument(format!(
                "youth_age_limit {} overlaps senior_age_threshold {}",
                self.youth_age_limit, self.senior_age_threshold
            ))
        );
        Ok(())
    }
}

/// A percentage discount applied to day tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reduction(Percent);

impl Reduction {
    /// No reduction.
    pub const NONE: Reduction = Reduction(0);

    /// Create a reduction of `percent` (capped at 100).
    pub fn new(percent: Percent) -> Self {
        Reduction(percent.min(100))
    }

    /// The discount as a percentage.
    pub fn percent(&self) -> Percent {
        self.0
    }

    /// The share of the price still charged, `100 - percent`.
    pub fn remaining_percent(&self) -> Percent {
        100 - self.0
    }

    /// Return `true` if no discount applies.
    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}
