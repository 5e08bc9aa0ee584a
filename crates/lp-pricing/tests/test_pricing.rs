//! End-to-end pricing scenarios and properties.

use lp_pricing::{compute_cost, TicketPricer, TicketRequest, TicketType};
use lp_time::{Date, HolidaySet, NoHolidays};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// 2019-02-11, a Monday.
fn monday() -> Date {
    date(2019, 2, 11)
}

/// 2019-02-18, a Monday listed as a holiday in `resort_holidays`.
fn holiday_monday() -> Date {
    date(2019, 2, 18)
}

fn resort_holidays() -> HolidaySet {
    HolidaySet::from_records("Resort", ["2019-02-18", "2019-02-25", "2019-03-04"]).unwrap()
}

fn ceil_times(base: u32, factor_num: u64, factor_den: u64) -> u32 {
    (u64::from(base) * factor_num).div_ceil(factor_den) as u32
}

// ─── Concrete scenarios ───────────────────────────────────────────────────────

#[test]
fn senior_night_ticket() {
    assert_eq!(compute_cost("night", Some(70), 100, None, &NoHolidays), 40);
}

#[test]
fn child_night_ticket() {
    assert_eq!(compute_cost("night", Some(3), 100, None, &NoHolidays), 0);
}

#[test]
fn night_ticket_without_age_is_not_sold() {
    assert_eq!(compute_cost("night", None, 100, None, &NoHolidays), 0);
    assert_eq!(compute_cost("night", None, 100, Some(monday()), &NoHolidays), 0);
}

#[test]
fn adult_night_ticket() {
    assert_eq!(compute_cost("night", Some(30), 100, None, &NoHolidays), 100);
}

#[test]
fn day_ticket_on_plain_monday() {
    assert_eq!(compute_cost("day", None, 100, Some(monday()), &NoHolidays), 65);
}

#[test]
fn youth_day_ticket_on_monday_does_not_stack() {
    assert_eq!(compute_cost("day", Some(10), 100, Some(monday()), &NoHolidays), 70);
}

#[test]
fn senior_day_ticket_on_monday_stacks() {
    assert_eq!(compute_cost("day", Some(70), 100, Some(monday()), &NoHolidays), 49);
}

#[test]
fn holiday_monday_suppresses_reduction() {
    let holidays = resort_holidays();
    assert_eq!(compute_cost("day", Some(30), 100, Some(holiday_monday()), &holidays), 100);
    assert_eq!(compute_cost("day", None, 100, Some(holiday_monday()), &holidays), 100);
    assert_eq!(compute_cost("day", Some(70), 100, Some(holiday_monday()), &holidays), 75);
    // a non-holiday Monday in the same calendar still gets the reduction
    assert_eq!(compute_cost("day", Some(30), 100, Some(monday()), &holidays), 65);
}

#[test]
fn adult_band_boundaries_without_date() {
    for age in [15, 30, 64] {
        assert_eq!(compute_cost("day", Some(age), 100, None, &NoHolidays), 100, "age {age}");
    }
    assert_eq!(compute_cost("day", Some(14), 100, None, &NoHolidays), 70);
    assert_eq!(compute_cost("day", Some(65), 100, None, &NoHolidays), 75);
}

#[test]
fn no_date_means_no_reduction() {
    assert_eq!(compute_cost("day", None, 100, None, &NoHolidays), 100);
    assert_eq!(compute_cost("day", Some(70), 100, None, &NoHolidays), 75);
}

#[test]
fn other_weekdays_get_no_reduction() {
    for offset in 1..7 {
        let d = monday() + offset;
        assert_eq!(compute_cost("day", Some(30), 100, Some(d), &NoHolidays), 100, "{d}");
    }
}

#[test]
fn classic_base_prices() {
    // 35 is the day base, 19 the night base in the reference data
    assert_eq!(compute_cost("day", None, 35, None, &NoHolidays), 35);
    assert_eq!(compute_cost("day", Some(5), 35, None, &NoHolidays), 0);
    assert_eq!(compute_cost("day", Some(6), 35, None, &NoHolidays), 25);
    assert_eq!(compute_cost("day", Some(65), 35, None, &NoHolidays), 27);
    assert_eq!(compute_cost("day", Some(15), 35, Some(monday()), &NoHolidays), 23);
    assert_eq!(compute_cost("day", Some(65), 35, Some(monday()), &NoHolidays), 18);
    assert_eq!(compute_cost("night", Some(65), 19, None, &NoHolidays), 8);
}

#[test]
fn request_api_matches_free_function() {
    let pricer = TicketPricer::default();
    let req = TicketRequest::new(TicketType::Day, 100).with_age(70).on(monday());
    assert_eq!(pricer.price(&req, &NoHolidays), 49);
    assert_eq!(pricer.reduction(Some(monday()), &NoHolidays).percent(), 35);
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn any_date() -> impl Strategy<Value = Date> {
    (1i32..=3_652_059).prop_map(|s| Date::from_serial(s).unwrap())
}

fn any_holidays() -> impl Strategy<Value = HolidaySet> {
    prop::collection::vec(any_date(), 0..8).prop_map(|v| v.into_iter().collect())
}

proptest! {
    #[test]
    fn night_children_free(
        age in 0u32..6,
        base in 0u32..100_000,
        date in prop::option::of(any_date()),
        holidays in any_holidays(),
    ) {
        prop_assert_eq!(compute_cost("night", Some(age), base, date, &holidays), 0);
    }

    #[test]
    fn night_seniors_pay_forty_percent(age in 65u32..120, base in 0u32..100_000) {
        prop_assert_eq!(
            compute_cost("night", Some(age), base, None, &NoHolidays),
            ceil_times(base, 40, 100)
        );
    }

    #[test]
    fn night_ignores_date_and_holidays(
        age in prop::option::of(0u32..120),
        base in 0u32..100_000,
        date in any_date(),
        holidays in any_holidays(),
    ) {
        let undated = compute_cost("night", age, base, None, &NoHolidays);
        prop_assert_eq!(compute_cost("night", age, base, Some(date), &holidays), undated);
        prop_assert_eq!(compute_cost("night", age, base, Some(monday()), &NoHolidays), undated);
    }

    #[test]
    fn plain_monday_is_sixty_five_percent(base in 0u32..100_000, weeks in 0i32..2000) {
        let d = monday() + weeks * 7;
        prop_assert_eq!(compute_cost("day", None, base, Some(d), &NoHolidays), ceil_times(base, 65, 100));
    }

    #[test]
    fn holiday_monday_is_full_price(base in 0u32..100_000, weeks in 0i32..2000) {
        let d = monday() + weeks * 7;
        let holidays: HolidaySet = [d].into_iter().collect();
        prop_assert_eq!(compute_cost("day", None, base, Some(d), &holidays), base);
    }

    #[test]
    fn youth_rate_never_stacks(
        age in 6u32..15,
        base in 0u32..100_000,
        date in prop::option::of(any_date()),
    ) {
        prop_assert_eq!(
            compute_cost("day", Some(age), base, date, &NoHolidays),
            ceil_times(base, 70, 100)
        );
    }

    #[test]
    fn senior_day_on_monday(base in 0u32..100_000) {
        prop_assert_eq!(
            compute_cost("day", Some(70), base, Some(monday()), &NoHolidays),
            ceil_times(base, 75 * 65, 100 * 100)
        );
    }

    #[test]
    fn pricing_is_idempotent(
        night in any::<bool>(),
        age in prop::option::of(0u32..120),
        base in 0u32..100_000,
        date in prop::option::of(any_date()),
        holidays in any_holidays(),
    ) {
        let tag = if night { "night" } else { "day" };
        let first = compute_cost(tag, age, base, date, &holidays);
        prop_assert_eq!(compute_cost(tag, age, base, date, &holidays.clone()), first);
    }
}
