//! Ticket office flows over the in-memory store.

use lp_core::Error;
use lp_pricing::{Tariff, TicketPricer};
use lp_store::{HolidayStore, InMemoryStore, Quote, TicketOffice};

fn resort() -> TicketOffice<InMemoryStore> {
    let mut office = TicketOffice::new(
        InMemoryStore::new()
            .with_holiday("2019-02-18")
            .with_holiday("2019-02-25")
            .with_holiday("2019-03-04"),
    );
    office.set_base_price("1jour", 35);
    office.set_base_price("night", 19);
    office
}

#[test]
fn day_ticket_prices_by_age() {
    let office = resort();
    let cost = |age| office.quote("1jour", Some(age), None).unwrap().cost;
    assert_eq!(cost(5), 0);
    assert_eq!(cost(6), 25);
    assert_eq!(cost(14), 25);
    assert_eq!(cost(15), 35);
    assert_eq!(cost(64), 35);
    assert_eq!(cost(65), 27);
}

#[test]
fn night_ticket_prices_by_age() {
    let office = resort();
    assert_eq!(office.quote("night", None, None).unwrap().cost, 0);
    assert_eq!(office.quote("night", Some(5), None).unwrap().cost, 0);
    assert_eq!(office.quote("night", Some(6), None).unwrap().cost, 19);
    assert_eq!(office.quote("night", Some(64), None).unwrap().cost, 19);
    assert_eq!(office.quote("night", Some(65), None).unwrap().cost, 8);
}

#[test]
fn monday_promotion_skips_holidays() {
    let office = resort();
    // 2019-02-11 is a plain Monday, 2019-02-18 a holiday Monday
    assert_eq!(office.quote("1jour", Some(15), Some("2019-02-11")).unwrap().cost, 23);
    assert_eq!(office.quote("1jour", Some(15), Some("2019-02-18")).unwrap().cost, 35);
    assert_eq!(office.quote("1jour", Some(65), Some("2019-02-11")).unwrap().cost, 18);
    assert_eq!(office.quote("1jour", Some(10), Some("2019-02-11")).unwrap().cost, 25);
    assert_eq!(office.quote("night", Some(30), Some("2019-02-11")).unwrap().cost, 19);
}

#[test]
fn updated_price_takes_effect() {
    let mut office = resort();
    office.set_base_price("1jour", 100);
    assert_eq!(office.quote("1jour", Some(70), Some("2019-02-11")), Ok(Quote { cost: 49 }));
}

#[test]
fn invalid_date_is_reported() {
    let office = resort();
    match office.quote("1jour", Some(30), Some("2019-02-29")) {
        Err(Error::InvalidDateFormat { input, .. }) => assert_eq!(input, "2019-02-29"),
        other => panic!("unexpected {other:?}"),
    }
    assert!(office.quote("1jour", Some(30), Some("11/02/2019")).is_err());
}

#[test]
fn malformed_holiday_record_propagates() {
    let mut store = InMemoryStore::new().with_price("1jour", 35);
    store.add_holiday("2019-13-01");
    let office = TicketOffice::new(store);
    assert_eq!(office.store().holidays().len(), 1);
    assert!(matches!(
        office.quote("1jour", None, Some("2019-02-11")),
        Err(Error::InvalidDateFormat { .. })
    ));
}

#[test]
fn malformed_holiday_record_only_fails_monday_day_tickets() {
    let office = TicketOffice::new(
        InMemoryStore::new()
            .with_price("night", 19)
            .with_price("1jour", 35)
            .with_holiday("2019-13-01"),
    );
    // holidays are never consulted for these
    assert_eq!(office.quote("night", Some(30), None), Ok(Quote { cost: 19 }));
    assert_eq!(office.quote("night", Some(30), Some("2019-02-11")), Ok(Quote { cost: 19 }));
    assert_eq!(office.quote("1jour", Some(30), None), Ok(Quote { cost: 35 }));
    assert_eq!(office.quote("1jour", Some(30), Some("2019-02-12")), Ok(Quote { cost: 35 }));
    // a Monday day ticket needs the holiday list
    match office.quote("1jour", Some(30), Some("2019-02-11")) {
        Err(Error::InvalidDateFormat { input, .. }) => assert_eq!(input, "2019-13-01"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn missing_base_price_is_reported() {
    let office = resort();
    assert_eq!(
        office.quote("season", None, None),
        Err(Error::MissingBasePrice("season".into()))
    );
}

#[test]
fn custom_tariff() {
    let pricer = TicketPricer::new(Tariff::default().with_monday_reduction(50)).unwrap();
    let office = TicketOffice::with_pricer(InMemoryStore::new().with_price("1jour", 40), pricer);
    assert_eq!(office.quote("1jour", None, Some("2019-02-11")).unwrap().cost, 20);
}

#[cfg(feature = "serde")]
#[test]
fn quote_serializes_as_cost_object() {
    assert_eq!(serde_json::to_string(&Quote { cost: 23 }).unwrap(), r#"{"cost":23}"#);
}
