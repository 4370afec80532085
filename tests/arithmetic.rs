//! End to end checks of the calendar conversions and the arithmetic over the public API.

use sdncal::{
    Error, Instant, Span, Ymd, day_of_week, gregorian_to_doy, gregorian_to_sdn, julian_to_sdn,
    month_name, sdn_to_gregorian, weekday_name,
};

fn at(year: i32, month: u8, day: u8) -> Instant {
    Instant::from_ymd(year, month, day).unwrap()
}

#[test]
fn sdn_reference_values() {
    assert_eq!(gregorian_to_sdn(1990, 1, 1), 2447893);
    assert_eq!(gregorian_to_sdn(-4714, 11, 25), 1);
    assert_eq!(gregorian_to_sdn(1, 1, 1), 1721426);
    assert_eq!(day_of_week(gregorian_to_sdn(1967, 3, 20)), 1);
    assert_eq!(julian_to_sdn(1582, 10, 4), gregorian_to_sdn(1582, 10, 15) - 1);
}

#[test]
fn sdn_difference_counts_days() {
    let days = gregorian_to_sdn(2009, 11, 5) - gregorian_to_sdn(1967, 3, 20);
    assert_eq!(days, 15571);
    assert_eq!(at(1967, 3, 20).diff(&at(2009, 11, 5)).days, days);
}

#[test]
fn composition_order_is_fixed() {
    let start = at(2001, 3, 1);
    let stepwise = start.add_months(1).result.add_days(-1).result;
    let combined = start + Span::new(0, 1, -1, 0, 0, 0, 0, 0);
    assert_eq!(stepwise, at(2001, 3, 31));
    assert_eq!(combined, stepwise);

    // days first would have given the end of February instead
    let days_first = start.add_days(-1).result.add_months(1).result;
    assert_eq!(days_first, at(2001, 3, 28));
}

#[test]
fn diff_round_trips_through_add() {
    let instants = [
        at(1967, 3, 20),
        Instant::new(2009, 11, 5, 2, 3, 4, 5, 6).unwrap(),
        Instant::new(-1, 12, 31, 23, 59, 59, 999, 999).unwrap(),
        at(2000, 2, 29),
        Instant::MIN,
        Instant::MAX,
    ];
    for a in instants {
        for b in instants {
            let forward = a.diff(&b);
            let backward = b.diff(&a);
            assert_eq!(forward, -backward, "{a} and {b}");
            assert_eq!(forward.years, 0);
            assert_eq!(forward.months, 0);
            assert_eq!(a + forward, b, "{a} + {forward}");
            assert_eq!(b + backward, a, "{b} + {backward}");
            assert_eq!(a.compare(&b), -b.compare(&a));
        }
    }
}

#[test]
fn span_algebra() {
    let a = Span::new(1, 2, 3, 4, 5, 6, 7, 8);
    let b = Span::new(0, -3, 10, 30, 0, 0, 0, 0);
    assert_eq!(a + b, b + a);
    assert_eq!((a + b) - b, a);
    assert_eq!(a * 2, a + a);
    assert_eq!(-(a * 3), a * -3);
}

#[test]
fn normalize_like_the_invalid_date_it_came_from() {
    assert_eq!(Instant::normalize(2008, 2, 31, 0, 0, 0, 0, 0), at(2008, 3, 2));
    assert_eq!(
        "2008-02-31".parse::<Instant>(),
        Err(Error::InvalidDate {
            year: 2008,
            month: 2,
            day: 31
        })
    );
    let sdn = gregorian_to_sdn(2008, 2, 31);
    assert_eq!(sdn_to_gregorian(sdn), Ymd::new(2008, 3, 2));
}

#[test]
fn names_for_text_adapters() {
    let instant = at(2009, 11, 5);
    assert_eq!(month_name(instant.month(), false), Some("November"));
    assert_eq!(weekday_name(instant.day_of_week(), true), Some("Thu"));
    assert_eq!(gregorian_to_doy(2009, 11, 5), instant.day_of_year());
}

#[test]
fn flat_sequence_interop() {
    let instant = Instant::new(2009, 11, 5, 2, 3, 4, 5, 6).unwrap();
    let flat: [i64; 8] = instant.into();
    assert_eq!(Instant::try_from(flat), Ok(instant));
    let span: Span = flat.into();
    assert_eq!(span.years, 2009);
    assert_eq!(Instant::FIELD_NAMES[0], "year");
    assert_eq!(Span::FIELD_NAMES[0], "years");
}
