//! Conversions between Gregorian/Julian calendar dates and serial day numbers.
//!
//! A serial day number (SDN) is a plain day counter, day 1 being November 25, 4714 BC in the
//! proleptic Gregorian calendar (January 2, 4713 BC in the Julian one). The difference of two
//! SDNs is the number of whole days between two dates whatever calendar they were written in.
//!
//! The conversions shift the year to start in March so February becomes the short tail of a 153
//! day (5 months) cycle, then count 400 (146097 days, Gregorian only), 4 (1461 days) year cycles.
//! Every division is an integer division over non-negative operands.
//!
//! Nothing here fails loudly: out of range inputs give `0` for an SDN and [`Ymd::ZERO`] for a
//! date. Use the `checked_*` variants for the flag or [`is_valid_gregorian`] to catch dates like
//! February 30th which convert to a real, but different, day.

#[cfg(not(feature = "wasm"))]
use sdncal_proc::fn_attr;

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{
    primitive::{Dom, Doy, Month, Sdn, Weekday, Year},
    utility::Checked,
};

/// Offset calibrating the Gregorian conversion so that -4714-11-25 is SDN 1.
pub const GREGORIAN_SDN_OFFSET: Sdn = 32045;

/// Offset calibrating the Julian conversion so that -4713-01-02 is SDN 1.
pub const JULIAN_SDN_OFFSET: Sdn = 32083;

/// Days in 5 months starting with March (31 + 30 + 31 + 30 + 31).
pub const DAYS_PER_5_MONTHS: Sdn = 153;

/// Days in 4 years with a single leap year.
pub const DAYS_PER_4_YEARS: Sdn = 1461;

/// Days in a full Gregorian cycle of 400 years.
pub const DAYS_PER_400_YEARS: Sdn = 146097;

/// The first year the Gregorian conversion accepts.
pub const GREGORIAN_MIN_YEAR: Year = -4714;

/// The first year the Julian conversion accepts.
pub const JULIAN_MIN_YEAR: Year = -4713;

/// SDN of December 31st of `i32::MAX` in Gregorian, the last convertible day.
pub const GREGORIAN_MAX_SDN: Sdn = 784_354_017_364;

/// SDN of December 31st of `i32::MAX` in Julian, the last convertible day.
pub const JULIAN_MAX_SDN: Sdn = 784_370_123_489;

/// SDN of 1970-01-01 (Gregorian), the Unix epoch.
pub const SDN_UNIX_EPOCH: Sdn = 2_440_588;

/// Days of each month in a common (non-leap) year.
const DAYS_IN_MONTH: [Dom; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A calendar date as year, month and day of month (this is an intermediate type for results).
///
/// The fields are not checked, it is a tuple buffer returned by the conversions so FFIs receive
/// a single value. [`Self::ZERO`] is the "no date" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "c", repr(C))]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(get_all))]
pub struct Ymd {
    pub year: Year,
    pub month: Month,
    pub day: Dom,
}

impl Ymd {
    /// The sentinel returned for out of range conversions.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// A shorthand for creation.
    pub const fn new(year: Year, month: Month, day: Dom) -> Self {
        Self { year, month, day }
    }

    /// Is this the [`Self::ZERO`] sentinel.
    pub const fn is_zero(&self) -> bool {
        self.year == 0 && self.month == 0 && self.day == 0
    }
}

impl From<(Year, Month, Dom)> for Ymd {
    fn from((year, month, day): (Year, Month, Dom)) -> Self {
        Self::new(year, month, day)
    }
}

impl From<Ymd> for (Year, Month, Dom) {
    fn from(value: Ymd) -> Self {
        (value.year, value.month, value.day)
    }
}

impl core::fmt::Display for Ymd {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Gregorian conversion without any bounds checks (year may be any historical year past -4800).
pub(crate) const fn gregorian_to_sdn_unchecked(year: i64, month: i64, day: i64) -> Sdn {
    // keep everything positive, -1 is followed by 1 so negative years need one more
    let mut year = if year < 0 { year + 4801 } else { year + 4800 };
    // March is month 0, January and February close the previous year
    let month = if month > 2 {
        month - 3
    } else {
        year -= 1;
        month + 9
    };

    (year / 100) * DAYS_PER_400_YEARS / 4
        + (year % 100) * DAYS_PER_4_YEARS / 4
        + (month * DAYS_PER_5_MONTHS + 2) / 5
        + day
        - GREGORIAN_SDN_OFFSET
}

/// Turn the year and "March based" month the inverse conversions found into a civil date.
const fn from_march_based(mut year: i64, day_of_year: i64) -> Ymd {
    let temp = day_of_year * 5 - 3;
    let mut month = temp / DAYS_PER_5_MONTHS;
    let day = (temp % DAYS_PER_5_MONTHS) / 5 + 1;

    if month < 10 {
        month += 3;
    } else {
        year += 1;
        month -= 9;
    }

    year -= 4800;
    if year <= 0 {
        year -= 1;
    }

    Ymd::new(year as Year, month as Month, day as Dom)
}

/// Convert a Gregorian date to its serial day number.
///
/// Returns 0 for year 0, a year before [`GREGORIAN_MIN_YEAR`], a month outside 1..=12, a day
/// outside 1..=31 or a date before -4714-11-25. Days past the end of the month are not rejected,
/// see [`is_valid_gregorian`].
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "c", unsafe(export_name = "sdncal_gregorian_to_sdn"), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn gregorian_to_sdn(year: Year, month: Month, day: Dom) -> Sdn {
    if year == 0 || year < GREGORIAN_MIN_YEAR || month < 1 || month > 12 || day < 1 || day > 31 {
        return 0;
    }

    if year == GREGORIAN_MIN_YEAR && (month < 11 || (month == 11 && day < 25)) {
        return 0;
    }

    gregorian_to_sdn_unchecked(year as i64, month as i64, day as i64)
}

/// Convert a serial day number to a Gregorian date.
///
/// Returns [`Ymd::ZERO`] for `sdn <= 0` and past [`GREGORIAN_MAX_SDN`].
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "c", unsafe(export_name = "sdncal_sdn_to_gregorian"), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn sdn_to_gregorian(sdn: Sdn) -> Ymd {
    if sdn <= 0 || sdn > GREGORIAN_MAX_SDN {
        return Ymd::ZERO;
    }

    let temp = (sdn + GREGORIAN_SDN_OFFSET) * 4 - 1;

    // centuries
    let century = temp / DAYS_PER_400_YEARS;

    // year and day of year within the century
    let temp = ((temp % DAYS_PER_400_YEARS) / 4) * 4 + 3;
    let year = century * 100 + temp / DAYS_PER_4_YEARS;
    let day_of_year = (temp % DAYS_PER_4_YEARS) / 4 + 1;

    from_march_based(year, day_of_year)
}

/// Convert a Julian date to its serial day number.
///
/// Returns 0 for year 0, a year before [`JULIAN_MIN_YEAR`], a month outside 1..=12, a day outside
/// 1..=31 or -4713-01-01 (which would be SDN 0).
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "c", unsafe(export_name = "sdncal_julian_to_sdn"), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn julian_to_sdn(year: Year, month: Month, day: Dom) -> Sdn {
    if year == 0 || year < JULIAN_MIN_YEAR || month < 1 || month > 12 || day < 1 || day > 31 {
        return 0;
    }

    if year == JULIAN_MIN_YEAR && month == 1 && day == 1 {
        return 0;
    }

    let mut year = if year < 0 {
        year as i64 + 4801
    } else {
        year as i64 + 4800
    };
    let month = if month > 2 {
        month as i64 - 3
    } else {
        year -= 1;
        month as i64 + 9
    };

    year * DAYS_PER_4_YEARS / 4 + (month * DAYS_PER_5_MONTHS + 2) / 5 + day as i64
        - JULIAN_SDN_OFFSET
}

/// Convert a serial day number to a Julian date.
///
/// Returns [`Ymd::ZERO`] for `sdn <= 0` and past [`JULIAN_MAX_SDN`].
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "c", unsafe(export_name = "sdncal_sdn_to_julian"), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn sdn_to_julian(sdn: Sdn) -> Ymd {
    if sdn <= 0 || sdn > JULIAN_MAX_SDN {
        return Ymd::ZERO;
    }

    let temp = sdn * 4 + (JULIAN_SDN_OFFSET * 4 - 1);
    let year = temp / DAYS_PER_4_YEARS;
    let day_of_year = (temp % DAYS_PER_4_YEARS) / 4 + 1;

    from_march_based(year, day_of_year)
}

/// What day of the week a serial day number falls on, 0 being Sunday.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "c", unsafe(export_name = "sdncal_day_of_week"), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn day_of_week(sdn: Sdn) -> Weekday {
    (sdn + 1).rem_euclid(7) as Weekday
}

/// Day of the year (1 based) of a Gregorian date, 0 if the date is out of range.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "c", unsafe(export_name = "sdncal_gregorian_to_doy"), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn gregorian_to_doy(year: Year, month: Month, day: Dom) -> Doy {
    let sdn = gregorian_to_sdn(year, month, day);
    if sdn == 0 {
        return 0;
    }

    // the first day of -4714 has no SDN, count from the formula instead
    (sdn - gregorian_to_sdn_unchecked(year as i64, 1, 1) + 1) as Doy
}

/// The Gregorian date of the `doy`th day (1 based) of the year.
///
/// Days past the end of the year continue into the next ones. Returns [`Ymd::ZERO`] if the year
/// or the result is out of range.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "c", unsafe(export_name = "sdncal_doy_to_gregorian"), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn doy_to_gregorian(year: Year, doy: Doy) -> Ymd {
    if year == 0 || year < GREGORIAN_MIN_YEAR {
        return Ymd::ZERO;
    }

    sdn_to_gregorian(gregorian_to_sdn_unchecked(year as i64, 1, 1) + doy as Sdn - 1)
}

/// Is this (historical) year a Gregorian leap year.
///
/// There is no year 0, so 1 BC (-1), 5 BC (-5) and so on are the leap years before year 1. Year 0
/// itself is not a leap year.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "c", unsafe(export_name = "sdncal_is_gregorian_leap_year"), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn is_gregorian_leap_year(year: Year) -> bool {
    if year == 0 {
        return false;
    }
    let year = crate::primitive::to_astronomical(year);
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Is this (historical) year a Julian leap year (every 4th, -1 included, 0 is not a year).
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "c", unsafe(export_name = "sdncal_is_julian_leap_year"), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn is_julian_leap_year(year: Year) -> bool {
    year != 0 && crate::primitive::to_astronomical(year).rem_euclid(4) == 0
}

/// Number of days in a Gregorian month, 0 for year 0 or a month outside 1..=12.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "c", unsafe(export_name = "sdncal_days_in_gregorian_month"), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn days_in_gregorian_month(year: Year, month: Month) -> Dom {
    match month {
        _ if year == 0 => 0,
        2 if is_gregorian_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[month as usize - 1],
        _ => 0,
    }
}

/// Does this Gregorian date survive a round trip through its SDN (is it a real day).
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "c", unsafe(export_name = "sdncal_is_valid_gregorian"), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn is_valid_gregorian(year: Year, month: Month, day: Dom) -> bool {
    let back = sdn_to_gregorian(gregorian_to_sdn(year, month, day));
    back.year == year && back.month == month && back.day == day
}

/// Does this Julian date survive a round trip through its SDN (is it a real day).
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "c", unsafe(export_name = "sdncal_is_valid_julian"), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn is_valid_julian(year: Year, month: Month, day: Dom) -> bool {
    let back = sdn_to_julian(julian_to_sdn(year, month, day));
    back.year == year && back.month == month && back.day == day
}

/// The Gregorian date of the same day as the given Julian date.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "c", unsafe(export_name = "sdncal_julian_to_gregorian"), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn julian_to_gregorian(year: Year, month: Month, day: Dom) -> Ymd {
    sdn_to_gregorian(julian_to_sdn(year, month, day))
}

/// The Julian date of the same day as the given Gregorian date.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "c", unsafe(export_name = "sdncal_gregorian_to_julian"), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
#[cfg_attr(not(feature = "wasm"), fn_attr(const))]
pub fn gregorian_to_julian(year: Year, month: Month, day: Dom) -> Ymd {
    sdn_to_julian(gregorian_to_sdn(year, month, day))
}

/// [`gregorian_to_sdn`] with an out of range flag instead of a bare 0.
pub fn checked_gregorian_to_sdn(year: Year, month: Month, day: Dom) -> Checked<Sdn> {
    let sdn = gregorian_to_sdn(year, month, day);
    if sdn == 0 {
        trace!("gregorian date {year}-{month}-{day} has no serial day number");
    }
    Checked::new(sdn == 0, sdn)
}

/// [`sdn_to_gregorian`] with an out of range flag instead of a bare [`Ymd::ZERO`].
pub fn checked_sdn_to_gregorian(sdn: Sdn) -> Checked<Ymd> {
    let ymd = sdn_to_gregorian(sdn);
    if ymd.is_zero() {
        trace!("serial day number {sdn} has no gregorian date");
    }
    Checked::new(ymd.is_zero(), ymd)
}

/// [`julian_to_sdn`] with an out of range flag instead of a bare 0.
pub fn checked_julian_to_sdn(year: Year, month: Month, day: Dom) -> Checked<Sdn> {
    let sdn = julian_to_sdn(year, month, day);
    if sdn == 0 {
        trace!("julian date {year}-{month}-{day} has no serial day number");
    }
    Checked::new(sdn == 0, sdn)
}

/// [`sdn_to_julian`] with an out of range flag instead of a bare [`Ymd::ZERO`].
pub fn checked_sdn_to_julian(sdn: Sdn) -> Checked<Ymd> {
    let ymd = sdn_to_julian(sdn);
    if ymd.is_zero() {
        trace!("serial day number {sdn} has no julian date");
    }
    Checked::new(ymd.is_zero(), ymd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_points() {
        assert_eq!(gregorian_to_sdn(1990, 1, 1), 2447893);
        assert_eq!(gregorian_to_sdn(1970, 1, 1), SDN_UNIX_EPOCH);
        assert_eq!(gregorian_to_sdn(2000, 1, 1), 2451545);
        assert_eq!(gregorian_to_sdn(1, 1, 1), 1721426);
        assert_eq!(gregorian_to_sdn(-1, 12, 31), 1721425);
    }

    #[test]
    fn test_epoch_is_sdn_1() {
        assert_eq!(gregorian_to_sdn(-4714, 11, 25), 1);
        assert_eq!(sdn_to_gregorian(1), Ymd::new(-4714, 11, 25));
        assert_eq!(julian_to_sdn(-4713, 1, 2), 1);
        assert_eq!(sdn_to_julian(1), Ymd::new(-4713, 1, 2));
    }

    #[test]
    fn test_out_of_range_sentinels() {
        assert_eq!(gregorian_to_sdn(0, 1, 1), 0);
        assert_eq!(gregorian_to_sdn(-4715, 12, 31), 0);
        assert_eq!(gregorian_to_sdn(-4714, 11, 24), 0);
        assert_eq!(gregorian_to_sdn(-4714, 10, 30), 0);
        assert_eq!(gregorian_to_sdn(2000, 13, 1), 0);
        assert_eq!(gregorian_to_sdn(2000, 0, 1), 0);
        assert_eq!(gregorian_to_sdn(2000, 1, 0), 0);
        assert_eq!(gregorian_to_sdn(2000, 1, 32), 0);
        assert_eq!(julian_to_sdn(-4713, 1, 1), 0);
        assert_eq!(julian_to_sdn(-4714, 12, 31), 0);
        assert_eq!(julian_to_sdn(0, 6, 1), 0);
        assert_eq!(sdn_to_gregorian(0), Ymd::ZERO);
        assert_eq!(sdn_to_gregorian(-5), Ymd::ZERO);
        assert_eq!(sdn_to_gregorian(GREGORIAN_MAX_SDN + 1), Ymd::ZERO);
        assert_eq!(sdn_to_julian(0), Ymd::ZERO);
        assert_eq!(sdn_to_julian(JULIAN_MAX_SDN + 1), Ymd::ZERO);
    }

    #[test]
    fn test_max_sdn_is_last_day_of_max_year() {
        assert_eq!(gregorian_to_sdn(Year::MAX, 12, 31), GREGORIAN_MAX_SDN);
        assert_eq!(sdn_to_gregorian(GREGORIAN_MAX_SDN), Ymd::new(Year::MAX, 12, 31));
        assert_eq!(julian_to_sdn(Year::MAX, 12, 31), JULIAN_MAX_SDN);
        assert_eq!(sdn_to_julian(JULIAN_MAX_SDN), Ymd::new(Year::MAX, 12, 31));
    }

    #[test]
    fn test_gregorian_round_trip() {
        for year in (-4713..=2500).step_by(7).chain([-1, 1, 1582, 1600, 1900, 2000, 2400]) {
            if year == 0 {
                continue;
            }
            for month in 1..=12 {
                for day in 1..=days_in_gregorian_month(year, month) {
                    let sdn = gregorian_to_sdn(year, month, day);
                    assert!(sdn > 0, "{year}-{month}-{day} has no sdn");
                    assert_eq!(
                        sdn_to_gregorian(sdn),
                        Ymd::new(year, month, day),
                        "sdn {sdn} did not round trip"
                    );
                }
            }
        }
    }

    #[test]
    fn test_julian_round_trip() {
        for year in (-4712..=2500).step_by(11).chain([-1, 1, 4, 1582]) {
            if year == 0 {
                continue;
            }
            for month in 1..=12 {
                let max = match month {
                    2 if is_julian_leap_year(year) => 29,
                    2 => 28,
                    4 | 6 | 9 | 11 => 30,
                    _ => 31,
                };
                for day in 1..=max {
                    let sdn = julian_to_sdn(year, month, day);
                    assert_eq!(sdn_to_julian(sdn), Ymd::new(year, month, day));
                }
            }
        }
    }

    #[test]
    fn test_consecutive_sdns_are_consecutive_days() {
        let mut prev = sdn_to_gregorian(1);
        for sdn in 2..=800_000 {
            let next = sdn_to_gregorian(sdn);
            assert!(prev < next, "sdn {sdn}: {prev} is not before {next}");
            prev = next;
        }
    }

    #[test]
    fn test_invalid_day_does_not_round_trip() {
        let sdn = gregorian_to_sdn(2008, 2, 30);
        assert!(sdn > 0);
        assert_ne!(sdn_to_gregorian(sdn), Ymd::new(2008, 2, 30));
        assert_eq!(sdn_to_gregorian(sdn), Ymd::new(2008, 3, 1));
        assert!(!is_valid_gregorian(2008, 2, 30));
        assert!(is_valid_gregorian(2008, 2, 29));
        assert!(!is_valid_gregorian(2009, 2, 29));
        assert!(!is_valid_gregorian(2009, 4, 31));
        assert!(!is_valid_gregorian(0, 1, 1));
        assert!(is_valid_julian(1900, 2, 29));
        assert!(!is_valid_gregorian(1900, 2, 29));
    }

    #[test]
    fn test_day_of_week() {
        assert_eq!(day_of_week(gregorian_to_sdn(1967, 3, 20)), 1); // monday
        assert_eq!(day_of_week(gregorian_to_sdn(1970, 1, 1)), 4); // thursday
        assert_eq!(day_of_week(gregorian_to_sdn(2000, 1, 1)), 6); // saturday
        assert_eq!(day_of_week(0), 1);
        assert_eq!(day_of_week(-1), 0);
        assert_eq!(day_of_week(-9), 6);
    }

    #[test]
    fn test_julian_gregorian_switch() {
        // the day after Thursday 4 October 1582 (Julian) was Friday 15 October 1582 (Gregorian)
        assert_eq!(julian_to_sdn(1582, 10, 4), 2299160);
        assert_eq!(gregorian_to_sdn(1582, 10, 15), 2299161);
        assert_eq!(julian_to_sdn(1582, 10, 4), gregorian_to_sdn(1582, 10, 15) - 1);
        assert_eq!(julian_to_gregorian(1582, 10, 5), Ymd::new(1582, 10, 15));
        assert_eq!(gregorian_to_julian(2000, 1, 1), Ymd::new(1999, 12, 19));
        assert_eq!(sdn_to_gregorian(julian_to_sdn(1, 1, 1)), Ymd::new(-1, 12, 30));
    }

    #[test]
    fn test_doy() {
        assert_eq!(gregorian_to_doy(2008, 1, 1), 1);
        assert_eq!(gregorian_to_doy(2008, 3, 1), 61);
        assert_eq!(gregorian_to_doy(2009, 3, 1), 60);
        assert_eq!(gregorian_to_doy(2008, 12, 31), 366);
        assert_eq!(gregorian_to_doy(-4714, 11, 25), 329);
        assert_eq!(gregorian_to_doy(2008, 13, 1), 0);

        assert_eq!(doy_to_gregorian(2008, 1), Ymd::new(2008, 1, 1));
        assert_eq!(doy_to_gregorian(2008, 60), Ymd::new(2008, 2, 29));
        assert_eq!(doy_to_gregorian(2008, 366), Ymd::new(2008, 12, 31));
        assert_eq!(doy_to_gregorian(2009, 366), Ymd::new(2010, 1, 1));
        assert_eq!(doy_to_gregorian(0, 1), Ymd::ZERO);
    }

    #[test]
    fn test_leap_years() {
        assert!(is_gregorian_leap_year(2000));
        assert!(is_gregorian_leap_year(2008));
        assert!(!is_gregorian_leap_year(1900));
        assert!(!is_gregorian_leap_year(2009));
        assert!(is_gregorian_leap_year(-1));
        assert!(is_gregorian_leap_year(-5));
        assert!(!is_gregorian_leap_year(-4));
        assert!(is_julian_leap_year(1900));
        assert!(is_julian_leap_year(-1));
        assert_eq!(days_in_gregorian_month(2000, 2), 29);
        assert_eq!(days_in_gregorian_month(1900, 2), 28);
        assert_eq!(days_in_gregorian_month(1900, 13), 0);
    }

    #[test]
    fn test_year_zero_has_no_months() {
        assert!(!is_gregorian_leap_year(0));
        assert!(!is_julian_leap_year(0));
        assert_eq!(days_in_gregorian_month(0, 2), 0);
        assert_eq!(days_in_gregorian_month(0, 1), 0);
    }

    #[test]
    fn test_leap_rule_agrees_with_sdn() {
        for year in (-4713..=3000).filter(|y| *y != 0) {
            let next = if year == -1 { 1 } else { year as i64 + 1 };
            let days = gregorian_to_sdn_unchecked(next, 1, 1)
                - gregorian_to_sdn_unchecked(year as i64, 1, 1);
            let expected = if is_gregorian_leap_year(year) { 366 } else { 365 };
            assert_eq!(days, expected, "year {year}");
        }
    }

    #[test]
    fn test_checked_flags() {
        assert!(checked_gregorian_to_sdn(0, 1, 1).out_of_range);
        assert_eq!(checked_gregorian_to_sdn(1990, 1, 1).ok(), Some(2447893));
        assert!(checked_sdn_to_gregorian(0).out_of_range);
        assert_eq!(
            checked_sdn_to_gregorian(2447893).ok(),
            Some(Ymd::new(1990, 1, 1))
        );
        assert!(checked_julian_to_sdn(-4713, 1, 1).out_of_range);
        assert!(!checked_sdn_to_julian(1).out_of_range);
    }
}
