//! Durations split in calendar (years, months) and exact (days down to microseconds) parts.
//!
//! A [`Span`] is not a date: every field is a free signed integer and nothing is validated. Months
//! have no fixed length, so serializing a span keeps them apart from the rest:
//! `(microseconds, months)`. Arithmetic between spans happens on that pair and the result is
//! decomposed again, which is why `36 hours` comes back as `1 day 12 hours`.

use core::{
    fmt::{self, Display},
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{
    primitive::{
        MICROS_PER_DAY, MICROS_PER_HOUR, MICROS_PER_MILLI, MICROS_PER_MINUTE, MICROS_PER_SECOND,
        MONTHS_PER_YEAR, Micros,
    },
    utility::{floor_f64, round_f64},
};

/// A duration (or offset) in the same eight slots as an [`crate::Instant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "c", repr(C))]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(get_all, set_all))]
pub struct Span {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
    pub microseconds: i64,
}

flat_fields! {
    ident: Span,
    fields: [years, months, days, hours, minutes, seconds, milliseconds, microseconds],
}

impl Span {
    /// The empty span.
    pub const ZERO: Self = Self::new(0, 0, 0, 0, 0, 0, 0, 0);

    /// Create a span from all of its fields, largest unit first.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        years: i64,
        months: i64,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
        milliseconds: i64,
        microseconds: i64,
    ) -> Self {
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
            milliseconds,
            microseconds,
        }
    }

    /// Replace the years.
    pub const fn with_years(mut self, years: i64) -> Self {
        self.years = years;
        self
    }

    /// Replace the months.
    pub const fn with_months(mut self, months: i64) -> Self {
        self.months = months;
        self
    }

    /// Replace the days.
    pub const fn with_days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    /// Replace the hours.
    pub const fn with_hours(mut self, hours: i64) -> Self {
        self.hours = hours;
        self
    }

    /// Replace the minutes.
    pub const fn with_minutes(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    /// Replace the seconds.
    pub const fn with_seconds(mut self, seconds: i64) -> Self {
        self.seconds = seconds;
        self
    }

    /// Replace the milliseconds.
    pub const fn with_milliseconds(mut self, milliseconds: i64) -> Self {
        self.milliseconds = milliseconds;
        self
    }

    /// Replace the microseconds.
    pub const fn with_microseconds(mut self, microseconds: i64) -> Self {
        self.microseconds = microseconds;
        self
    }

    /// Years and months folded into months (saturating).
    pub const fn total_months(&self) -> i64 {
        self.years
            .saturating_mul(MONTHS_PER_YEAR)
            .saturating_add(self.months)
    }

    /// Days down to microseconds folded into microseconds, months and years ignored.
    pub const fn exact_micros(&self) -> Micros {
        (((self.days as Micros * 24 + self.hours as Micros) * 60 + self.minutes as Micros) * 60
            + self.seconds as Micros)
            * MICROS_PER_SECOND
            + self.milliseconds as Micros * MICROS_PER_MILLI
            + self.microseconds as Micros
    }

    /// Serialize to `(microseconds, months)`, see [`Self::unserialize`] for the way back.
    pub const fn serialize(&self) -> (Micros, i64) {
        (self.exact_micros(), self.total_months())
    }

    /// Decompose a serialized span, largest units first.
    ///
    /// Every produced field carries the sign of the scalar it came from, so `-90` minutes is
    /// `-1` hour and `-30` minutes, never `-2` hours and `+30` minutes. Months become years and
    /// months the same way.
    pub const fn unserialize(micros: Micros, months: i64) -> Self {
        let sign: Micros = if micros < 0 { -1 } else { 1 };
        let mut rest = micros.unsigned_abs();

        let days = rest / MICROS_PER_DAY as u128;
        rest %= MICROS_PER_DAY as u128;
        let hours = rest / MICROS_PER_HOUR as u128;
        rest %= MICROS_PER_HOUR as u128;
        let minutes = rest / MICROS_PER_MINUTE as u128;
        rest %= MICROS_PER_MINUTE as u128;
        let seconds = rest / MICROS_PER_SECOND as u128;
        rest %= MICROS_PER_SECOND as u128;
        let milliseconds = rest / MICROS_PER_MILLI as u128;
        let microseconds = rest % MICROS_PER_MILLI as u128;

        // only days can be large enough to need the saturation
        let days = days as Micros * sign;
        let days = if days > i64::MAX as Micros {
            i64::MAX
        } else if days < i64::MIN as Micros {
            i64::MIN
        } else {
            days as i64
        };

        Self {
            years: months / MONTHS_PER_YEAR,
            months: months % MONTHS_PER_YEAR,
            days,
            hours: (hours as Micros * sign) as i64,
            minutes: (minutes as Micros * sign) as i64,
            seconds: (seconds as Micros * sign) as i64,
            milliseconds: (milliseconds as Micros * sign) as i64,
            microseconds: (microseconds as Micros * sign) as i64,
        }
    }

    /// Is every field zero.
    pub const fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.milliseconds == 0
            && self.microseconds == 0
    }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pymethods)]
impl Span {
    /// Sum of two spans, normalized.
    pub fn plus(&self, other: &Span) -> Span {
        let (micros, months) = self.serialize();
        let (other_micros, other_months) = other.serialize();
        Self::unserialize(
            micros.saturating_add(other_micros),
            months.saturating_add(other_months),
        )
    }

    /// Difference of two spans, normalized (`self + -other`).
    pub fn minus(&self, other: &Span) -> Span {
        self.plus(&other.negate())
    }

    /// Flip the sign of every field on its own, without normalizing.
    ///
    /// This is not the same as negating the serialized pair when the fields have mixed signs, the
    /// fields stay where they are.
    pub fn negate(&self) -> Span {
        Self {
            years: self.years.saturating_neg(),
            months: self.months.saturating_neg(),
            days: self.days.saturating_neg(),
            hours: self.hours.saturating_neg(),
            minutes: self.minutes.saturating_neg(),
            seconds: self.seconds.saturating_neg(),
            milliseconds: self.milliseconds.saturating_neg(),
            microseconds: self.microseconds.saturating_neg(),
        }
    }

    /// Scale the serialized pair by an integer, normalized.
    pub fn multiply(&self, factor: i64) -> Span {
        let (micros, months) = self.serialize();
        Self::unserialize(
            micros.saturating_mul(factor as Micros),
            months.saturating_mul(factor),
        )
    }

    /// Scale the serialized pair by a real factor, normalized.
    ///
    /// Months are floored: the fraction of a month is dropped, not turned into days, since a month
    /// has no fixed length. Microseconds are rounded to the nearest one.
    pub fn multiply_f64(&self, factor: f64) -> Span {
        let (micros, months) = self.serialize();
        Self::unserialize(
            round_f64(micros as f64 * factor),
            floor_f64(months as f64 * factor),
        )
    }
}

impl From<[i64; 8]> for Span {
    fn from(value: [i64; 8]) -> Self {
        let [years, months, days, hours, minutes, seconds, milliseconds, microseconds] = value;
        Self::new(
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
            milliseconds,
            microseconds,
        )
    }
}

impl From<core::time::Duration> for Span {
    fn from(value: core::time::Duration) -> Self {
        let micros = Micros::try_from(value.as_micros()).unwrap_or(Micros::MAX);
        Self::unserialize(micros, 0)
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}y {}mo {}d {}h {}min {}s {}ms {}us",
            self.years,
            self.months,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
            self.milliseconds,
            self.microseconds
        )
    }
}

impl Add for Span {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(&rhs)
    }
}

impl AddAssign for Span {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.plus(&rhs);
    }
}

impl Sub for Span {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.minus(&rhs)
    }
}

impl SubAssign for Span {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.minus(&rhs);
    }
}

impl Neg for Span {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Mul<i64> for Span {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        self.multiply(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_keeps_months_apart() {
        let span = Span::new(1, 14, 2, 3, 4, 5, 6, 7);
        let (micros, months) = span.serialize();
        assert_eq!(months, 26);
        assert_eq!(micros, ((((2 * 24 + 3) * 60 + 4) * 60 + 5) * 1_000_000) + 6_007);
    }

    #[test]
    fn test_unserialize_normalizes() {
        assert_eq!(
            Span::unserialize(36 * MICROS_PER_HOUR + 90 * MICROS_PER_MINUTE, 26),
            Span::new(2, 2, 1, 13, 30, 0, 0, 0)
        );
        assert_eq!(
            Span::unserialize(1_001_001, 0),
            Span::new(0, 0, 0, 0, 0, 1, 1, 1)
        );
    }

    #[test]
    fn test_unserialize_negative_is_sign_consistent() {
        assert_eq!(
            Span::unserialize(-90 * MICROS_PER_MINUTE, -14),
            Span::new(-1, -2, 0, -1, -30, 0, 0, 0)
        );
        let x = 123_456_789_012;
        assert_eq!(Span::unserialize(-x, -7), Span::unserialize(x, 7).negate());
    }

    #[test]
    fn test_round_trip() {
        for span in [
            Span::new(0, 0, 15570, 12, 17, 53, 754, 506),
            Span::new(-3, -11, -2, -23, -59, -59, -999, -999),
            Span::ZERO,
        ] {
            let (micros, months) = span.serialize();
            assert_eq!(Span::unserialize(micros, months), span);
        }
    }

    #[test]
    fn test_plus() {
        let a = Span::new(1, 14, 0, 36, 90, 0, 0, 0);
        let b = Span::ZERO.with_days(1);
        assert_eq!(a + b, Span::new(2, 2, 2, 13, 30, 0, 0, 0));
        assert_eq!(a.plus(&b), b.plus(&a));
    }

    #[test]
    fn test_minus() {
        let a = Span::ZERO.with_days(1);
        let b = Span::ZERO.with_hours(1);
        assert_eq!(a - b, Span::new(0, 0, 0, 23, 0, 0, 0, 0));
        assert_eq!(b - a, Span::new(0, 0, 0, -23, 0, 0, 0, 0));
        let mut c = a;
        c -= a;
        assert!(c.is_zero());
        c += b;
        assert_eq!(c, b);
    }

    #[test]
    fn test_negate_is_per_field() {
        let mixed = Span::new(0, 1, -1, 0, 0, 0, 0, 0);
        assert_eq!(-mixed, Span::new(0, -1, 1, 0, 0, 0, 0, 0));
        assert_eq!(-(-mixed), mixed);
        assert_eq!(Span::ZERO.with_days(i64::MIN).negate().days, i64::MAX);
    }

    #[test]
    fn test_multiply() {
        let span = Span::new(0, 5, 1, 12, 0, 0, 0, 0);
        assert_eq!(span * 2, Span::new(0, 10, 3, 0, 0, 0, 0, 0));
        assert_eq!(span * 3, Span::new(1, 3, 4, 12, 0, 0, 0, 0));
        assert_eq!(span * -1, Span::new(0, -5, -1, -12, 0, 0, 0, 0));
        assert!((span * 0).is_zero());
    }

    #[test]
    fn test_multiply_f64_floors_months() {
        let span = Span::ZERO.with_months(3).with_hours(1);
        assert_eq!(span.multiply_f64(0.5), Span::new(0, 1, 0, 0, 30, 0, 0, 0));
        assert_eq!(span.multiply_f64(-0.5), Span::new(0, -2, 0, 0, -30, 0, 0, 0));
        assert_eq!(
            Span::ZERO.with_microseconds(3).multiply_f64(0.5),
            Span::ZERO.with_microseconds(2)
        );
    }

    #[test]
    fn test_multiply_f64_saturates() {
        let hour = Span::ZERO.with_hours(1);
        let infinite = hour.multiply_f64(f64::INFINITY);
        assert_eq!(infinite.days, i64::MAX);
        assert_eq!(infinite.total_months(), 0);
        assert_eq!(hour.negate().multiply_f64(f64::INFINITY).days, i64::MIN);

        assert!(hour.with_months(2).multiply_f64(f64::NAN).is_zero());

        let months = Span::ZERO.with_months(3).multiply_f64(-1e30);
        assert_eq!(months.total_months(), i64::MIN);
        assert_eq!(months.exact_micros(), 0);

        let days = Span::ZERO.with_days(i64::MAX).multiply_f64(1e20);
        assert_eq!(days.days, i64::MAX);
    }

    #[test]
    fn test_flat_array() {
        let span = Span::new(1, 2, 3, 4, 5, 6, 7, 8);
        let flat: [i64; 8] = span.into();
        assert_eq!(flat, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(Span::from(flat), span);
        assert_eq!(Span::FIELD_NAMES[0], "years");
        assert_eq!(Span::FIELD_NAMES[7], "microseconds");
    }

    #[test]
    fn test_from_duration() {
        let span = Span::from(core::time::Duration::from_millis(90_061_001));
        assert_eq!(span, Span::new(0, 0, 1, 1, 1, 1, 1, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Span::new(1, -2, 3, 4, 5, 6, 7, 8).to_string(),
            "1y -2mo 3d 4h 5min 6s 7ms 8us"
        );
    }
}
