//! Absolute Gregorian date-times and their arithmetic with [`Span`]s.
//!
//! Every operation goes through a fixed-point scalar: [`Instant::serialize`] counts microseconds
//! from midnight of SDN 0, so adding days, hours and smaller units is integer addition followed by
//! [`Instant::unserialize`]. Years and months have no fixed length and are applied first, on the
//! year and month fields alone, before the rest of the span is added as microseconds. Hence
//! `2001-03-01 + (1 month, -1 day)` is `2001-04-01 - 1 day`, i.e. `2001-03-31`.

use core::{
    cmp::Ordering,
    fmt::{self, Display},
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

#[cfg(not(feature = "wasm"))]
use sdncal_proc::fn_attr;

#[cfg(feature = "py")]
use sdncal_proc::py_attr;

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{
    error::Error,
    primitive::{
        Dom, Doy, Hour, MICROS_PER_DAY, MICROS_PER_HOUR, MICROS_PER_MILLI, MICROS_PER_MINUTE,
        MICROS_PER_SECOND, MONTHS_PER_YEAR, Micros, Microsecond, Millisecond, Minute, Month,
        Sdn, Second, Weekday, Y0_REPLACEMENT, Year, to_astronomical,
    },
    sdn::{self, GREGORIAN_MIN_YEAR, Ymd, gregorian_to_sdn_unchecked},
    span::Span,
    utility::Checked,
};

/// A valid Gregorian date and time of day, down to microseconds, in a single implied zone (UTC).
///
/// Ordering is lexicographic over the fields, which is the chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "c", repr(C))]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass)]
pub struct Instant {
    year: Year,
    month: Month,
    day: Dom,
    hour: Hour,
    minute: Minute,
    second: Second,
    millisecond: Millisecond,
    microsecond: Microsecond,
}

flat_fields! {
    ident: Instant,
    fields: [year, month, day, hour, minute, second, millisecond, microsecond],
}

/// Reject `value` outside `min..=max`.
const fn check(what: &'static str, value: i64, min: i64, max: i64) -> Result<(), Error> {
    if value < min || value > max {
        return Err(Error::out_of_range(what, value, min, max));
    }
    Ok(())
}

impl Instant {
    /// The earliest representable instant, the start of SDN 1 (-4714-11-25).
    pub const MIN: Self = Self::new_unchecked(GREGORIAN_MIN_YEAR, 11, 25, 0, 0, 0, 0, 0);

    /// The latest representable instant, the last microsecond of 9999.
    pub const MAX: Self = Self::new_unchecked(Self::MAX_YEAR, 12, 31, 23, 59, 59, 999, 999);

    /// The start of 1970-01-01.
    pub const UNIX_EPOCH: Self = Self::new_unchecked(1970, 1, 1, 0, 0, 0, 0, 0);

    /// The last year an instant can have.
    pub const MAX_YEAR: Year = 9999;

    /// Build without any validation.
    ///
    /// The fields must name a real day in `MIN..=MAX` with a time of day in range, anything else
    /// breaks the arithmetic.
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn new_unchecked(
        year: Year,
        month: Month,
        day: Dom,
        hour: Hour,
        minute: Minute,
        second: Second,
        millisecond: Millisecond,
        microsecond: Microsecond,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
            microsecond,
        }
    }

    /// Build the midnight starting the given serial day.
    pub fn from_sdn(sdn: Sdn) -> Checked<Self> {
        Self::unserialize(sdn as Micros * MICROS_PER_DAY)
    }

    /// Carry out of range fields into their larger units, starting from January 1st of `year`.
    ///
    /// This is `year-01-01 + (month - 1 months, day - 1 days, hour hours, ...)`, so the same
    /// ordering as [`Self::checked_add`] applies: `2008-02-31` is `2008-03-02`. Year 0 is read as
    /// -1.
    #[allow(clippy::too_many_arguments)]
    pub fn normalize(
        year: Year,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
        microsecond: i64,
    ) -> Checked<Self> {
        let year = if year == 0 { Y0_REPLACEMENT } else { year };
        let span = Span::new(
            0,
            month.saturating_sub(1),
            day.saturating_sub(1),
            hour,
            minute,
            second,
            millisecond,
            microsecond,
        );
        Self::shift(year, 1, 1, 0, &span)
    }

    /// Microseconds since midnight of SDN 0.
    pub const fn serialize(&self) -> Micros {
        let sdn = gregorian_to_sdn_unchecked(self.year as i64, self.month as i64, self.day as i64);
        sdn as Micros * MICROS_PER_DAY + self.time_of_day()
    }

    /// Rebuild an instant from [`Self::serialize`]d microseconds.
    ///
    /// Values outside [`Self::MIN`]..=[`Self::MAX`] give the nearest bound, flagged.
    pub fn unserialize(micros: Micros) -> Checked<Self> {
        if micros < Self::MIN.serialize() {
            debug!("{micros}us is before the earliest instant, saturating");
            return Checked::out_of_range(Self::MIN);
        }
        if micros > Self::MAX.serialize() {
            debug!("{micros}us is after the latest instant, saturating");
            return Checked::out_of_range(Self::MAX);
        }

        let Ymd { year, month, day } = sdn::sdn_to_gregorian((micros / MICROS_PER_DAY) as Sdn);
        let mut rest = micros % MICROS_PER_DAY;

        let hour = rest / MICROS_PER_HOUR;
        rest %= MICROS_PER_HOUR;
        let minute = rest / MICROS_PER_MINUTE;
        rest %= MICROS_PER_MINUTE;
        let second = rest / MICROS_PER_SECOND;
        rest %= MICROS_PER_SECOND;

        Checked::in_range(Self::new_unchecked(
            year,
            month,
            day,
            hour as Hour,
            minute as Minute,
            second as Second,
            (rest / MICROS_PER_MILLI) as Millisecond,
            (rest % MICROS_PER_MILLI) as Microsecond,
        ))
    }

    /// Seconds since midnight of SDN 0 as a float, for display only (it rounds for big values).
    pub fn to_seconds(&self) -> f64 {
        self.serialize() as f64 / MICROS_PER_SECOND as f64
    }

    /// Microseconds elapsed since midnight.
    const fn time_of_day(&self) -> Micros {
        ((self.hour as Micros * 60 + self.minute as Micros) * 60 + self.second as Micros)
            * MICROS_PER_SECOND
            + self.millisecond as Micros * MICROS_PER_MILLI
            + self.microsecond as Micros
    }

    /// Move a (possibly overflowed) year, month and day plus a time of day by a span.
    ///
    /// Years and months are applied on the fields, the day is kept as an offset from the 1st of the
    /// resulting month and everything else is added as microseconds.
    fn shift(year: Year, month: i64, day: i64, time_of_day: Micros, span: &Span) -> Checked<Self> {
        let months = to_astronomical(year) as i128 * MONTHS_PER_YEAR as i128 + (month as i128 - 1)
            + span.total_months() as i128;
        let year = match months.div_euclid(MONTHS_PER_YEAR as i128) {
            // no year 0
            astronomical if astronomical <= 0 => astronomical - 1,
            astronomical => astronomical,
        };
        let month = months.rem_euclid(MONTHS_PER_YEAR as i128) as i64 + 1;

        if year < GREGORIAN_MIN_YEAR as i128 {
            debug!("year {year} is before the earliest instant, saturating");
            return Checked::out_of_range(Self::MIN);
        }
        if year > Self::MAX_YEAR as i128 {
            debug!("year {year} is after the latest instant, saturating");
            return Checked::out_of_range(Self::MAX);
        }

        let anchor = gregorian_to_sdn_unchecked(year as i64, month, 1) as Micros * MICROS_PER_DAY;
        let micros = anchor
            .saturating_add((day as Micros - 1) * MICROS_PER_DAY)
            .saturating_add(time_of_day)
            .saturating_add(span.exact_micros());

        Self::unserialize(micros)
    }

    /// Add a span, years and months first, flagging a result outside [`Self::MIN`]..=[`Self::MAX`].
    pub fn checked_add(&self, span: &Span) -> Checked<Self> {
        Self::shift(
            self.year,
            self.month as i64,
            self.day as i64,
            self.time_of_day(),
            span,
        )
    }

    /// Subtract a span, which is adding its [`Span::negate`].
    pub fn checked_sub(&self, span: &Span) -> Checked<Self> {
        self.checked_add(&span.negate())
    }

    /// Add years (month and day are kept, a missing day spills into the next month).
    pub fn add_years(&self, years: i64) -> Checked<Self> {
        self.checked_add(&Span::ZERO.with_years(years))
    }

    /// Add months (the day is kept, a missing day spills into the next month).
    pub fn add_months(&self, months: i64) -> Checked<Self> {
        self.checked_add(&Span::ZERO.with_months(months))
    }

    /// Add days.
    pub fn add_days(&self, days: i64) -> Checked<Self> {
        self.checked_add(&Span::ZERO.with_days(days))
    }

    /// Add hours.
    pub fn add_hours(&self, hours: i64) -> Checked<Self> {
        self.checked_add(&Span::ZERO.with_hours(hours))
    }

    /// Add minutes.
    pub fn add_minutes(&self, minutes: i64) -> Checked<Self> {
        self.checked_add(&Span::ZERO.with_minutes(minutes))
    }

    /// Add seconds.
    pub fn add_seconds(&self, seconds: i64) -> Checked<Self> {
        self.checked_add(&Span::ZERO.with_seconds(seconds))
    }

    /// Add milliseconds.
    pub fn add_milliseconds(&self, milliseconds: i64) -> Checked<Self> {
        self.checked_add(&Span::ZERO.with_milliseconds(milliseconds))
    }

    /// Add microseconds.
    pub fn add_microseconds(&self, microseconds: i64) -> Checked<Self> {
        self.checked_add(&Span::ZERO.with_microseconds(microseconds))
    }

    /// The date part.
    pub const fn date(&self) -> Ymd {
        Ymd::new(self.year, self.month, self.day)
    }

    /// The same day in the Julian calendar.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn to_julian(&self) -> Ymd {
        sdn::sdn_to_julian(self.sdn())
    }

    /// Midnight of the same day.
    pub const fn start_of_day(&self) -> Self {
        Self::new_unchecked(self.year, self.month, self.day, 0, 0, 0, 0, 0)
    }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", py_attr(pymethods, staticmethod))]
impl Instant {
    /// Create a validated instant.
    ///
    /// Fails on year 0, fields outside their bounds, a date before SDN 1 or after
    /// [`Self::MAX_YEAR`], and days that do not exist (like February 30th).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: Year,
        month: Month,
        day: Dom,
        hour: Hour,
        minute: Minute,
        second: Second,
        millisecond: Millisecond,
        microsecond: Microsecond,
    ) -> Result<Instant, Error> {
        if year == 0 {
            return Err(Error::YearZero);
        }
        check(
            "year",
            year as i64,
            GREGORIAN_MIN_YEAR as i64,
            Self::MAX_YEAR as i64,
        )?;
        check("month", month as i64, 1, 12)?;
        check("day", day as i64, 1, 31)?;
        check("hour", hour as i64, 0, 23)?;
        check("minute", minute as i64, 0, 59)?;
        check("second", second as i64, 0, 59)?;
        check("millisecond", millisecond as i64, 0, 999)?;
        check("microsecond", microsecond as i64, 0, 999)?;

        if sdn::gregorian_to_sdn(year, month, day) == 0 {
            return Err(Error::BeforeEpoch { year, month, day });
        }
        if !sdn::is_valid_gregorian(year, month, day) {
            return Err(Error::InvalidDate { year, month, day });
        }

        Ok(Self::new_unchecked(
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
            microsecond,
        ))
    }

    /// Create a validated instant at midnight.
    pub fn from_ymd(year: Year, month: Month, day: Dom) -> Result<Instant, Error> {
        Self::new(year, month, day, 0, 0, 0, 0, 0)
    }

    /// Read the system clock (UTC).
    ///
    /// A clock outside [`Self::MIN`]..=[`Self::MAX`] reads as the nearest bound.
    #[cfg(feature = "std")]
    pub fn now() -> Instant {
        use crate::traits::EpochDelta;

        std::time::SystemTime::now().to_instant().result
    }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pymethods)]
impl Instant {
    // getters

    /// Getter for the year.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn year(&self) -> Year {
        self.year
    }

    /// Getter for the month (1..=12).
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn month(&self) -> Month {
        self.month
    }

    /// Getter for the day of month.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn day(&self) -> Dom {
        self.day
    }

    /// Getter for the hour.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn hour(&self) -> Hour {
        self.hour
    }

    /// Getter for the minute.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn minute(&self) -> Minute {
        self.minute
    }

    /// Getter for the second.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn second(&self) -> Second {
        self.second
    }

    /// Getter for the millisecond.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn millisecond(&self) -> Millisecond {
        self.millisecond
    }

    /// Getter for the microsecond (within the millisecond).
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn microsecond(&self) -> Microsecond {
        self.microsecond
    }

    /// The serial day number of the date.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn sdn(&self) -> Sdn {
        gregorian_to_sdn_unchecked(self.year as i64, self.month as i64, self.day as i64)
    }

    /// Day of the week, 0 being Sunday.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn day_of_week(&self) -> Weekday {
        sdn::day_of_week(self.sdn())
    }

    /// Day of the year, 1 being January 1st.
    #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
    pub fn day_of_year(&self) -> Doy {
        sdn::gregorian_to_doy(self.year, self.month, self.day)
    }

    // arithmetic

    /// Add a span, saturating at [`Self::MIN`] and [`Self::MAX`].
    pub fn plus(&self, span: &Span) -> Instant {
        self.checked_add(span).result
    }

    /// Subtract a span, saturating at [`Self::MIN`] and [`Self::MAX`].
    pub fn minus(&self, span: &Span) -> Instant {
        self.checked_sub(span).result
    }

    /// The span from this instant to `other` (negative if `other` is earlier).
    ///
    /// Only days and smaller units are filled, months are never inferred as their length is
    /// ambiguous. `self.plus(&self.diff(other)) == other`.
    pub fn diff(&self, other: &Instant) -> Span {
        Span::unserialize(other.serialize() - self.serialize(), 0)
    }

    /// Compare to another: -1 if earlier, 0 if equal, 1 if later.
    pub fn compare(&self, other: &Instant) -> i8 {
        match Ord::cmp(self, other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl TryFrom<[i64; 8]> for Instant {
    type Error = Error;

    fn try_from(value: [i64; 8]) -> Result<Self, Self::Error> {
        let [year, month, day, hour, minute, second, millisecond, microsecond] = value;

        // narrow with the coarse bounds first so the message names the field
        check(
            "year",
            year,
            GREGORIAN_MIN_YEAR as i64,
            Self::MAX_YEAR as i64,
        )?;
        check("month", month, 1, 12)?;
        check("day", day, 1, 31)?;
        check("hour", hour, 0, 23)?;
        check("minute", minute, 0, 59)?;
        check("second", second, 0, 59)?;
        check("millisecond", millisecond, 0, 999)?;
        check("microsecond", microsecond, 0, 999)?;

        Self::new(
            year as Year,
            month as Month,
            day as Dom,
            hour as Hour,
            minute as Minute,
            second as Second,
            millisecond as Millisecond,
            microsecond as Microsecond,
        )
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}{:03}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.millisecond,
            self.microsecond
        )
    }
}

impl FromStr for Instant {
    type Err = Error;

    /// Parse `YYYY-MM-DD`, optionally followed by ` ` or `T` and `HH:MM`, `HH:MM:SS` or
    /// `HH:MM:SS.f` with 1 to 6 fractional digits. A leading `-` marks a year before 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date, time) = match s.split_once(['T', ' ']) {
            Some((date, time)) => (date, Some(time)),
            None => (s, None),
        };

        let (negative, date) = match date.strip_prefix('-') {
            Some(date) => (true, date),
            None => (false, date),
        };
        let mut parts = date.splitn(3, '-');
        let year: Year = parse_number(parts.next(), "year")?;
        let month: Month = parse_number(parts.next(), "month")?;
        let day: Dom = parse_number(parts.next(), "day")?;
        let year = if negative { -year } else { year };

        let Some(time) = time else {
            return Self::from_ymd(year, month, day);
        };

        let (clock, fraction) = match time.split_once('.') {
            Some((clock, fraction)) => (clock, Some(fraction)),
            None => (time, None),
        };
        let mut parts = clock.splitn(3, ':');
        let hour: Hour = parse_number(parts.next(), "hour")?;
        let minute: Minute = parse_number(parts.next(), "minute")?;
        let second: Second = match parts.next() {
            Some(second) => parse_number(Some(second), "second")?,
            None if fraction.is_some() => return Err(Error::Parse("second")),
            None => 0,
        };

        let micros = match fraction {
            Some(fraction) => parse_fraction(fraction)?,
            None => 0,
        };

        Self::new(
            year,
            month,
            day,
            hour,
            minute,
            second,
            (micros / 1000) as Millisecond,
            (micros % 1000) as Microsecond,
        )
    }
}

/// Parse an unsigned decimal field made of ASCII digits only.
fn parse_number<T: FromStr>(part: Option<&str>, what: &'static str) -> Result<T, Error> {
    match part {
        Some(part) if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) => {
            part.parse().map_err(|_| Error::Parse(what))
        }
        _ => Err(Error::Parse(what)),
    }
}

/// Parse 1 to 6 fractional digits of a second into microseconds.
fn parse_fraction(fraction: &str) -> Result<u32, Error> {
    if fraction.is_empty() || fraction.len() > 6 {
        return Err(Error::Parse("fraction"));
    }
    let value: u32 = parse_number(Some(fraction), "fraction")?;
    Ok(value * 10u32.pow(6 - fraction.len() as u32))
}

impl Add<Span> for Instant {
    type Output = Self;

    fn add(self, rhs: Span) -> Self::Output {
        self.plus(&rhs)
    }
}

impl AddAssign<Span> for Instant {
    fn add_assign(&mut self, rhs: Span) {
        *self = self.plus(&rhs);
    }
}

impl Sub<Span> for Instant {
    type Output = Self;

    fn sub(self, rhs: Span) -> Self::Output {
        self.minus(&rhs)
    }
}

impl SubAssign<Span> for Instant {
    fn sub_assign(&mut self, rhs: Span) {
        *self = self.minus(&rhs);
    }
}

impl Sub for Instant {
    type Output = Span;

    /// `a - b` is the span from `b` to `a`.
    fn sub(self, rhs: Self) -> Self::Output {
        rhs.diff(&self)
    }
}
