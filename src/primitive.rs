//! Holds the primitive aliases and the fixed-point constants shared by the calendar and the
//! arithmetic layers.

/// A serial day number, day 1 being November 25, 4714 BC (Gregorian).
///
/// Anything at or below zero is the "no date" sentinel.
pub type Sdn = i64;

/// Counter for years (historical numbering, there is no year 0: -1 precedes 1).
pub type Year = i32;

/// Counter for months of a year (1..=12).
pub type Month = u8;

/// Counter for days of a month (1..=31).
pub type Dom = u8;

/// Counter for days in a year (1..=366).
pub type Doy = u16;

/// Day of the week, 0 is Sunday and 6 is Saturday.
pub type Weekday = u8;

/// Hour of a day (0..=23).
pub type Hour = u8;

/// Minute of an hour (0..=59).
pub type Minute = u8;

/// Second of a minute (0..=59).
pub type Second = u8;

/// Millisecond of a second (0..=999).
pub type Millisecond = u16;

/// Microsecond of a millisecond (0..=999).
pub type Microsecond = u16;

/// Fixed-point scalar for serialized values, counted in microseconds.
pub type Micros = i128;

/// Microseconds in a millisecond.
pub const MICROS_PER_MILLI: Micros = 1_000;

/// Microseconds in a second.
pub const MICROS_PER_SECOND: Micros = 1_000 * MICROS_PER_MILLI;

/// Microseconds in a minute.
pub const MICROS_PER_MINUTE: Micros = 60 * MICROS_PER_SECOND;

/// Microseconds in an hour.
pub const MICROS_PER_HOUR: Micros = 60 * MICROS_PER_MINUTE;

/// Microseconds in a day (no leap seconds).
pub const MICROS_PER_DAY: Micros = 24 * MICROS_PER_HOUR;

/// Months in a year.
pub const MONTHS_PER_YEAR: i64 = 12;

/// The replacement for year 0 which does not exist in historical numbering.
pub const Y0_REPLACEMENT: Year = -1;

/// Convert a historical year (no 0) to an astronomical one (0 is 1 BC).
pub const fn to_astronomical(year: Year) -> i64 {
    if year < 0 {
        year as i64 + 1
    } else {
        year as i64
    }
}
