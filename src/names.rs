//! English month and weekday names for text adapters.

use crate::primitive::{Month, Weekday};

/// Month names, index 0 is January.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Three letter month abbreviations, index 0 is January.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Weekday names, index 0 is Sunday like [`crate::day_of_week`].
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Three letter weekday abbreviations, index 0 is Sunday.
pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Name of a month (1..=12).
pub const fn month_name(month: Month, abbreviated: bool) -> Option<&'static str> {
    if month < 1 || month > 12 {
        return None;
    }
    let i = month as usize - 1;
    Some(if abbreviated {
        MONTH_ABBREVIATIONS[i]
    } else {
        MONTH_NAMES[i]
    })
}

/// Name of a day of the week (0..=6, Sunday first).
pub const fn weekday_name(weekday: Weekday, abbreviated: bool) -> Option<&'static str> {
    if weekday > 6 {
        return None;
    }
    let i = weekday as usize;
    Some(if abbreviated {
        WEEKDAY_ABBREVIATIONS[i]
    } else {
        WEEKDAY_NAMES[i]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1, false), Some("January"));
        assert_eq!(month_name(12, true), Some("Dec"));
        assert_eq!(month_name(0, false), None);
        assert_eq!(month_name(13, true), None);
    }

    #[test]
    fn test_weekday_name() {
        let monday = crate::day_of_week(crate::gregorian_to_sdn(1967, 3, 20));
        assert_eq!(weekday_name(monday, false), Some("Monday"));
        assert_eq!(weekday_name(0, true), Some("Sun"));
        assert_eq!(weekday_name(7, false), None);
    }
}
