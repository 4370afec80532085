//! Typed errors for the checked constructors and parsers.
//!
//! The calendar functions themselves never fail loudly, they return sentinels (see
//! [`crate::Checked`]). These errors are for callers that build an [`crate::Instant`] from loose
//! fields or text and want to know why it was refused.

use crate::primitive::{Dom, Month, Year};

/// Error type for all fallible constructors in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A field is outside its structural bounds.
    #[error("{what} {value} is out of range {min}..={max}")]
    OutOfRange {
        /// Name of the field.
        what: &'static str,
        /// The rejected value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// Year 0 was given, the year before 1 is -1.
    #[error("year 0 does not exist, the year before 1 is -1")]
    YearZero,

    /// The fields pass the coarse bounds but name no real day (like February 30th).
    #[error("{year:04}-{month:02}-{day:02} is not a valid date")]
    InvalidDate {
        /// The given year.
        year: Year,
        /// The given month.
        month: Month,
        /// The given day of month.
        day: Dom,
    },

    /// The date precedes serial day 1.
    #[error("{year:04}-{month:02}-{day:02} precedes the first serial day")]
    BeforeEpoch {
        /// The given year.
        year: Year,
        /// The given month.
        month: Month,
        /// The given day of month.
        day: Dom,
    },

    /// Text did not match the expected layout; holds the part that failed.
    #[error("cannot parse {0}")]
    Parse(&'static str),
}

impl Error {
    pub(crate) const fn out_of_range(what: &'static str, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            what,
            value,
            min,
            max,
        }
    }
}

#[cfg(feature = "py")]
impl From<Error> for pyo3::PyErr {
    fn from(value: Error) -> Self {
        pyo3::exceptions::PyValueError::new_err(std::string::ToString::to_string(&value))
    }
}

#[cfg(feature = "wasm")]
impl From<Error> for wasm_bindgen::JsValue {
    fn from(value: Error) -> Self {
        wasm_bindgen::JsValue::from_str(&std::string::ToString::to_string(&value))
    }
}
