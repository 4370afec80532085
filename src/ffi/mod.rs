//! C exports for the arithmetic on [`Instant`] and [`Span`] (the `c` feature).
//!
//! The calendar functions in [`crate::sdn`] are exported where they are defined, under
//! `sdncal_`-prefixed symbols. The functions here take and return the `#[repr(C)]` value types by
//! value, so the C side needs no allocation or pointer ownership rules. Results that could fall
//! outside the supported range come back as a [`Checked`] pair.

use crate::{Checked, Instant, Span, Year};

/// `instant + span`, years and months first.
#[unsafe(no_mangle)]
pub extern "C" fn sdncal_instant_add(instant: Instant, span: Span) -> Checked<Instant> {
    instant.checked_add(&span)
}

/// `instant - span`.
#[unsafe(no_mangle)]
pub extern "C" fn sdncal_instant_sub(instant: Instant, span: Span) -> Checked<Instant> {
    instant.checked_sub(&span)
}

/// The span from `from` to `to`.
#[unsafe(no_mangle)]
pub extern "C" fn sdncal_instant_diff(from: Instant, to: Instant) -> Span {
    from.diff(&to)
}

/// -1, 0 or 1 as `a` is earlier, equal or later than `b`.
#[unsafe(no_mangle)]
pub extern "C" fn sdncal_instant_compare(a: Instant, b: Instant) -> i8 {
    a.compare(&b)
}

/// See [`Instant::normalize`].
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn sdncal_instant_normalize(
    year: Year,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    millisecond: i64,
    microsecond: i64,
) -> Checked<Instant> {
    Instant::normalize(
        year,
        month,
        day,
        hour,
        minute,
        second,
        millisecond,
        microsecond,
    )
}

/// `a + b`, normalized.
#[unsafe(no_mangle)]
pub extern "C" fn sdncal_span_add(a: Span, b: Span) -> Span {
    a.plus(&b)
}

/// `a - b`, normalized.
#[unsafe(no_mangle)]
pub extern "C" fn sdncal_span_sub(a: Span, b: Span) -> Span {
    a.minus(&b)
}

/// Every field negated.
#[unsafe(no_mangle)]
pub extern "C" fn sdncal_span_neg(span: Span) -> Span {
    span.negate()
}

/// `span * factor`, normalized.
#[unsafe(no_mangle)]
pub extern "C" fn sdncal_span_mul(span: Span, factor: i64) -> Span {
    span.multiply(factor)
}
