//! Miscellaneous generic utilities.

use crate::primitive::Micros;

/// A result together with whether it fell out of the supported range.
///
/// This is the Rust face of the sentinel convention: the result is always usable (the sentinel or
/// the nearest bound), and `out_of_range` tells if it is genuine. It behaves like the `Option<T>`
/// of `checked_*` operations but keeps the value around, which is friendlier for const-context
/// and for FFIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "c", repr(C))]
pub struct Checked<T> {
    /// Whether the input was outside the domain and `result` is a sentinel or a bound.
    pub out_of_range: bool,
    /// The result of the operation.
    pub result: T,
}

impl<T> Checked<T> {
    /// Create an instance with [`Self::out_of_range`] set to true.
    pub const fn out_of_range(result: T) -> Self {
        Self::new(true, result)
    }

    /// Create an instance with [`Self::out_of_range`] set to false.
    pub const fn in_range(result: T) -> Self {
        Self::new(false, result)
    }

    /// A shorthand for creation.
    //
    // out_of_range is first so it can be computed from the result before it is moved in
    pub const fn new(out_of_range: bool, result: T) -> Self {
        Self {
            out_of_range,
            result,
        }
    }

    /// Return the result if it is in range.
    pub fn ok(self) -> Option<T> {
        self.into()
    }

    /// Apply `f` to the result, keeping the flag.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Checked<U> {
        Checked::new(self.out_of_range, f(self.result))
    }
}

impl<T> From<Checked<T>> for Option<T> {
    fn from(value: Checked<T>) -> Self {
        match value.out_of_range {
            true => None,
            false => Some(value.result),
        }
    }
}

impl<T> PartialEq<T> for Checked<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &T) -> bool {
        self.result.eq(other)
    }
}

/// Largest integer not greater than `x`, saturating at the `i64` bounds (NaN is 0).
///
/// `f64::floor` lives in std, this works in core.
pub(crate) fn floor_f64(x: f64) -> i64 {
    if x.is_nan() {
        return 0;
    }
    // past these the float has no fraction left and the cast saturates
    if x >= i64::MAX as f64 || x <= i64::MIN as f64 {
        return x as i64;
    }

    let t = x as i64;
    if (t as f64) > x { t.saturating_sub(1) } else { t }
}

/// Nearest integer to `x`, ties away from zero, saturating at the `i128` bounds (NaN is 0).
pub(crate) fn round_f64(x: f64) -> Micros {
    if x.is_nan() {
        return 0;
    }
    if x >= Micros::MAX as f64 || x <= Micros::MIN as f64 {
        return x as Micros;
    }

    let t = x as Micros;
    let fract = x - t as f64;
    if fract >= 0.5 {
        t.saturating_add(1)
    } else if fract <= -0.5 {
        t.saturating_sub(1)
    } else {
        t
    }
}
