//! Holds traits and their implementation for Rust usage.

use crate::{
    instant::Instant,
    primitive::{Micros, Sdn},
    utility::Checked,
};

/// Convert a time difference in compare to the Unix epoch (1970-01-01T00:00:00) to an instant.
///
/// When the given time has a timezone, it is ignored (the epoch always assumes the same timezone
/// as the given value, which is UTC for the system clock).
pub trait EpochDelta {
    /// This value as signed microseconds since the epoch (negative before it).
    ///
    /// This must be saturating.
    fn epoch_micros(&self) -> Micros;

    /// Convert this offset from the epoch to an [`Instant`].
    ///
    /// Offsets past [`Instant::MIN`] or [`Instant::MAX`] give that bound, flagged.
    fn to_instant(&self) -> Checked<Instant> {
        Instant::unserialize(
            Instant::UNIX_EPOCH
                .serialize()
                .saturating_add(self.epoch_micros()),
        )
    }

    /// The serial day number this offset falls on.
    fn sdn(&self) -> Sdn {
        self.to_instant().result.sdn()
    }
}

impl EpochDelta for core::time::Duration {
    fn epoch_micros(&self) -> Micros {
        Micros::try_from(self.as_micros()).unwrap_or(Micros::MAX)
    }
}

#[cfg(feature = "std")]
impl EpochDelta for std::time::SystemTime {
    fn epoch_micros(&self) -> Micros {
        match self.duration_since(std::time::UNIX_EPOCH) {
            Ok(d) => d.epoch_micros(),
            Err(e) => -e.duration().epoch_micros(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    #[test]
    fn test_duration_past_epoch() {
        let v = Duration::from_secs(86_400 * 365 + 3_600).to_instant();
        assert!(!v.out_of_range);
        assert_eq!(v.result, Instant::new(1971, 1, 1, 1, 0, 0, 0, 0).unwrap());
        assert_eq!(Duration::ZERO.sdn(), crate::sdn::SDN_UNIX_EPOCH);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_system_time_before_epoch() {
        let before = std::time::UNIX_EPOCH - Duration::from_micros(1);
        assert_eq!(before.epoch_micros(), -1);
        assert_eq!(
            before.to_instant().result,
            Instant::new(1969, 12, 31, 23, 59, 59, 999, 999).unwrap()
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_now_is_after_2020() {
        let now = Instant::now();
        assert!(now > Instant::from_ymd(2020, 1, 1).unwrap());
        assert!(now < Instant::MAX);
    }
}
