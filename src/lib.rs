#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
mod logging;

#[macro_use]
mod macros;

pub mod error;
#[cfg(feature = "c")]
pub mod ffi;
pub mod instant;
pub mod names;
pub mod primitive;
pub mod sdn;
pub mod span;
pub mod traits;
pub mod utility;

pub use error::Error;
pub use instant::Instant;
pub use names::{month_name, weekday_name};
pub use primitive::*;
pub use sdn::{
    Ymd, day_of_week, days_in_gregorian_month, doy_to_gregorian, gregorian_to_doy,
    gregorian_to_julian, gregorian_to_sdn, is_gregorian_leap_year, is_julian_leap_year,
    is_valid_gregorian, is_valid_julian, julian_to_gregorian, julian_to_sdn, sdn_to_gregorian,
    sdn_to_julian,
};
pub use span::Span;
pub use traits::EpochDelta;
pub use utility::Checked;

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "py")]
#[pymodule]
fn sdncal(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(sdn::gregorian_to_sdn, m)?)?;
    m.add_function(wrap_pyfunction!(sdn::sdn_to_gregorian, m)?)?;
    m.add_function(wrap_pyfunction!(sdn::julian_to_sdn, m)?)?;
    m.add_function(wrap_pyfunction!(sdn::sdn_to_julian, m)?)?;
    m.add_function(wrap_pyfunction!(sdn::day_of_week, m)?)?;
    m.add_function(wrap_pyfunction!(sdn::gregorian_to_doy, m)?)?;
    m.add_function(wrap_pyfunction!(sdn::doy_to_gregorian, m)?)?;
    m.add_function(wrap_pyfunction!(sdn::is_gregorian_leap_year, m)?)?;
    m.add_function(wrap_pyfunction!(sdn::is_julian_leap_year, m)?)?;
    m.add_function(wrap_pyfunction!(sdn::days_in_gregorian_month, m)?)?;
    m.add_function(wrap_pyfunction!(sdn::is_valid_gregorian, m)?)?;
    m.add_function(wrap_pyfunction!(sdn::is_valid_julian, m)?)?;
    m.add_function(wrap_pyfunction!(sdn::julian_to_gregorian, m)?)?;
    m.add_function(wrap_pyfunction!(sdn::gregorian_to_julian, m)?)?;
    m.add_class::<Ymd>()?;
    m.add_class::<Instant>()?;
    m.add_class::<Span>()?;
    Ok(())
}

#[cfg(all(not(test), not(feature = "std")))]
#[panic_handler]
fn panic_handler(_: &core::panic::PanicInfo) -> ! {
    loop {}
}
