//! Platform-agnostic driver for the Epson RX-8025SA real-time clock.
//!
//! The whole register space is moved in a single bus transfer in each
//! direction and kept as a [`RegisterBank`] snapshot. Time fields are
//! decoded into a [`CalendarTime`]; the status flags decide whether that
//! time can be trusted (see [`Status::trust`]).

#![deny(unsafe_code)]
#![cfg_attr(not(test), no_std)]

pub use rtcc::{DateTimeAccess, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// All possible errors in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// I²C bus error
    Comm,
    /// Invalid input data provided
    InvalidInputData,
    /// The time registers do not hold a valid calendar time.
    InvalidCalendarTime,
    /// Internal device state is invalid.
    ///
    /// Power-on reset or oscillator stop was detected, so the time
    /// registers cannot be trusted until the clock is set again.
    InvalidDeviceState,
}

/// Default 7-bit I²C address.
pub const DEVICE_ADDRESS: u8 = 0x32;

/// RX-8025SA RTC driver
#[derive(Debug)]
pub struct Rx8025<I2C> {
    i2c: I2C,
    address: u8,
    bank: RegisterBank,
    threshold: VoltageThreshold,
}

mod calendar;
mod datetime;
mod device;
mod registers;
mod status;

pub use crate::calendar::{CalendarTime, BASE_YEAR, MAX_YEAR, MIN_YEAR};
pub use crate::registers::{Field, FieldSpec, RegisterBank, BANK_LEN};
pub use crate::status::{Status, Trust, VoltageThreshold};
