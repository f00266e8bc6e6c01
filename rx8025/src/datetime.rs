//! `rtcc` date/time access

use crate::{
    CalendarTime, DateTimeAccess, Datelike, Error, NaiveDateTime, Rx8025, Trust, MAX_YEAR,
    MIN_YEAR,
};

impl<I2C> DateTimeAccess for Rx8025<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = Error;

    fn datetime(&mut self) -> Result<NaiveDateTime, Self::Error> {
        self.read_registers()?;
        if self.status().trust() == Trust::Untrusted {
            return Err(Error::InvalidDeviceState);
        }
        CalendarTime::from_bank(self.bank()).to_datetime()
    }

    /// Only years that `datetime()` accepts back are written.
    fn set_datetime(&mut self, datetime: &NaiveDateTime) -> Result<(), Self::Error> {
        let year = datetime.year();
        if year < i32::from(MIN_YEAR) || year > i32::from(MAX_YEAR) {
            return Err(Error::InvalidInputData);
        }
        self.set_calendar_time(&CalendarTime::from_datetime(datetime))
    }
}
