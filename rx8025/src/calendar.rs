//! Calendar time decoded from, or encoded into, the time registers

use core::fmt;

use crate::registers::{Field, RegisterBank};
use crate::{Datelike, Error, NaiveDate, NaiveDateTime, Timelike};

/// The year register counts from this year.
pub const BASE_YEAR: u16 = 2000;
/// Earliest year accepted as a real time.
pub const MIN_YEAR: u16 = 2019;
/// Last year the two-digit year register can express.
pub const MAX_YEAR: u16 = 2099;

/// Calendar fields as held by the device, before or after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    /// Days since Sunday; stored on the device unchanged.
    pub weekday: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl CalendarTime {
    pub fn from_bank(bank: &RegisterBank) -> Self {
        CalendarTime {
            year: BASE_YEAR + u16::from(bank.decode_bcd(Field::Year, Field::Year10)),
            month: bank.decode_bcd(Field::Month, Field::Month10),
            day: bank.decode_bcd(Field::Day, Field::Day10),
            weekday: bank.decode_field(Field::Weekday),
            hour: bank.decode_bcd(Field::Hour, Field::Hour10),
            minute: bank.decode_bcd(Field::Minute, Field::Minute10),
            second: bank.decode_bcd(Field::Second, Field::Second10),
        }
    }

    /// Encode into the time registers of `bank`. Control registers are left alone.
    pub fn write_to(&self, bank: &mut RegisterBank) {
        let year = (self.year.saturating_sub(BASE_YEAR) % 100) as u8;
        bank.encode_bcd(Field::Year, Field::Year10, year);
        bank.encode_bcd(Field::Month, Field::Month10, self.month);
        bank.encode_bcd(Field::Day, Field::Day10, self.day);
        bank.encode_field(Field::Weekday, self.weekday);
        bank.encode_bcd(Field::Hour, Field::Hour10, self.hour);
        bank.encode_bcd(Field::Minute, Field::Minute10, self.minute);
        bank.encode_bcd(Field::Second, Field::Second10, self.second);
    }

    pub fn from_datetime(datetime: &NaiveDateTime) -> Self {
        CalendarTime {
            year: datetime.year().clamp(0, i32::from(u16::MAX)) as u16,
            month: datetime.month() as u8,
            day: datetime.day() as u8,
            weekday: datetime.weekday().num_days_from_sunday() as u8,
            hour: datetime.hour() as u8,
            minute: datetime.minute() as u8,
            second: datetime.second() as u8,
        }
    }

    /// Range and calendar check. Day-of-month follows the month length,
    /// leap years included.
    pub fn to_datetime(&self) -> Result<NaiveDateTime, Error> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(Error::InvalidCalendarTime);
        }
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
        .and_then(|date| {
            date.and_hms_opt(
                u32::from(self.hour),
                u32::from(self.minute),
                u32::from(self.second),
            )
        })
        .ok_or(Error::InvalidCalendarTime)
    }

    pub fn is_valid(&self) -> bool {
        self.to_datetime().is_ok()
    }

    /// Seconds since the Unix epoch, reading the fields as UTC.
    pub fn timestamp(&self) -> Result<i64, Error> {
        Ok(self.to_datetime()?.and_utc().timestamp())
    }
}

impl fmt::Display for CalendarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
