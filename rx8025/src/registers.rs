//! Register map and the in-memory register bank
//!
//! The RX-8025SA exposes sixteen byte-wide registers. Time and calendar
//! registers hold BCD digits split into a "ones" and a "tens" sub-field,
//! control registers hold single-bit flags. The bank keeps one byte per
//! device address and every field accessor works on those bytes in place.

use core::fmt;

use crate::status::VoltageThreshold;

/// Number of registers transferred in one bus operation (`0x0..=0xF`).
pub const BANK_LEN: usize = 16;

pub(crate) struct Register;

impl Register {
    pub(crate) const SECONDS: u8 = 0x00;
    pub(crate) const MINUTES: u8 = 0x01;
    pub(crate) const HOURS: u8 = 0x02;
    pub(crate) const WEEKDAY: u8 = 0x03;
    pub(crate) const DAY: u8 = 0x04;
    pub(crate) const MONTH: u8 = 0x05;
    pub(crate) const YEAR: u8 = 0x06;
    pub(crate) const DIGITAL_OFFSET: u8 = 0x07;
    pub(crate) const CONTROL1: u8 = 0x0E;
    pub(crate) const CONTROL2: u8 = 0x0F;
}

/// A named packed field inside the register bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Second,
    Second10,
    Minute,
    Minute10,
    Hour,
    Hour10,
    /// Device-native weekday index, passed through untouched.
    Weekday,
    Day,
    Day10,
    Month,
    Month10,
    /// /C19,20 century marker. Carried, never interpreted.
    Century,
    Year,
    Year10,
    DigitalOffset,
    /// Manufacturer test bit of the digital offset register. Written as 0.
    OffsetTest,
    /// CT2..CT0 periodic interrupt selection.
    PeriodicInterrupt,
    /// Manufacturer test bit of control 1. Written as 0.
    ControlTest,
    Clen2,
    /// /12,24: 0 = 12-hour clock, 1 = 24-hour clock.
    TwentyFourHour,
    AlarmDEnable,
    AlarmWEnable,
    AlarmDFlag,
    AlarmWFlag,
    PeriodicFlag,
    Clen1,
    /// Power-on reset detected.
    PowerOnReset,
    /// /XST: cleared by the device when the oscillator stops.
    OscillatorRunning,
    /// Supply voltage dropped below the VDSL threshold.
    VoltageDrop,
    /// Voltage detection threshold select.
    VoltageSelect,
}

/// Location of a field: register address, bit offset and bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub address: u8,
    pub shift: u8,
    pub width: u8,
}

impl FieldSpec {
    const fn new(address: u8, shift: u8, width: u8) -> Self {
        FieldSpec {
            address,
            shift,
            width,
        }
    }

    /// Unshifted mask covering `width` bits.
    pub const fn mask(&self) -> u8 {
        ((1u16 << self.width) - 1) as u8
    }
}

impl Field {
    pub const fn spec(self) -> FieldSpec {
        match self {
            Field::Second => FieldSpec::new(Register::SECONDS, 0, 4),
            Field::Second10 => FieldSpec::new(Register::SECONDS, 4, 3),
            Field::Minute => FieldSpec::new(Register::MINUTES, 0, 4),
            Field::Minute10 => FieldSpec::new(Register::MINUTES, 4, 3),
            Field::Hour => FieldSpec::new(Register::HOURS, 0, 4),
            Field::Hour10 => FieldSpec::new(Register::HOURS, 4, 2),
            Field::Weekday => FieldSpec::new(Register::WEEKDAY, 0, 3),
            Field::Day => FieldSpec::new(Register::DAY, 0, 4),
            Field::Day10 => FieldSpec::new(Register::DAY, 4, 2),
            Field::Month => FieldSpec::new(Register::MONTH, 0, 4),
            Field::Month10 => FieldSpec::new(Register::MONTH, 4, 1),
            Field::Century => FieldSpec::new(Register::MONTH, 7, 1),
            Field::Year => FieldSpec::new(Register::YEAR, 0, 4),
            Field::Year10 => FieldSpec::new(Register::YEAR, 4, 4),
            Field::DigitalOffset => FieldSpec::new(Register::DIGITAL_OFFSET, 0, 7),
            Field::OffsetTest => FieldSpec::new(Register::DIGITAL_OFFSET, 7, 1),
            Field::PeriodicInterrupt => FieldSpec::new(Register::CONTROL1, 0, 3),
            Field::ControlTest => FieldSpec::new(Register::CONTROL1, 3, 1),
            Field::Clen2 => FieldSpec::new(Register::CONTROL1, 4, 1),
            Field::TwentyFourHour => FieldSpec::new(Register::CONTROL1, 5, 1),
            Field::AlarmDEnable => FieldSpec::new(Register::CONTROL1, 6, 1),
            Field::AlarmWEnable => FieldSpec::new(Register::CONTROL1, 7, 1),
            Field::AlarmDFlag => FieldSpec::new(Register::CONTROL2, 0, 1),
            Field::AlarmWFlag => FieldSpec::new(Register::CONTROL2, 1, 1),
            Field::PeriodicFlag => FieldSpec::new(Register::CONTROL2, 2, 1),
            Field::Clen1 => FieldSpec::new(Register::CONTROL2, 3, 1),
            Field::PowerOnReset => FieldSpec::new(Register::CONTROL2, 4, 1),
            Field::OscillatorRunning => FieldSpec::new(Register::CONTROL2, 5, 1),
            Field::VoltageDrop => FieldSpec::new(Register::CONTROL2, 6, 1),
            Field::VoltageSelect => FieldSpec::new(Register::CONTROL2, 7, 1),
        }
    }
}

/// Last bus snapshot of the whole register space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegisterBank {
    raw: [u8; BANK_LEN],
}

impl RegisterBank {
    pub const fn new() -> Self {
        RegisterBank { raw: [0; BANK_LEN] }
    }

    pub const fn from_raw(raw: [u8; BANK_LEN]) -> Self {
        RegisterBank { raw }
    }

    pub fn raw(&self) -> &[u8; BANK_LEN] {
        &self.raw
    }

    pub fn load_raw(&mut self, raw: &[u8; BANK_LEN]) {
        self.raw.copy_from_slice(raw);
    }

    /// Extract a field. The result is the raw sub-field value, not range checked.
    pub fn decode_field(&self, field: Field) -> u8 {
        let spec = field.spec();
        (self.raw[spec.address as usize] >> spec.shift) & spec.mask()
    }

    /// Insert a field. Bits of `value` beyond the field width are dropped.
    pub fn encode_field(&mut self, field: Field, value: u8) {
        let spec = field.spec();
        let mask = spec.mask() << spec.shift;
        let byte = &mut self.raw[spec.address as usize];
        *byte = (*byte & !mask) | ((value << spec.shift) & mask);
    }

    pub fn flag(&self, field: Field) -> bool {
        self.decode_field(field) != 0
    }

    pub fn set_flag(&mut self, field: Field, on: bool) {
        self.encode_field(field, u8::from(on));
    }

    /// Combine a ones/tens digit pair into its decimal value.
    pub fn decode_bcd(&self, ones: Field, tens: Field) -> u8 {
        10 * self.decode_field(tens) + self.decode_field(ones)
    }

    /// Split `value` into tens = value / 10 and ones = value % 10.
    pub fn encode_bcd(&mut self, ones: Field, tens: Field, value: u8) {
        self.encode_field(ones, value % 10);
        self.encode_field(tens, value / 10);
    }

    /// Force the control bits every time write must carry: 24-hour mode,
    /// PON/VDET cleared, /XST set (oscillator running), threshold select.
    /// Both manufacturer test bits must be written as 0. Alarm, interrupt
    /// and clock-out bits keep their last read value.
    pub fn prepare_for_write(&mut self, threshold: VoltageThreshold) {
        self.set_flag(Field::TwentyFourHour, true);
        self.set_flag(Field::PowerOnReset, false);
        self.set_flag(Field::OscillatorRunning, true);
        self.set_flag(Field::VoltageDrop, false);
        self.set_flag(Field::VoltageSelect, threshold.select_bit());
        self.set_flag(Field::OffsetTest, false);
        self.set_flag(Field::ControlTest, false);
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "ON"
    } else {
        "OFF"
    }
}

impl fmt::Display for RegisterBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:x}{:x}:{:x}{:x}:{:x}{:x} 20{:x}{:x}-{:x}{:x}-{:x}{:x} [24 Hour: {} vdet: Voltage {} (vdsl: {} Threshold) xst: Oscillator {} pon: Power On Reset Detection {}]",
            self.decode_field(Field::Hour10),
            self.decode_field(Field::Hour),
            self.decode_field(Field::Minute10),
            self.decode_field(Field::Minute),
            self.decode_field(Field::Second10),
            self.decode_field(Field::Second),
            self.decode_field(Field::Year10),
            self.decode_field(Field::Year),
            self.decode_field(Field::Month10),
            self.decode_field(Field::Month),
            self.decode_field(Field::Day10),
            self.decode_field(Field::Day),
            on_off(self.flag(Field::TwentyFourHour)),
            if self.flag(Field::VoltageDrop) { "LOW" } else { "Normal" },
            VoltageThreshold::from_select_bit(self.flag(Field::VoltageSelect)),
            if self.flag(Field::OscillatorRunning) { "Normal" } else { "STOPPED" },
            if self.flag(Field::PowerOnReset) { "WARNING" } else { "Normal" },
        )
    }
}
