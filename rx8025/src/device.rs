//! Bus transfers and device-level operations

use crate::registers::{Register, RegisterBank, BANK_LEN};
use crate::{CalendarTime, Error, Rx8025, Status, VoltageThreshold, DEVICE_ADDRESS};

/// The RX-8025 takes the start register in the upper nibble of the first
/// byte; the lower nibble selects the transfer mode (0 = standard).
const fn pointer(register: u8) -> u8 {
    register << 4
}

impl<I2C> Rx8025<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Create a new instance on the default address.
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEVICE_ADDRESS)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Rx8025 {
            i2c,
            address,
            bank: RegisterBank::new(),
            threshold: VoltageThreshold::default(),
        }
    }

    /// Destroy driver instance, return I²C bus instance.
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Last register snapshot, read or written.
    pub fn bank(&self) -> &RegisterBank {
        &self.bank
    }

    pub fn voltage_threshold(&self) -> VoltageThreshold {
        self.threshold
    }

    /// Threshold written with the next time update.
    pub fn set_voltage_threshold(&mut self, threshold: VoltageThreshold) {
        self.threshold = threshold;
    }

    /// Status flags of the last snapshot.
    pub fn status(&self) -> Status {
        Status::from_bank(&self.bank)
    }

    /// Read the whole register bank in one transfer.
    ///
    /// The stored snapshot is only replaced when the transfer succeeds.
    pub fn read_registers(&mut self) -> Result<&RegisterBank, Error> {
        let mut data = [0u8; BANK_LEN];
        self.i2c
            .write_read(self.address, &[pointer(Register::SECONDS)], &mut data)
            .map_err(|_err| Error::Comm)?;
        self.bank.load_raw(&data);
        Ok(&self.bank)
    }

    /// Write `bank` to the device in one transfer and keep it as the snapshot.
    pub fn write_registers(&mut self, bank: &RegisterBank) -> Result<(), Error> {
        let mut payload = [0u8; BANK_LEN + 1];
        payload[0] = pointer(Register::SECONDS);
        payload[1..].copy_from_slice(bank.raw());
        self.i2c
            .write(self.address, &payload)
            .map_err(|_err| Error::Comm)?;
        self.bank = *bank;
        Ok(())
    }

    /// Set the clock and restart status detection.
    ///
    /// The image starts from the last snapshot so alarm and interrupt
    /// settings are written back unchanged.
    pub fn set_calendar_time(&mut self, time: &CalendarTime) -> Result<(), Error> {
        let mut image = self.bank;
        time.write_to(&mut image);
        image.prepare_for_write(self.threshold);
        self.write_registers(&image)
    }
}
