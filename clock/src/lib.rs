pub mod clock {
    use crate::error::SyncError;
    use crate::host::HostClock;
    use crate::settings::RtcSettings;
    use log::*;
    use rx8025::{CalendarTime, RegisterBank, Rx8025, Trust};

    /// Keeps an RX-8025 and the host clock in step.
    ///
    /// Calls are expected one at a time from a single scheduler; every
    /// operation runs to completion with one blocking bus transfer.
    pub struct ClockSync<I2C, H> {
        rtc: Rx8025<I2C>,
        host: H,
        settings: RtcSettings,
        failed: bool,
    }

    impl<I2C, H> ClockSync<I2C, H>
    where
        I2C: embedded_hal::i2c::I2c,
        H: HostClock,
    {
        pub fn new(mut rtc: Rx8025<I2C>, host: H, settings: RtcSettings) -> ClockSync<I2C, H> {
            rtc.set_voltage_threshold(settings.voltage_threshold());
            ClockSync {
                rtc,
                host,
                settings,
                failed: false,
            }
        }

        /// First contact with the device. A bus failure here disables the component.
        pub fn setup(&mut self) -> Result<(), SyncError> {
            info!("Setting up RX8025...");
            if let Err(err) = self.read_bank() {
                self.failed = true;
                error!("Communication with RX8025 failed!");
                return Err(err);
            }
            info!("RX8025 registers: {}", self.rtc.bank());
            Ok(())
        }

        /// Periodic poll hook.
        pub fn update(&mut self) {
            // every other outcome is logged where it happens
            if let Err(SyncError::Failed) = self.sync_from_device() {
                debug!("RX8025 disabled after failed setup, skipping update");
            }
        }

        pub fn dump_config(&self) {
            info!("RX8025:");
            info!("  Address: {:#04x}", self.rtc.address());
            info!("  Voltage threshold: {}", self.rtc.voltage_threshold());
            info!("  Update interval: {:?}", self.settings.update_interval());
            info!("  Timezone: '{}'", self.settings.timezone);
            if self.failed {
                error!("Communication with RX8025 failed!");
            }
        }

        /// Read the device and, if its time can be trusted, set the host clock.
        ///
        /// Returns the committed epoch timestamp.
        pub fn sync_from_device(&mut self) -> Result<i64, SyncError> {
            self.ensure_running()?;
            self.read_bank()?;

            let status = self.rtc.status();
            match status.trust() {
                Trust::Untrusted => {
                    warn!("RTC halted, not syncing to system clock.");
                    return Err(SyncError::UntrustworthyRegisterState {
                        power_on_reset: status.power_on_reset,
                        oscillator_stopped: status.oscillator_stopped,
                    });
                }
                Trust::LowVoltage => warn!("RTC battery low but continuing sync."),
                Trust::Trusted => {}
            }

            let rtc_time = CalendarTime::from_bank(self.rtc.bank());
            let timestamp = match rtc_time.timestamp() {
                Ok(timestamp) => timestamp,
                Err(_) => {
                    error!("Invalid RTC time {}, not syncing to system clock.", rtc_time);
                    return Err(SyncError::InvalidCalendarTime);
                }
            };
            self.host.commit_epoch(timestamp);
            info!("Synchronized system clock to RTC time {} UTC", rtc_time);
            Ok(timestamp)
        }

        /// Write the host's current UTC time to the device.
        pub fn sync_to_device(&mut self) -> Result<CalendarTime, SyncError> {
            self.ensure_running()?;

            let now = match self.host.now_utc() {
                Some(now) => CalendarTime::from_datetime(&now),
                None => {
                    error!("Invalid system time, not syncing to RTC.");
                    return Err(SyncError::HostClockUnavailable);
                }
            };
            if !now.is_valid() {
                error!("Invalid system time {}, not syncing to RTC.", now);
                return Err(SyncError::InvalidCalendarTime);
            }

            self.rtc.set_calendar_time(&now).map_err(|err| {
                error!("Can't write I2C data.");
                SyncError::Transport(err)
            })?;
            debug!("Write {}", self.rtc.bank());
            Ok(now)
        }

        pub fn is_failed(&self) -> bool {
            self.failed
        }

        pub fn bank(&self) -> &RegisterBank {
            self.rtc.bank()
        }

        pub fn settings(&self) -> &RtcSettings {
            &self.settings
        }

        pub fn host(&self) -> &H {
            &self.host
        }

        pub fn destroy(self) -> (Rx8025<I2C>, H) {
            (self.rtc, self.host)
        }

        fn ensure_running(&self) -> Result<(), SyncError> {
            if self.failed {
                return Err(SyncError::Failed);
            }
            Ok(())
        }

        fn read_bank(&mut self) -> Result<(), SyncError> {
            match self.rtc.read_registers() {
                Ok(bank) => {
                    debug!("Read {}", bank);
                    Ok(())
                }
                Err(err) => {
                    error!("Can't read I2C data.");
                    Err(SyncError::Transport(err))
                }
            }
        }
    }
}

pub mod error;
pub mod host;
pub mod settings;

pub use clock::ClockSync;
pub use error::SyncError;
pub use host::HostClock;
pub use settings::RtcSettings;
