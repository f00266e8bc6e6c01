mod config;

use config::Config;

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
    use clock::{ClockSync, HostClock};
    use esp_idf_svc::{
        hal::{
            gpio::{PinDriver, Pull},
            i2c::{I2cConfig, I2cDriver},
            peripherals::Peripherals,
            prelude::*,
        },
        log::EspLogger,
        sys::{settimeofday, timeval},
    };
    use log::*;
    use rx8025::Rx8025;
    use std::thread;
    use std::time::{Duration, Instant, SystemTime};

    /// Host clock backed by the libc time of day.
    struct SystemClock;

    impl HostClock for SystemClock {
        fn now_utc(&self) -> Option<NaiveDateTime> {
            let now: DateTime<Utc> = SystemTime::now().into();
            // an unset clock starts at the epoch
            (now.year() >= i32::from(rx8025::MIN_YEAR)).then(|| now.naive_utc())
        }

        fn commit_epoch(&mut self, timestamp: i64) {
            let tv = timeval {
                tv_sec: timestamp as _,
                tv_usec: 0,
            };
            let rc = unsafe { settimeofday(&tv, core::ptr::null()) };
            if rc != 0 {
                error!("settimeofday failed ({})", rc);
            }
        }
    }

    // Required for ESP-IDF patches
    esp_idf_svc::sys::link_patches();
    EspLogger::initialize_default();

    let config = Config::load()?;
    let peripherals = Peripherals::take()?;

    // I2C configuration
    let i2c_config = I2cConfig::new().baudrate(config.bus.baudrate_khz.kHz().into());
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio8,
        peripherals.pins.gpio9,
        &i2c_config,
    )?;

    // BOOT button pushes the system time to the RTC
    let mut boot = PinDriver::input(peripherals.pins.gpio0)?;
    boot.set_pull(Pull::Up)?;

    let mut rtc = ClockSync::new(
        Rx8025::with_address(i2c, config.bus.address),
        SystemClock,
        config.rtc.clone(),
    );
    rtc.dump_config();
    if rtc.setup().is_ok() {
        rtc.update();
    }

    let poll = config.rtc.update_interval();
    let mut last_poll = Instant::now();
    let mut was_pressed = false;
    loop {
        let pressed = boot.is_low();
        if pressed && !was_pressed {
            info!("Writing system time to RTC");
            if let Err(e) = rtc.sync_to_device() {
                warn!("RTC write skipped: {}", e);
            }
        }
        was_pressed = pressed;

        if last_poll.elapsed() >= poll {
            rtc.update();
            last_poll = Instant::now();
        }
        thread::sleep(Duration::from_millis(100));
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    anyhow::bail!(
        "rtc_sync drives the RX8025 at {:#04x} through the ESP-IDF I2C driver; build it for an espidf target",
        config.bus.address
    )
}
