//! Host to device synchronization

use crate::common::{create_sync, datetime, time_bank, Transfer, CONTROL2_RUNNING};
use clock::{RtcSettings, SyncError};
use rx8025::{CalendarTime, Field, RegisterBank, BANK_LEN};

#[test]
fn writes_host_time_as_bcd() {
    let (mut sync, bus, host) = create_sync(RtcSettings::default());
    host.set_now(Some(datetime(2030, 1, 5, 9, 2, 7)));

    let written = sync.sync_to_device().unwrap();
    assert_eq!(written.to_string(), "2030-01-05 09:02:07");

    let bank = RegisterBank::from_raw(bus.registers());
    assert_eq!(bank.decode_field(Field::Second10), 0);
    assert_eq!(bank.decode_field(Field::Second), 7);
    assert_eq!(bank.decode_field(Field::Minute10), 0);
    assert_eq!(bank.decode_field(Field::Minute), 2);
    assert_eq!(bank.decode_field(Field::Hour10), 0);
    assert_eq!(bank.decode_field(Field::Hour), 9);
    assert_eq!(bank.decode_field(Field::Day10), 0);
    assert_eq!(bank.decode_field(Field::Day), 5);
    assert_eq!(bank.decode_field(Field::Month10), 0);
    assert_eq!(bank.decode_field(Field::Month), 1);
    assert_eq!(bank.decode_field(Field::Year10), 3);
    assert_eq!(bank.decode_field(Field::Year), 0);
    assert_eq!(bank.decode_field(Field::Weekday), 6);
    assert!(!bank.flag(Field::PowerOnReset));
    assert!(bank.flag(Field::OscillatorRunning));
    assert!(!bank.flag(Field::VoltageDrop));
    assert!(bank.flag(Field::TwentyFourHour));
}

#[test]
fn writes_whole_bank_in_one_transfer() {
    let (mut sync, bus, host) = create_sync(RtcSettings::default());
    host.set_now(Some(datetime(2030, 1, 5, 9, 2, 7)));

    sync.sync_to_device().unwrap();

    let transfers = bus.transfers();
    assert_eq!(transfers.len(), 1);
    match &transfers[0] {
        Transfer::Write { address, bytes } => {
            assert_eq!(*address, rx8025::DEVICE_ADDRESS);
            assert_eq!(bytes.len(), BANK_LEN + 1);
            assert_eq!(bytes[0], 0x00);
        }
        other => panic!("unexpected transfer {:?}", other),
    }
}

#[test]
fn write_clears_status_flags_from_any_prior_state() {
    let (mut sync, bus, host) = create_sync(RtcSettings::default());
    // everything set, 12-hour mode
    let mut raw = [0xFF; BANK_LEN];
    raw[0x0E] = 0b1101_1111;
    bus.set_registers(raw);
    sync.sync_from_device().unwrap_err();

    host.set_now(Some(datetime(2024, 2, 29, 23, 59, 59)));
    sync.sync_to_device().unwrap();

    let bank = RegisterBank::from_raw(bus.registers());
    assert!(bank.flag(Field::TwentyFourHour));
    assert!(!bank.flag(Field::PowerOnReset));
    assert!(bank.flag(Field::OscillatorRunning));
    assert!(!bank.flag(Field::VoltageDrop));
    assert!(!bank.flag(Field::VoltageSelect));
    assert!(!bank.flag(Field::ControlTest));
    assert!(!bank.flag(Field::OffsetTest));
    // alarm registers written back as read
    assert_eq!(&bus.registers()[0x08..0x0E], &[0xFF; 6]);
    assert_eq!(sync.bank(), &bank);
}

#[test]
fn configured_threshold_is_written() {
    let settings = RtcSettings {
        low_voltage_threshold: true,
        ..RtcSettings::default()
    };
    let (mut sync, bus, host) = create_sync(settings);
    host.set_now(Some(datetime(2024, 6, 23, 14, 30, 45)));

    sync.sync_to_device().unwrap();

    assert!(RegisterBank::from_raw(bus.registers()).flag(Field::VoltageSelect));
}

#[test]
fn unavailable_host_clock_touches_nothing() {
    let (mut sync, bus, host) = create_sync(RtcSettings::default());
    host.set_now(None);

    assert_eq!(sync.sync_to_device(), Err(SyncError::HostClockUnavailable));
    assert!(bus.transfers().is_empty());
}

#[test]
fn host_time_before_supported_span_is_rejected() {
    let (mut sync, bus, host) = create_sync(RtcSettings::default());
    host.set_now(Some(datetime(1970, 1, 1, 0, 0, 0)));

    assert_eq!(sync.sync_to_device(), Err(SyncError::InvalidCalendarTime));
    assert!(bus.transfers().is_empty());
}

#[test]
fn transport_failure_keeps_last_snapshot() {
    let (mut sync, bus, host) = create_sync(RtcSettings::default());
    bus.set_registers(time_bank(
        [0x45, 0x30, 0x14, 0x00, 0x23, 0x06, 0x24],
        CONTROL2_RUNNING,
    ));
    sync.sync_from_device().unwrap();
    let snapshot = *sync.bank();

    host.set_now(Some(datetime(2030, 1, 5, 9, 2, 7)));
    bus.fail_next_write();

    assert_eq!(sync.sync_to_device(), Err(SyncError::Transport(rx8025::Error::Comm)));
    assert_eq!(sync.bank(), &snapshot);
    assert_eq!(
        CalendarTime::from_bank(sync.bank()).to_string(),
        "2024-06-23 14:30:45"
    );
    assert!(!sync.is_failed());
}
