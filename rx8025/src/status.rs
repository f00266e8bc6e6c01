//! Device status flags and the read gating policy

use core::fmt;

use crate::registers::{Field, RegisterBank};

/// Power drop detection threshold (VDSL bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoltageThreshold {
    /// 2.1 V (default, VDSL = 0)
    #[default]
    High2V1,
    /// 1.3 V (VDSL = 1)
    Low1V3,
}

impl VoltageThreshold {
    pub fn from_select_bit(vdsl: bool) -> Self {
        if vdsl {
            VoltageThreshold::Low1V3
        } else {
            VoltageThreshold::High2V1
        }
    }

    pub fn select_bit(self) -> bool {
        self == VoltageThreshold::Low1V3
    }
}

impl fmt::Display for VoltageThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoltageThreshold::High2V1 => f.write_str("2.1V"),
            VoltageThreshold::Low1V3 => f.write_str("1.3V"),
        }
    }
}

/// How far a register snapshot can be trusted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trust {
    /// Oscillator running, no reset, supply fine.
    Trusted,
    /// Time is kept but the supply dipped below the threshold.
    LowVoltage,
    /// Power-on reset or oscillator stop: the time registers are meaningless.
    Untrusted,
}

/// Interpreted control 1 / control 2 flags of one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub power_on_reset: bool,
    pub oscillator_stopped: bool,
    pub voltage_dropped: bool,
    pub twenty_four_hour: bool,
    pub threshold: VoltageThreshold,
}

impl Status {
    pub fn from_bank(bank: &RegisterBank) -> Self {
        Status {
            power_on_reset: bank.flag(Field::PowerOnReset),
            oscillator_stopped: !bank.flag(Field::OscillatorRunning),
            voltage_dropped: bank.flag(Field::VoltageDrop),
            twenty_four_hour: bank.flag(Field::TwentyFourHour),
            threshold: VoltageThreshold::from_select_bit(bank.flag(Field::VoltageSelect)),
        }
    }

    pub fn trust(&self) -> Trust {
        match (
            self.power_on_reset,
            self.oscillator_stopped,
            self.voltage_dropped,
        ) {
            (true, _, _) | (_, true, _) => Trust::Untrusted,
            (false, false, true) => Trust::LowVoltage,
            (false, false, false) => Trust::Trusted,
        }
    }
}
