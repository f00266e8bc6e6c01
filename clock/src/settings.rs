use rx8025::VoltageThreshold;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtcSettings {
    /// Selects the 1.3 V power drop threshold instead of 2.1 V.
    #[serde(default)]
    pub low_voltage_threshold: bool,
    /// Display label only, never applied to the time.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_update_interval")]
    pub update_interval_secs: u64,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_update_interval() -> u64 {
    900
}

impl Default for RtcSettings {
    fn default() -> Self {
        RtcSettings {
            low_voltage_threshold: false,
            timezone: default_timezone(),
            update_interval_secs: default_update_interval(),
        }
    }
}

impl RtcSettings {
    pub fn voltage_threshold(&self) -> VoltageThreshold {
        VoltageThreshold::from_select_bit(self.low_voltage_threshold)
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(self.update_interval_secs)
    }
}
