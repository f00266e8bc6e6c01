use thiserror::Error;

/// Why a sync attempt did not take effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The whole-bank transfer did not complete.
    #[error("RTC bus transfer failed: {0:?}")]
    Transport(rx8025::Error),

    /// Power-on reset or oscillator stop flagged; the registers hold no usable time.
    #[error(
        "RTC halted (power-on reset: {power_on_reset}, oscillator stopped: {oscillator_stopped})"
    )]
    UntrustworthyRegisterState {
        power_on_reset: bool,
        oscillator_stopped: bool,
    },

    /// Calendar fields out of range or inconsistent.
    #[error("invalid calendar time")]
    InvalidCalendarTime,

    /// The host has no valid time to push.
    #[error("host clock has no valid time")]
    HostClockUnavailable,

    /// Setup could not reach the device; the component is disabled.
    #[error("RTC component failed during setup")]
    Failed,
}
