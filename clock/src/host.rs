//! Host clock boundary

use chrono::NaiveDateTime;

/// The software clock the RTC is kept in step with.
pub trait HostClock {
    /// Current UTC time, or `None` while the host has never been set.
    fn now_utc(&self) -> Option<NaiveDateTime>;

    /// Set the host clock to `timestamp` seconds since the Unix epoch.
    fn commit_epoch(&mut self, timestamp: i64);
}
