//! Shared mocks and helpers

pub mod fake_host;
pub mod mock_bus;

pub use fake_host::FakeHost;
pub use mock_bus::{MockBus, Transfer};
pub use test_utils::{create_sync, datetime, time_bank, CONTROL2_RUNNING};
