//! Host clock double

use chrono::NaiveDateTime;
use clock::HostClock;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct HostState {
    now: Option<NaiveDateTime>,
    committed: Vec<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeHost {
    state: Rc<RefCell<HostState>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_now(&self, now: Option<NaiveDateTime>) {
        self.state.borrow_mut().now = now;
    }

    /// Every timestamp committed so far, oldest first.
    pub fn committed(&self) -> Vec<i64> {
        self.state.borrow().committed.clone()
    }
}

impl HostClock for FakeHost {
    fn now_utc(&self) -> Option<NaiveDateTime> {
        self.state.borrow().now
    }

    fn commit_epoch(&mut self, timestamp: i64) {
        self.state.borrow_mut().committed.push(timestamp);
    }
}
