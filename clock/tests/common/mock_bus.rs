//! In-memory RX8025 register file behind the `embedded-hal` I²C trait

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use rx8025::BANK_LEN;
use std::cell::RefCell;
use std::rc::Rc;

/// Records transfers seen on the bus
#[derive(Debug, Clone, PartialEq)]
pub enum Transfer {
    /// Read of `len` bytes
    Read { address: u8, len: usize },
    /// Write of `bytes`, pointer byte included
    Write { address: u8, bytes: Vec<u8> },
}

#[derive(Debug, Default)]
struct MockState {
    registers: [u8; BANK_LEN],
    transfers: Vec<Transfer>,
    fail_next_read: bool,
    fail_next_write: bool,
}

/// Cloneable handle; the driver owns one clone, the test keeps another.
#[derive(Debug, Clone, Default)]
pub struct MockBus {
    state: Rc<RefCell<MockState>>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_registers(&self, registers: [u8; BANK_LEN]) {
        self.state.borrow_mut().registers = registers;
    }

    pub fn registers(&self) -> [u8; BANK_LEN] {
        self.state.borrow().registers
    }

    pub fn transfers(&self) -> Vec<Transfer> {
        self.state.borrow().transfers.clone()
    }

    pub fn clear_transfers(&self) {
        self.state.borrow_mut().transfers.clear();
    }

    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }
}

impl ErrorType for MockBus {
    type Error = ErrorKind;
}

impl I2c for MockBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        let reads = operations
            .iter()
            .any(|op| matches!(op, Operation::Read(_)));
        if reads && state.fail_next_read {
            state.fail_next_read = false;
            return Err(ErrorKind::NoAcknowledge(
                embedded_hal::i2c::NoAcknowledgeSource::Address,
            ));
        }
        if !reads && state.fail_next_write {
            state.fail_next_write = false;
            return Err(ErrorKind::ArbitrationLoss);
        }

        let mut cursor = 0usize;
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    let (pointer, data) = bytes.split_first().expect("empty write");
                    cursor = usize::from(pointer >> 4);
                    for b in data {
                        state.registers[cursor % BANK_LEN] = *b;
                        cursor += 1;
                    }
                    if !reads {
                        state.transfers.push(Transfer::Write {
                            address,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                Operation::Read(buf) => {
                    for b in buf.iter_mut() {
                        *b = state.registers[cursor % BANK_LEN];
                        cursor += 1;
                    }
                    state.transfers.push(Transfer::Read {
                        address,
                        len: buf.len(),
                    });
                }
            }
        }
        Ok(())
    }
}
