//! I2C slave bus handler
//!
//! Entry points for the transport's receive and request interrupts. A write
//! transaction starts with a register address, which is latched for later
//! reads. Only a transaction of exactly two bytes (address, value) stores
//! anything; longer ones latch the address and have the rest drained.
//!
//! Both callbacks may preempt the render loop at any point and only ever
//! touch single bytes.

use core::sync::atomic::{AtomicU8, Ordering};

use heapless::Vec;

use crate::registers::RegisterBank;

/// 7-bit slave address of the controller
pub const I2C_ADDRESS: u8 = 0x55;

/// Bytes of a write transaction that carry meaning
const WRITE_LEN: usize = 2;

/// Outcome of a receive transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Received {
    /// Nothing was received
    Empty,
    /// Only the read address was latched
    Latched { address: u8, drained: usize },
    /// A register write was applied
    Written { address: u8, value: u8 },
}

/// Bus side of the register bank
#[derive(Debug)]
pub struct BusHandler<'a> {
    registers: &'a RegisterBank,
    latched: AtomicU8,
}

impl<'a> BusHandler<'a> {
    pub const fn new(registers: &'a RegisterBank) -> Self {
        Self {
            registers,
            latched: AtomicU8::new(0),
        }
    }

    /// Handle a write transaction delivered as one buffer
    pub fn on_receive(&self, data: &[u8]) -> Received {
        self.on_receive_bytes(data.iter().copied())
    }

    /// Handle a write transaction delivered byte by byte
    ///
    /// Consumes the whole iterator; bytes past the second are discarded.
    pub fn on_receive_bytes<I: IntoIterator<Item = u8>>(&self, bytes: I) -> Received {
        let mut head: Vec<u8, WRITE_LEN> = Vec::new();
        let mut drained = 0usize;
        for byte in bytes {
            if head.push(byte).is_err() {
                drained = drained.saturating_add(1);
            }
        }

        match (head.as_slice(), drained) {
            (&[], _) => Received::Empty,
            (&[address, value], 0) => {
                self.latched.store(address, Ordering::Relaxed);
                self.registers.write(address, value);
                Received::Written { address, value }
            }
            (&[address, ..], _) => {
                self.latched.store(address, Ordering::Relaxed);
                Received::Latched {
                    address,
                    drained: drained + head.len() - 1,
                }
            }
        }
    }

    /// Handle a read request: the byte at the latched address
    pub fn on_request(&self) -> u8 {
        self.registers.read(self.latched())
    }

    /// Address used by the next read
    pub fn latched(&self) -> u8 {
        self.latched.load(Ordering::Relaxed)
    }
}
