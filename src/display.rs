//! The driver proper. It owns one byte of dot state per cell and an interface to the register
//! chain, and provides dot-level mutation plus an explicit flush that serializes the whole buffer
//! to the hardware.

use crate::cell;
use crate::config::{Config, DEFAULT_LATCH_SETTLE_US};
use crate::interface;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// The driver for a chain of braille cells.
///
/// All mutation methods work on the in-memory buffer only; call [`BrailleDisplay::flush`] after a
/// batch of mutations to make the hardware match. There is no dirty tracking and no feedback
/// channel from the chain, so a flush is unconditional and cannot report actuator faults.
pub struct BrailleDisplay<CI>
where
    CI: interface::ChainInterface,
{
    iface: CI,
    cells: Vec<u8>,
    latch_settle_us: u16,
}

impl<CI> BrailleDisplay<CI>
where
    CI: interface::ChainInterface,
{
    /// Construct a new driver for a chain of `module_count` cells, all dots lowered. The buffer
    /// never changes size after this.
    pub fn new(iface: CI, module_count: usize) -> Self {
        BrailleDisplay {
            iface,
            cells: vec![0; module_count],
            latch_settle_us: DEFAULT_LATCH_SETTLE_US,
        }
    }

    /// Number of cells in the chain.
    pub fn module_count(&self) -> usize {
        self.cells.len()
    }

    /// Initialize the chain: drive all three lines to their idle low level, clear the buffer, and
    /// flush once so the hardware starts with every dot lowered. Safe to call again at any time;
    /// it always lands in the same state.
    pub fn init(&mut self, config: Config) -> Result<(), ()> {
        self.latch_settle_us = config.latch_settle_us;
        self.iface.reset_lines()?;
        self.clear_all();
        self.flush()
    }

    /// Lower every dot of every cell in the buffer. Does not touch the hardware.
    pub fn clear_all(&mut self) {
        for c in self.cells.iter_mut() {
            *c = 0;
        }
    }

    /// Raise dot `dot` (0..=5) of cell `module` in the buffer. Out-of-range indices are ignored;
    /// content code may sweep coordinates past the edge of the chain without guarding.
    pub fn set_dot(&mut self, module: usize, dot: u8) {
        if let (Some(c), Some(bit)) = (self.cells.get_mut(module), cell::dot_bit(dot)) {
            *c |= bit;
        }
    }

    /// Lower dot `dot` (0..=5) of cell `module` in the buffer. Same range policy as
    /// [`BrailleDisplay::set_dot`].
    pub fn clear_dot(&mut self, module: usize, dot: u8) {
        if let (Some(c), Some(bit)) = (self.cells.get_mut(module), cell::dot_bit(dot)) {
            *c &= !bit;
        }
    }

    /// Serialize the whole buffer to the register chain and latch it onto the actuators.
    ///
    /// The last cell's byte is shifted first so that by the end of shifting it has propagated to
    /// the far end of the chain, leaving cell 0 on the register nearest the data input. Each byte
    /// goes out LSB-first; this, like the dot-to-bit mapping in [`cell`], is fixed by the board
    /// wiring.
    pub fn flush(&mut self) -> Result<(), ()> {
        self.iface.write_latch(false)?;
        for &byte in self.cells.iter().rev() {
            for bit in 0..8 {
                self.iface.write_data(byte & (1 << bit) != 0)?;
                self.iface.pulse_clock()?;
            }
        }
        self.iface.write_latch(true)?;
        self.iface.delay_us(self.latch_settle_us);
        self.iface.write_latch(false)
    }
}
