//! Driver library for refreshable braille display cells driven through a daisy-chained shift
//! register (74HC595 or similar).
//!
//! Each cell has six actuated dots. The driver keeps one byte of desired dot state per cell in an
//! owned buffer, and serializes the whole buffer to the register chain over three digital lines
//! (data, clock, latch) when asked to flush. Mutation is purely in-memory; nothing reaches the
//! hardware until [`display::BrailleDisplay::flush`] runs.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod cell;
pub mod config;
pub mod display;
pub mod interface;

// Re-exports for primary API.
pub use cell::{DOTS_PER_CELL, DOT_MASK};
pub use config::Config;
pub use display::BrailleDisplay;
pub use interface::gpio::GpioInterface;
