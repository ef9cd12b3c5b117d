//! Driver configuration that is fixed once `BrailleDisplay::init` runs.

/// Default time the latch line is held high so the register commits the shifted bits. Measured as
/// sufficient on 74HC595 chains; the chips themselves need far less.
pub const DEFAULT_LATCH_SETTLE_US: u16 = 10;

/// A configuration for the display. Builder methods override the defaults; a plain
/// `Config::new()` matches the reference wiring.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub(crate) latch_settle_us: u16,
}

impl Config {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Config {
            latch_settle_us: DEFAULT_LATCH_SETTLE_US,
        }
    }

    /// Extend this `Config` to hold the latch line high for `us` microseconds on each flush.
    pub fn latch_settle_us(self, us: u16) -> Self {
        Self {
            latch_settle_us: us,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
