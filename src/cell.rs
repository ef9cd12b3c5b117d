//! The fixed wiring contract between a cell's dot indices and the bits shifted out to its
//! register. Dot `d` of a cell lives in bit `5 - d` of that cell's byte: dot 0 is the MSB of the
//! used range and dot 5 is the LSB. Bits 6 and 7 are not wired to anything and stay 0. This
//! mapping is a property of how the actuator drive lines are soldered to the register outputs,
//! not a software choice, so any replacement driver for the same boards must reproduce it.

/// Number of actuated dots in one braille cell.
pub const DOTS_PER_CELL: u8 = 6;

/// Mask of the bits in a cell byte that drive actuators.
pub const DOT_MASK: u8 = 0b0011_1111;

/// The single-bit mask for dot `dot` within a cell byte, or `None` when the index is outside the
/// cell.
pub(crate) fn dot_bit(dot: u8) -> Option<u8> {
    if dot < DOTS_PER_CELL {
        Some(1 << (DOTS_PER_CELL - 1 - dot))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_indices_map_msb_to_lsb() {
        assert_eq!(dot_bit(0), Some(0b10_0000));
        assert_eq!(dot_bit(1), Some(0b01_0000));
        assert_eq!(dot_bit(2), Some(0b00_1000));
        assert_eq!(dot_bit(3), Some(0b00_0100));
        assert_eq!(dot_bit(4), Some(0b00_0010));
        assert_eq!(dot_bit(5), Some(0b00_0001));
    }

    #[test]
    fn out_of_cell_indices_have_no_bit() {
        assert_eq!(dot_bit(6), None);
        assert_eq!(dot_bit(255), None);
    }

    #[test]
    fn all_dots_cover_exactly_the_used_mask() {
        let all = (0..DOTS_PER_CELL).fold(0, |acc, d| acc | dot_bit(d).unwrap());
        assert_eq!(all, DOT_MASK);
    }
}
