//! Bit-level corrections between the physical ROM dumps and the logical
//! layout the Alto's control logic expects.
//!
//! The chips on the Alto II boards aren't wired in any sensible order: address
//! lines are shuffled or inverted, data nibbles come out backwards, and some
//! microcode fields are active-low. Each function here undoes one of those
//! wiring quirks.

/// Output bit position for each constant-store address line. Address bit `i`
/// is wired to chip pin `CONSTANT_ADDRESS_LINES[i]`.
pub const CONSTANT_ADDRESS_LINES: [u8; 8] = [7, 2, 1, 0, 3, 4, 5, 6];

/// Microcode word bits that are active-low on the board.
pub const MICROCODE_INVERTED_BITS: u32 = 0xfff7_7bff;

const MICROCODE_ADDRESS_MASK: u16 = 0x3ff;

/// Map a logical constant-store address to the byte offset within a `C*` dump.
pub fn constant_address(addr: u8) -> u8 {
    let mut out = 0;
    for (i, &line) in CONSTANT_ADDRESS_LINES.iter().enumerate() {
        if addr & 1 << i != 0 {
            out |= 1 << line;
        }
    }
    out
}

/// The 10 microcode address lines are all inverted.
pub fn microcode_address(addr: u16) -> u16 {
    debug_assert!(addr <= MICROCODE_ADDRESS_MASK, "${addr:04x}");
    !addr & MICROCODE_ADDRESS_MASK
}

/// Reverse the bit order of a byte, then invert it.
pub fn ac_source_address(value: u8) -> u8 {
    !value.reverse_bits()
}

/// Reverse the bit order of the low nibble. The high nibble is ignored.
pub fn nibble(value: u8) -> u8 {
    (value & 0xf).reverse_bits() >> 4
}

/// Invert the active-low fields of a microcode word, leaving the rest alone.
pub fn microcode_word(word: u32) -> u32 {
    word ^ MICROCODE_INVERTED_BITS
}
