use std::fmt::LowerHex;

/// An unsigned word that's printed as a fixed number of hex digits.
pub trait HexWord: Copy + LowerHex {
    /// Digits per word, not counting the `0x` prefix.
    const DIGITS: usize;

    /// Rust type name, for emitting typed array declarations.
    const TYPE_NAME: &'static str;
}

impl HexWord for u8 {
    const DIGITS: usize = 2;
    const TYPE_NAME: &'static str = "u8";
}

impl HexWord for u16 {
    const DIGITS: usize = 4;
    const TYPE_NAME: &'static str = "u16";
}

impl HexWord for u32 {
    const DIGITS: usize = 8;
    const TYPE_NAME: &'static str = "u32";
}

/// `0x` prefix, lowercase, zero-padded to the word's full width.
pub fn encode<W: HexWord>(word: W) -> String {
    format!("{word:#0width$x}", width = W::DIGITS + 2)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0x00, "0x00")]
    #[test_case(0x0f, "0x0f")]
    #[test_case(0xab, "0xab")]
    fn byte(b: u8, expected: &str) {
        assert_eq!(encode(b), expected);
    }

    #[test_case(0x0000, "0x0000")]
    #[test_case(0x00ff, "0x00ff")]
    #[test_case(0xbeef, "0xbeef")]
    fn half_word(w: u16, expected: &str) {
        assert_eq!(encode(w), expected);
    }

    #[test_case(0x0000_0000, "0x00000000")]
    #[test_case(0xfff7_7bff, "0xfff77bff")]
    #[test_case(0x0000_1234, "0x00001234")]
    fn word(w: u32, expected: &str) {
        assert_eq!(encode(w), expected);
    }
}
