use clap::ValueEnum;
use itertools::Itertools;

use crate::hex::{self, HexWord};

const WORDS_PER_LINE: usize = 8;

/// Source syntax for the emitted array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `var NAME = [...];`
    #[default]
    Js,
    /// `pub const NAME: [T; LEN] = [...];`
    Rust,
}

/// Render `words` as an array-literal statement named `name`.
///
/// Eight words per line, comma separated. Each word is printed at its full
/// width in hex, so the output only depends on the inputs.
pub fn array_literal<W: HexWord>(name: &str, words: &[W], format: Format) -> String {
    let mut lines = words
        .chunks(WORDS_PER_LINE)
        .map(|line| line.iter().copied().map(hex::encode).join(", "));

    match format {
        Format::Js => {
            // Continuation lines line up with the first element.
            let open = format!("var {name} = [");
            let indent = " ".repeat(open.len());
            let body = lines.join(&format!(",\n{indent}"));
            format!("{open}{body}];\n")
        }
        Format::Rust => {
            let mut out = format!(
                "pub const {name}: [{}; {}] = [\n",
                W::TYPE_NAME,
                words.len()
            );
            for line in lines {
                out.push_str("    ");
                out.push_str(&line);
                out.push_str(",\n");
            }
            out.push_str("];\n");
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_short() {
        let out = array_literal("ACSROM", &[0x1_u8, 0x2, 0xf], Format::Js);
        assert_eq!(out, "var ACSROM = [0x01, 0x02, 0x0f];\n");
    }

    #[test]
    fn js_wraps_after_eight() {
        let words: Vec<u16> = (0..10).collect();
        let out = array_literal("CROM", &words, Format::Js);
        let expected = "\
var CROM = [0x0000, 0x0001, 0x0002, 0x0003, 0x0004, 0x0005, 0x0006, 0x0007,
            0x0008, 0x0009];
";
        assert_eq!(out, expected);
    }

    #[test]
    fn js_indent_follows_name() {
        let words = [0xff_u8; 9];
        let out = array_literal("ACSROM", &words, Format::Js);
        let (_, second) = out.split_once('\n').unwrap();
        assert_eq!(second, "              0xff];\n");
    }

    #[test]
    fn js_exactly_one_line() {
        let words = [0_u32; 8];
        let out = array_literal("UROM", &words, Format::Js);
        assert_eq!(out.lines().count(), 1);
        assert!(out.ends_with("0x00000000];\n"));
    }

    #[test]
    fn rust_short() {
        let out = array_literal("UROM", &[1_u32, 2, 0xfff7_7bff], Format::Rust);
        let expected = "\
pub const UROM: [u32; 3] = [
    0x00000001, 0x00000002, 0xfff77bff,
];
";
        assert_eq!(out, expected);
    }

    #[test]
    fn rust_wraps_after_eight() {
        let words: Vec<u8> = (0..10).collect();
        let out = array_literal("ACSROM", &words, Format::Rust);
        let expected = "\
pub const ACSROM: [u8; 10] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
    0x08, 0x09,
];
";
        assert_eq!(out, expected);
    }

    #[test]
    fn empty() {
        assert_eq!(array_literal::<u16>("CROM", &[], Format::Js), "var CROM = [];\n");
        assert_eq!(
            array_literal::<u16>("CROM", &[], Format::Rust),
            "pub const CROM: [u16; 0] = [\n];\n"
        );
    }

    #[test]
    fn deterministic() {
        let words: Vec<u16> = (0..256).map(|i| i * 257).collect();
        let a = array_literal("CROM", &words, Format::Js);
        let b = array_literal("CROM", &words, Format::Js);
        assert_eq!(a, b);
        assert_eq!(a.lines().count(), 32);
    }
}
