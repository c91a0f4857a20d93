//! Microcode store: 2K of 32-bit microinstructions, built from sixteen 1Kx4
//! chips. Eight chips make up each 1K half, one nibble per chip.

use std::path::Path;

use super::Rom;
use crate::{chips, error::LoadError, mapping};

/// Low 1K first, then the high 1K (Mesa 5.0). Within each half, most
/// significant nibble first.
#[rustfmt::skip]
pub const CHIPS: [&str; 16] = [
    "U55", "U64", "U65", "U63", "U53", "U60", "U61", "U62",
    "U54", "U74", "U75", "U73", "U52", "U70", "U71", "U72",
];

pub const CHIP_LEN: usize = 1024;

/// Number of logical words.
pub const LEN: usize = 2048;

const CHIPS_PER_HALF: usize = 8;

pub struct MicrocodeRom;

impl Rom for MicrocodeRom {
    const ARRAY_NAME: &'static str = "UROM";

    type Word = u32;

    fn transcode(dir: &Path) -> Result<Vec<u32>, LoadError> {
        let chips = chips::load(dir, &CHIPS)?;
        Ok(merge(&chips).to_vec())
    }
}

pub fn merge(chips: &[[u8; CHIP_LEN]; 16]) -> [u32; LEN] {
    let mut rom = [0_u32; LEN];

    let halves = rom
        .chunks_exact_mut(CHIP_LEN)
        .zip(chips.chunks_exact(CHIPS_PER_HALF));
    for (words, half_chips) in halves {
        for (c, chip) in half_chips.iter().enumerate() {
            let shift = 28 - 4 * c;
            for (addr, word) in words.iter_mut().enumerate() {
                let byte = chip[mapping::microcode_address(addr as u16) as usize];
                *word |= u32::from(byte & 0xf) << shift;
            }
        }
    }

    rom.map(mapping::microcode_word)
}
