//! Constant store: four 256x4 chips, one nibble of each 16-bit constant apiece.

use std::path::Path;

use super::Rom;
use crate::{chips, error::LoadError, mapping};

/// Most significant nibble first.
pub const CHIPS: [&str; 4] = ["C0", "C1", "C2", "C3"];

pub const CHIP_LEN: usize = 256;

/// Number of logical words.
pub const LEN: usize = 256;

pub struct ConstantRom;

impl Rom for ConstantRom {
    const ARRAY_NAME: &'static str = "CROM";

    type Word = u16;

    fn transcode(dir: &Path) -> Result<Vec<u16>, LoadError> {
        let chips = chips::load(dir, &CHIPS)?;
        Ok(merge(&chips).to_vec())
    }
}

pub fn merge(chips: &[[u8; CHIP_LEN]; 4]) -> [u16; LEN] {
    let mut rom = [0_u16; LEN];
    for (c, chip) in chips.iter().enumerate() {
        let shift = 12 - 4 * c;
        for (addr, word) in rom.iter_mut().enumerate() {
            let byte = chip[mapping::constant_address(addr as u8) as usize];
            *word |= u16::from(mapping::nibble(byte)) << shift;
        }
    }

    // The whole store is active-low.
    rom.map(|word| !word)
}
