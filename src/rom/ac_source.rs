//! AC-source table: a single 256x4 chip.

use std::path::Path;

use super::Rom;
use crate::{chips, error::LoadError, mapping};

pub const CHIPS: [&str; 1] = ["ACSOURCE.NEW"];

pub const CHIP_LEN: usize = 256;

/// Number of logical entries. Only the low nibble of each is meaningful.
pub const LEN: usize = 256;

pub struct AcSourceRom;

impl Rom for AcSourceRom {
    const ARRAY_NAME: &'static str = "ACSROM";

    type Word = u8;

    fn transcode(dir: &Path) -> Result<Vec<u8>, LoadError> {
        let chips = chips::load(dir, &CHIPS)?;
        Ok(merge(&chips).to_vec())
    }
}

pub fn merge(chips: &[[u8; CHIP_LEN]; 1]) -> [u8; LEN] {
    let [chip] = chips;
    std::array::from_fn(|addr| {
        let byte = chip[mapping::ac_source_address(addr as u8) as usize];
        // Reverse, then invert; keep that order.
        !mapping::nibble(byte) & 0xf
    })
}
