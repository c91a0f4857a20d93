pub mod ac_source;
pub mod constant;
pub mod microcode;

use std::{fmt, path::Path};

use log::info;

use crate::{
    emit::{self, Format},
    error::LoadError,
    hex::HexWord,
};

pub use ac_source::AcSourceRom;
pub use constant::ConstantRom;
pub use microcode::MicrocodeRom;

/// One of the Alto's ROMs: a fixed set of chip dumps that merge into a single
/// array of logical words.
pub trait Rom {
    /// Name of the emitted array.
    const ARRAY_NAME: &'static str;

    type Word: HexWord;

    /// Load this ROM's chips from `dir` and merge them.
    fn transcode(dir: &Path) -> Result<Vec<Self::Word>, LoadError>;
}

/// Selects which ROM to transcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomKind {
    Constant,
    Microcode,
    AcSource,
}

impl RomKind {
    /// Run the whole pipeline for this ROM, returning the emitted array.
    pub fn render(self, dir: &Path, format: Format) -> Result<String, LoadError> {
        match self {
            RomKind::Constant => render::<ConstantRom>(dir, format),
            RomKind::Microcode => render::<MicrocodeRom>(dir, format),
            RomKind::AcSource => render::<AcSourceRom>(dir, format),
        }
    }
}

impl fmt::Display for RomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RomKind::Constant => "constant",
            RomKind::Microcode => "microcode",
            RomKind::AcSource => "AC source",
        };
        f.write_str(s)
    }
}

fn render<R: Rom>(dir: &Path, format: Format) -> Result<String, LoadError> {
    let words = R::transcode(dir)?;
    info!("merged {} words into {}", words.len(), R::ARRAY_NAME);
    Ok(emit::array_literal(R::ARRAY_NAME, &words, format))
}
