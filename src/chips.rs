use std::{
    fs::File,
    io::{self, prelude::*},
    path::Path,
};

use log::debug;

use crate::error::LoadError;

/// Read a fixed, ordered set of chip dumps from `dir`.
///
/// Each file must be exactly `LEN` bytes. Loading stops at the first file
/// that's missing or the wrong size.
pub fn load<const N: usize, const LEN: usize>(
    dir: impl AsRef<Path>,
    names: &[&str; N],
) -> Result<[[u8; LEN]; N], LoadError> {
    let dir = dir.as_ref();

    let mut chips = [[0; LEN]; N];
    for (chip, name) in chips.iter_mut().zip(names) {
        *chip = load_chip(dir, name)?;
    }
    Ok(chips)
}

fn load_chip<const LEN: usize>(dir: &Path, name: &str) -> Result<[u8; LEN], LoadError> {
    // `join` drops a trailing separator on `dir`, so "roms/" and "roms" agree.
    let path = dir.join(name);

    let mut file = match File::open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::MissingFile { path });
        }
        Err(source) => return Err(LoadError::Io { path, source }),
    };

    // Size is checked before reading, so a huge file or a device node is
    // rejected without being pulled into memory.
    let actual = match file.metadata() {
        Ok(metadata) => metadata.len(),
        Err(source) => return Err(LoadError::Io { path, source }),
    };
    if actual != LEN as u64 {
        return Err(LoadError::LengthMismatch {
            path,
            expected: LEN,
            actual: usize::try_from(actual).unwrap_or(usize::MAX),
        });
    }

    let mut chip = [0; LEN];
    if let Err(source) = file.read_exact(&mut chip) {
        return Err(LoadError::Io { path, source });
    }

    debug!("loaded {} ({actual} bytes)", path.display());
    Ok(chip)
}
