use std::{fmt, io, path::PathBuf};

/// Errors that can occur when loading a chip set.
#[derive(Debug)]
pub enum LoadError {
    /// A chip file isn't in the directory.
    MissingFile { path: PathBuf },

    /// A chip file exists, but isn't the size of a dump from that chip.
    LengthMismatch {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    /// Any other I/O failure (permission denied, etc.)
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFile { path } => write!(f, "can't find ROM file {}", path.display()),
            Self::LengthMismatch {
                path,
                expected,
                actual,
            } => write!(
                f,
                "ROM file {} is {actual} bytes long, expected {expected}",
                path.display()
            ),
            Self::Io { path, .. } => write!(f, "failed to read {}", path.display()),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
