//! Transcode raw Xerox Alto II ROM dumps into arrays of logical words.

pub mod chips;
pub mod emit;
pub mod error;
pub mod hex;
pub mod mapping;
pub mod rom;

pub use emit::Format;
pub use error::LoadError;
pub use rom::{Rom, RomKind};
