use std::{
    io::{self, prelude::*},
    path::PathBuf,
};

use alto_romutil::{Format, RomKind};
use anyhow::{bail, Context as _, Result};
use clap::{ArgGroup, Parser};

/// Translate raw Alto II ROM dumps into array literals.
#[derive(Parser)]
#[command(arg_required_else_help = true)]
#[command(group(ArgGroup::new("rom").required(true).args(["constant", "ac_source", "microcode"])))]
struct Args {
    /// Constant ROM directory (C0..C3).
    #[arg(short = 'c', long, value_name = "DIR")]
    constant: Option<PathBuf>,

    /// AC Source ROM directory (ACSOURCE.NEW).
    #[arg(short = 'a', long, value_name = "DIR")]
    ac_source: Option<PathBuf>,

    /// Microcode ROM directory (U52..U75).
    #[arg(short = 'u', long, value_name = "DIR")]
    microcode: Option<PathBuf>,

    /// Syntax of the emitted array.
    #[arg(long, value_enum, default_value_t = Format::Js)]
    format: Format,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let (kind, dir) = match (args.constant, args.ac_source, args.microcode) {
        (Some(dir), None, None) => (RomKind::Constant, dir),
        (None, Some(dir), None) => (RomKind::AcSource, dir),
        (None, None, Some(dir)) => (RomKind::Microcode, dir),
        _ => bail!("expected exactly one of -c, -a, -u"),
    };

    let text = kind
        .render(&dir, args.format)
        .with_context(|| format!("failed to transcode {kind} ROM from {}", dir.display()))?;

    io::stdout().write_all(text.as_bytes())?;

    Ok(())
}
