// src/cli.rs

use std::io::Write;

use clap::Parser;
use log::{debug, info};

use crate::emitter::{emit, EmitFormat};
use crate::error::{Error, Result};
use crate::generator::{Orientation, RoundingMode, VertexGenerator};

/// Vertices of a regular polygon inscribed in a square canvas
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, allow_negative_numbers = true)]
pub struct Args {
    /// Number of vertices
    pub n: i64,

    /// Side length of the square canvas
    pub size: i64,

    /// Reflect the polygon across the vertical center line
    #[arg(long)]
    pub mirrored: bool,

    /// Print array literals in this format instead of the plain vertex list
    #[arg(long, value_enum)]
    pub emit: Option<EmitFormat>,

    /// Tie-breaking rule when snapping coordinates to integers
    #[arg(long, value_enum, default_value_t = RoundingMode::HalfEven)]
    pub rounding: RoundingMode,
}

impl Args {
    pub fn generator(&self) -> VertexGenerator {
        let orientation = if self.mirrored { Orientation::Mirrored } else { Orientation::Base };
        VertexGenerator::new(orientation).with_rounding(self.rounding)
    }
}

/// Produces the text the binary prints for `args`.
pub fn render(args: &Args) -> Result<String> {
    let n = usize::try_from(args.n).map_err(|_| Error::DegenerateInput(args.n))?;
    let generator = args.generator();
    let list = generator.generate(n, args.size as f64)?;
    debug!("polygon area {}", list.area());

    match args.emit {
        Some(format) => {
            info!("emitting {} vertices as {format:?}", list.len());
            emit(&list, format)
        }
        None => Ok(list.to_string()),
    }
}

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Renders `args`, writes the text to `out` or an `error:` line to `err`,
/// and returns the process exit code. Argument errors never get this far:
/// clap exits with its own usage code (2).
pub fn run(args: &Args, out: &mut impl Write, err: &mut impl Write) -> u8 {
    let written = match render(args) {
        Ok(text) => writeln!(out, "{text}").map(|_| EXIT_SUCCESS),
        Err(e) => writeln!(err, "error: {e}").map(|_| EXIT_FAILURE),
    };
    written.unwrap_or(EXIT_FAILURE)
}
