// src/emitter.rs

use crate::error::{Error, Result};
use crate::geometry::VertexList;

pub const VERTICES_X_NAME: &str = "vertices_x";
pub const VERTICES_Y_NAME: &str = "vertices_y";
pub const POINTS_NAME: &str = "POINTS";

/// Source language of the emitted literals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum EmitFormat {
    /// Two WGSL `var` declarations of `u32` arrays, one per axis.
    #[default]
    Wgsl,
    /// A single Rust `const` table of `[x, y]` pairs.
    Rust,
}

fn unsigned(array: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| Error::NegativeCoordinate { array, value })
}

/// `    var <name> = array(<v0>u, <v1>u, ...);`
pub fn emit_array(name: &'static str, values: &[i64]) -> Result<String> {
    let literals = values
        .iter()
        .map(|&value| unsigned(name, value).map(|v| format!("{v}u")))
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("    var {name} = array({});", literals.join(", ")))
}

fn emit_wgsl(list: &VertexList) -> Result<String> {
    let xs = emit_array(VERTICES_X_NAME, &list.xs())?;
    let ys = emit_array(VERTICES_Y_NAME, &list.ys())?;
    Ok(format!("{xs}\n{ys}"))
}

fn emit_rust(list: &VertexList) -> Result<String> {
    let pairs = list
        .iter()
        .map(|v| -> Result<String> {
            Ok(format!("[{}, {}]", unsigned(POINTS_NAME, v.x)?, unsigned(POINTS_NAME, v.y)?))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("const {POINTS_NAME}: [[usize; 2]; {}] = [{}];", list.len(), pairs.join(", ")))
}

/// Renders `list` as array literals ready to paste into another program.
///
/// Every coordinate must be non-negative, since both formats declare unsigned
/// element types.
pub fn emit(list: &VertexList, format: EmitFormat) -> Result<String> {
    match format {
        EmitFormat::Wgsl => emit_wgsl(list),
        EmitFormat::Rust => emit_rust(list),
    }
}
