// src/lib.rs

pub mod cli;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod geometry;

pub use emitter::{emit, EmitFormat};
pub use error::{Error, Result};
pub use generator::{generate, Orientation, RoundingMode, VertexGenerator, RADIUS_FACTOR};
pub use geometry::{Vertex, VertexList};
