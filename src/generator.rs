// src/generator.rs

use std::f64::consts::TAU;

use glam::DVec2;
use log::debug;

use crate::error::{Error, Result};
use crate::geometry::{Vertex, VertexList};

/// Fraction of the canvas the polygon's circumscribed circle spans.
pub const RADIUS_FACTOR: f64 = 0.9;

/// Which way the polygon faces on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// First vertex on the right of the center, `x = c + r·cos θ`.
    #[default]
    Base,
    /// Reflected across the vertical center line, `x = c - r·cos θ`.
    Mirrored,
}

/// How unrounded coordinates snap to the integer grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum RoundingMode {
    /// Ties go to the even neighbour (banker's rounding).
    #[default]
    HalfEven,
    /// Ties go away from zero.
    #[value(name = "half-away")]
    HalfAwayFromZero,
}

impl RoundingMode {
    #[inline(always)]
    fn apply(self, value: f64) -> i64 {
        let rounded = match self {
            RoundingMode::HalfEven => value.round_ties_even(),
            RoundingMode::HalfAwayFromZero => value.round(),
        };
        rounded as i64
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VertexGenerator {
    orientation: Orientation,
    rounding: RoundingMode,
}

impl VertexGenerator {
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation, rounding: RoundingMode::default() }
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Vertices of a regular `n`-gon inscribed in a `size` × `size` canvas.
    ///
    /// The circumscribed circle is centered on the canvas with radius
    /// `RADIUS_FACTOR * size / 2`, and vertex `i` sits at angle `i * 2π / n`.
    /// Negative or fractional sizes are accepted and follow the arithmetic.
    pub fn generate(&self, n: usize, size: f64) -> Result<VertexList> {
        if n == 0 {
            return Err(Error::DegenerateInput(0));
        }
        if !size.is_finite() {
            return Err(Error::InvalidArgument(format!("canvas size must be finite, got {size}")));
        }

        let radius = size * RADIUS_FACTOR / 2.0;
        let center = DVec2::splat(size / 2.0);
        debug!(
            "generating {n} vertices: size={size}, radius={radius}, orientation={:?}, rounding={:?}",
            self.orientation, self.rounding
        );

        let mut vertices = Vec::new();
        vertices
            .try_reserve_exact(n)
            .map_err(|e| Error::InvalidArgument(format!("cannot hold {n} vertices: {e}")))?;
        for i in 0..n {
            let angle = (i as f64) * TAU / (n as f64);
            let mut offset = DVec2::from_angle(angle) * radius;
            if self.orientation == Orientation::Mirrored {
                offset.x = -offset.x;
            }
            let point = center + offset;

            vertices.push(Vertex::new(self.rounding.apply(point.x), self.rounding.apply(point.y)));
        }

        Ok(VertexList::from_vertices(vertices))
    }
}

/// Base orientation with half-to-even rounding.
pub fn generate(n: usize, size: f64) -> Result<VertexList> {
    VertexGenerator::default().generate(n, size)
}
