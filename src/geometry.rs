// src/geometry.rs

use std::fmt;

use bytemuck::{Pod, Zeroable};
use glam::DVec2;

/// One polygon corner, already snapped to the integer grid.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub x: i64,
    pub y: i64,
}

impl Vertex {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x as f64, self.y as f64)
    }
}

impl From<Vertex> for [i64; 2] {
    fn from(v: Vertex) -> Self {
        [v.x, v.y]
    }
}

/// Vertices in generation order. Built whole by the generator and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexList {
    vertices: Vec<Vertex>, // Kept private so the list stays as generated
}

impl VertexList {
    pub(crate) fn from_vertices(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    pub fn xs(&self) -> Vec<i64> {
        self.vertices.iter().map(|v| v.x).collect()
    }

    pub fn ys(&self) -> Vec<i64> {
        self.vertices.iter().map(|v| v.y).collect()
    }

    /// Raw vertex buffer, laid out as consecutive `(x, y)` pairs of `i64`.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Shoelace area; lists with fewer than three vertices enclose nothing.
    pub fn area(&self) -> f64 {
        let count = self.vertices.len();
        if count < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for i in 0..count {
            let a = self.vertices[i].as_dvec2();
            let b = self.vertices[(i + 1) % count].as_dvec2();
            area += a.perp_dot(b);
        }
        area.abs() / 2.0
    }

    /// Whether `(x, y)` lies inside or on the boundary of the polygon.
    ///
    /// Assumes the vertices form a convex polygon, which every generated list
    /// does. Works for either winding: the point is inside when it sits on the
    /// same side of every edge.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let count = self.vertices.len();
        if count < 3 {
            return self.vertices.iter().any(|v| v.x == x && v.y == y);
        }

        let point = DVec2::new(x as f64, y as f64);
        let mut saw_positive = false;
        let mut saw_negative = false;

        for i in 0..count {
            let edge_start = self.vertices[i].as_dvec2();
            let edge_end = self.vertices[(i + 1) % count].as_dvec2();
            let cross = (edge_end - edge_start).perp_dot(point - edge_start);

            if cross > 0.0 {
                saw_positive = true;
            } else if cross < 0.0 {
                saw_negative = true;
            }
            if saw_positive && saw_negative {
                return false;
            }
        }
        true
    }
}

impl<'a> IntoIterator for &'a VertexList {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

// List mode prints `[[x0, y0], [x1, y1], ...]`.
impl fmt::Display for VertexList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{}, {}]", v.x, v.y)?;
        }
        write!(f, "]")
    }
}
