// tests/generator_properties.rs

use std::f64::consts::PI;

use ngon_vertices::{generate, Orientation, VertexGenerator, VertexList, RADIUS_FACTOR};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CASES: usize = 200;

// Rounding moves each coordinate by at most half a unit.
const SNAP: f64 = std::f64::consts::SQRT_2 / 2.0;

fn random_inputs(seed: u64) -> Vec<(usize, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..CASES)
        .map(|_| (rng.gen_range(1..=200), rng.gen_range(0..=4096) as f64))
        .collect()
}

fn radius(size: f64) -> f64 {
    size * RADIUS_FACTOR / 2.0
}

fn edge_lengths(list: &VertexList) -> Vec<f64> {
    let v = list.vertices();
    (0..v.len())
        .map(|i| v[i].as_dvec2().distance(v[(i + 1) % v.len()].as_dvec2()))
        .collect()
}

#[test]
fn produces_exactly_n_vertices() {
    for (n, size) in random_inputs(1) {
        assert_eq!(generate(n, size).unwrap().len(), n, "n={n} size={size}");
    }
}

#[test]
fn coordinates_stay_on_the_canvas_circle_bounds() {
    for (n, size) in random_inputs(2) {
        let r = radius(size);
        let low = (size / 2.0 - r).round_ties_even() as i64;
        let high = (size / 2.0 + r).round_ties_even() as i64;

        for orientation in [Orientation::Base, Orientation::Mirrored] {
            let list = VertexGenerator::new(orientation).generate(n, size).unwrap();
            for v in &list {
                assert!((low..=high).contains(&v.x), "x={} outside [{low}, {high}]", v.x);
                assert!((low..=high).contains(&v.y), "y={} outside [{low}, {high}]", v.y);
            }
        }
    }
}

#[test]
fn consecutive_edges_are_equal_up_to_rounding() {
    for (n, size) in random_inputs(3) {
        if n < 2 {
            continue;
        }
        let expected = 2.0 * radius(size) * (PI / n as f64).sin();
        for length in edge_lengths(&generate(n, size).unwrap()) {
            assert!(
                (length - expected).abs() <= 2.0 * SNAP + 1e-9,
                "n={n} size={size}: edge {length} vs {expected}"
            );
        }
    }
}

#[test]
fn mirrored_reflects_across_vertical_center() {
    for (n, size) in random_inputs(4) {
        let base = VertexGenerator::new(Orientation::Base).generate(n, size).unwrap();
        let mirrored = VertexGenerator::new(Orientation::Mirrored).generate(n, size).unwrap();

        for (a, b) in base.iter().zip(&mirrored) {
            assert_eq!(a.y, b.y);
            assert!(((a.x + b.x) as f64 - size).abs() <= 1.0, "n={n} size={size}: {a:?} vs {b:?}");
        }
    }
}

#[test]
fn generation_is_repeatable() {
    for (n, size) in random_inputs(5) {
        assert_eq!(generate(n, size), generate(n, size));
    }
}

#[test]
fn polygons_enclose_the_canvas_center() {
    for (n, size) in random_inputs(6) {
        if n < 3 || size < 20.0 {
            continue;
        }
        let center = (size / 2.0).round_ties_even() as i64;
        assert!(generate(n, size).unwrap().contains(center, center), "n={n} size={size}");
    }
}

#[test]
fn area_tracks_the_ideal_polygon() {
    for (n, size) in random_inputs(7) {
        if n < 3 || size < 500.0 {
            continue;
        }
        let r = radius(size);
        let ideal = 0.5 * n as f64 * r * r * (2.0 * PI / n as f64).sin();
        let area = generate(n, size).unwrap().area();
        assert!((area - ideal).abs() / ideal < 0.02, "n={n} size={size}: {area} vs {ideal}");
    }
}

#[test]
fn fractional_sizes_are_accepted() {
    let list = generate(4, 100.5).unwrap();
    // r = 45.225 around 50.25
    let pairs: Vec<[i64; 2]> = list.iter().map(|&v| v.into()).collect();
    assert_eq!(pairs, vec![[95, 50], [50, 95], [5, 50], [50, 5]]);
}
