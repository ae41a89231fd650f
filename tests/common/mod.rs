#![allow(dead_code)]
use geo::{Coord, Geometry, LineString, MultiLineString, MultiPolygon, Polygon, Rect};
use spatial_contiguity::Adjacency;

pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Geometry<f64> {
    Rect::new(Coord { x: x0, y: y0 }, Coord { x: x1, y: y1 }).into()
}

pub fn ring(coords: &[(f64, f64)]) -> Polygon<f64> {
    Polygon::new(LineString::from(coords.to_vec()), vec![])
}

/// Five "boroughs": an offshore island (0) and four units that tile a strip.
///
/// ```text
///  +---+-------+---+
///  | 2 |   3   | 4 |
///  +---+-------+---+
///  |       1       |
///  +---------------+
/// ```
/// Unit 1 records vertices wherever a unit above it starts or ends, so every
/// shared edge is also a shared vertex pair. Unit 4 has a detached second part.
pub fn boroughs() -> Vec<Geometry<f64>> {
    vec![
        MultiPolygon::new(vec![
            ring(&[(10.0, 10.0), (11.0, 10.0), (11.0, 11.0), (10.0, 11.0), (10.0, 10.0)]),
            ring(&[(12.0, 10.0), (13.0, 10.0), (13.0, 11.0), (12.0, 10.0)]),
        ]).into(),
        ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 1.0), (3.0, 1.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]).into(),
        rect(0.0, 1.0, 1.0, 2.0),
        ring(&[(1.0, 1.0), (3.0, 1.0), (3.0, 2.0), (1.0, 2.0)]).into(),
        MultiPolygon::new(vec![
            ring(&[(3.0, 1.0), (4.0, 1.0), (4.0, 2.0), (3.0, 2.0), (3.0, 1.0)]),
            ring(&[(6.0, 6.0), (7.0, 6.0), (7.0, 7.0), (6.0, 7.0), (6.0, 6.0)]),
        ]).into(),
    ]
}

/// Neighbor pairs of `boroughs()` with their shared boundary length.
pub const BOROUGH_PAIRS: [(usize, usize, f64); 5] = [
    (1, 2, 1.0),
    (1, 3, 2.0),
    (1, 4, 1.0),
    (2, 3, 1.0),
    (3, 4, 1.0),
];

pub const BOROUGH_NAMES: [&str; 5] = ["Staten Island", "Manhattan", "Bronx", "Brooklyn", "Queens"];

/// A small river network: Sava and Tisa flow into the Danube at one of its
/// vertices; the Rhine (two reaches) and the Elbe touch nothing.
pub fn rivers() -> Vec<Geometry<f64>> {
    vec![
        LineString::from(vec![(0.0, 0.0), (5.0, 1.0), (10.0, 0.0), (15.0, 2.0)]).into(),
        LineString::from(vec![(2.0, -6.0), (4.0, -3.0), (5.0, 1.0)]).into(),
        LineString::from(vec![(11.0, 8.0), (10.5, 4.0), (10.0, 0.0)]).into(),
        MultiLineString::new(vec![
            LineString::from(vec![(0.0, 20.0), (3.0, 25.0)]),
            LineString::from(vec![(3.0, 25.0), (4.0, 30.0)]),
        ]).into(),
        LineString::from(vec![(20.0, 20.0), (25.0, 25.0)]).into(),
    ]
}

pub const RIVER_NAMES: [&str; 5] = ["Danube", "Sava", "Tisa", "Rhine", "Elbe"];

/// Queen neighbors of `rivers()`.
pub const RIVER_PAIRS: [(usize, usize); 2] = [(0, 1), (0, 2)];

/// Expected directed triples for `pairs` over `n` geometries, islands included.
pub fn expected<I: Clone + Ord>(n: usize, pairs: &[(usize, usize, f64)], ids: &[I]) -> Vec<(I, I, f64)> {
    let mut triples = Vec::new();
    for &(i, j, w) in pairs {
        triples.push((ids[i].clone(), ids[j].clone(), w));
        triples.push((ids[j].clone(), ids[i].clone(), w));
    }
    for k in 0..n {
        if !pairs.iter().any(|&(i, j, _)| i == k || j == k) {
            triples.push((ids[k].clone(), ids[k].clone(), 0.0));
        }
    }
    triples.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
    triples
}

/// An edge list as a sorted vector of triples, so equal sets compare equal.
pub fn triples<I: Clone + Ord>(adjacency: &Adjacency<I>) -> Vec<(I, I, f64)> {
    let mut triples: Vec<_> = adjacency.iter()
        .map(|(head, tail, weight)| (head.clone(), tail.clone(), weight))
        .collect();
    triples.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
    triples
}

/// Apply the same permutation to geometries and ids.
pub fn permute<T: Clone, I: Clone>(geoms: &[T], ids: &[I], order: &[usize]) -> (Vec<T>, Vec<I>) {
    (
        order.iter().map(|&k| geoms[k].clone()).collect(),
        order.iter().map(|&k| ids[k].clone()).collect(),
    )
}
