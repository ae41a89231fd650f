use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{BoundingRect, Coord, Line, LineString, MultiLineString};
use rayon::prelude::*;

use crate::contiguity::Criterion;
use crate::geom::{Boundary, SpatialIndex, QUANT_SCALE};

/// How two boundaries meet.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Contact {
    /// The boundaries are disjoint.
    None,
    /// The boundaries meet only in isolated points.
    Point,
    /// The boundaries share at least one segment of positive length; holds the
    /// shared pieces, merged so no stretch of boundary appears twice.
    Line(MultiLineString<f64>),
}

impl Contact {
    /// Total length of the shared boundary (zero unless `Line`).
    pub(crate) fn length(&self) -> f64 {
        match self {
            Contact::Line(shared) => shared.iter()
                .flat_map(|piece| piece.lines())
                .map(segment_length)
                .sum(),
            Contact::None | Contact::Point => 0.0,
        }
    }
}

#[inline]
fn segment_length(line: Line<f64>) -> f64 {
    line.dx().hypot(line.dy())
}

/// Exact intersection of two boundaries.
///
/// Segments of the shorter boundary are probed against the segment R-tree of
/// the longer one. A boundary may overlap itself (a chain that doubles back,
/// repeated parts of a multi-line), so overlap pieces are merged per
/// supporting line before they are reported.
pub(crate) fn classify(a: &Boundary, b: &Boundary) -> Contact {
    let (probe, target) = if a.lines().len() <= b.lines().len() { (a, b) } else { (b, a) };

    let mut touches = false;
    let mut shared: Vec<Line<f64>> = Vec::new();
    for &p in probe.lines() {
        for &q in target.lines_near(&p.bounding_rect()) {
            match line_intersection(p, q) {
                Some(LineIntersection::Collinear { intersection })
                    if intersection.dx() != 0.0 || intersection.dy() != 0.0 => shared.push(intersection),
                Some(_) => touches = true,
                None => {}
            }
        }
    }

    if !shared.is_empty() {
        Contact::Line(MultiLineString::new(merge_collinear(shared).into_iter().map(LineString::from).collect()))
    } else if touches {
        Contact::Point
    } else {
        Contact::None
    }
}

/// Union of overlap pieces: pieces on a common supporting line are merged
/// into maximal runs, keeping original coordinates as run endpoints.
fn merge_collinear(pieces: Vec<Line<f64>>) -> Vec<Line<f64>> {
    let mut groups: Vec<(Line<f64>, Vec<Line<f64>>)> = Vec::new();
    for piece in pieces {
        match groups.iter_mut().find(|(axis, _)| on_axis(axis, piece.start) && on_axis(axis, piece.end)) {
            Some((_, members)) => members.push(piece),
            None => groups.push((piece, vec![piece])),
        }
    }
    groups.into_iter()
        .flat_map(|(axis, members)| merge_runs(axis, members))
        .collect()
}

/// `c` lies within one quantization step of the line through `axis`.
fn on_axis(axis: &Line<f64>, c: Coord<f64>) -> bool {
    let (dx, dy) = (axis.dx(), axis.dy());
    let cross = dx * (c.y - axis.start.y) - dy * (c.x - axis.start.x);
    cross.abs() * QUANT_SCALE <= dx.hypot(dy)
}

fn merge_runs(axis: Line<f64>, members: Vec<Line<f64>>) -> Vec<Line<f64>> {
    let along = |c: Coord<f64>| axis.dx() * (c.x - axis.start.x) + axis.dy() * (c.y - axis.start.y);

    let mut spans: Vec<(f64, Coord<f64>, f64, Coord<f64>)> = members.into_iter()
        .map(|line| {
            let (s, e) = (along(line.start), along(line.end));
            if s <= e { (s, line.start, e, line.end) } else { (e, line.end, s, line.start) }
        })
        .collect();
    spans.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut runs: Vec<(f64, Coord<f64>, f64, Coord<f64>)> = Vec::with_capacity(spans.len());
    for span in spans {
        match runs.last_mut() {
            Some(run) if span.0 <= run.2 => {
                if span.2 > run.2 {
                    run.2 = span.2;
                    run.3 = span.3;
                }
            }
            _ => runs.push(span),
        }
    }
    runs.into_iter().map(|(_, start, _, end)| Line::new(start, end)).collect()
}

/// Point-set contiguity: classify every bounding-box candidate pair exactly.
///
/// Returns each accepted pair once as `(i, j, weight)` with `i < j`, in
/// ascending order. In perimeter mode the weight is the shared length, so
/// point-only queen neighbors carry weight zero.
pub(crate) fn point_set(boundaries: &[Boundary], criterion: Criterion, by_perimeter: bool) -> Vec<(usize, usize, f64)> {
    let index = SpatialIndex::new(boundaries.iter().map(Boundary::bounding_rect).collect());
    let candidates = index.candidate_pairs();
    log::debug!("point-set {:?}: {} candidate pairs over {} geometries", criterion, candidates.len(), boundaries.len());

    candidates.par_iter()
        .filter_map(|&(i, j)| {
            let contact = classify(&boundaries[i], &boundaries[j]);
            let accepted = match (&contact, criterion) {
                (Contact::Line(_), _) => true,
                (Contact::Point, Criterion::Queen) => true,
                (Contact::Point, Criterion::Rook) | (Contact::None, _) => false,
            };
            accepted.then(|| (i, j, if by_perimeter { contact.length() } else { 1.0 }))
        })
        .collect()
}
