use geo::{BoundingRect, Coord, Line, LineString, Rect};
use rstar::{RTree, AABB};

use crate::error::{ContiguityError, Result};
use crate::geom::bbox::BoundingBox;
use crate::geom::{QCoord, Segment, Shape};

/// One ring (polygon) or chain (line) of boundary vertices.
///
/// Closed rings never repeat their first vertex at the end, and no two
/// consecutive vertices share a quantized coordinate.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Ring {
    coords: Vec<Coord<f64>>,
    closed: bool,
}

impl Ring {
    /// Normalize a raw coordinate sequence, or `None` if nothing of positive length remains.
    fn normalize(raw: &LineString<f64>, closed: bool) -> Option<Self> {
        let mut coords: Vec<Coord<f64>> = Vec::with_capacity(raw.0.len());
        for &c in &raw.0 {
            if coords.last().is_none_or(|&last| QCoord::new(last) != QCoord::new(c)) {
                coords.push(c);
            }
        }
        if closed && coords.len() > 1 && QCoord::new(coords[0]) == QCoord::new(coords[coords.len() - 1]) {
            coords.pop();
        }

        let min_len = if closed { 3 } else { 2 };
        (coords.len() >= min_len).then_some(Self { coords, closed })
    }

    #[inline] pub(crate) fn coords(&self) -> &[Coord<f64>] { &self.coords }

    #[inline] pub(crate) fn is_closed(&self) -> bool { self.closed }

    /// Consecutive vertex pairs, including the closing pair of a ring.
    pub(crate) fn lines(&self) -> impl Iterator<Item = Line<f64>> + '_ {
        let closing = self.is_closed().then(|| Line::new(self.coords[self.coords.len() - 1], self.coords[0]));
        self.coords.windows(2)
            .map(|w| Line::new(w[0], w[1]))
            .chain(closing)
    }
}

/// The boundary of one geometry: every ring of every polygon part, or every
/// chain of every line part, plus an R-tree over its segments.
#[derive(Debug, Clone)]
pub(crate) struct Boundary {
    rings: Vec<Ring>,
    lines: Vec<Line<f64>>,
    rtree: RTree<BoundingBox>,
}

impl Boundary {
    /// Extract the boundary of the `index`-th shape.
    pub(crate) fn extract(index: usize, shape: &Shape) -> Result<Self> {
        let closed = |ls: &LineString<f64>| Ring::normalize(ls, true);
        let open = |ls: &LineString<f64>| Ring::normalize(ls, false);

        let raw: Vec<&LineString<f64>> = match shape {
            Shape::Polygon(polygon) => std::iter::once(polygon.exterior())
                .chain(polygon.interiors())
                .collect(),
            Shape::MultiPolygon(polygons) => polygons.iter()
                .flat_map(|polygon| std::iter::once(polygon.exterior()).chain(polygon.interiors()))
                .collect(),
            Shape::Line(line) => vec![line],
            Shape::MultiLine(lines) => lines.iter().collect(),
        };

        if raw.iter().flat_map(|ls| ls.coords()).any(|c| !c.x.is_finite() || !c.y.is_finite()) {
            return Err(ContiguityError::GeometryLibraryFailure {
                index,
                reason: "non-finite coordinate".to_string(),
            });
        }
        if let Some(c) = raw.iter().flat_map(|ls| ls.coords()).find(|&&c| !QCoord::fits(c)) {
            return Err(ContiguityError::GeometryLibraryFailure {
                index,
                reason: format!("coordinate ({}, {}) is out of range for quantization", c.x, c.y),
            });
        }

        let rings: Vec<Ring> = match shape {
            Shape::Polygon(_) | Shape::MultiPolygon(_) => raw.into_iter().filter_map(closed).collect(),
            Shape::Line(_) | Shape::MultiLine(_) => raw.into_iter().filter_map(open).collect(),
        };

        let lines: Vec<Line<f64>> = rings.iter().flat_map(Ring::lines).collect();
        let rtree = RTree::bulk_load(lines.iter().enumerate()
            .map(|(i, line)| BoundingBox::new(i, line.bounding_rect()))
            .collect());

        Ok(Self { rings, lines, rtree })
    }

    #[inline] pub(crate) fn rings(&self) -> &[Ring] { &self.rings }

    #[inline] pub(crate) fn lines(&self) -> &[Line<f64>] { &self.lines }

    /// A boundary with no positive-length segment; its geometry can only be an island.
    #[inline] pub(crate) fn is_degenerate(&self) -> bool { self.lines.is_empty() }

    /// Bounding rectangle of the whole boundary, `None` if degenerate.
    pub(crate) fn bounding_rect(&self) -> Option<Rect<f64>> {
        self.lines.iter()
            .map(|line| line.bounding_rect())
            .reduce(|a, b| Rect::new(
                Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
            ))
    }

    /// Segments whose bounding boxes intersect `rect`.
    pub(crate) fn lines_near(&self, rect: &Rect<f64>) -> impl Iterator<Item = &Line<f64>> + '_ {
        let envelope = AABB::from_corners(rect.min().into(), rect.max().into());
        self.rtree.locate_in_envelope_intersecting(&envelope)
            .map(|bb| &self.lines[bb.idx()])
    }

    /// Quantized vertex keys, one per recorded boundary vertex.
    pub(crate) fn vertices(&self) -> impl Iterator<Item = QCoord> + '_ {
        self.rings().iter().flat_map(|ring| ring.coords().iter().map(|&c| QCoord::new(c)))
    }

    /// Quantized, orientation-free keys of consecutive vertex pairs.
    pub(crate) fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        self.lines.iter().map(|line| Segment::new(QCoord::new(line.start), QCoord::new(line.end)))
    }
}
