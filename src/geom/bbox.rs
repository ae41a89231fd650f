use geo::Rect;
use rstar::{RTree, RTreeObject, AABB};

/// A bounding box in an R-tree, associated with an item (geometry or segment) by index.
#[derive(Debug, Clone)]
pub(crate) struct BoundingBox {
    idx: usize,
    bbox: Rect<f64>,
}

impl BoundingBox {
    pub(crate) fn new(idx: usize, bbox: Rect<f64>) -> Self {
        Self { idx, bbox }
    }

    /// Get the index of the corresponding item.
    #[inline] pub(crate) fn idx(&self) -> usize { self.idx }
}

impl RTreeObject for BoundingBox {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bbox.min().into(), self.bbox.max().into())
    }
}

/// Bounding-box index over a geometry collection.
///
/// Only a coarse filter: every pair of geometries whose boxes touch is
/// reported, whether or not the geometries themselves do.
#[derive(Debug, Clone)]
pub(crate) struct SpatialIndex {
    rects: Vec<Option<Rect<f64>>>,
    rtree: RTree<BoundingBox>,
}

impl SpatialIndex {
    /// Build the index; geometries without a rectangle (degenerate) are left out.
    pub(crate) fn new(rects: Vec<Option<Rect<f64>>>) -> Self {
        Self {
            rtree: RTree::bulk_load(
                rects.iter().enumerate()
                    .filter_map(|(i, rect)| rect.map(|rect| BoundingBox::new(i, rect)))
                    .collect()
            ),
            rects,
        }
    }

    /// Indices of geometries whose bounding boxes intersect `rect` (including touching).
    pub(crate) fn query(&self, rect: &Rect<f64>) -> impl Iterator<Item = usize> + '_ {
        let envelope = AABB::from_corners(rect.min().into(), rect.max().into());
        self.rtree.locate_in_envelope_intersecting(&envelope).map(BoundingBox::idx)
    }

    /// Every unordered pair `(i, j)` with `i < j` whose boxes intersect.
    pub(crate) fn candidate_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs: Vec<(usize, usize)> = self.rects.iter().enumerate()
            .filter_map(|(i, rect)| rect.as_ref().map(|rect| (i, rect)))
            .flat_map(|(i, rect)| self.query(rect)
                .filter(move |&j| j > i)
                .map(move |j| (i, j)))
            .collect();
        pairs.sort_unstable();
        pairs
    }
}
