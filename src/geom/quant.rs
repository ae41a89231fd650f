use geo::Coord;

/// Quantization scale shared by ring closure and vertex-set keys
/// (1e-7 units, ≈ 1 cm for lon/lat input, 0.1 µm for projected metres).
pub const QUANT_SCALE: f64 = 1e7;

/// A coordinate snapped to the `QUANT_SCALE` grid; two coordinates are the
/// same vertex iff their quantized forms are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct QCoord(i64, i64);

impl QCoord {
    /// Whether `c` quantizes without saturating the integer grid.
    #[inline]
    pub(crate) fn fits(c: Coord<f64>) -> bool {
        let limit = i64::MAX as f64;
        (c.x * QUANT_SCALE).abs() < limit && (c.y * QUANT_SCALE).abs() < limit
    }

    #[inline]
    pub(crate) fn new(c: Coord<f64>) -> Self {
        Self((c.x * QUANT_SCALE).round() as i64, (c.y * QUANT_SCALE).round() as i64)
    }
}

/// An undirected edge between two quantized vertices, stored with canonical
/// (min, max) endpoint order so both orientations hash alike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Segment(QCoord, QCoord);

impl Segment {
    #[inline]
    pub(crate) fn new(a: QCoord, b: QCoord) -> Self {
        if a <= b { Segment(a, b) } else { Segment(b, a) }
    }
}
