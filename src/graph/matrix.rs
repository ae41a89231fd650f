/// A read-only CSR (Compressed Sparse Row) adjacency matrix over geometry positions.
///
/// `offsets[u]..offsets[u+1]` indexes into `neighbors` and `weights` to give
/// the sorted neighbors of unit `u` and their edge weights. Islands are empty rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyMatrix {
    /// CSR row offsets; length = `num_units + 1`.
    offsets: Vec<u32>,
    /// Flattened neighbor lists; sorted within each row.
    neighbors: Vec<u32>,
    /// Edge weights, parallel to `neighbors`.
    weights: Vec<f64>,
}

impl AdjacencyMatrix {
    /// Build from per-unit rows of `(neighbor, weight)`; rows are sorted here.
    pub(crate) fn from_rows(mut rows: Vec<Vec<(u32, f64)>>) -> Self {
        rows.iter_mut().for_each(|row| row.sort_unstable_by_key(|&(j, _)| j));

        Self {
            offsets: std::iter::once(0u32).chain(
                rows.iter()
                    .map(|row| row.len() as u32)
                    .scan(0u32, |acc, len| { *acc += len; Some(*acc) })
            ).collect(),
            neighbors: rows.iter().flatten().map(|&(j, _)| j).collect(),
            weights: rows.iter().flatten().map(|&(_, w)| w).collect(),
        }
    }

    /// Number of units covered by this matrix.
    #[inline] pub fn num_units(&self) -> usize { self.offsets.len() - 1 }

    /// Number of stored (directed) entries.
    #[inline] pub fn nnz(&self) -> usize { self.neighbors.len() }

    #[inline]
    fn range(&self, unit: usize) -> std::ops::Range<usize> {
        self.offsets[unit] as usize .. self.offsets[unit + 1] as usize
    }

    /// Sorted slice of units adjacent to `unit`.
    #[inline] pub fn neighbors(&self, unit: usize) -> &[u32] { &self.neighbors[self.range(unit)] }

    /// Edge weights for `unit`, parallel to `neighbors(unit)`.
    #[inline] pub fn weights(&self, unit: usize) -> &[f64] { &self.weights[self.range(unit)] }

    #[inline] pub fn degree(&self, unit: usize) -> usize { self.range(unit).len() }

    #[inline] pub fn is_island(&self, unit: usize) -> bool { self.degree(unit) == 0 }

    /// Returns `true` if `other` is adjacent to `unit` (binary search).
    pub fn contains(&self, unit: usize, other: usize) -> bool {
        self.neighbors(unit).binary_search(&(other as u32)).is_ok()
    }

    /// Weight of the edge `unit -> other`, if present.
    pub fn weight(&self, unit: usize, other: usize) -> Option<f64> {
        self.neighbors(unit).binary_search(&(other as u32)).ok()
            .map(|k| self.weights(unit)[k])
    }
}
