use std::hash::Hash;

use ahash::{AHashMap, AHashSet};
use rayon::prelude::*;
use smallvec::SmallVec;

use crate::contiguity::Criterion;
use crate::geom::Boundary;

/// Geometry positions recorded under one key; most vertices are shared by few geometries.
type Bucket = SmallVec<[u32; 4]>;

/// Vertex-set contiguity: neighbors are geometries that record the same
/// vertex (queen) or the same vertex pair as a boundary edge (rook).
///
/// Boundary overlap that is not anchored at recorded vertices is invisible
/// here. Returns each pair once as `(i, j, 1.0)` with `i < j`, in ascending order.
pub(crate) fn vertex_set(boundaries: &[Boundary], criterion: Criterion) -> Vec<(usize, usize, f64)> {
    let pairs = match criterion {
        Criterion::Rook => shared_keys(boundaries, |boundary| boundary.edges().collect()),
        Criterion::Queen => shared_keys(boundaries, |boundary| boundary.vertices().collect()),
    };

    let mut pairs: Vec<(usize, usize, f64)> = pairs.into_iter()
        .map(|(i, j)| (i as usize, j as usize, 1.0))
        .collect();
    pairs.sort_unstable_by_key(|&(i, j, _)| (i, j));
    pairs
}

/// Pairs of geometry positions that share at least one key.
///
/// Buckets are filled per input partition and merged afterwards; bucket
/// membership is a union, so the merge order does not matter.
fn shared_keys<K, F>(boundaries: &[Boundary], keys: F) -> AHashSet<(u32, u32)>
where
    K: Eq + Hash + Send,
    F: Fn(&Boundary) -> AHashSet<K> + Sync,
{
    let buckets: AHashMap<K, Bucket> = boundaries.par_iter().enumerate()
        .fold(AHashMap::<K, Bucket>::default, |mut buckets, (i, boundary)| {
            for key in keys(boundary) {
                buckets.entry(key).or_default().push(i as u32);
            }
            buckets
        })
        .reduce(AHashMap::<K, Bucket>::default, |a, b| {
            let (mut into, from) = if a.len() >= b.len() { (a, b) } else { (b, a) };
            for (key, members) in from {
                into.entry(key).or_default().extend(members);
            }
            into
        });

    let mut pairs = AHashSet::new();
    let mut shared = 0usize;
    for members in buckets.values().filter(|members| members.len() > 1) {
        shared += 1;
        for (k, &i) in members.iter().enumerate() {
            for &j in &members[k + 1..] {
                pairs.insert((i.min(j), i.max(j)));
            }
        }
    }

    log::debug!("vertex-set: {} keys, {} shared by two or more geometries, {} neighbor pairs", buckets.len(), shared, pairs.len());
    pairs
}
