use std::hash::Hash;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{ContiguityError, Result};
use crate::graph::AdjacencyMatrix;

/// A directed edge list over geometry ids, both directions materialized.
///
/// `heads[k] -> tails[k]` carries `weights[k]`. A geometry without neighbors
/// appears exactly once as the self-loop `(id, id, 0.0)`. Edges are emitted in
/// (head position, tail position) order, but the list is a set of triples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjacency<I> {
    pub heads: Vec<I>,
    pub tails: Vec<I>,
    pub weights: Vec<f64>,
}

impl<I> Adjacency<I> {
    /// Number of directed edges, self-loops included.
    #[inline] pub fn len(&self) -> usize { self.heads.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.heads.is_empty() }

    /// Iterate over `(head, tail, weight)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (&I, &I, f64)> + '_ {
        self.heads.iter()
            .zip(self.tails.iter())
            .zip(self.weights.iter())
            .map(|((head, tail), &weight)| (head, tail, weight))
    }

    /// Split into the three parallel sequences.
    pub fn into_parts(self) -> (Vec<I>, Vec<I>, Vec<f64>) {
        (self.heads, self.tails, self.weights)
    }
}

impl<I: PartialEq> Adjacency<I> {
    /// Ids whose only edge is the island self-loop.
    pub fn islands(&self) -> Vec<&I> {
        self.iter()
            .filter(|(head, tail, _)| head == tail)
            .map(|(head, _, _)| head)
            .collect()
    }

    /// Number of directed neighbor edges (self-loops excluded).
    pub fn n_edges(&self) -> usize {
        self.iter().filter(|(head, tail, _)| head != tail).count()
    }
}

impl<I: Eq + Hash> Adjacency<I> {
    /// Compress into a CSR matrix whose rows follow the order of `ids`.
    ///
    /// Island self-loops become empty rows. `ids` must be unique.
    pub fn to_matrix(&self, ids: &[I]) -> Result<AdjacencyMatrix> {
        check_ids(ids.len(), ids)?;
        let index: AHashMap<&I, u32> = ids.iter().enumerate()
            .map(|(i, id)| (id, i as u32))
            .collect();
        let position = |id: &I| index.get(id).copied().ok_or_else(|| {
            ContiguityError::ShapeMismatch("edge list references an id missing from `ids`".to_string())
        });

        let mut rows: Vec<Vec<(u32, f64)>> = vec![Vec::new(); ids.len()];
        for (head, tail, weight) in self.iter() {
            let (head, tail) = (position(head)?, position(tail)?);
            if head != tail {
                rows[head as usize].push((tail, weight));
            }
        }

        Ok(AdjacencyMatrix::from_rows(rows))
    }
}

/// Merge positional neighbor pairs into the final edge list.
///
/// `pairs` holds each unordered neighbor pair once as `(i, j, weight)`; every
/// index in `0..n` that is in no pair becomes an island.
pub(crate) fn assemble(n: usize, pairs: &[(usize, usize, f64)]) -> Adjacency<usize> {
    let mut rows: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
    for &(i, j, weight) in pairs {
        debug_assert!(i != j, "self-pairs must be filtered before assembly");
        rows[i].push((j, weight));
        rows[j].push((i, weight));
    }

    let mut adjacency = Adjacency {
        heads: Vec::with_capacity(2 * pairs.len()),
        tails: Vec::with_capacity(2 * pairs.len()),
        weights: Vec::with_capacity(2 * pairs.len()),
    };

    let mut islands = 0usize;
    for (head, mut row) in rows.into_iter().enumerate() {
        if row.is_empty() {
            row.push((head, 0.0));
            islands += 1;
        }
        row.sort_unstable_by_key(|&(tail, _)| tail);
        for (tail, weight) in row {
            adjacency.heads.push(head);
            adjacency.tails.push(tail);
            adjacency.weights.push(weight);
        }
    }

    log::debug!("assembled {} neighbor pairs and {} islands over {} geometries", pairs.len(), islands, n);
    adjacency
}

impl Adjacency<usize> {
    /// Replace positional indices by caller ids (`ids[i]` for position `i`).
    pub(crate) fn with_ids<I: Clone>(self, ids: &[I]) -> Adjacency<I> {
        Adjacency {
            heads: self.heads.into_iter().map(|i| ids[i].clone()).collect(),
            tails: self.tails.into_iter().map(|i| ids[i].clone()).collect(),
            weights: self.weights,
        }
    }
}

/// Reject id sequences that cannot be paired one-to-one with the geometries.
pub(crate) fn check_ids<I: Eq + Hash>(n: usize, ids: &[I]) -> Result<()> {
    if ids.len() != n {
        return Err(ContiguityError::ShapeMismatch(format!(
            "{} ids supplied for {} geometries", ids.len(), n
        )));
    }

    let mut seen: AHashMap<&I, usize> = AHashMap::with_capacity(ids.len());
    for (i, id) in ids.iter().enumerate() {
        if let Some(first) = seen.insert(id, i) {
            return Err(ContiguityError::ShapeMismatch(format!(
                "ids at positions {first} and {i} are equal; ids must be unique"
            )));
        }
    }

    Ok(())
}
