// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the search index: what remains of a frontier once a
//! solve is over, kept around to answer the same problem for any smaller
//! constraint without solving it again.

use crate::{BackTrace, Dimension, LinkTable, Scalar, WeightPoint};

/// A search index built from the frontier of a complete solve.
///
/// On one axis, the index is a *staircase*: the points sorted by dimension,
/// where each point has a strictly larger profit than all the points before
/// it. The best point for a constraint `c` is then the rightmost point whose
/// dimension is `<= c`, which is found with a binary search.
///
/// On several axes the dimensions are only partially ordered and a staircase
/// would lose points that are the best for some constraints. In that case,
/// the whole frontier is kept and scanned linearly.
#[derive(Debug, Clone)]
pub struct SearchIndex<D, V> {
    /// The constraint the index was built for
    constraint: D,
    /// The indexed points (sorted by dimension)
    points: Vec<WeightPoint<D, V>>,
    /// The provenance of the indexed points
    links: LinkTable,
}

impl<D: Dimension, V: Scalar> SearchIndex<D, V> {
    /// Creates the index from the frontier of a solve that was carried out
    /// for the given constraint.
    pub fn build(constraint: D, mut frontier: Vec<WeightPoint<D, V>>, links: LinkTable) -> Self {
        frontier.sort_by(|a, b| a.frontier_cmp(b));

        let points = if D::AXES == 1 {
            let mut best   = V::zero();
            let mut stairs = vec![];
            for point in frontier {
                if point.profit > best {
                    best = point.profit;
                    stairs.push(point);
                }
            }
            stairs
        } else {
            frontier.retain(|p| p.profit > V::zero());
            frontier
        };

        SearchIndex { constraint, points, links }
    }
    /// The constraint for which the index was built
    pub fn constraint(&self) -> &D {
        &self.constraint
    }
    /// True iff the index can answer for the given constraint
    pub fn covers(&self, constraint: &D) -> bool {
        constraint.le(&self.constraint)
    }
    /// The number of indexed points
    pub fn len(&self) -> usize {
        self.points.len()
    }
    /// True iff nothing was indexed
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Returns the most profitable indexed point which fits in the given
    /// constraint (if any).
    pub fn lookup(&self, constraint: &D) -> Option<&WeightPoint<D, V>> {
        if D::AXES == 1 {
            let count = self.points.partition_point(|p| p.dims.le(constraint));
            count.checked_sub(1).map(|i| &self.points[i])
        } else {
            self.points.iter()
                .filter(|p| p.dims.le(constraint))
                .fold(None, |best: Option<&WeightPoint<D, V>>, p| match best {
                    Some(b) if b.profit >= p.profit => Some(b),
                    _ => Some(p),
                })
        }
    }
    /// Iterates over the input positions of the items composing a point of
    /// this index.
    pub fn items(&self, point: &WeightPoint<D, V>) -> BackTrace<'_> {
        self.links.items(point.link)
    }
}
