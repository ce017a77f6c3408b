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

//! This module defines the points that populate the frontiers of the dynamic
//! programming solvers.

use std::cmp::Ordering;

use crate::{Dimension, LinkId, Scalar};

/// A point of a frontier: the total dimension and the total profit of some
/// subset of the items. The subset itself is not stored; it is recovered by
/// following the provenance `link` of the point.
#[derive(Debug, Copy, Clone)]
pub struct WeightPoint<D, V> {
    /// The sum of the dimensions of the items composing this point
    pub dims: D,
    /// The sum of the profits of the items composing this point
    pub profit: V,
    /// The provenance link of this point (none for the empty point)
    pub link: Option<LinkId>,
}

/// The key identifying a point for deduplication purposes. Two points with
/// the same key are interchangeable regardless of how they were built.
pub type PointKey<K> = (K, u64);

impl<D: Dimension, V: Scalar> WeightPoint<D, V> {
    /// The empty point (no item selected)
    pub fn empty() -> Self {
        WeightPoint { dims: D::zero(), profit: V::zero(), link: None }
    }
    /// A point that has not (yet) been assigned any provenance
    pub fn unlinked(dims: D, profit: V) -> Self {
        WeightPoint { dims, profit, link: None }
    }
    /// Returns the point obtained by adding an item to this one. The new point
    /// is not linked yet.
    #[inline]
    pub fn extend(&self, dims: D, profit: V) -> Self {
        WeightPoint { dims: self.dims + dims, profit: self.profit + profit, link: None }
    }
    /// Returns the deduplication key of the point
    #[inline]
    pub fn key(&self) -> PointKey<D::Key> {
        (self.dims.key(), self.profit.key())
    }
    /// True iff this point is at least as good as `other`: its dimension is
    /// not larger and its profit not smaller.
    #[inline]
    pub fn dominates(&self, other: &Self) -> bool {
        self.dims.le(&other.dims) && self.profit >= other.profit
    }
    /// The order in which the frontiers are kept: by dimension first and by
    /// decreasing profit for equal dimensions.
    pub fn frontier_cmp(&self, other: &Self) -> Ordering {
        self.dims.lex_cmp(&other.dims)
            .then_with(|| other.profit.partial_cmp(&self.profit).unwrap_or(Ordering::Equal))
    }
}
