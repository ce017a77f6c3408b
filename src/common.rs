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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use crate::{Dimension, Scalar};

// ----------------------------------------------------------------------------
// --- LINK ID ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type identifies one provenance link in the arena of a solve. Every
/// point of a frontier (except the empty point) is associated with exactly
/// one link, and following the parents of that link yields the items
/// composing the point.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LinkId(pub usize);
impl LinkId {
    #[inline]
    /// This function returns the position of the link in its arena.
    ///
    /// # Examples:
    /// ```
    /// # use kpareto::LinkId;
    /// assert_eq!(0, LinkId(0).id());
    /// assert_eq!(7, LinkId(7).id());
    /// ```
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- SOLUTION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of a solve: the total profit, the total size and the items
/// that were selected (their dimension, their profit and the identifier the
/// caller had given them).
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<D, V, I> {
    /// The sum of the profits of the selected items
    pub profit: V,
    /// The sum of the dimensions of the selected items
    pub size: D,
    /// The dimension of each selected item
    pub dimensions: Vec<D>,
    /// The profit of each selected item
    pub values: Vec<V>,
    /// The caller given identifier of each selected item
    pub ids: Vec<I>,
}

impl<D, V, I> Solution<D, V, I>
where
    D: Dimension,
    V: Scalar,
{
    /// The solution which selects nothing
    pub fn empty() -> Self {
        Solution {
            profit: V::zero(),
            size: D::zero(),
            dimensions: vec![],
            values: vec![],
            ids: vec![],
        }
    }
    /// Builds the solution selecting the items at the given positions of the
    /// parallel input sequences.
    pub(crate) fn from_items<It>(items: It, dimensions: &[D], values: &[V], ids: &[I]) -> Self
    where
        It: IntoIterator<Item = usize>,
        I: Clone,
    {
        let mut solution = Self::empty();
        for item in items {
            solution.profit = solution.profit + values[item];
            solution.size = solution.size + dimensions[item];
            solution.dimensions.push(dimensions[item]);
            solution.values.push(values[item]);
            solution.ids.push(ids[item].clone());
        }
        solution
    }
    /// The number of selected items
    pub fn len(&self) -> usize {
        self.ids.len()
    }
    /// Returns true iff no item was selected
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<D, V, I> Solution<D, V, I> {
    /// Converts the dimensions of this solution with the given function.
    /// This is how the convenience entry points turn `Dim1<T>` back into `T`.
    pub fn map_dimensions<E, F>(self, f: F) -> Solution<E, V, I>
    where
        F: Fn(D) -> E,
    {
        Solution {
            profit: self.profit,
            size: f(self.size),
            dimensions: self.dimensions.into_iter().map(&f).collect(),
            values: self.values,
            ids: self.ids,
        }
    }
}

// ----------------------------------------------------------------------------
// --- STATISTICS -------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The algorithm that produced the last solution
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SolvePath {
    /// The instance was trivial (nothing fits, or everything fits)
    CornerCase,
    /// The items form a super-increasing series
    SuperIncreasing,
    /// The limit pruned dynamic programming was used
    Limits,
    /// The pareto frontier dynamic programming was used
    Pareto,
    /// The answer was read from the search index of a previous solve
    SearchIndex,
    /// The greedy top-down approximation was used
    Greedy,
}

/// A few counters telling how much work a solve has required.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// The algorithm used
    pub path: Option<SolvePath>,
    /// The number of points that entered a frontier
    pub points: usize,
    /// The number of points skipped because an identical point existed
    pub skipped_duplicates: usize,
    /// The number of points skipped by the partial sum bounds
    pub skipped_by_limits: usize,
    /// The number of points skipped because they exceed the constraint
    pub skipped_by_size: usize,
    /// The number of points discarded because they were dominated
    pub skipped_dominated: usize,
    /// A rough count of the elementary steps performed
    pub iterations: usize,
}

// ----------------------------------------------------------------------------
// --- ERRORS -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The conditions under which a solver refuses to do its job
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KnapsackError {
    /// The parallel input sequences must all have the same length
    #[error("invalid argument: got {dimensions} dimensions, {values} values and {ids} ids")]
    LengthMismatch {
        dimensions: usize,
        values: usize,
        ids: usize,
    },
    /// The search index can only answer for constraints <= the one it was built for
    #[error("invalid argument: constraint {requested} exceeds the indexed constraint {indexed}")]
    ConstraintExceedsIndex { requested: String, indexed: String },
    /// No search index was retained by the last solve
    #[error("invalid argument: no search index was built")]
    NoSearchIndex,
}

/// Checks that the parallel input sequences have the same length.
pub(crate) fn check_lengths(dimensions: usize, values: usize, ids: usize) -> Result<(), KnapsackError> {
    if dimensions == values && values == ids {
        Ok(())
    } else {
        Err(KnapsackError::LengthMismatch { dimensions, values, ids })
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
