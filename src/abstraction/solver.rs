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

//! This module defines the `KnapsackSolver` trait.

use crate::{Dimension, Scalar, Solution, SolveStats};

/// This is the solver abstraction. It is implemented by the exact portfolio
/// solver (`Knapsack`) and by the approximate greedy top-down solver
/// (`GreedyTopDown`). Both are built once for a given set of items and can
/// then be asked to solve the problem for any constraint.
pub trait KnapsackSolver<D, V, I>
where
    D: Dimension,
    V: Scalar,
{
    /// Selects a subset of the items maximizing the total profit while the
    /// sum of their dimensions stays within the given constraint on every
    /// axis.
    ///
    /// # Note:
    /// Whether the returned solution is an optimum or only a lower bound on
    /// the optimum depends on the implementation. Check `is_exact` to know.
    fn solve(&mut self, constraint: D) -> Solution<D, V, I>;
    /// Returns true iff the solutions returned by `solve` are proved optimal
    fn is_exact(&self) -> bool;
    /// Returns the statistics gathered during the last solve
    fn stats(&self) -> &SolveStats;
}
