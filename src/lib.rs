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

//! # KPareto
//! KPareto is an exact solver for the multi-dimensional 0/1 knapsack problem.
//! Given a set of items, each of which has a (possibly multi axis) dimension
//! and a profit, it selects the subset of the items which maximizes the total
//! profit while the sum of their dimensions stays within a given constraint
//! on every axis.
//!
//! ## A portfolio of algorithms
//! There is no single algorithm that performs best on every instance. This is
//! why the solver first looks at the shape of the instance before choosing
//! the algorithm that will be used to solve it:
//!
//! * Trivial instances (nothing fits, everything fits) are answered right away.
//! * Super-increasing series (where each item outweighs all the smaller ones
//!   together) are solved by a sequence of binary searches.
//! * When the items are sorted in such a way that partial sums can bound the
//!   usefulness of a partial solution, a dynamic programming over a single
//!   sorted queue prunes all the points that cannot lead to an optimum.
//! * Everything else is solved by a dynamic programming which only keeps the
//!   pareto optimal points of its frontier.
//!
//! When the number of axes grows, the exact solvers may become too slow. In
//! that case, you will want to turn to the `GreedyTopDown` solver which finds
//! good (but not provably optimal) solutions.
//!
//! ## Quick Example
//! The simplest way to use this library is through the convenience entry
//! points `solve_1d` and `solve_nd`:
//! ```
//! use kpareto::*;
//!
//! let weights = [56, 59, 80, 64, 75, 17];
//! let profits = [50, 50, 64, 46, 50, 5];
//! let ids     = ["a", "b", "c", "d", "e", "f"];
//!
//! let solution = solve_1d(190, &weights, &profits, &ids).unwrap();
//! assert_eq!(150, solution.profit);
//! assert_eq!(190, solution.size);
//! ```
//!
//! ## Reusing the work
//! If you need to solve the same problem for several constraints, you will
//! want to use the `Knapsack` solver directly and ask it to prepare a search
//! index. After a first solve, any smaller constraint is then answered
//! without any further dynamic programming.
//! ```
//! use kpareto::*;
//!
//! let weights = vec![Dim1(56), Dim1(59), Dim1(80), Dim1(64), Dim1(75), Dim1(17)];
//! let profits = vec![50, 50, 64, 46, 50, 5];
//! let ids     = vec![0, 1, 2, 3, 4, 5];
//!
//! let config = KnapsackConfigBuilder::default()
//!     .prepare_search_index(true)
//!     .build()
//!     .unwrap();
//! let mut solver = Knapsack::with_config(weights, profits, ids, config).unwrap();
//!
//! assert_eq!(150, solver.solve(Dim1(190)).profit);
//! assert_eq!(100, solver.solve(Dim1(120)).profit);
//! assert_eq!(Some(SolvePath::SearchIndex), solver.stats().path);
//! ```
//!
//! ## Logging
//! The solvers log their decisions through the `log` facade (at the debug
//! and trace levels). Install the logger of your choice to see them.

#![allow(clippy::needless_doctest_main)]

mod common;
mod abstraction;
mod implementation;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
