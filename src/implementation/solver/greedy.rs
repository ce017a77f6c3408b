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

//! This module provides the greedy top-down solver: an approximate solver
//! meant for the instances with many axes, where the exact solvers end up
//! with frontiers that are way too large.
//!
//! The idea is to look at each axis in isolation. For every axis, a one
//! dimensional knapsack is solved for a *cursor* that starts at the
//! constraint of that axis. The union of the items selected on all axes is a
//! (hopefully small) set of candidates, which is then solved exactly on all
//! axes at once. After each attempt, the cursor of one of the axes steps down
//! by the smallest item of that axis, which yields a new set of candidates.
//! The process stops when all the cursors are exhausted or as soon as a set
//! of candidates is not worth more than the best solution found so far.

use std::cmp::Ordering;

use fxhash::{FxHashMap, FxHashSet};
use log::debug;

use crate::{check_lengths, Dim1, DimN, Dimension, Knapsack, KnapsackConfig, KnapsackError, KnapsackSolver,
    Scalar, Solution, SolvePath, SolveStats};

/// The greedy top-down solver.
///
/// # Note:
/// The solutions of this solver are always feasible, but they are *not*
/// proved optimal: they only are a lower bound on the optimum.
pub struct GreedyTopDown<T, V, I, const N: usize>
where
    T: Scalar,
    V: Scalar,
{
    /// The dimension of each item
    dimensions: Vec<DimN<T, N>>,
    /// The profit of each item
    values: Vec<V>,
    /// The caller given identifier of each item
    ids: Vec<I>,
    /// One exact single axis solver per axis. Their ids are the positions
    /// of the items.
    axes: Vec<Knapsack<Dim1<T>, V, usize>>,
    /// The statistics of the last solve
    stats: SolveStats,
}

impl<T, V, I, const N: usize> GreedyTopDown<T, V, I, N>
where
    T: Scalar,
    V: Scalar,
    I: Clone,
{
    /// Creates the solver. This fails when the three sequences are not of
    /// the same length.
    pub fn new(dimensions: Vec<DimN<T, N>>, values: Vec<V>, ids: Vec<I>) -> Result<Self, KnapsackError> {
        check_lengths(dimensions.len(), values.len(), ids.len())?;

        let config = KnapsackConfig {
            force_use_pareto: true,
            prepare_search_index: true,
            ..KnapsackConfig::default()
        };
        let positions = (0..dimensions.len()).collect::<Vec<_>>();
        let axes = (0..N)
            .map(|axis| {
                let dims = dimensions.iter().map(|d| Dim1(d.get(axis))).collect();
                Knapsack::from_parts(dims, values.clone(), positions.clone(), config)
            })
            .collect();

        Ok(GreedyTopDown { dimensions, values, ids, axes, stats: SolveStats::default() })
    }

    /// The statistics of the last solve
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Finds a (good) feasible solution for the given constraint
    pub fn solve(&mut self, constraint: DimN<T, N>) -> Solution<DimN<T, N>, V, I> {
        self.stats = SolveStats { path: Some(SolvePath::Greedy), ..SolveStats::default() };

        // the tightest axes first
        let mut order = (0..N).collect::<Vec<_>>();
        order.sort_by(|&a, &b| constraint.get(a).partial_cmp(&constraint.get(b)).unwrap_or(Ordering::Equal));

        // every axis starts at the full constraint, sized items or not
        let steps   = (0..N).map(|axis| self.smallest_item(axis)).collect::<Vec<_>>();
        let mut cursors = (0..N)
            .map(|axis| Some(constraint.get(axis)))
            .collect::<Vec<_>>();

        let mut caches: Vec<FxHashMap<u64, Vec<usize>>> = vec![FxHashMap::default(); N];
        let mut tried: FxHashSet<Vec<usize>> = FxHashSet::default();
        let mut best = Solution::empty();
        let mut iteration = 0;

        while cursors.iter().any(Option::is_some) {
            self.stats.iterations += 1;

            let mut union = vec![];
            for &axis in order.iter() {
                if let Some(cursor) = cursors[axis] {
                    let knapsack = &mut self.axes[axis];
                    let selected = caches[axis]
                        .entry(cursor.key())
                        .or_insert_with(|| axis_selection(knapsack, cursor));
                    union.extend_from_slice(selected);
                }
            }
            union.sort_unstable();
            union.dedup();

            if tried.insert(union.clone()) {
                let upper = union.iter().fold(V::zero(), |sum, &i| sum + self.values[i]);
                if upper <= best.profit {
                    debug!("greedy: {} candidate(s) worth at most {:?}, stopping", union.len(), upper);
                    break;
                }
                let found = self.solve_candidates(&constraint, union);
                debug!("greedy: attempt {} found {:?} with {} item(s)", iteration, found.profit, found.len());
                if found.profit > best.profit {
                    best = found;
                }
            } else {
                self.stats.skipped_duplicates += 1;
            }

            let axis = order[iteration % N];
            iteration += 1;
            cursors[axis] = match (cursors[axis], steps[axis]) {
                (Some(cursor), Some(step)) if step <= cursor => {
                    let next = cursor - step;
                    if next < cursor { Some(next) } else { None }
                }
                _ => None,
            };
        }

        debug!("greedy: solved {:?} for a profit of {:?} -- {:?}", constraint, best.profit, self.stats);
        best
    }

    /// The smallest positive dimension of an item on the given axis (if any)
    fn smallest_item(&self, axis: usize) -> Option<T> {
        self.dimensions.iter()
            .map(|d| d.get(axis))
            .filter(|x| *x > T::zero())
            .fold(None, |min, x| match min {
                Some(m) if m <= x => Some(m),
                _ => Some(x),
            })
    }

    /// Solves the problem exactly on all axes with the given candidates only
    fn solve_candidates(&mut self, constraint: &DimN<T, N>, mut candidates: Vec<usize>) -> Solution<DimN<T, N>, V, I> {
        // largest first
        candidates.sort_by(|&a, &b| self.dimensions[b].lex_cmp(&self.dimensions[a]));
        let dims = candidates.iter().map(|&i| self.dimensions[i]).collect();
        let vals = candidates.iter().map(|&i| self.values[i]).collect();
        let config = KnapsackConfig { force_use_limits: true, ..KnapsackConfig::default() };

        let mut exact = Knapsack::from_parts(dims, vals, candidates, config);
        let found = exact.solve(*constraint);
        let stats = exact.stats();
        self.stats.points             += stats.points;
        self.stats.skipped_duplicates += stats.skipped_duplicates;
        self.stats.skipped_by_limits  += stats.skipped_by_limits;
        self.stats.skipped_by_size    += stats.skipped_by_size;
        self.stats.skipped_dominated  += stats.skipped_dominated;

        Solution::from_items(found.ids, &self.dimensions, &self.values, &self.ids)
    }
}

/// The positions of the items an axis selects when its cursor is at the
/// given value. The search index of the axis is used whenever possible.
fn axis_selection<T: Scalar, V: Scalar>(knapsack: &mut Knapsack<Dim1<T>, V, usize>, cursor: T) -> Vec<usize> {
    match knapsack.search(&Dim1(cursor)) {
        Ok(solution) => solution.ids,
        Err(_) => knapsack.solve(Dim1(cursor)).ids,
    }
}

impl<T, V, I, const N: usize> KnapsackSolver<DimN<T, N>, V, I> for GreedyTopDown<T, V, I, N>
where
    T: Scalar,
    V: Scalar,
    I: Clone,
{
    fn solve(&mut self, constraint: DimN<T, N>) -> Solution<DimN<T, N>, V, I> {
        GreedyTopDown::solve(self, constraint)
    }
    fn is_exact(&self) -> bool {
        false
    }
    fn stats(&self) -> &SolveStats {
        &self.stats
    }
}
