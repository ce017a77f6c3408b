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

//! This module provides the limit pruned dynamic programming solver.
//!
//! The frontier of this solver is one single queue that holds the points
//! sorted by dimension. Each item is processed in one sweep: every point of
//! the previous cycle is popped from the front of the queue, pushed back at
//! its end (unless it can be proved useless) along with its extension by the
//! item. The extensions are parked in a second queue until they can be pushed
//! in order, so that the main queue remains sorted after each sweep.
//!
//! Whenever the classifier established it is safe to do so, the partial sums
//! of the items that remain to be processed are used to discard the points
//! which have no chance to be part of an optimal solution.

use std::{cmp::Ordering, collections::VecDeque};

use fxhash::FxHashSet;
use log::trace;

use crate::{Classification, Dimension, LinkId, LinkTable, PointKey, Scalar, SolveStats, WeightPoint};

/// What a dynamic programming solver leaves behind once it is done.
#[derive(Debug, Clone)]
pub struct Frontier<D, V> {
    /// The most profitable point that was found
    pub best: WeightPoint<D, V>,
    /// All the points that were still alive at the end of the solve
    pub points: Vec<WeightPoint<D, V>>,
    /// The provenance of all these points
    pub links: LinkTable,
}

/// The options of the limits solver
#[derive(Debug, Copy, Clone)]
pub struct LimitsOptions {
    /// Use the partial sum bounds (when the classifier allows it)
    pub use_limits: bool,
    /// Drop the old points when the current item is locally super-increasing
    pub drop_before_super_increasing: bool,
    /// Stop as soon as a point fills the constraint exactly
    pub stop_when_size_reached: bool,
}

/// The limit pruned dynamic programming solver.
///
/// # Note:
/// The bounds assume non negative dimensions and profits, and an instance
/// that is not a corner case (the fitting items do not all fit together).
pub struct LimitsSolver<'a, D, V>
where D: Dimension,
      V: Scalar,
{
    /// The dimension of each item of the input
    dimensions: &'a [D],
    /// The profit of each item of the input
    values: &'a [V],
    /// The shape of the instance (filtered items, order, partial sums)
    class: &'a Classification<D, V>,
    /// The configuration of the solve
    options: LimitsOptions,

    /// The points of the frontier, sorted by dimension
    queue: VecDeque<WeightPoint<D, V>>,
    /// The points that have been generated during the current sweep but
    /// could not be pushed on the queue yet without breaking its order
    greater: VecDeque<WeightPoint<D, V>>,
    /// The keys of the points currently held by `queue` and `greater`
    seen: FxHashSet<PointKey<D::Key>>,
    /// The provenance of all admitted points
    links: LinkTable,
    /// The best point so far
    best: WeightPoint<D, V>,
}

impl<'a, D, V> LimitsSolver<'a, D, V>
where D: Dimension,
      V: Scalar,
{
    pub fn new(dimensions: &'a [D], values: &'a [V], class: &'a Classification<D, V>, options: LimitsOptions) -> Self {
        Self {
            dimensions,
            values,
            class,
            options,
            queue: VecDeque::new(),
            greater: VecDeque::new(),
            seen: FxHashSet::default(),
            links: LinkTable::new(),
            best: WeightPoint::empty(),
        }
    }

    /// Runs the dynamic programming over all the items of the classification
    /// and returns the resulting frontier.
    pub fn solve(mut self, stats: &mut SolveStats) -> Frontier<D, V> {
        let constraint = self.class.constraint;
        let use_bounds = self.options.use_limits
            && self.class.can_use_partial_sums
            && self.class.partial_sums.len() == self.class.order.len();

        for step in 0..self.class.order.len() {
            let item = self.class.order[step];

            // a point that still has room for all the remaining items plus
            // the widest item is not maximal: it cannot be optimal
            let reserve = if use_bounds {
                Some(self.class.partial_sums[step] + self.class.widest)
            } else {
                None
            };
            let before_super_increasing = use_bounds
                && self.options.drop_before_super_increasing
                && self.class.super_increasing_items[step];

            self.sweep(item, &constraint, reserve, before_super_increasing, stats);

            trace!("limits: item {item} processed, {} points in the frontier", self.queue.len());

            if self.options.stop_when_size_reached && self.best.dims.same(&constraint) {
                break;
            }
        }

        Frontier {
            best: self.best,
            points: self.queue.into_iter().collect(),
            links: self.links,
        }
    }

    /// Processes one item: extends all the points of the previous cycle and
    /// merges the extensions with the points that are retained.
    fn sweep(&mut self, item: usize, constraint: &D, reserve: Option<D>, before_super_increasing: bool, stats: &mut SolveStats) {
        let dims   = self.dimensions[item];
        let profit = self.values[item];

        let previous = self.queue.len();
        stats.iterations += previous + 1;

        // the item taken alone
        let alone = WeightPoint::unlinked(dims, profit);
        self.offer(alone, item, None, constraint, reserve, stats);

        for _ in 0..previous {
            let Some(old) = self.queue.pop_front() else { break };

            while self.greater.front().map_or(false, |g| g.frontier_cmp(&old) == Ordering::Less) {
                if let Some(g) = self.greater.pop_front() {
                    self.queue.push_back(g);
                }
            }

            let extended = old.extend(dims, profit);

            let useless = reserve.map_or(false, |r| (old.dims + r).all_lt(constraint))
                || (before_super_increasing && extended.dims.le(constraint));
            if useless {
                // the key may come back later through another path
                self.seen.remove(&old.key());
                stats.skipped_by_limits += 1;
            } else {
                self.queue.push_back(old);
            }

            self.offer(extended, item, old.link, constraint, reserve, stats);
        }

        self.queue.extend(self.greater.drain(..));
    }

    /// Admits a new point in the frontier unless it exceeds the constraint,
    /// is pruned by the bounds or is a duplicate.
    fn offer(&mut self, mut point: WeightPoint<D, V>, item: usize, parent: Option<LinkId>, constraint: &D, reserve: Option<D>, stats: &mut SolveStats) {
        if !point.dims.le(constraint) {
            stats.skipped_by_size += 1;
            return;
        }
        if let Some(r) = reserve {
            if (point.dims + r).all_lt(constraint) {
                stats.skipped_by_limits += 1;
                return;
            }
        }
        if !self.seen.insert(point.key()) {
            stats.skipped_duplicates += 1;
            return;
        }

        point.link = Some(self.links.push(item, parent));
        stats.points += 1;

        // on equal profit, the larger dimension wins
        if point.profit > self.best.profit
            || (point.profit == self.best.profit && self.best.dims.lt(&point.dims))
        {
            self.best = point;
        }

        self.greater.push_back(point);
    }
}

#[cfg(test)]
mod test_limits {
    use crate::*;

    const NO_BOUNDS: LimitsOptions = LimitsOptions {
        use_limits: false,
        drop_before_super_increasing: false,
        stop_when_size_reached: false,
    };
    const BOUNDS: LimitsOptions = LimitsOptions {
        use_limits: true,
        drop_before_super_increasing: true,
        stop_when_size_reached: false,
    };

    fn run(constraint: u32, dims: &[u32], vals: &[u32], options: LimitsOptions) -> (u32, Vec<usize>, SolveStats) {
        let dims  = dims.iter().copied().map(Dim1).collect::<Vec<_>>();
        let class = classify(&Dim1(constraint), &dims, vals, true);
        let mut stats = SolveStats::default();
        let front = LimitsSolver::new(&dims, vals, &class, options).solve(&mut stats);
        let mut items = front.links.items(front.best.link).collect::<Vec<_>>();
        items.sort_unstable();
        (front.best.profit, items, stats)
    }

    #[test]
    fn equal_profits_prefer_more_items() {
        let (profit, items, _) = run(8, &[5, 4, 3, 1], &[1, 1, 1, 1], BOUNDS);
        assert_eq!(3, profit);
        assert_eq!(3, items.len());
    }

    #[test]
    fn without_bounds_it_is_an_exhaustive_dp() {
        let (profit, items, _) = run(190, &[56, 59, 80, 64, 75, 17], &[50, 50, 64, 46, 50, 5], NO_BOUNDS);
        assert_eq!(150, profit);
        assert_eq!(vec![0, 1, 4], items);
    }

    #[test]
    fn bounds_are_sound_on_subset_sums() {
        let dims = [15, 12, 11, 10, 9, 7, 5, 3, 2];
        for c in 1..=70 {
            let (with, _, _)    = run(c, &dims, &dims, BOUNDS);
            let (without, _, _) = run(c, &dims, &dims, NO_BOUNDS);
            assert_eq!(without, with, "constraint {c}");
        }
    }

    #[test]
    fn bounds_skip_points() {
        let dims = [15, 12, 11, 10, 9, 7, 5, 3, 2];
        let (_, _, stats) = run(40, &dims, &dims, BOUNDS);
        assert!(stats.skipped_by_limits > 0);
    }

    #[test]
    fn duplicates_are_skipped() {
        let (profit, _, stats) = run(6, &[2, 2, 2, 2], &[1, 1, 1, 1], NO_BOUNDS);
        assert_eq!(3, profit);
        assert!(stats.skipped_duplicates > 0);
    }

    #[test]
    fn frontier_stays_sorted() {
        let dims  = [7, 3, 5, 1].iter().copied().map(Dim1).collect::<Vec<_>>();
        let vals  = [7_u32, 4, 1, 3];
        let class = classify(&Dim1(12), &dims, &vals, true);
        let mut stats = SolveStats::default();
        let front = LimitsSolver::new(&dims, &vals, &class, NO_BOUNDS).solve(&mut stats);
        for w in front.points.windows(2) {
            assert_ne!(std::cmp::Ordering::Greater, w[0].frontier_cmp(&w[1]));
        }
    }

    #[test]
    fn stops_when_the_constraint_is_filled() {
        let options = LimitsOptions { stop_when_size_reached: true, ..NO_BOUNDS };
        let (profit, _, stats) = run(10, &[10, 4, 3, 2, 1], &[10, 4, 3, 2, 1], options);
        assert_eq!(10, profit);
        assert_eq!(1, stats.points);
    }
}
