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

//! This module provides the pareto frontier solver: the general fallback which
//! works for any instance, whatever its shape and number of axes.
//!
//! The frontier holds the pareto optimal points only. Point A is dominated by
//! point B when B is no larger than A on any axis and B is at least as
//! profitable as A. A dominated point can never lead to a better solution
//! than the point dominating it, so it is discarded as soon as it appears.

use std::cmp::Ordering;

use fxhash::FxHashSet;
use log::trace;

use crate::{Dimension, Frontier, LinkTable, Scalar, SolveStats, WeightPoint};

/// The options of the pareto solver
#[derive(Debug, Copy, Clone)]
pub struct ParetoOptions {
    /// Sort the items by profit to weight ratio (instead of by weight)
    pub use_ratio_sort: bool,
    /// Stop as soon as a point fills the constraint exactly
    pub stop_when_size_reached: bool,
}

/// The pareto frontier dynamic programming solver.
pub struct ParetoSolver<'a, D, V> {
    /// The dimension of each item of the input
    dimensions: &'a [D],
    /// The profit of each item of the input
    values: &'a [V],
    /// The configuration of the solve
    options: ParetoOptions,
}

impl<'a, D, V> ParetoSolver<'a, D, V>
where D: Dimension,
      V: Scalar,
{
    pub fn new(dimensions: &'a [D], values: &'a [V], options: ParetoOptions) -> Self {
        Self { dimensions, values, options }
    }

    /// Sorts the given items in the order they are to be processed. That is,
    /// by increasing profit to weight ratio when the ratio sort is enabled and
    /// by increasing dimension otherwise.
    pub fn sort_items(&self, items: &mut [usize]) {
        let ratio = |i: usize| self.dimensions[i].ratio(self.values[i]);
        if self.options.use_ratio_sort {
            items.sort_by(|&a, &b| {
                ratio(a).total_cmp(&ratio(b))
                    .then_with(|| self.values[a].partial_cmp(&self.values[b]).unwrap_or(Ordering::Equal))
                    .then_with(|| self.dimensions[a].lex_cmp(&self.dimensions[b]))
            });
        } else {
            items.sort_by(|&a, &b| {
                self.dimensions[a].lex_cmp(&self.dimensions[b])
                    .then_with(|| ratio(a).total_cmp(&ratio(b)))
            });
        }
    }

    /// Solves the problem for the given constraint using the given items (in
    /// the given order).
    pub fn solve(&self, constraint: &D, items: &[usize], stats: &mut SolveStats) -> Frontier<D, V> {
        let mut links    = LinkTable::new();
        let mut seen     = FxHashSet::default();
        let mut best     = WeightPoint::empty();
        let mut frontier = vec![WeightPoint::<D, V>::empty()];

        for &item in items {
            let dims   = self.dimensions[item];
            let profit = self.values[item];
            stats.iterations += frontier.len() + 1;

            let mut fresh = Vec::with_capacity(frontier.len());
            for old in frontier.iter() {
                let mut point = old.extend(dims, profit);
                if !point.dims.le(constraint) {
                    stats.skipped_by_size += 1;
                    continue;
                }
                if !seen.insert(point.key()) {
                    stats.skipped_duplicates += 1;
                    continue;
                }
                point.link = Some(links.push(item, old.link));
                stats.points += 1;

                if self.improves(&best, &point) {
                    best = point;
                }
                fresh.push(point);
            }

            let before = frontier.len() + fresh.len();
            frontier = if D::AXES == 1 {
                merge_staircase(&frontier, &fresh)
            } else {
                merge_dominance(frontier, fresh)
            };
            stats.skipped_dominated += before - frontier.len();

            trace!("pareto: item {item} processed, {} points in the frontier", frontier.len());

            if self.options.stop_when_size_reached && best.dims.same(constraint) {
                break;
            }
        }

        Frontier { best, points: frontier, links }
    }

    /// Tells whether `point` should replace `best` as the best point so far.
    /// On equal profit the last point wins, unless the ratio sort is used,
    /// in which case the point with the larger dimension wins.
    fn improves(&self, best: &WeightPoint<D, V>, point: &WeightPoint<D, V>) -> bool {
        if best.profit > point.profit {
            false
        } else if self.options.use_ratio_sort && best.profit == point.profit {
            best.dims.lt(&point.dims)
        } else {
            true
        }
    }
}

/// Merges two single axis staircases (points sorted by dimension with
/// strictly increasing profits) into the staircase of the pareto optimal
/// points of their union.
///
/// At each step, the next point of each list that beats the best profit
/// emitted so far is found with a binary search. The smallest of the two is
/// emitted (the most profitable one when they weigh the same).
fn merge_staircase<D, V>(old: &[WeightPoint<D, V>], new: &[WeightPoint<D, V>]) -> Vec<WeightPoint<D, V>>
where D: Dimension,
      V: Scalar,
{
    let mut result = Vec::with_capacity(old.len() + new.len());
    let mut floor: Option<V> = None;
    let mut i = 0;
    let mut j = 0;

    loop {
        i += first_above(&old[i..], floor);
        j += first_above(&new[j..], floor);

        let point = match (old.get(i), new.get(j)) {
            (None, None) => break,
            (Some(_), None) => {
                result.extend_from_slice(&old[i..]);
                break;
            }
            (None, Some(_)) => {
                result.extend_from_slice(&new[j..]);
                break;
            }
            (Some(o), Some(n)) => {
                let take_old = o.dims.lt(&n.dims) || (o.dims.same(&n.dims) && o.profit > n.profit);
                if take_old {
                    i += 1;
                    *o
                } else {
                    j += 1;
                    *n
                }
            }
        };
        floor = Some(point.profit);
        result.push(point);
    }
    result
}

/// Returns the position of the first point of a staircase whose profit is
/// strictly larger than the floor (or the length of the staircase if there
/// is none).
fn first_above<D, V: Scalar>(stairs: &[WeightPoint<D, V>], floor: Option<V>) -> usize {
    match floor {
        None => 0,
        Some(f) => stairs.partition_point(|p| p.profit <= f),
    }
}

/// Merges two frontiers made of points with several axes, keeping only the
/// points that are not dominated by any other.
fn merge_dominance<D, V>(mut old: Vec<WeightPoint<D, V>>, new: Vec<WeightPoint<D, V>>) -> Vec<WeightPoint<D, V>>
where D: Dimension,
      V: Scalar,
{
    old.extend(new);
    // a point can only be dominated by a point that comes before it in this
    // order (the sort is stable: on ties, the older point is kept)
    old.sort_by(|a, b| a.frontier_cmp(b));

    let mut kept: Vec<WeightPoint<D, V>> = Vec::with_capacity(old.len());
    for point in old {
        if !kept.iter().any(|k| k.dominates(&point)) {
            kept.push(point);
        }
    }
    kept
}
