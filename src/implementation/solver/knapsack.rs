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

//! This module provides the exact knapsack solver. It is a portfolio solver:
//! it classifies the instance and then dispatches it to the cheapest
//! algorithm that is able to solve it exactly.
//!
//! * trivial instances are answered right away
//! * super-increasing series are solved by binary searches
//! * the instances for which the partial sum bounds are safe go to the
//!   limits solver
//! * everything else goes to the pareto solver
//!
//! When asked to, the solver retains the final frontier of its last solve
//! as a search index. Any subsequent solve for a smaller constraint is then
//! answered from that index without solving anything again.

use log::debug;

use crate::{check_corner_cases, check_lengths, classify, solve_super_increasing, Dimension, Frontier,
    KnapsackConfig, KnapsackError, KnapsackSolver, LimitsOptions, LimitsSolver, ParetoOptions,
    ParetoSolver, Scalar, SearchIndex, Solution, SolvePath, SolveStats};

/// What the solver keeps from its last full solve
#[derive(Debug, Clone)]
enum Retained<D, V> {
    /// Nothing that can be reused
    Nothing,
    /// The frontier of the last solve
    Index(SearchIndex<D, V>),
    /// The last solve found a super-increasing series: any smaller
    /// constraint is solved again from the retained items
    SuperIncreasing { items: Vec<usize>, ascending: bool, constraint: D },
}

/// The exact multi-dimensional 0/1 knapsack solver.
///
/// The items are given as three parallel sequences: the dimension of each
/// item, its profit and an identifier of the caller's choosing. The solver
/// is then able to solve the problem for any constraint.
///
/// ```
/// # use kpareto::*;
/// let dims   = vec![Dim1(31), Dim1(10), Dim1(20), Dim1(19), Dim1(4), Dim1(3), Dim1(6)];
/// let values = vec![70, 20, 39, 37, 7, 5, 10];
/// let ids    = vec!['a', 'b', 'c', 'd', 'e', 'f', 'g'];
///
/// let mut solver = Knapsack::new(dims, values, ids).unwrap();
/// let solution   = solver.solve(Dim1(50));
/// assert_eq!(107, solution.profit);
/// assert_eq!(Dim1(50), solution.size);
/// ```
#[derive(Debug, Clone)]
pub struct Knapsack<D, V, I> {
    /// The dimension of each item
    dimensions: Vec<D>,
    /// The profit of each item
    values: Vec<V>,
    /// The caller given identifier of each item
    ids: Vec<I>,
    /// How the solver must behave
    config: KnapsackConfig,

    /// The constraint of the last full solve (if any)
    last_constraint: Option<D>,
    /// What can be reused from the last full solve
    retained: Retained<D, V>,
    /// The statistics of the last solve
    stats: SolveStats,
}

impl<D, V, I> Knapsack<D, V, I>
where
    D: Dimension,
    V: Scalar,
    I: Clone,
{
    /// Creates a solver with the default configuration. This fails when the
    /// three sequences are not of the same length.
    pub fn new(dimensions: Vec<D>, values: Vec<V>, ids: Vec<I>) -> Result<Self, KnapsackError> {
        Self::with_config(dimensions, values, ids, KnapsackConfig::default())
    }
    /// Creates a solver with the given configuration. This fails when the
    /// three sequences are not of the same length.
    pub fn with_config(dimensions: Vec<D>, values: Vec<V>, ids: Vec<I>, config: KnapsackConfig) -> Result<Self, KnapsackError> {
        check_lengths(dimensions.len(), values.len(), ids.len())?;
        Ok(Self::from_parts(dimensions, values, ids, config))
    }
    /// Creates a solver from sequences that are known to be consistent
    pub(crate) fn from_parts(dimensions: Vec<D>, values: Vec<V>, ids: Vec<I>, config: KnapsackConfig) -> Self {
        Knapsack {
            dimensions,
            values,
            ids,
            config,
            last_constraint: None,
            retained: Retained::Nothing,
            stats: SolveStats::default(),
        }
    }

    /// The configuration of this solver
    pub fn config(&self) -> &KnapsackConfig {
        &self.config
    }
    /// The statistics of the last solve
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }
    /// The number of items
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }
    /// True iff there is no item at all
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
    /// True iff a search index was retained by the last solve
    pub fn has_search_index(&self) -> bool {
        matches!(self.retained, Retained::Index(_))
    }

    /// Solves the problem for the given constraint.
    ///
    /// # Note:
    /// When the solver is configured to prepare a search index, the zero
    /// constraint stands for the constraint of the last full solve.
    pub fn solve(&mut self, constraint: D) -> Solution<D, V, I> {
        let constraint = match self.last_constraint {
            Some(last) if constraint.is_zero() && self.config.prepare_search_index => last,
            _ => constraint,
        };

        if let Some(solution) = self.reuse(&constraint) {
            return solution;
        }
        let solution = self.full_solve(constraint);
        debug!("solved {:?} with {} item(s) for a profit of {:?} -- {:?}",
            constraint, solution.len(), solution.profit, self.stats);
        solution
    }

    /// Returns the best solution of the retained search index for a
    /// constraint which must not exceed the indexed one.
    pub fn search(&self, constraint: &D) -> Result<Solution<D, V, I>, KnapsackError> {
        match &self.retained {
            Retained::Index(index) if index.covers(constraint) => Ok(self.lookup(index, constraint)),
            Retained::Index(index) => Err(KnapsackError::ConstraintExceedsIndex {
                requested: format!("{:?}", constraint),
                indexed: format!("{:?}", index.constraint()),
            }),
            _ => Err(KnapsackError::NoSearchIndex),
        }
    }

    fn lookup(&self, index: &SearchIndex<D, V>, constraint: &D) -> Solution<D, V, I> {
        match index.lookup(constraint) {
            None => Solution::empty(),
            Some(point) => Solution::from_items(index.items(point), &self.dimensions, &self.values, &self.ids),
        }
    }

    /// Answers from what was retained by the last full solve, when possible
    fn reuse(&mut self, constraint: &D) -> Option<Solution<D, V, I>> {
        let solution = match &self.retained {
            Retained::Index(index) if index.covers(constraint) => {
                debug!("answering {:?} from the search index", constraint);
                let solution = self.lookup(index, constraint);
                self.stats = SolveStats { path: Some(SolvePath::SearchIndex), iterations: 1, ..SolveStats::default() };
                solution
            }
            Retained::SuperIncreasing { items, ascending, constraint: solved } if constraint.le(solved) => {
                debug!("answering {:?} from the retained super-increasing series", constraint);
                let mut stats = SolveStats { path: Some(SolvePath::SuperIncreasing), ..SolveStats::default() };
                let picked = solve_super_increasing(constraint, items, &self.dimensions, *ascending, &mut stats);
                self.stats = stats;
                Solution::from_items(picked, &self.dimensions, &self.values, &self.ids)
            }
            _ => return None,
        };
        Some(solution)
    }

    /// Classifies the instance and dispatches it to the appropriate algorithm
    fn full_solve(&mut self, constraint: D) -> Solution<D, V, I> {
        let cfg = self.config;
        self.stats = SolveStats::default();
        self.retained = Retained::Nothing;
        self.last_constraint = Some(constraint);

        let can_try_dp = !cfg.force_use_pareto
            && (cfg.use_limits || cfg.solve_super_increasing || cfg.force_use_limits || cfg.backtrace_when_size_reached);
        if !can_try_dp {
            let items = (0..self.dimensions.len()).collect();
            return self.pareto(constraint, items);
        }

        let class = classify(&constraint, &self.dimensions, &self.values, cfg.force_use_limits);

        if let Some(solution) = check_corner_cases(&class, &self.dimensions, &self.values, &self.ids) {
            debug!("corner case: {} item(s) fit, worth {:?} together", class.count(), class.fitting_profit);
            self.stats.path = Some(SolvePath::CornerCase);
            return solution;
        }

        if cfg.solve_super_increasing && class.super_increasing {
            debug!("super-increasing series of {} item(s)", class.count());
            self.stats.path = Some(SolvePath::SuperIncreasing);
            let picked = solve_super_increasing(&class.constraint, &class.items, &self.dimensions, class.super_increasing_ascending, &mut self.stats);
            let solution = Solution::from_items(picked, &self.dimensions, &self.values, &self.ids);
            self.retained = Retained::SuperIncreasing { items: class.items, ascending: class.super_increasing_ascending, constraint };
            return solution;
        }

        if cfg.force_use_limits || cfg.backtrace_when_size_reached || class.can_use_partial_sums {
            // the bounds and the early exit would leave holes in the index
            let keep_all = cfg.prepare_search_index;
            let options  = LimitsOptions {
                use_limits: cfg.use_limits && !keep_all,
                drop_before_super_increasing: cfg.use_limits && !keep_all,
                stop_when_size_reached: cfg.backtrace_when_size_reached && !keep_all,
            };
            debug!("limits solver on {} item(s), bounds: {}", class.count(), options.use_limits && class.can_use_partial_sums);
            self.stats.path = Some(SolvePath::Limits);
            let frontier = LimitsSolver::new(&self.dimensions, &self.values, &class, options).solve(&mut self.stats);
            return self.finish(constraint, frontier);
        }

        self.pareto(constraint, class.items)
    }

    /// Solves the problem with the pareto solver using the given items only
    fn pareto(&mut self, constraint: D, mut items: Vec<usize>) -> Solution<D, V, I> {
        let cfg = self.config;
        let options = ParetoOptions {
            use_ratio_sort: cfg.use_ratio_sort,
            stop_when_size_reached: cfg.backtrace_when_size_reached && !cfg.prepare_search_index,
        };
        debug!("pareto solver on {} item(s), ratio sort: {}", items.len(), options.use_ratio_sort);
        self.stats.path = Some(SolvePath::Pareto);

        let solver = ParetoSolver::new(&self.dimensions, &self.values, options);
        solver.sort_items(&mut items);
        let frontier = solver.solve(&constraint, &items, &mut self.stats);
        self.finish(constraint, frontier)
    }

    /// Backtracks the best point of a frontier and keeps the frontier as a
    /// search index when configured to do so.
    fn finish(&mut self, constraint: D, frontier: Frontier<D, V>) -> Solution<D, V, I> {
        let Frontier { best, points, links } = frontier;
        let solution = Solution::from_items(links.items(best.link), &self.dimensions, &self.values, &self.ids);
        if self.config.prepare_search_index {
            let index = SearchIndex::build(constraint, points, links);
            debug!("search index of {} point(s) built for {:?}", index.len(), constraint);
            self.retained = Retained::Index(index);
        }
        solution
    }
}

impl<D, V, I> KnapsackSolver<D, V, I> for Knapsack<D, V, I>
where
    D: Dimension,
    V: Scalar,
    I: Clone,
{
    fn solve(&mut self, constraint: D) -> Solution<D, V, I> {
        Knapsack::solve(self, constraint)
    }
    /// The early exit on exact fill gives up the proof of optimality
    fn is_exact(&self) -> bool {
        !self.config.backtrace_when_size_reached
    }
    fn stats(&self) -> &SolveStats {
        &self.stats
    }
}

#[cfg(test)]
mod test_knapsack {
    use crate::*;

    fn solver(dims: &[u32], vals: &[u32], config: KnapsackConfig) -> Knapsack<Dim1<u32>, u32, usize> {
        let dims = dims.iter().copied().map(Dim1).collect();
        let ids  = (0..vals.len()).collect();
        Knapsack::with_config(dims, vals.to_vec(), ids, config).unwrap()
    }

    const W1: [u32; 6] = [56, 59, 80, 64, 75, 17];
    const V1: [u32; 6] = [50, 50, 64, 46, 50, 5];

    #[test]
    fn length_mismatch_is_refused() {
        let err = Knapsack::new(vec![Dim1(1_u32), Dim1(2)], vec![1_u32], vec![0, 1]).unwrap_err();
        assert_eq!(KnapsackError::LengthMismatch { dimensions: 2, values: 1, ids: 2 }, err);
    }

    #[test]
    fn unsorted_instance_goes_to_pareto() {
        let mut s = solver(&W1, &V1, KnapsackConfig::default());
        let sol = s.solve(Dim1(190));
        assert_eq!(150, sol.profit);
        assert_eq!(Dim1(190), sol.size);
        assert_eq!(Some(SolvePath::Pareto), s.stats().path);
    }

    #[test]
    fn corner_case_when_everything_fits() {
        let mut s = solver(&W1, &V1, KnapsackConfig::default());
        let sol = s.solve(Dim1(1000));
        assert_eq!(265, sol.profit);
        assert_eq!(6, sol.len());
        assert_eq!(Some(SolvePath::CornerCase), s.stats().path);
    }

    #[test]
    fn super_increasing_series_goes_to_the_fast_path() {
        let series = [1, 2, 5, 21, 69, 189, 376, 919];
        let mut s = solver(&series, &series, KnapsackConfig::default());
        let sol = s.solve(Dim1(662));
        assert_eq!(662, sol.profit);
        assert_eq!(Some(SolvePath::SuperIncreasing), s.stats().path);

        // a smaller constraint reuses the retained series
        let sol = s.solve(Dim1(100));
        assert_eq!(98, sol.profit);
        assert_eq!(Some(SolvePath::SuperIncreasing), s.stats().path);
        assert_eq!(0, s.stats().points);
    }

    #[test]
    fn monotone_instance_goes_to_limits() {
        let dims = [15, 12, 11, 10, 9, 7, 5, 3, 2];
        let mut s = solver(&dims, &dims, KnapsackConfig::default());
        let sol = s.solve(Dim1(40));
        assert_eq!(40, sol.profit);
        assert_eq!(Some(SolvePath::Limits), s.stats().path);
    }

    #[test]
    fn forced_pareto() {
        let dims = [15, 12, 11, 10, 9, 7, 5, 3, 2];
        let cfg  = KnapsackConfig { force_use_pareto: true, ..KnapsackConfig::default() };
        let mut s = solver(&dims, &dims, cfg);
        assert_eq!(40, s.solve(Dim1(40)).profit);
        assert_eq!(Some(SolvePath::Pareto), s.stats().path);
    }

    #[test]
    fn forced_limits() {
        let cfg = KnapsackConfig { force_use_limits: true, ..KnapsackConfig::default() };
        let mut s = solver(&W1, &V1, cfg);
        assert_eq!(150, s.solve(Dim1(190)).profit);
        assert_eq!(Some(SolvePath::Limits), s.stats().path);
    }

    #[test]
    fn search_index_answers_smaller_constraints() {
        let cfg = KnapsackConfig { prepare_search_index: true, ..KnapsackConfig::default() };
        let mut s = solver(&W1, &V1, cfg);
        assert_eq!(150, s.solve(Dim1(190)).profit);
        assert!(s.has_search_index());

        let sol = s.solve(Dim1(120));
        assert_eq!(Some(SolvePath::SearchIndex), s.stats().path);
        assert_eq!(100, sol.profit);
        assert_eq!(Dim1(115), sol.size);

        assert_eq!(100, s.search(&Dim1(120)).unwrap().profit);
        assert!(s.search(&Dim1(10)).unwrap().is_empty());
    }

    #[test]
    fn zero_constraint_reuses_the_last_one() {
        let cfg = KnapsackConfig { prepare_search_index: true, ..KnapsackConfig::default() };
        let mut s = solver(&W1, &V1, cfg);
        s.solve(Dim1(190));
        let sol = s.solve(Dim1(0));
        assert_eq!(150, sol.profit);
        assert_eq!(Some(SolvePath::SearchIndex), s.stats().path);
    }

    #[test]
    fn zero_constraint_without_index_selects_nothing() {
        let mut s = solver(&W1, &V1, KnapsackConfig::default());
        s.solve(Dim1(190));
        assert!(s.solve(Dim1(0)).is_empty());
    }

    #[test]
    fn search_errors() {
        let cfg = KnapsackConfig { prepare_search_index: true, ..KnapsackConfig::default() };
        let mut s = solver(&W1, &V1, cfg);
        assert_eq!(Err(KnapsackError::NoSearchIndex), s.search(&Dim1(10)));
        s.solve(Dim1(190));
        assert_eq!(
            Err(KnapsackError::ConstraintExceedsIndex { requested: "Dim1(191)".to_string(), indexed: "Dim1(190)".to_string() }),
            s.search(&Dim1(191)));
    }

    #[test]
    fn larger_constraint_triggers_a_new_solve() {
        let cfg = KnapsackConfig { prepare_search_index: true, ..KnapsackConfig::default() };
        let mut s = solver(&W1, &V1, cfg);
        s.solve(Dim1(120));
        let sol = s.solve(Dim1(190));
        assert_eq!(150, sol.profit);
        assert_eq!(Some(SolvePath::Pareto), s.stats().path);
    }

    #[test]
    fn ids_are_the_caller_ones() {
        let dims = vec![Dim1(31_u32), Dim1(10), Dim1(20), Dim1(19), Dim1(4), Dim1(3), Dim1(6)];
        let vals = vec![70_u32, 20, 39, 37, 7, 5, 10];
        let ids  = vec!["a", "b", "c", "d", "e", "f", "g"];
        let mut s = Knapsack::new(dims, vals, ids).unwrap();
        let mut sol = s.solve(Dim1(50)).ids;
        sol.sort_unstable();
        assert_eq!(vec!["a", "d"], sol);
    }

    #[test]
    fn exact_unless_early_exit() {
        let s = solver(&W1, &V1, KnapsackConfig::default());
        assert!(KnapsackSolver::is_exact(&s));
        let cfg = KnapsackConfig { backtrace_when_size_reached: true, ..KnapsackConfig::default() };
        let s = solver(&W1, &V1, cfg);
        assert!(!KnapsackSolver::is_exact(&s));
    }
}
