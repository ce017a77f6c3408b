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

//! This module provides the configuration of the exact knapsack solver.

use derive_builder::Builder;

/// This is how you tune the exact solver, e.g. if you want it to retain a
/// search index or to skip the super-increasing fast path.
///
/// ```
/// # use kpareto::*;
/// let config = KnapsackConfigBuilder::default()
///     .prepare_search_index(true)
///     .use_ratio_sort(true)
///     .build()
///     .unwrap();
/// assert!(config.prepare_search_index);
/// assert!(config.use_limits);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct KnapsackConfig {
    /// This flag must be true (default) if you want the solver to detect
    /// super-increasing series and solve them without any frontier
    #[builder(default="true")]
    pub solve_super_increasing: bool,
    /// This flag must be true (default) if you want the limits solver to
    /// prune its frontier with the partial sum bounds
    #[builder(default="true")]
    pub use_limits: bool,
    /// When true, the limits solver is used even when the classifier found
    /// no safe bound (it then behaves as an exhaustive dp)
    #[builder(default="false")]
    pub force_use_limits: bool,
    /// When true, the pareto solver processes the items by profit to weight
    /// ratio instead of by weight
    #[builder(default="false")]
    pub use_ratio_sort: bool,
    /// When true, the dp stops as soon as a point fills the constraint
    /// exactly
    #[builder(default="false")]
    pub backtrace_when_size_reached: bool,
    /// When true, the pareto solver is used regardless of the shape of the
    /// instance
    #[builder(default="false")]
    pub force_use_pareto: bool,
    /// When true, the final frontier is kept so that any smaller constraint
    /// can be answered without solving again
    #[builder(default="false")]
    pub prepare_search_index: bool,
}

impl Default for KnapsackConfig {
    fn default() -> Self {
        KnapsackConfig {
            solve_super_increasing: true,
            use_limits: true,
            force_use_limits: false,
            use_ratio_sort: false,
            backtrace_when_size_reached: false,
            force_use_pareto: false,
            prepare_search_index: false,
        }
    }
}
