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

//! This module short-circuits the trivial instances.

use crate::{Classification, Dimension, Scalar, Solution};

/// Returns the exact solution of the instance when it is trivial. That is:
///
/// * when no item individually fits in the constraint (the solution is empty)
/// * when all the fitting items fit together (the solution takes them all)
/// * when the total of all items fits (idem)
///
/// It returns `None` when the instance is not trivial and must be solved.
pub fn check_corner_cases<D, V, I>(
    class: &Classification<D, V>,
    dimensions: &[D],
    values: &[V],
    ids: &[I],
) -> Option<Solution<D, V, I>>
where
    D: Dimension,
    V: Scalar,
    I: Clone,
{
    if class.items.is_empty() {
        return Some(Solution::empty());
    }
    if class.fitting_sum.le(&class.constraint) || class.total_sum.le(&class.constraint) {
        return Some(Solution::from_items(class.items.iter().copied(), dimensions, values, ids));
    }
    None
}
