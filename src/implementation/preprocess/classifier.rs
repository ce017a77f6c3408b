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

//! This module provides the classifier: the preprocessing step which looks at
//! the shape of an instance in order to decide which algorithm should be used
//! to solve it. It also derives the partial sums that the limits solver needs
//! in order to prune its frontier.

use crate::{Dimension, Scalar};

/// Everything the classifier has learned about an instance.
#[derive(Debug, Clone)]
pub struct Classification<D, V> {
    /// The constraint, clamped so that it never exceeds the sum of all items
    pub constraint: D,
    /// The positions of the items which individually fit in the constraint
    /// (in the order of the input)
    pub items: Vec<usize>,
    /// The sum of the dimensions of the fitting items
    pub fitting_sum: D,
    /// The sum of the profits of the fitting items
    pub fitting_profit: V,
    /// The sum of the dimensions of all items
    pub total_sum: D,
    /// The axis-wise maximum of the dimensions of the fitting items
    pub widest: D,
    /// True iff the fitting items are sorted by non decreasing dimension
    pub ascending: bool,
    /// True iff the fitting items are sorted by non increasing dimension
    pub descending: bool,
    /// True iff the fitting items form a super-increasing series (both in
    /// dimension and in profit) in the direction of their ordering
    pub super_increasing: bool,
    /// The direction in which the series is super-increasing: from the
    /// front (true) or from the back (false). Equal dimensions make the
    /// items both ascending and descending, hence this flag.
    pub super_increasing_ascending: bool,
    /// True iff the partial sum bounds may be used by the limits solver
    pub can_use_partial_sums: bool,
    /// The positions of the fitting items, in the order in which the limits
    /// solver must process them
    pub order: Vec<usize>,
    /// `partial_sums[j]` is the sum of the dimensions of the items processed
    /// after `order[j]`. Empty when no bound is to be used.
    pub partial_sums: Vec<D>,
    /// `super_increasing_items[j]` tells whether `order[j]` is at least as
    /// large and as profitable as all the items processed after it. Empty
    /// when no bound is to be used.
    pub super_increasing_items: Vec<bool>,
}

impl<D: Dimension, V: Scalar> Classification<D, V> {
    /// The number of items which individually fit in the constraint
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

/// Running information gathered while scanning the items in one direction
struct Scan<D, V> {
    dims: D,
    profit: V,
    super_increasing: bool,
    super_increasing_values: bool,
}
impl<D: Dimension, V: Scalar> Scan<D, V> {
    fn new() -> Self {
        Scan { dims: D::zero(), profit: V::zero(), super_increasing: true, super_increasing_values: true }
    }
    fn visit(&mut self, dims: D, profit: V) {
        if !self.dims.le(&dims) {
            self.super_increasing = false;
        }
        if profit < self.profit {
            self.super_increasing_values = false;
        }
        self.dims   = self.dims + dims;
        self.profit = self.profit + profit;
    }
}

/// Scans the instance and classifies it.
///
/// The scan runs simultaneously from the front and from the back of the
/// input so that the super-increasing property is detected in both
/// directions at once. Only the items that individually fit in the
/// constraint are taken into account (the others can never be selected).
///
/// # Note:
/// The partial sum tables are only computed when the bounds can be used, or
/// when `force_use_limits` asks for the limits solver regardless of the shape
/// of the instance.
pub fn classify<D, V>(constraint: &D, dimensions: &[D], values: &[V], force_use_limits: bool) -> Classification<D, V>
where
    D: Dimension,
    V: Scalar,
{
    let count = dimensions.len();

    let mut front = Scan::new();
    let mut back  = Scan::new();

    let mut total_sum      = D::zero();
    let mut fitting_sum    = D::zero();
    let mut fitting_profit = V::zero();
    let mut widest         = D::zero();
    let mut items          = Vec::with_capacity(count);

    let mut ascending           = true;
    let mut descending          = true;
    let mut values_ascending    = true;
    let mut values_descending   = true;
    let mut all_values_equal    = true;
    let mut values_equal_dims   = true;

    let mut previous: Option<usize> = None;

    for i in 0..count {
        let j = count - 1 - i;

        if dimensions[j].le(constraint) {
            back.visit(dimensions[j], values[j]);
        }

        let dims   = dimensions[i];
        let profit = values[i];
        total_sum  = total_sum + dims;

        if !dims.le(constraint) {
            continue;
        }
        front.visit(dims, profit);

        if let Some(p) = previous {
            let (pdims, pprofit) = (dimensions[p], values[p]);
            ascending         &= pdims.le(&dims);
            descending        &= dims.le(&pdims);
            values_ascending  &= pprofit <= profit;
            values_descending &= profit <= pprofit;
            all_values_equal  &= pprofit.key() == profit.key();
        }
        values_equal_dims &= dims.get(0).as_f64() == profit.as_f64();

        fitting_sum    = fitting_sum + dims;
        fitting_profit = fitting_profit + profit;
        widest         = widest.adjust_max(&dims);
        items.push(i);
        previous = Some(i);
    }

    let nonempty = !items.is_empty();

    let si_asc  = nonempty && ascending  && front.super_increasing && front.super_increasing_values;
    let si_desc = nonempty && descending && back.super_increasing  && back.super_increasing_values;

    let can_use_partial_sums = nonempty && (
           all_values_equal
        || values_equal_dims
        || (front.super_increasing_values && values_ascending)
        || (back.super_increasing_values  && values_descending)
        || (ascending  && values_ascending)
        || (descending && values_descending));

    // the largest items go first
    let mut order = items.clone();
    if ascending {
        order.reverse();
    }

    let (partial_sums, super_increasing_items) = if can_use_partial_sums || force_use_limits {
        remaining_sums(&order, dimensions, values)
    } else {
        (vec![], vec![])
    };

    Classification {
        constraint: constraint.adjust_min(&total_sum),
        items,
        fitting_sum,
        fitting_profit,
        total_sum,
        widest,
        ascending,
        descending,
        super_increasing: si_asc || si_desc,
        super_increasing_ascending: si_asc,
        can_use_partial_sums,
        order,
        partial_sums,
        super_increasing_items,
    }
}

/// Computes the sums of the items remaining after each position of the given
/// processing order, along with the flags telling which items are at least
/// as large (and profitable) as everything that remains after them.
fn remaining_sums<D, V>(order: &[usize], dimensions: &[D], values: &[V]) -> (Vec<D>, Vec<bool>)
where
    D: Dimension,
    V: Scalar,
{
    let n = order.len();
    let mut sums  = vec![D::zero(); n];
    let mut flags = vec![false; n];

    let mut rest_dims   = D::zero();
    let mut rest_profit = V::zero();
    for j in (0..n).rev() {
        let item = order[j];
        sums[j]  = rest_dims;
        flags[j] = rest_dims.le(&dimensions[item]) && rest_profit <= values[item];

        rest_dims   = rest_dims + dimensions[item];
        rest_profit = rest_profit + values[item];
    }
    (sums, flags)
}
