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

//! This module defines the `Dimension` trait. A dimension is the (possibly
//! multi-axis) weight of an item, of a set of items or of the knapsack
//! constraint itself.

use std::{cmp::Ordering, fmt::Debug, hash::Hash, ops::{Add, Sub}};

use crate::Scalar;

/// This trait abstracts the arithmetic and the comparisons the solvers need
/// to perform on weights. It is implemented by `Dim1` (a single axis) and by
/// `DimN` (a fixed number of axes).
///
/// The comparisons are *partial*: on several axes two dimensions need not be
/// comparable. The relations provided here are the ones of the product order:
///
/// * `a.le(b)`     holds iff a <= b on every axis
/// * `a.lt(b)`     holds iff a <= b on every axis and a < b on at least one
/// * `a.all_lt(b)` holds iff a < b on every axis
///
/// On top of these, `lex_cmp` gives a total (lexicographic) order which is a
/// linear extension of the product order. It is used whenever the points of a
/// frontier must be kept sorted.
pub trait Dimension: Copy + Debug + Add<Output = Self> + Sub<Output = Self> {
    /// The type of the values stored on each axis
    type Elem: Scalar;
    /// An exact hashable representation of a dimension (see `Scalar::key`)
    type Key: Copy + Eq + Hash + Debug;
    /// The number of axes
    const AXES: usize;

    /// The empty dimension (zero on every axis)
    fn zero() -> Self;
    /// Returns the value on the given axis
    fn get(&self, axis: usize) -> Self::Elem;
    /// Returns the exact key of this dimension
    fn key(&self) -> Self::Key;

    /// Returns the axis-wise minimum of the two dimensions
    fn adjust_min(&self, other: &Self) -> Self;
    /// Returns the axis-wise maximum of the two dimensions
    fn adjust_max(&self, other: &Self) -> Self;
    /// Returns the half of this dimension (on every axis)
    fn half(&self) -> Self;

    /// True iff self <= other on every axis
    fn le(&self, other: &Self) -> bool;
    /// True iff self < other on every axis
    fn all_lt(&self, other: &Self) -> bool;
    /// True iff self <= other on every axis with at least one strict inequality
    fn lt(&self, other: &Self) -> bool {
        self.le(other) && !other.le(self)
    }
    /// True iff self and other are equal on every axis
    fn same(&self, other: &Self) -> bool {
        self.le(other) && other.le(self)
    }
    /// True iff this is the empty dimension
    fn is_zero(&self) -> bool {
        self.same(&Self::zero())
    }
    /// A total order compatible with `le`
    fn lex_cmp(&self, other: &Self) -> Ordering {
        for axis in 0..Self::AXES {
            let a = self.get(axis);
            let b = other.get(axis);
            match a.partial_cmp(&b) {
                Some(Ordering::Equal) | None => continue,
                Some(ord) => return ord,
            }
        }
        Ordering::Equal
    }
    /// Returns the profit to weight ratio used to sort the items. On more
    /// than one axis, the weight is the sum of all axes.
    fn ratio<V: Scalar>(&self, profit: V) -> f64 {
        let weight: f64 = (0..Self::AXES).map(|axis| self.get(axis).as_f64()).sum();
        profit.as_f64() / weight
    }
}
