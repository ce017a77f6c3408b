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

//! The multi axis dimension.

use std::ops::{Add, Sub};

use crate::{Dimension, Scalar};

/// A dimension made of `N` axes. Two such dimensions are compared with the
/// product order: `a <= b` iff `a[i] <= b[i]` for every axis `i`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DimN<T, const N: usize>(pub [T; N]);

impl<T: Scalar, const N: usize> DimN<T, N> {
    /// Builds a new dimension where every axis is computed by `f`.
    #[inline]
    fn with<F: FnMut(usize) -> T>(f: F) -> Self {
        DimN(std::array::from_fn(f))
    }
}

impl<T: Scalar, const N: usize> Add for DimN<T, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::with(|i| self.0[i] + rhs.0[i])
    }
}
impl<T: Scalar, const N: usize> Sub for DimN<T, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::with(|i| self.0[i] - rhs.0[i])
    }
}

impl<T: Scalar, const N: usize> Dimension for DimN<T, N> {
    type Elem = T;
    type Key  = [u64; N];
    const AXES: usize = N;

    #[inline]
    fn zero() -> Self {
        DimN([T::zero(); N])
    }
    #[inline]
    fn get(&self, axis: usize) -> T {
        self.0[axis]
    }
    #[inline]
    fn key(&self) -> [u64; N] {
        std::array::from_fn(|i| self.0[i].key())
    }
    #[inline]
    fn adjust_min(&self, other: &Self) -> Self {
        Self::with(|i| self.0[i].min_of(other.0[i]))
    }
    #[inline]
    fn adjust_max(&self, other: &Self) -> Self {
        Self::with(|i| self.0[i].max_of(other.0[i]))
    }
    #[inline]
    fn half(&self) -> Self {
        Self::with(|i| self.0[i].half())
    }
    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a <= b)
    }
    #[inline]
    fn all_lt(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a < b)
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for DimN<T, N> {
    fn from(value: [T; N]) -> Self {
        DimN(value)
    }
}

#[cfg(test)]
mod test_dimn {
    use std::cmp::Ordering;
    use crate::*;

    #[test]
    fn arithmetic_is_axis_wise() {
        assert_eq!(DimN([4, 6]), DimN([1, 2]) + DimN([3, 4]));
        assert_eq!(DimN([2, 2]), DimN([3, 4]) - DimN([1, 2]));
        assert_eq!(DimN([1, 3]), DimN([3, 7]).half());
        assert_eq!(DimN([1, 4]), DimN([1, 7]).adjust_min(&DimN([3, 4])));
        assert_eq!(DimN([3, 7]), DimN([1, 7]).adjust_max(&DimN([3, 4])));
    }

    #[test]
    fn le_holds_iff_every_axis_is_le() {
        assert!(DimN([1, 2]).le(&DimN([1, 2])));
        assert!(DimN([1, 2]).le(&DimN([2, 2])));
        assert!(!DimN([1, 3]).le(&DimN([2, 2])));
    }

    #[test]
    fn lt_requires_one_strict_axis() {
        assert!(!DimN([1, 2]).lt(&DimN([1, 2])));
        assert!(DimN([1, 2]).lt(&DimN([1, 3])));
        assert!(!DimN([1, 2]).all_lt(&DimN([1, 3])));
        assert!(DimN([1, 2]).all_lt(&DimN([2, 3])));
    }

    #[test]
    fn incomparable_dimensions_are_neither_le_nor_ge() {
        let a = DimN([1, 3]);
        let b = DimN([2, 2]);
        assert!(!a.le(&b));
        assert!(!b.le(&a));
        assert!(!a.same(&b));
    }

    #[test]
    fn lex_cmp_extends_the_product_order() {
        assert_eq!(Ordering::Less,    DimN([1, 3]).lex_cmp(&DimN([2, 2])));
        assert_eq!(Ordering::Greater, DimN([2, 3]).lex_cmp(&DimN([2, 2])));
        assert_eq!(Ordering::Equal,   DimN([2, 2]).lex_cmp(&DimN([2, 2])));
    }

    #[test]
    fn keys_identify_the_dimensions() {
        assert_eq!(DimN([1_u32, 2]).key(), DimN([1_u32, 2]).key());
        assert_ne!(DimN([1_u32, 2]).key(), DimN([2_u32, 1]).key());
    }

    #[test]
    fn ratio_uses_the_sum_of_axes() {
        assert_eq!(2.0, DimN([2_u32, 3]).ratio(10_u32));
    }
}
