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

//! The single axis dimension. On one axis the product order is total, which
//! lets the pareto solver and the search index use binary searches.

use std::ops::{Add, Sub};

use crate::{Dimension, Scalar};

/// A dimension made of one single axis.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Dim1<T>(pub T);

impl<T: Scalar> Add for Dim1<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Dim1(self.0 + rhs.0)
    }
}
impl<T: Scalar> Sub for Dim1<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Dim1(self.0 - rhs.0)
    }
}

impl<T: Scalar> Dimension for Dim1<T> {
    type Elem = T;
    type Key  = u64;
    const AXES: usize = 1;

    #[inline]
    fn zero() -> Self {
        Dim1(T::zero())
    }
    #[inline]
    fn get(&self, _axis: usize) -> T {
        self.0
    }
    #[inline]
    fn key(&self) -> u64 {
        self.0.key()
    }
    #[inline]
    fn adjust_min(&self, other: &Self) -> Self {
        Dim1(self.0.min_of(other.0))
    }
    #[inline]
    fn adjust_max(&self, other: &Self) -> Self {
        Dim1(self.0.max_of(other.0))
    }
    #[inline]
    fn half(&self) -> Self {
        Dim1(self.0.half())
    }
    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.0 <= other.0
    }
    #[inline]
    fn all_lt(&self, other: &Self) -> bool {
        self.0 < other.0
    }
    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

impl<T: Scalar> From<T> for Dim1<T> {
    fn from(value: T) -> Self {
        Dim1(value)
    }
}

#[cfg(test)]
mod test_dim1 {
    use std::cmp::Ordering;
    use crate::*;

    #[test]
    fn arithmetic() {
        assert_eq!(Dim1(7), Dim1(3) + Dim1(4));
        assert_eq!(Dim1(1), Dim1(4) - Dim1(3));
        assert_eq!(Dim1(2), Dim1(4).half());
        assert_eq!(Dim1(3), Dim1(4).adjust_min(&Dim1(3)));
        assert_eq!(Dim1(4), Dim1(4).adjust_max(&Dim1(3)));
    }

    #[test]
    fn order_is_total() {
        assert!(Dim1(3).le(&Dim1(3)));
        assert!(!Dim1(3).lt(&Dim1(3)));
        assert!(Dim1(2).lt(&Dim1(3)));
        assert!(Dim1(2).all_lt(&Dim1(3)));
        assert_eq!(Ordering::Less, Dim1(2).lex_cmp(&Dim1(3)));
        assert_eq!(Ordering::Equal, Dim1(2.5).lex_cmp(&Dim1(2.5)));
    }

    #[test]
    fn zero_is_zero() {
        assert!(Dim1::<u32>::zero().is_zero());
        assert!(!Dim1(1_u32).is_zero());
        assert!(Dim1(-0.0_f64).is_zero());
    }

    #[test]
    fn ratio_is_profit_over_weight() {
        assert_eq!(2.0, Dim1(5_u32).ratio(10_u32));
        assert_eq!(0.5, Dim1(4.0_f64).ratio(2.0_f64));
    }
}
