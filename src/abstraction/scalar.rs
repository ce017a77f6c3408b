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

//! This module defines the `Scalar` trait: the numeric element type that is
//! used both for the axes of a dimension and for the profit of an item.

use std::fmt::Debug;

use num_traits::{Num, ToPrimitive};

/// A scalar is a plain copyable number. On top of the usual arithmetic
/// (provided by `num_traits::Num`) it must be able to produce an exact hash
/// key, because the solvers deduplicate points by (dimension, profit) and
/// floats do not implement `Hash`.
///
/// # Note:
/// Two scalars are considered *the same* iff their keys are equal. For the
/// integer types that is the plain value equality. For the floating point
/// types, this is the bit equality (where `-0.0` and `0.0` are merged). No
/// epsilon is ever involved: two float sums that differ in their last bit are
/// two different points.
pub trait Scalar: Num + ToPrimitive + Copy + PartialOrd + Debug {
    /// Returns an exact hashable representation of the value.
    fn key(self) -> u64;

    /// Returns the value as a float. This is only ever used to compute sort
    /// keys (profit to weight ratios) and never to take a decision on
    /// feasibility.
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
    /// Returns the half of this value (rounded towards zero for integers).
    fn half(self) -> Self {
        self / (Self::one() + Self::one())
    }
    /// Returns the smallest of the two values.
    fn min_of(self, other: Self) -> Self {
        if other < self { other } else { self }
    }
    /// Returns the largest of the two values.
    fn max_of(self, other: Self) -> Self {
        if other > self { other } else { self }
    }
}

macro_rules! integer_scalar {
    ($($t:ty),*) => {
        $(
        impl Scalar for $t {
            #[inline]
            fn key(self) -> u64 {
                self as u64
            }
        }
        )*
    };
}

macro_rules! float_scalar {
    ($($t:ty),*) => {
        $(
        impl Scalar for $t {
            #[inline]
            fn key(self) -> u64 {
                if self == 0.0 {
                    0
                } else {
                    self.to_bits() as u64
                }
            }
        }
        )*
    };
}

integer_scalar!(i32, i64, u32, u64, usize);
float_scalar!(f32, f64);
