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

//! This module provides the convenience entry points. They take raw scalars
//! (or arrays of scalars) instead of `Dim1` and `DimN` points, solve the
//! problem with the default configuration and hand the result back in terms
//! of raw scalars.

use crate::{Dim1, DimN, GreedyTopDown, Knapsack, KnapsackError, Scalar, Solution};

/// Solves a single axis knapsack problem exactly.
///
/// ```
/// # use kpareto::*;
/// let weights = [56, 59, 80, 64, 75, 17];
/// let profits = [50, 50, 64, 46, 50, 5];
/// let ids     = [0, 1, 2, 3, 4, 5];
///
/// let solution = solve_1d(190, &weights, &profits, &ids).unwrap();
/// assert_eq!(150, solution.profit);
/// assert_eq!(190, solution.size);
/// ```
pub fn solve_1d<T, V, I>(constraint: T, dimensions: &[T], values: &[V], ids: &[I]) -> Result<Solution<T, V, I>, KnapsackError>
where
    T: Scalar,
    V: Scalar,
    I: Clone,
{
    let dims = dimensions.iter().copied().map(Dim1).collect();
    let mut solver = Knapsack::new(dims, values.to_vec(), ids.to_vec())?;
    Ok(solver.solve(Dim1(constraint)).map_dimensions(|d| d.0))
}

/// Solves a knapsack problem with `N` axes exactly.
///
/// ```
/// # use kpareto::*;
/// let weights = [[3, 5], [4, 2], [2, 4], [5, 1]];
/// let profits = [6, 5, 4, 5];
/// let ids     = ["a", "b", "c", "d"];
///
/// let solution = solve_nd([7, 6], &weights, &profits, &ids).unwrap();
/// assert_eq!(9, solution.profit);
/// ```
pub fn solve_nd<T, V, I, const N: usize>(constraint: [T; N], dimensions: &[[T; N]], values: &[V], ids: &[I]) -> Result<Solution<[T; N], V, I>, KnapsackError>
where
    T: Scalar,
    V: Scalar,
    I: Clone,
{
    let dims = dimensions.iter().copied().map(DimN).collect();
    let mut solver = Knapsack::new(dims, values.to_vec(), ids.to_vec())?;
    Ok(solver.solve(DimN(constraint)).map_dimensions(|d| d.0))
}

/// Finds a good (but not necessarily optimal) solution to a knapsack
/// problem with `N` axes using the greedy top-down solver.
pub fn solve_greedy_nd<T, V, I, const N: usize>(constraint: [T; N], dimensions: &[[T; N]], values: &[V], ids: &[I]) -> Result<Solution<[T; N], V, I>, KnapsackError>
where
    T: Scalar,
    V: Scalar,
    I: Clone,
{
    let dims = dimensions.iter().copied().map(DimN).collect();
    let mut solver = GreedyTopDown::new(dims, values.to_vec(), ids.to_vec())?;
    Ok(solver.solve(DimN(constraint)).map_dimensions(|d| d.0))
}

#[cfg(test)]
mod test_api {
    use crate::*;

    #[test]
    fn one_axis() {
        let sol = solve_1d(50_u32, &[31, 10, 20, 19, 4, 3, 6], &[70_u32, 20, 39, 37, 7, 5, 10], &[0, 1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(107, sol.profit);
        assert_eq!(50, sol.size);
        let mut dims = sol.dimensions.clone();
        dims.sort_unstable();
        assert_eq!(vec![19, 31], dims);
    }

    #[test]
    fn several_axes() {
        let sol = solve_nd([7_u32, 6], &[[3, 5], [4, 2], [2, 4], [5, 1]], &[6_u32, 5, 4, 5], &[0, 1, 2, 3]).unwrap();
        assert_eq!(9, sol.profit);
        assert!(sol.size[0] <= 7 && sol.size[1] <= 6);
    }

    #[test]
    fn greedy() {
        let sol = solve_greedy_nd([7_u32, 6], &[[3, 5], [4, 2], [2, 4], [5, 1]], &[6_u32, 5, 4, 5], &[0, 1, 2, 3]).unwrap();
        assert!(sol.profit <= 9);
        assert!(sol.size[0] <= 7 && sol.size[1] <= 6);
    }

    #[test]
    fn mismatched_lengths() {
        let err = solve_1d(10_u32, &[1, 2], &[1_u32], &[0, 1]).unwrap_err();
        assert_eq!(KnapsackError::LengthMismatch { dimensions: 2, values: 1, ids: 2 }, err);
        assert!(solve_nd([1_u32], &[[1]], &[1_u32, 2], &[0]).is_err());
        assert!(solve_greedy_nd([1_u32], &[[1]], &[1_u32], &[0, 1]).is_err());
    }
}
