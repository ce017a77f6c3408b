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

//! This module provides the solver for super-increasing series.
//!
//! When every item is at least as large and at least as profitable as all
//! the smaller items together, taking the largest item that still fits is
//! always optimal: whatever the smaller items could bring instead can never
//! be worth more. The problem is then solved by a sequence of binary searches
//! over a shrinking window, without any frontier.

use crate::{Dimension, SolveStats};

/// Solves a super-increasing instance.
///
/// `items` are the input positions of the items to choose from, sorted by
/// non decreasing dimension when `ascending` is true and by non increasing
/// dimension otherwise. The returned vector holds the input positions of the
/// selected items, largest first.
pub fn solve_super_increasing<D: Dimension>(
    constraint: &D,
    items: &[usize],
    dimensions: &[D],
    ascending: bool,
    stats: &mut SolveStats,
) -> Vec<usize> {
    let mut selected = vec![];
    let mut taken    = D::zero();
    // the window [lo, hi) where the next item is to be searched
    let mut lo = 0;
    let mut hi = items.len();

    while lo < hi {
        stats.iterations += 1;
        let remaining = *constraint - taken;
        let window    = &items[lo..hi];

        let found = if ascending {
            largest_fitting_asc(window, dimensions, &remaining)
        } else {
            largest_fitting_desc(window, dimensions, &remaining)
        };

        match found {
            None => break,
            Some(k) => {
                let pos  = lo + k;
                let item = items[pos];
                selected.push(item);
                taken = taken + dimensions[item];
                if ascending {
                    hi = pos;
                } else {
                    lo = pos + 1;
                }
            }
        }
    }
    selected
}

/// Returns the position of the rightmost item of an ascending window which
/// fits in the target.
///
/// # Note:
/// On several axes, a super-increasing series is non decreasing on every
/// axis. Hence "fits in the target" holds for a prefix of the window, which is
/// what makes the binary search valid.
fn largest_fitting_asc<D: Dimension>(window: &[usize], dimensions: &[D], target: &D) -> Option<usize> {
    let fitting = window.partition_point(|&item| dimensions[item].le(target));
    fitting.checked_sub(1)
}

/// Returns the position of the leftmost item of a descending window which
/// fits in the target.
fn largest_fitting_desc<D: Dimension>(window: &[usize], dimensions: &[D], target: &D) -> Option<usize> {
    let too_large = window.partition_point(|&item| !dimensions[item].le(target));
    if too_large < window.len() {
        Some(too_large)
    } else {
        None
    }
}
