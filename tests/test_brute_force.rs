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

use kpareto::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// The best profit achievable for the given constraint, found by enumerating
/// all the subsets of the items.
fn brute_force<D: Dimension>(constraint: &D, dims: &[D], vals: &[u32]) -> u32 {
    let n = dims.len();
    let mut best = 0;
    for mask in 0_usize..(1 << n) {
        let mut size   = D::zero();
        let mut profit = 0;
        for i in (0..n).filter(|i| mask & (1 << i) != 0) {
            size    = size + dims[i];
            profit += vals[i];
        }
        if size.le(constraint) && profit > best {
            best = profit;
        }
    }
    best
}

fn configs() -> Vec<KnapsackConfig> {
    let default = KnapsackConfig::default();
    vec![
        default,
        KnapsackConfig { force_use_pareto: true, ..default },
        KnapsackConfig { force_use_pareto: true, use_ratio_sort: true, ..default },
        KnapsackConfig { force_use_limits: true, ..default },
        KnapsackConfig { force_use_limits: true, use_limits: false, ..default },
        KnapsackConfig { solve_super_increasing: false, ..default },
        KnapsackConfig { prepare_search_index: true, ..default },
    ]
}

/// Checks that the solution is consistent, feasible and optimal
fn check<D: Dimension>(sol: &Solution<D, u32, usize>, constraint: &D, dims: &[D], vals: &[u32], expected: u32) {
    assert_eq!(expected, sol.profit);
    assert!(sol.size.le(constraint));
    assert_eq!(sol.ids.len(), sol.dimensions.len());
    assert_eq!(sol.ids.len(), sol.values.len());

    let mut size = D::zero();
    let mut profit = 0;
    for &id in sol.ids.iter() {
        size    = size + dims[id];
        profit += vals[id];
    }
    assert!(size.same(&sol.size));
    assert_eq!(profit, sol.profit);

    let mut ids = sol.ids.clone();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(sol.ids.len(), ids.len(), "an item was selected twice");
}

fn random_1d(rng: &mut StdRng, n: usize) -> (Vec<Dim1<u32>>, Vec<u32>) {
    let dims = (0..n).map(|_| Dim1(rng.gen_range(1..=30))).collect();
    let vals = (0..n).map(|_| rng.gen_range(1..=30)).collect();
    (dims, vals)
}

/// A random instance whose items are sorted by weight. Depending on `kind`
/// the profits are equal to the weights, all equal, doubling (all weights
/// being equal) or sorted as well.
fn sorted_1d(rng: &mut StdRng, n: usize, kind: usize, descending: bool) -> (Vec<Dim1<u32>>, Vec<u32>) {
    let mut weights = (0..n).map(|_| rng.gen_range(1..=30)).collect::<Vec<u32>>();
    weights.sort_unstable();
    let mut vals = match kind {
        0 => weights.clone(),
        1 => vec![7; n],
        2 => {
            let w = weights[0];
            weights = vec![w; n];
            (0..n).map(|i| 1 << i).collect()
        }
        _ => {
            let mut v = (0..n).map(|_| rng.gen_range(1..=30)).collect::<Vec<u32>>();
            v.sort_unstable();
            v
        }
    };
    if descending {
        weights.reverse();
        vals.reverse();
    }
    (weights.into_iter().map(Dim1).collect(), vals)
}

fn random_2d(rng: &mut StdRng, n: usize) -> (Vec<DimN<u32, 2>>, Vec<u32>) {
    let dims = (0..n).map(|_| DimN([rng.gen_range(1..=20), rng.gen_range(1..=20)])).collect();
    let vals = (0..n).map(|_| rng.gen_range(1..=30)).collect();
    (dims, vals)
}

/// Solves the instance for all the given (non zero) constraints, with every
/// configuration.
fn solve_all<D: Dimension>(dims: &[D], vals: &[u32], constraints: &[D]) {
    let ids = (0..dims.len()).collect::<Vec<_>>();
    for config in configs() {
        let mut solver = Knapsack::with_config(dims.to_vec(), vals.to_vec(), ids.clone(), config).unwrap();
        for c in constraints {
            let expected = brute_force(c, dims, vals);
            let sol = solver.solve(*c);
            check(&sol, c, dims, vals, expected);
        }
    }
}

#[test]
fn random_single_axis_instances() {
    let mut rng = StdRng::seed_from_u64(0xCAFE);
    for _ in 0..40 {
        let n = rng.gen_range(0..=12);
        let (dims, vals) = random_1d(&mut rng, n);
        let constraints = (0..5).map(|_| Dim1(rng.gen_range(1..=150))).collect::<Vec<_>>();
        solve_all(&dims, &vals, &constraints);
    }
}

#[test]
fn sorted_single_axis_instances() {
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    for round in 0..60 {
        let n = rng.gen_range(1..=12);
        let (dims, vals) = sorted_1d(&mut rng, n, round % 4, (round / 4) % 2 == 0);
        let constraints = (0..5).map(|_| Dim1(rng.gen_range(1..=150))).collect::<Vec<_>>();
        solve_all(&dims, &vals, &constraints);
    }
}

#[test]
fn equal_weights_single_axis_instances() {
    let mut rng = StdRng::seed_from_u64(0xE0E0);
    for _ in 0..60 {
        let n = rng.gen_range(1..=10);
        let w = rng.gen_range(1..=10);
        let dims = vec![Dim1(w); n];
        let vals = (0..n).map(|_| rng.gen_range(0..=30)).collect::<Vec<u32>>();
        let constraints = (1..=n as u32).map(|k| Dim1(k * w)).collect::<Vec<_>>();
        solve_all(&dims, &vals, &constraints);
    }
}

#[test]
fn random_two_axes_instances() {
    let mut rng = StdRng::seed_from_u64(0xF00D);
    for _ in 0..30 {
        let n = rng.gen_range(0..=10);
        let (dims, vals) = random_2d(&mut rng, n);
        let constraints = (0..4)
            .map(|_| DimN([rng.gen_range(1..=80), rng.gen_range(0..=80)]))
            .collect::<Vec<_>>();
        solve_all(&dims, &vals, &constraints);
    }
}

#[test]
fn sorted_two_axes_instances() {
    let mut rng = StdRng::seed_from_u64(0xD1CE);
    for _ in 0..30 {
        let n = rng.gen_range(1..=10);
        // growing on both axes
        let mut a = 0;
        let mut b = 0;
        let mut dims = vec![];
        for _ in 0..n {
            a += rng.gen_range(0..=6);
            b += rng.gen_range(0..=6);
            dims.push(DimN([a + 1, b + 1]));
        }
        let vals = dims.iter().map(|d: &DimN<u32, 2>| d.0[0]).collect::<Vec<_>>();
        let constraints = (0..4)
            .map(|_| DimN([rng.gen_range(1..=100), rng.gen_range(0..=100)]))
            .collect::<Vec<_>>();
        solve_all(&dims, &vals, &constraints);
    }
}

#[test]
fn ratio_sort_never_changes_the_optimum() {
    let mut rng = StdRng::seed_from_u64(0xABCD);
    let plain = KnapsackConfig { force_use_pareto: true, ..KnapsackConfig::default() };
    let ratio = KnapsackConfig { use_ratio_sort: true, ..plain };
    for _ in 0..50 {
        let n = rng.gen_range(1..=14);
        let (dims, vals) = random_1d(&mut rng, n);
        let ids = (0..n).collect::<Vec<_>>();
        let c = Dim1(rng.gen_range(0..=200));
        let mut a = Knapsack::with_config(dims.clone(), vals.clone(), ids.clone(), plain).unwrap();
        let mut b = Knapsack::with_config(dims, vals, ids, ratio).unwrap();
        assert_eq!(a.solve(c).profit, b.solve(c).profit);
    }
}

#[test]
fn search_index_matches_a_fresh_solve() {
    let mut rng = StdRng::seed_from_u64(0x1DE);
    let indexed = KnapsackConfig { prepare_search_index: true, ..KnapsackConfig::default() };
    for round in 0..20 {
        let n = rng.gen_range(1..=12);
        let (dims, vals) = if round % 2 == 0 { random_1d(&mut rng, n) } else { sorted_1d(&mut rng, n, round % 3, false) };
        let ids  = (0..n).collect::<Vec<_>>();
        let c1   = rng.gen_range(1..=150);

        let mut solver = Knapsack::with_config(dims.clone(), vals.clone(), ids.clone(), indexed).unwrap();
        solver.solve(Dim1(c1));
        for c2 in 1..=c1 {
            let fast  = solver.solve(Dim1(c2));
            let fresh = Knapsack::new(dims.clone(), vals.clone(), ids.clone()).unwrap().solve(Dim1(c2));
            assert_eq!(fresh.profit, fast.profit, "indexed {c1}, asked {c2}");
            assert!(fast.size.le(&Dim1(c2)));
        }
    }
}

#[test]
fn search_index_on_two_axes() {
    let mut rng = StdRng::seed_from_u64(0x2DE);
    let indexed = KnapsackConfig { prepare_search_index: true, ..KnapsackConfig::default() };
    for _ in 0..10 {
        let n = rng.gen_range(1..=9);
        let (dims, vals) = random_2d(&mut rng, n);
        let ids = (0..n).collect::<Vec<_>>();
        let mut solver = Knapsack::with_config(dims.clone(), vals.clone(), ids, indexed).unwrap();
        solver.solve(DimN([40, 40]));
        for a in (0..=40).step_by(5) {
            for b in (0..=40).step_by(5) {
                let c = DimN([a, b]);
                if c.is_zero() {
                    // stands for the indexed constraint
                    continue;
                }
                let sol = solver.solve(c);
                assert_eq!(brute_force(&c, &dims, &vals), sol.profit);
                assert!(sol.size.le(&c));
            }
        }
    }
}

#[test]
fn profit_is_monotone_in_the_constraint() {
    let mut rng = StdRng::seed_from_u64(0x3DE);
    for _ in 0..10 {
        let n = rng.gen_range(1..=10);
        let (dims, vals) = random_1d(&mut rng, n);
        let ids = (0..n).collect::<Vec<_>>();
        let total: u32 = dims.iter().map(|d| d.0).sum();
        let mut solver = Knapsack::new(dims, vals, ids).unwrap();
        let mut last = 0;
        for c in 0..=total + 1 {
            let profit = solver.solve(Dim1(c)).profit;
            assert!(last <= profit, "constraint {c}");
            last = profit;
        }
    }
}

#[test]
fn greedy_is_feasible_and_bounded_by_the_optimum() {
    let mut rng = StdRng::seed_from_u64(0x4DE);
    for _ in 0..15 {
        let n = rng.gen_range(0..=10);
        let dims = (0..n)
            .map(|_| [rng.gen_range(1..=15), rng.gen_range(1..=15), rng.gen_range(1..=15)])
            .collect::<Vec<[u32; 3]>>();
        let vals = (0..n).map(|_| rng.gen_range(1..=30)).collect::<Vec<u32>>();
        let ids  = (0..n).collect::<Vec<_>>();
        let c    = [rng.gen_range(0..=50), rng.gen_range(0..=50), rng.gen_range(0..=50)];

        let exact  = solve_nd(c, &dims, &vals, &ids).unwrap();
        let greedy = solve_greedy_nd(c, &dims, &vals, &ids).unwrap();
        assert!(greedy.profit <= exact.profit);
        for axis in 0..3 {
            assert!(greedy.size[axis] <= c[axis]);
            assert!(exact.size[axis] <= c[axis]);
        }
    }
}
