//! Operations on laws of independent random variables

use super::Law;

/// Probabilities at or below this value (`2^-300`) are dropped by [`clean`]
pub const CLEAN_THRESHOLD: f64 = 4.909093465297727e-91;

fn dense(law: &Law) -> (i64, Vec<f64>) {
    let lo = law.min_value().unwrap_or(0);
    let hi = law.max_value().unwrap_or(0);
    let mut v = vec![0.0; (hi - lo + 1) as usize];
    for (value, p) in law {
        v[(value - lo) as usize] = p;
    }
    (lo, v)
}

/// Law of `X + Y` for independent `X ~ a`, `Y ~ b`
pub fn convolution(a: &Law, b: &Law) -> Law {
    if a.is_empty() || b.is_empty() {
        return Law::new();
    }

    let (a_lo, av) = dense(a);
    let (b_lo, bv) = dense(b);
    let mut out = vec![0.0; av.len() + bv.len() - 1];
    for (i, pa) in av.iter().enumerate() {
        if *pa == 0.0 {
            continue;
        }
        for (j, pb) in bv.iter().enumerate() {
            out[i + j] += pa * pb;
        }
    }

    out.into_iter()
        .enumerate()
        .filter(|(_, p)| *p != 0.0)
        .map(|(k, p)| (a_lo + b_lo + k as i64, p))
        .collect()
}

/// Law of `X * Y` for independent `X ~ a`, `Y ~ b`
pub fn product(a: &Law, b: &Law) -> Law {
    let mut law = Law::new();
    for (x, px) in a {
        for (y, py) in b {
            law.add_mass(x * y, px * py);
        }
    }
    law
}

/// Drop every value whose probability is at most [`CLEAN_THRESHOLD`]
pub fn clean(law: &Law) -> Law {
    law.iter().filter(|(_, p)| *p > CLEAN_THRESHOLD).collect()
}

/// Law of the sum of `k` independent copies of `law`.
///
/// Square-and-multiply over the bits of `k`, cleaning after every step to
/// keep the support bounded.
pub fn iter_convolution(law: &Law, k: usize) -> Law {
    let mut acc = Law::point(0);
    if k == 0 {
        return acc;
    }

    let bits = usize::BITS - k.leading_zeros();
    for bit in (0..bits).rev() {
        acc = clean(&convolution(&acc, &acc));
        if (k >> bit) & 1 == 1 {
            acc = clean(&convolution(&acc, law));
        }
    }
    acc
}

/// Probability that `|X| >= ceil(t)`.
///
/// Summed from the outermost values inwards, tails being the smallest terms.
pub fn tail_probability(law: &Law, t: f64) -> f64 {
    let start = t.ceil().max(0.0) as i64;
    if start == 0 {
        return law.total_mass();
    }

    let max_abs = law.max_abs();
    if start > max_abs {
        return 0.0;
    }

    let mut s = 0.0;
    for i in (start..=max_abs).rev() {
        s += law.get(i) + law.get(-i);
    }
    s
}
