//! Elementary laws: centered binomial noise and modulus-switching error

use core::cmp::Ordering;

use super::Law;
use crate::error::{validate, Result};

/// Largest supported centered binomial parameter.
///
/// `C(2 eta, eta)` and `4^eta` must both stay finite in `f64`.
pub const MAX_NOISE_WIDTH: u32 = 256;

/// Centered binomial law of parameter `eta`: `P(i) = C(2 eta, i + eta) / 4^eta`
/// for `i` in `[-eta, eta]`.
pub fn centered_binomial(eta: u32) -> Result<Law> {
    validate::parameter(
        eta <= MAX_NOISE_WIDTH,
        "eta",
        "noise width above 256 overflows the binomial weights",
    )?;

    let scale = 4f64.powf(f64::from(eta));
    let eta = i64::from(eta);
    let mut law = Law::new();
    let mut binom = 1.0f64;
    for k in 0..=2 * eta {
        law.add_mass(k - eta, binom / scale);
        binom = binom * (2 * eta - k) as f64 / (k + 1) as f64;
    }
    Ok(law)
}

/// Representative of `x mod q` in `[-q/2, q/2)`
pub fn mod_centered(x: i64, q: i64) -> i64 {
    let a = x.rem_euclid(q);
    if 2 * a < q {
        a
    } else {
        a - q
    }
}

/// Law of `round(to * x / from) mod to`.
///
/// The result is a single point, except on an exact tie where the mass is
/// split evenly between the two neighbours so that switching commutes with
/// negation.
pub fn mod_switch(x: i64, from: u32, to: u32) -> Law {
    let (from, to) = (from as i64, to as i64);
    let num = x.rem_euclid(from) as i128 * to as i128;
    let (k, r) = ((num / from as i128) as i64, (num % from as i128) as i64);
    match (2 * r).cmp(&from) {
        Ordering::Less => Law::point(k.rem_euclid(to)),
        Ordering::Greater => Law::point((k + 1).rem_euclid(to)),
        Ordering::Equal => {
            let mut law = Law::new();
            law.add_mass(k.rem_euclid(to), 0.5);
            law.add_mass((k + 1).rem_euclid(to), 0.5);
            law
        }
    }
}

/// Law of the error introduced by compressing a uniform value mod `q` into
/// an alphabet of size `rq` and decompressing it again.
///
/// The result is centered mod `q`, sums to 1 and is symmetric around 0.
pub fn mod_switching_error(q: u32, rq: u32) -> Result<Law> {
    validate::parameter(q > 0, "q", "modulus must be positive")?;
    validate::parameter(rq > 0, "rq", "alphabet size must be positive")?;

    let qi = q as i64;
    let weight = 1.0 / q as f64;
    let mut law = Law::new();
    for x in 0..qi {
        for (y, py) in &mod_switch(x, q, rq) {
            for (z, pz) in &mod_switch(y, rq, q) {
                let mass = py * pz * weight;
                let d = mod_centered(x - z, qi);
                if 2 * d == -qi {
                    // q/2 and -q/2 are the same residue
                    law.add_mass(d, mass / 2.0);
                    law.add_mass(-d, mass / 2.0);
                } else {
                    law.add_mass(d, mass);
                }
            }
        }
    }
    Ok(law)
}
