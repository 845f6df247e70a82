//! Lattice attack cost models
//!
//! Core-SVP estimates of the primal (uSVP) and dual attacks against LWE,
//! following the methodology of the Kyber and NewHope security analyses:
//! the cost of an attack is the cost of a single SVP call in dimension `b`,
//! where `b` is the smallest BKZ block size for which the attack succeeds.

mod attacks;
mod bkz;
mod estimate;

pub use attacks::{optimize_attack, Attack};
pub use bkz::{delta_bkz, nvec_sieve, SvpModel, BKZ_MIN_BLOCK};
pub use estimate::{AttackCost, CoreSvpEstimator, SecurityEstimate};
