// src/strategies.rs

//! Proptest strategies over Kyber-family parameters

use kyberscope_kem::ParameterSet;
use proptest::prelude::*;

/// Positive power of two up to `2^max_bits`
pub fn power_of_two(max_bits: u32) -> impl Strategy<Value = u32> {
    (1..=max_bits).prop_map(|bits| 1u32 << bits)
}

/// Parameter sets small enough that the failure law stays cheap to build
pub fn small_parameter_set() -> impl Strategy<Value = ParameterSet> {
    (
        1usize..=4,
        1usize..=3,
        0u32..=3,
        0u32..=3,
        prop::option::of(0u32..=3),
        prop::sample::select(vec![17u32, 23, 29, 41, 97]),
        power_of_two(6),
        power_of_two(6),
        power_of_two(6),
    )
        .prop_map(|(n, m, s, e, ct, q, rqk, rqc, rq2)| {
            ParameterSet::new(n, m, s, e, q, rqk, rqc, rq2, ct)
                .expect("strategy only yields positive parameters")
        })
}

/// Kyber-sized parameter sets for the closed-form computations
pub fn kyber_sized_parameter_set() -> impl Strategy<Value = ParameterSet> {
    (
        prop::sample::select(vec![128usize, 256, 512]),
        1usize..=5,
        1u32..=5,
        1u32..=5,
        prop::option::of(1u32..=5),
        prop::sample::select(vec![3329u32, 7681, 12289]),
        power_of_two(13),
        power_of_two(12),
        power_of_two(6),
    )
        .prop_map(|(n, m, s, e, ct, q, rqk, rqc, rq2)| {
            ParameterSet::new(n, m, s, e, q, rqk, rqc, rq2, ct)
                .expect("strategy only yields positive parameters")
        })
}

/// Parameter sets with arbitrary, not necessarily power-of-two, alphabets
pub fn arbitrary_parameter_set() -> impl Strategy<Value = ParameterSet> {
    (
        1usize..=1024,
        1usize..=5,
        0u32..=5,
        1u32..=1 << 16,
        1u32..=1 << 16,
        1u32..=1 << 16,
        1u32..=1 << 16,
    )
        .prop_map(|(n, m, eta, q, rqk, rqc, rq2)| {
            ParameterSet::new(n, m, eta, eta, q, rqk, rqc, rq2, None)
                .expect("strategy only yields positive parameters")
        })
}
