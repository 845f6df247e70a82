// Properties holding for every parameter set

use kyberscope_algorithms::proba::mod_switching_error;
use kyberscope_api::FailureEstimator;
use kyberscope_kem::{communication_costs, kyber_to_mlwe, summarize};
use kyberscope_kem::{CyclotomicFailure, ParameterSet};
use kyberscope_kem::kyber::SEED_BITS;
use kyberscope_tests::strategies::{
    arbitrary_parameter_set, kyber_sized_parameter_set, small_parameter_set,
};
use proptest::prelude::*;

/// `ps` with the ring dimension and alphabet sizes replaced
fn resized(ps: &ParameterSet, n: usize, rqk: u32, rqc: u32, rq2: u32) -> ParameterSet {
    ParameterSet::new(
        n,
        ps.m(),
        ps.secret_noise_width(),
        ps.error_noise_width(),
        ps.q(),
        rqk,
        rqc,
        rq2,
        Some(ps.ciphertext_noise_width()),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn reduction_maps_module_shape(ps in kyber_sized_parameter_set()) {
        let result = kyber_to_mlwe(&ps);
        if ps.secret_noise_width() != ps.error_noise_width() {
            prop_assert!(result.is_err());
        } else {
            let instance = result.unwrap().instance;
            prop_assert_eq!(instance.ring_dimension, ps.n());
            prop_assert_eq!(instance.secret_rank, ps.m());
            prop_assert_eq!(instance.sample_rank, ps.m() + 1);
            prop_assert_eq!(instance.noise_width, ps.secret_noise_width());
            prop_assert_eq!(instance.q, ps.q());
        }
    }

    #[test]
    fn costs_are_exact_for_power_of_two_alphabets(ps in kyber_sized_parameter_set()) {
        let costs = communication_costs(&ps);
        let nm = (ps.n() * ps.m()) as f64;
        let bits = |rq: u32| rq.trailing_zeros() as f64;

        prop_assert_eq!(costs.key_generator * 8.0, SEED_BITS as f64 + nm * bits(ps.rqk()));
        prop_assert_eq!(costs.encapsulator * 8.0, nm * bits(ps.rqc()) + ps.n() as f64 * bits(ps.rq2()));
    }

    #[test]
    fn costs_grow_with_module_rank(ps in kyber_sized_parameter_set()) {
        let wider = ParameterSet::new(
            ps.n(),
            ps.m() + 1,
            ps.secret_noise_width(),
            ps.error_noise_width(),
            ps.q(),
            ps.rqk(),
            ps.rqc(),
            ps.rq2(),
            Some(ps.ciphertext_noise_width()),
        ).unwrap();

        let (narrow, wide) = (communication_costs(&ps), communication_costs(&wider));
        prop_assert!(wide.key_generator > narrow.key_generator);
        prop_assert!(wide.encapsulator > narrow.encapsulator);
    }

    #[test]
    fn costs_never_decrease_with_alphabets_or_dimension(ps in arbitrary_parameter_set()) {
        let base = communication_costs(&ps);
        let (n, rqk, rqc, rq2) = (ps.n(), ps.rqk(), ps.rqc(), ps.rq2());

        let wider_rqk = communication_costs(&resized(&ps, n, rqk + 1, rqc, rq2));
        prop_assert!(wider_rqk.key_generator >= base.key_generator);
        prop_assert_eq!(wider_rqk.encapsulator, base.encapsulator);

        let wider_rqc = communication_costs(&resized(&ps, n, rqk, rqc + 1, rq2));
        prop_assert!(wider_rqc.encapsulator >= base.encapsulator);
        prop_assert_eq!(wider_rqc.key_generator, base.key_generator);

        let wider_rq2 = communication_costs(&resized(&ps, n, rqk, rqc, rq2 + 1));
        prop_assert!(wider_rq2.encapsulator >= base.encapsulator);
        prop_assert_eq!(wider_rq2.key_generator, base.key_generator);

        let wider_ring = communication_costs(&resized(&ps, n + 1, rqk, rqc, rq2));
        prop_assert!(wider_ring.key_generator >= base.key_generator);
        prop_assert!(wider_ring.encapsulator >= base.encapsulator);
    }

    #[test]
    fn rounding_error_law_is_centered(q in 2u32..=128, rq in 1u32..=256) {
        let law = mod_switching_error(q, rq).unwrap();
        prop_assert!((law.total_mass() - 1.0).abs() < 1e-9);
        prop_assert!(law.mean().abs() < 1e-9);
        prop_assert!(2 * law.max_abs() <= q as i64);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn failure_law_is_a_symmetric_distribution(ps in small_parameter_set()) {
        let (law, p) = CyclotomicFailure.error_probability(&ps).unwrap();
        prop_assert!((0.0..=1.0).contains(&p));
        prop_assert!((law.total_mass() - 1.0).abs() < 1e-6);
        prop_assert!(law.mean().abs() < 1e-6);
    }

    #[test]
    fn summary_is_deterministic(ps in small_parameter_set()) {
        let first = summarize(&ps, &CyclotomicFailure).unwrap();
        let second = summarize(&ps, &CyclotomicFailure).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.failure.log2.is_finite());
    }
}
