// Pinned failure rates and core-SVP optima of the built-in sets

use kyberscope_algorithms::{Attack, CoreSvpEstimator};
use kyberscope_kem::{assess_security, CyclotomicFailure, ParameterSet};
use kyberscope_api::FailureEstimator;
use kyberscope_params::kyber as specs;
use kyberscope_tests::vectors;

fn named(name: &str) -> ParameterSet {
    let spec = specs::by_name(name).unwrap_or_else(|| panic!("unknown set {}", name));
    ParameterSet::from_spec(spec).unwrap()
}

#[test]
fn test_reference_file_parses() {
    let reference = vectors::load().unwrap();
    assert!(!reference.failure.is_empty());
    assert!(!reference.security.is_empty());
}

#[test]
fn test_failure_rates_match_reference() {
    let reference = vectors::load().unwrap();
    for vector in &reference.failure {
        let (_, p) = CyclotomicFailure.error_probability(&named(&vector.name)).unwrap();
        assert!(
            vector.matches(p),
            "{}: expected {} got {}",
            vector.name,
            vector.probability,
            p
        );
    }
}

#[test]
fn test_security_optima_match_reference() {
    let reference = vectors::load().unwrap();
    for vector in &reference.security {
        let assessment = assess_security(&named(&vector.name), &CoreSvpEstimator).unwrap();
        let primal = assessment.estimate.primal.expect("primal attack in range");
        let dual = assessment.estimate.dual.expect("dual attack in range");

        assert_eq!(primal.attack, Attack::Primal);
        assert_eq!(dual.attack, Attack::Dual);
        assert!(primal.b.abs_diff(vector.primal_b) <= vector.b_tolerance, "{}: primal b = {}", vector.name, primal.b);
        assert!(dual.b.abs_diff(vector.dual_b) <= vector.b_tolerance, "{}: dual b = {}", vector.name, dual.b);
        assert!((primal.classical - vector.primal_classical).abs() <= vector.bits_tolerance);
        assert!((dual.classical - vector.dual_classical).abs() <= vector.bits_tolerance);

        // Quantum and plausible models only scale the same block size
        assert!(primal.quantum < primal.classical);
        assert!(primal.plausible < primal.quantum);
    }
}

#[test]
fn test_recommended_is_stronger_than_light() {
    let light = assess_security(&named("light"), &CoreSvpEstimator).unwrap();
    let recommended = assess_security(&named("recommended"), &CoreSvpEstimator).unwrap();
    assert!(recommended.estimate.classical_bits().unwrap() > light.estimate.classical_bits().unwrap() + 50.0);
}

#[test]
fn test_toy_rings_are_out_of_model_range() {
    for spec in specs::DEFAULT_REPORT {
        if spec.secret_noise_width != spec.error_noise_width {
            continue;
        }
        let assessment = assess_security(&ParameterSet::from_spec(spec).unwrap(), &CoreSvpEstimator).unwrap();
        assert!(assessment.estimate.best().is_none(), "{} unexpectedly in range", spec.name);
    }
}
