// End-to-end analysis of concrete parameter sets

use kyberscope_algorithms::CoreSvpEstimator;
use kyberscope_api::Error;
use kyberscope_kem::{assess_security, communication_costs, kyber_to_mlwe, summarize};
use kyberscope_kem::{CyclotomicFailure, ParameterSet};
use kyberscope_params::kyber as specs;

#[test]
fn test_light_scenario() {
    let ps = ParameterSet::from_spec(&specs::LIGHT).unwrap();

    let costs = communication_costs(&ps);
    assert_eq!(costs.key_generator, 800.0);
    assert_eq!(costs.encapsulator, 768.0);
    assert_eq!(costs.total(), 1568.0);

    let summary = summarize(&ps, &CyclotomicFailure).unwrap();
    assert_eq!(summary.costs, costs);
    assert!(summary.failure.log2 < -130.0);
    assert!(summary.to_string().starts_with("params: n=256, m=2, secret_noise_width=3"));
}

#[test]
fn test_security_then_summary() {
    let ps = ParameterSet::from_spec(&specs::RECOMMENDED).unwrap();

    let assessment = assess_security(&ps, &CoreSvpEstimator).unwrap();
    assert!(assessment.reduction.advisory.is_none());
    assert_eq!(assessment.estimate.instance, kyber_to_mlwe(&ps).unwrap().instance);

    let text = assessment.to_string();
    assert!(text.starts_with("security:\n"));
    assert!(text.contains("Primal"));
    assert!(text.contains("Dual"));
}

#[test]
fn test_unsupported_set_still_summarizes() {
    let ps = ParameterSet::new(256, 2, 3, 2, 3329, 1 << 12, 1 << 10, 1 << 4, None).unwrap();

    let err = assess_security(&ps, &CoreSvpEstimator).unwrap_err();
    assert!(err.is_unsupported());
    assert!(matches!(err, Error::UnsupportedConfiguration { .. }));

    // The summary does not go through the reduction
    assert!(summarize(&ps, &CyclotomicFailure).is_ok());
}

#[test]
fn test_ciphertext_width_toggles_advisory() {
    let narrow = ParameterSet::new(4, 2, 2, 2, 29, 29, 29, 29, Some(1)).unwrap();
    let matched = ParameterSet::new(4, 2, 2, 2, 29, 29, 29, 29, Some(2)).unwrap();

    assert!(kyber_to_mlwe(&narrow).unwrap().advisory.is_some());
    assert!(kyber_to_mlwe(&matched).unwrap().advisory.is_none());
}

#[test]
fn test_summary_is_idempotent() {
    for spec in specs::DEFAULT_REPORT {
        let ps = ParameterSet::from_spec(spec).unwrap();
        let first = summarize(&ps, &CyclotomicFailure).unwrap();
        let second = summarize(&ps, &CyclotomicFailure).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }
}

#[test]
fn test_reports_serialize_to_json() {
    let ps = ParameterSet::from_spec(&specs::ALKALINE29_ETA1).unwrap();
    let summary = summarize(&ps, &CyclotomicFailure).unwrap();

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["params"]["q"], 29);
    assert!(json["failure"]["probability"].as_f64().unwrap() > 0.0);
    assert!(json["costs"]["key_generator"].is_number());

    let assessment = assess_security(&ps, &CoreSvpEstimator).unwrap();
    let json = serde_json::to_value(&assessment).unwrap();
    assert!(json["estimate"]["primal"].is_null());
    assert_eq!(json["reduction"]["instance"]["q"], 29);
}
