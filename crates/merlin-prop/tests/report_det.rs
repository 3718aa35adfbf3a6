use merlin_core::from_json_slice;
use merlin_core::to_canonical_json_bytes;
use merlin_prop::{propagator_report, ContourMethod, PropOpts, PropagatorReport};

fn small_opts() -> PropOpts {
    let mut opts = PropOpts::default();
    opts.real_samples = 200;
    opts.lee_wick_samples = 400;
    opts.residue_samples = 400;
    opts.spectrum.points = 41;
    opts
}

#[test]
fn report_is_deterministic() {
    let opts = small_opts();
    let first = propagator_report(&opts).expect("report");
    let second = propagator_report(&opts).expect("report");
    assert_eq!(first, second);
    assert_eq!(first.report_hash.len(), 64);
    assert_eq!(first.contours.len(), 2);
    assert_eq!(first.contours[0].method, ContourMethod::Real);
    assert_eq!(first.contours[1].method, ContourMethod::LeeWick);
    assert!(first.residue.encloses_ghost_pole);
    assert!(first.lee_wick_convergence < 0.01);
}

#[test]
fn report_hash_tracks_configuration() {
    let base = propagator_report(&small_opts()).expect("report");
    let mut opts = small_opts();
    opts.propagator.gamma = 0.5;
    let shifted = propagator_report(&opts).expect("report");
    assert_ne!(base.report_hash, shifted.report_hash);
    assert_ne!(base.provenance.config_hash, shifted.provenance.config_hash);
}

#[test]
fn report_survives_json_roundtrip() {
    let report = propagator_report(&small_opts()).expect("report");
    let bytes = to_canonical_json_bytes(&report).expect("encode");
    let restored: PropagatorReport = from_json_slice(&bytes).expect("decode");
    assert_eq!(restored.report_hash, report.report_hash);
    assert_eq!(restored.contours.len(), report.contours.len());
    assert_eq!(restored.contours[1].samples, 400);
    assert_eq!(restored.provenance, report.provenance);
}

#[test]
fn invalid_options_are_rejected_before_integration() {
    let mut opts = small_opts();
    opts.residue_samples = 0;
    let err = propagator_report(&opts).unwrap_err();
    assert_eq!(err.info().code, "zero-samples");
}

#[test]
fn oversized_sample_counts_are_rejected() {
    let mut opts = small_opts();
    opts.lee_wick_samples = usize::MAX;
    let err = propagator_report(&opts).unwrap_err();
    assert_eq!(err.info().code, "too-many-samples");
    assert!(err.info().context.contains_key("lee_wick_samples"));
}
