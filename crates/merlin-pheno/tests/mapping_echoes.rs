use merlin_pheno::{
    AnalyticContinuation, BranchCutPolicy, ContourPrescription, DonoghueMenezesMapping,
    UnitaritySubspace, UnitarityVerdict, DEFAULT_ECHOES,
};

#[test]
fn decay_width_uses_cubic_coupling() {
    let mapping = DonoghueMenezesMapping::default();
    assert!((mapping.decay_width() - 0.1977176884438644).abs() < 1e-12);
    let doubled = DonoghueMenezesMapping { f_2: 4.3, m_p: 1.0 };
    assert!((doubled.decay_width() / mapping.decay_width() - 8.0).abs() < 1e-12);
}

#[test]
fn echo_train_has_expected_envelope() {
    let mapping = DonoghueMenezesMapping::default();
    let train = mapping.echo_transfer_function(1.0, DEFAULT_ECHOES);
    assert_eq!(train.len(), 10);
    assert!((train[0].re - 1.0).abs() < 1e-15 && train[0].im.abs() < 1e-15);

    let gamma = mapping.decay_width();
    for (n, factor) in train.iter().enumerate() {
        let n = n as f64;
        let envelope = (-gamma * n * (10.0 - n) / 10.0).exp();
        assert!((factor.norm() - envelope).abs() < 1e-12, "n={n}");
    }
    assert!((train[1].re - 0.45222637721215775).abs() < 1e-12);
    assert!((train[1].im + 0.7043008531629161).abs() < 1e-12);
    // Envelope is symmetric about the middle of the train.
    assert!((train[1].norm() - train[9].norm()).abs() < 1e-12);
}

#[test]
fn empty_train_for_zero_echoes() {
    let mapping = DonoghueMenezesMapping::default();
    assert!(mapping.echo_transfer_function(1.0, 0).is_empty());
}

#[test]
fn prescriptions_serialize_to_stable_labels() {
    let mapping = DonoghueMenezesMapping::default();
    let prescriptions = mapping.unstable_resonance_prescription();
    assert_eq!(prescriptions.branch_cuts, BranchCutPolicy::OnlyForStableParticles);
    assert_eq!(
        prescriptions.contour_prescription,
        ContourPrescription::LeeWickUpperHalfPlane
    );
    assert_eq!(
        prescriptions.unitarity_subspace,
        UnitaritySubspace::ExcludesUnstableResonances
    );
    assert_eq!(
        prescriptions.analytic_continuation,
        AnalyticContinuation::SecondSheetForResonances
    );
    let json = serde_json::to_value(prescriptions).expect("encode");
    assert_eq!(json["branch_cuts"], "only_for_stable_particles");
    assert_eq!(json["contour_prescription"], "lee_wick_upper_half_plane");
    assert_eq!(json["unitarity_subspace"], "excludes_unstable_resonances");
    assert_eq!(json["analytic_continuation"], "second_sheet_for_resonances");
}

#[test]
fn unitarity_is_preserved() {
    let verdict = DonoghueMenezesMapping::default().loop_unitarity_check();
    assert_eq!(verdict, UnitarityVerdict::PreservedViaResonancePrescription);
    assert_eq!(
        serde_json::to_value(verdict).unwrap(),
        "preserved_via_resonance_prescription"
    );
}
