use merlin_prop::{residue_check, Complex64, PropagatorConfig, Spin2Propagator};

#[test]
fn ghost_loop_reproduces_residue() {
    let propagator = Spin2Propagator::default();
    let check = residue_check(&propagator, 1000);
    assert!(check.encloses_ghost_pole);
    assert!(check.abs_error < 1e-4, "abs error {}", check.abs_error);
    assert!(check.rel_error < 1e-5);

    // 2πi · (−5 / 2p_g)
    let expected = Complex64::new(-5.485138054507512, -8.600648354030339);
    assert!((check.expected - expected).norm() < 1e-9);
}

#[test]
fn loop_error_shrinks_with_samples() {
    let propagator = Spin2Propagator::default();
    let coarse = residue_check(&propagator, 200);
    let fine = residue_check(&propagator, 1000);
    assert!(fine.abs_error < coarse.abs_error);
}

#[test]
fn far_pole_is_reported_outside_loop() {
    let mut config = PropagatorConfig::default();
    config.m_p = 3.0;
    let propagator = Spin2Propagator::new(config);
    let check = residue_check(&propagator, 200);
    assert!(!check.encloses_ghost_pole);
}

#[test]
fn pole_between_wobble_and_arc_is_enclosed() {
    // p_g = 2.6 + i: |p_g| ≈ 2.79 lies past R − w = 2.5 but inside the arc.
    let mut config = PropagatorConfig::default();
    config.m_p = 2.4;
    config.gamma = 5.2 / (2.15 * 2.4);
    let propagator = Spin2Propagator::new(config);
    let pole = propagator.ghost_pole();
    assert!((pole - Complex64::new(2.6, 1.0)).norm() < 1e-9);

    let check = residue_check(&propagator, 1000);
    assert!(check.encloses_ghost_pole);
    assert!(check.rel_error < 1e-4, "rel error {}", check.rel_error);
}
