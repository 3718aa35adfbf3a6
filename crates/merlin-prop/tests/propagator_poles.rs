use merlin_prop::{Complex64, PropagatorConfig, Spin2Propagator};

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn derived_mass_is_computed_from_config() {
    let propagator = Spin2Propagator::default();
    let mass = propagator.complex_mass_sq();
    assert_eq!(mass.re, 1.0);
    assert!(close(mass.im, 2.15, 1e-12));
    assert_eq!(propagator.config().m_g(), 2.15);
}

#[test]
fn real_part_follows_massless_pole_sign() {
    let propagator = Spin2Propagator::default();
    // Below m_p² the massless term dominates with a negative sign.
    assert!(propagator.evaluate_real(0.0).re < 0.0);
    assert!(propagator.evaluate_real(-5.0).re < 0.0);
    // Above it the sign flips.
    assert!(propagator.evaluate_real(3.0).re > 0.0);
}

#[test]
fn ghost_enters_with_a_relative_minus_sign() {
    let propagator = Spin2Propagator::default();
    let p_sq = Complex64::new(0.3, -0.7);
    let mass = propagator.complex_mass_sq();
    let ghost = propagator.ghost_term(p_sq);
    let expected = -5.0 / (p_sq - mass);
    assert!((ghost - expected).norm() < 1e-12);

    let total = propagator.evaluate(p_sq);
    let massless = 5.0 / (p_sq - 1.0 + Complex64::new(0.0, 1e-10));
    assert!((total - (massless - 5.0 / (p_sq - mass))).norm() < 1e-12);
}

#[test]
fn regulator_keeps_the_massless_pole_finite() {
    let propagator = Spin2Propagator::default();
    let at_pole = propagator.massless_term(Complex64::new(1.0, 0.0));
    assert!(at_pole.re.is_finite() && at_pole.im.is_finite());
    // 5 / (i·1e-10) = -5e10 i
    assert!(close(at_pole.im, -5e10, 1.0));

    let mut config = PropagatorConfig::default();
    config.regulator = 1e-4;
    let softer = Spin2Propagator::new(config).massless_term(Complex64::new(1.0, 0.0));
    assert!(close(softer.im, -5e4, 1e-6));
}

#[test]
fn ghost_pole_sits_in_upper_half_plane() {
    let propagator = Spin2Propagator::default();
    let pole = propagator.ghost_pole();
    assert!(close(pole.re, 1.2983029577636869, 1e-9));
    assert!(close(pole.im, 0.8280039674650946, 1e-9));
    assert!(((pole * pole) - propagator.complex_mass_sq()).norm() < 1e-12);

    let mut config = PropagatorConfig::default();
    config.gamma = -1.0;
    let flipped = Spin2Propagator::new(config).ghost_pole();
    assert!(flipped.im > 0.0);
}

#[test]
fn ghost_residue_matches_laurent_coefficient() {
    let propagator = Spin2Propagator::default();
    let pole = propagator.ghost_pole();
    let offset = Complex64::new(1e-7, 1e-7);
    let p = pole + offset;
    let approx = propagator.ghost_term(p * p) * offset;
    assert!((approx - propagator.ghost_residue()).norm() < 1e-5);
}

#[test]
fn config_validation_rejects_bad_parameters() {
    assert!(PropagatorConfig::default().validate().is_ok());

    let mut config = PropagatorConfig::default();
    config.m_p = 0.0;
    assert_eq!(config.validate().unwrap_err().info().code, "non-positive-parameter");

    let mut config = PropagatorConfig::default();
    config.regulator = -1e-10;
    assert_eq!(config.validate().unwrap_err().info().code, "negative-regulator");

    let mut config = PropagatorConfig::default();
    config.gamma = f64::NAN;
    assert_eq!(config.validate().unwrap_err().info().code, "non-finite-parameter");
}

#[test]
fn config_defaults_fill_missing_yaml_fields() {
    let config: PropagatorConfig = serde_yaml::from_str("gamma: 0.5\n").expect("yaml");
    assert_eq!(config.gamma, 0.5);
    assert_eq!(config.f_2, 2.15);
    assert_eq!(config.spin2_factor, 5.0);
    assert_eq!(config.regulator, 1e-10);
}
