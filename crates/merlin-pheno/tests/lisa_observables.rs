use merlin_core::units::{PLANCK_MASS_SOLAR, PLANCK_TIME_S};
use merlin_pheno::{is_detectable, LisaGhostObservables, DEFAULT_NOISE_FLOOR, SNR_THRESHOLD};

fn rel_close(a: f64, b: f64, tol: f64) -> bool {
    ((a - b) / b).abs() <= tol
}

#[test]
fn contour_parameters_for_supermassive_hole() {
    let lisa = LisaGhostObservables::default();
    assert!(rel_close(lisa.mass_ratio(), 1e6 / PLANCK_MASS_SOLAR, 1e-15));
    let params = lisa.contour_parameters();
    assert!(rel_close(params.m_g_eff, 76963.76332096956, 1e-9));
    assert!(rel_close(params.theta_rad, 1.5707833336672636, 1e-12));
    assert!(rel_close(params.epsilon, -8.163822863554395e-8, 1e-6));
    assert!(rel_close(params.n_eff_pred, 2.7999768392905233, 1e-9));
    assert!(rel_close(params.echo_delay_s, 154.76778281156896, 1e-9));
    assert!(rel_close(params.f0_hz, 6.54e-16, 1e-9));
}

#[test]
fn delay_grows_with_mass() {
    let light = LisaGhostObservables {
        mass_solar: 10.0,
        f_lisa: 1e-3,
    };
    let heavy = LisaGhostObservables::default();
    assert!(light.contour_parameters().echo_delay_s < heavy.contour_parameters().echo_delay_s);
    assert!(rel_close(light.m_g_eff(), 1658.1340157410036, 1e-9));
}

#[test]
fn threshold_is_strict() {
    assert_eq!(SNR_THRESHOLD, 5.0);
    assert!(!is_detectable(5.0));
    assert!(!is_detectable(4.999));
    assert!(is_detectable(5.0 + 1e-12));
    assert!(!is_detectable(f64::NAN));
}

#[test]
fn default_noise_floor_is_not_detectable() {
    let lisa = LisaGhostObservables::default();
    let estimate = lisa.detectability_estimate(DEFAULT_NOISE_FLOOR);
    assert!(rel_close(estimate.h_echo, 1e-20 * 0.3f64.sqrt(), 1e-15));
    assert!(rel_close(estimate.effective_snr, 1.4140155983668652e-7, 1e-6));
    assert_eq!(estimate.modulation_depth, lisa.contour_parameters().epsilon.abs());
    assert!(!estimate.detectable);
}

#[test]
fn quiet_detector_makes_echo_detectable() {
    let lisa = LisaGhostObservables::default();
    let estimate = lisa.detectability_estimate(1e-30);
    assert!(rel_close(estimate.effective_snr, 1414.015598366865, 1e-6));
    assert!(estimate.detectable);
}

#[test]
fn detectable_flag_matches_snr_everywhere() {
    let lisa = LisaGhostObservables::default();
    for exponent in 20..40 {
        let noise = 10f64.powi(-exponent);
        let estimate = lisa.detectability_estimate(noise);
        assert_eq!(estimate.detectable, estimate.effective_snr > 5.0);
    }
}

#[test]
fn retrocausal_pre_echo_is_suppressed() {
    let lisa = LisaGhostObservables::default();
    let signature = lisa.retrocausal_signature();
    assert!(rel_close(signature.acausal_time_s, PLANCK_TIME_S / lisa.m_g_eff(), 1e-12));
    assert_eq!(signature.pre_echo_amplitude, 0.0);
    assert!(!signature.observable);
}

#[test]
fn validation_rejects_negative_mass() {
    let lisa = LisaGhostObservables {
        mass_solar: -1.0,
        f_lisa: 1e-3,
    };
    assert_eq!(lisa.validate().unwrap_err().info().code, "non-positive-parameter");
}
