use merlin_pheno::ParityContourConnection;
use proptest::prelude::*;

#[test]
fn contour_angle_is_half_the_mass_argument() {
    let parity = ParityContourConnection::default();
    let expected = 2.15f64.atan2(1.0) / 2.0;
    assert!((parity.contour_angle() - expected).abs() < 1e-15);
    assert!((parity.contour_angle() - 0.5677215258212971).abs() < 1e-12);
}

#[test]
fn epsilon_vanishes_at_zero_frequency() {
    let parity = ParityContourConnection::default();
    assert_eq!(parity.epsilon_omega(0.0), 0.0);
}

#[test]
fn epsilon_matches_closed_form() {
    let parity = ParityContourConnection::default();
    assert!((parity.epsilon_omega(1.0) + 0.5358797719347778).abs() < 1e-12);
    // Resonance enhancement peaks at ω = m_g where the factor is 1 + 0.5/0.1 = 6.
    assert!((parity.epsilon_omega(2.15) + 2.4571117286705677).abs() < 1e-12);
    assert!(parity.epsilon_omega(2.15).abs() > parity.epsilon_omega(1.0).abs());
}

#[test]
fn zigzag_sequence_alternates() {
    let parity = ParityContourConnection::default();
    let eps = parity.epsilon_omega(1.0);
    let sequence = parity.zigzag_sequence(1.0, 4);
    assert_eq!(sequence, vec![1.0 + eps, 1.0 - eps, 1.0 + eps, 1.0 - eps]);
    assert!(parity.zigzag_sequence(1.0, 0).is_empty());
}

#[test]
fn negative_steps_follow_parity() {
    let parity = ParityContourConnection::default();
    let eps = parity.epsilon_omega(0.7);
    assert_eq!(parity.zigzag_damping(-1, 0.7), 1.0 - eps);
    assert_eq!(parity.zigzag_damping(-2, 0.7), 1.0 + eps);
}

#[test]
fn validation_rejects_zero_mass() {
    let parity = ParityContourConnection { m_g: 0.0, m_p: 1.0 };
    let err = parity.validate().unwrap_err();
    assert_eq!(err.info().context.get("parameter").map(String::as_str), Some("parity.m_g"));
}

proptest! {
    #[test]
    fn zigzag_even_and_odd(n in -1000i64..1000, omega in -50.0f64..50.0) {
        let parity = ParityContourConnection::default();
        let eps = parity.epsilon_omega(omega);
        let value = parity.zigzag_damping(n, omega);
        if n % 2 == 0 {
            prop_assert_eq!(value, 1.0 + eps);
        } else {
            prop_assert_eq!(value, 1.0 - eps);
        }
    }

    #[test]
    fn epsilon_opposes_frequency_sign(omega in 1e-3f64..50.0) {
        let parity = ParityContourConnection::default();
        prop_assert!(parity.epsilon_omega(omega) < 0.0);
        prop_assert!(parity.epsilon_omega(-omega) > 0.0);
    }
}
