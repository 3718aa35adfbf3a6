//! Unit conversion constants.
//!
//! The toolkit mixes natural units (Planck mass = 1) with solar-mass units in
//! the LISA estimates. The constants are kept verbatim and the two systems are
//! never unified.

/// Planck mass expressed in solar masses.
pub const PLANCK_MASS_SOLAR: f64 = 2.18e-8;

/// Planck time in seconds.
pub const PLANCK_TIME_S: f64 = 5.39e-44;

/// `G M_sun / c^3` in seconds.
pub const SOLAR_LIGHT_CROSSING_S: f64 = 4.92e-6;

/// Characteristic `c^3 / (G M)` frequency scale in Hz used for `f_0`.
pub const CHARACTERISTIC_FREQUENCY_HZ: f64 = 0.03;

/// Stelle coupling `f_2 = m_g / M_Pl` used by the reference parameter set.
pub const REFERENCE_F2: f64 = 2.15;
