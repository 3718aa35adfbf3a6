use std::f64::consts::PI;

use merlin_core::hash::round_f64;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::propagator::Spin2Propagator;

/// Sub-intervals used by the real-axis preset (a 1000 point grid).
///
/// Counts divisible by three put both massless poles `p = ±1` on grid
/// nodes, so the midpoints straddle them symmetrically. Other counts leave a
/// midpoint close to a pole and the sum swings wildly with `n`.
pub const REAL_AXIS_SAMPLES: usize = 999;

/// Sub-intervals used by the Lee-Wick preset (a 2000 point grid).
pub const LEE_WICK_SAMPLES: usize = 1999;

/// Polyline resolution per leg for the winding number of the residue loop.
const WINDING_RESOLUTION: usize = 512;

/// A contour in the complex momentum plane parametrised by `t ∈ [0, 1]`.
pub trait ContourPath {
    /// Point on the contour at parameter `t`.
    fn point(&self, t: f64) -> Complex64;
}

impl<F> ContourPath for F
where
    F: Fn(f64) -> Complex64,
{
    fn point(&self, t: f64) -> Complex64 {
        self(t)
    }
}

/// Straight segment along the real axis from `-half_width` to `+half_width`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RealAxisPath {
    /// Half the length of the segment.
    pub half_width: f64,
}

impl Default for RealAxisPath {
    fn default() -> Self {
        Self { half_width: 3.0 }
    }
}

impl ContourPath for RealAxisPath {
    fn point(&self, t: f64) -> Complex64 {
        Complex64::new(self.half_width * (2.0 * t - 1.0), 0.0)
    }
}

/// Upper half-plane arc from `+radius` to `-radius` with a sinusoidal wobble.
///
/// `p(t) = R·e^{iπt} + i·w·sin(2πt)`. The imaginary part factors as
/// `sin(πt)·(R + 2w·cos(πt))`, so the arc stays on or above the real axis
/// whenever `2w < R`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LeeWickPath {
    /// Radius of the undistorted arc.
    pub radius: f64,
    /// Amplitude of the vertical perturbation.
    pub wobble: f64,
}

impl Default for LeeWickPath {
    fn default() -> Self {
        Self {
            radius: 3.0,
            wobble: 0.5,
        }
    }
}

impl ContourPath for LeeWickPath {
    fn point(&self, t: f64) -> Complex64 {
        let arc = Complex64::from_polar(self.radius, PI * t);
        arc + Complex64::new(0.0, self.wobble * (2.0 * PI * t).sin())
    }
}

/// Preset contour selector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ContourMethod {
    /// Straight line along the real axis.
    Real,
    /// Deformed arc passing above the ghost pole.
    LeeWick,
}

impl ContourMethod {
    /// Sample count the preset uses when none is given.
    pub fn default_samples(self) -> usize {
        match self {
            ContourMethod::Real => REAL_AXIS_SAMPLES,
            ContourMethod::LeeWick => LEE_WICK_SAMPLES,
        }
    }

    /// Stable label used in artefacts and on the command line.
    pub fn label(self) -> &'static str {
        match self {
            ContourMethod::Real => "real",
            ContourMethod::LeeWick => "lee-wick",
        }
    }
}

/// Midpoint rule for `∫ f(p²) dp` along `path` with `samples` equal steps in `t`.
///
/// No refinement and no error estimate. Paths that cross a pole of the
/// integrand produce numerically meaningless sums; that is not detected.
pub fn integrate_with<F, P>(integrand: F, path: &P, samples: usize) -> Complex64
where
    F: Fn(Complex64) -> Complex64,
    P: ContourPath + ?Sized,
{
    let mut acc = Complex64::new(0.0, 0.0);
    if samples == 0 {
        return acc;
    }
    let mut previous = path.point(0.0);
    for idx in 1..=samples {
        let t = idx as f64 / samples as f64;
        let current = path.point(t);
        let midpoint = (previous + current) * 0.5;
        acc += integrand(midpoint * midpoint) * (current - previous);
        previous = current;
    }
    acc
}

/// Integrates the full propagator along `path`.
pub fn integrate<P>(propagator: &Spin2Propagator, path: &P, samples: usize) -> Complex64
where
    P: ContourPath + ?Sized,
{
    integrate_with(|p_sq| propagator.evaluate(p_sq), path, samples)
}

fn integrate_preset(
    propagator: &Spin2Propagator,
    method: ContourMethod,
    samples: usize,
) -> Complex64 {
    match method {
        ContourMethod::Real => integrate(propagator, &RealAxisPath::default(), samples),
        ContourMethod::LeeWick => integrate(propagator, &LeeWickPath::default(), samples),
    }
}

/// Integrates the propagator along a preset contour with its default sample count.
pub fn contour_integral(propagator: &Spin2Propagator, method: ContourMethod) -> Complex64 {
    integrate_preset(propagator, method, method.default_samples())
}

/// Outcome of a single preset contour integration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContourReport {
    /// Preset that was integrated.
    pub method: ContourMethod,
    /// Number of sub-intervals in `t`.
    pub samples: usize,
    /// Accumulated integral.
    pub value: Complex64,
    /// Modulus of the integral.
    pub magnitude: f64,
    /// Whether both components are finite. Reported only, never enforced.
    pub finite: bool,
}

/// Integrates a preset and records the result.
pub fn contour_report(
    propagator: &Spin2Propagator,
    method: ContourMethod,
    samples: usize,
) -> ContourReport {
    let value = integrate_preset(propagator, method, samples);
    ContourReport {
        method,
        samples,
        value: Complex64::new(round_f64(value.re), round_f64(value.im)),
        magnitude: round_f64(value.norm()),
        finite: value.re.is_finite() && value.im.is_finite(),
    }
}

/// Relative change of the integral along `path` between two sample counts.
///
/// Falls back to the absolute change when the finer value is exactly zero.
pub fn convergence_change<P>(
    propagator: &Spin2Propagator,
    path: &P,
    coarse: usize,
    fine: usize,
) -> f64
where
    P: ContourPath + ?Sized,
{
    let coarse_value = integrate(propagator, path, coarse);
    let fine_value = integrate(propagator, path, fine);
    let delta = (fine_value - coarse_value).norm();
    let scale = fine_value.norm();
    if scale == 0.0 {
        delta
    } else {
        delta / scale
    }
}

/// Comparison of the ghost term's closed-loop integral with its residue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResidueCheck {
    /// Sub-intervals used on each leg of the loop.
    pub samples: usize,
    /// Real-axis leg plus Lee-Wick leg of the ghost term.
    pub closed_integral: Complex64,
    /// `2πi` times the ghost residue.
    pub expected: Complex64,
    /// `|closed_integral − expected|`.
    pub abs_error: f64,
    /// Absolute error relative to `|expected|`.
    pub rel_error: f64,
    /// Whether the preset loop winds around the ghost pole.
    pub encloses_ghost_pole: bool,
}

/// Integrates the ghost term around the loop formed by the real-axis preset
/// (left to right) followed by the Lee-Wick preset (right to left).
///
/// Only the ghost term is used: the massless pole sits a distance `δ/2` off
/// the real axis and is only resolved when `samples` is a multiple of three.
/// The ghost pole is well separated from both legs, so the loop converges to
/// `2πi·Res` for any count. Enclosure is the loop's winding number around
/// the pole.
pub fn residue_check(propagator: &Spin2Propagator, samples: usize) -> ResidueCheck {
    let real = RealAxisPath::default();
    let arc = LeeWickPath::default();
    let ghost = |p_sq: Complex64| propagator.ghost_term(p_sq);
    let closed = integrate_with(ghost, &real, samples) + integrate_with(ghost, &arc, samples);
    let expected = Complex64::new(0.0, 2.0 * PI) * propagator.ghost_residue();

    let encloses_ghost_pole = loop_winding(&real, &arc, propagator.ghost_pole()) != 0;

    let abs_error = (closed - expected).norm();
    let rel_error = if expected.norm() == 0.0 {
        abs_error
    } else {
        abs_error / expected.norm()
    };
    ResidueCheck {
        samples,
        closed_integral: closed,
        expected,
        abs_error,
        rel_error,
        encloses_ghost_pole,
    }
}

/// Winding number of the closed loop `real` then `arc` around `z`.
fn loop_winding(real: &RealAxisPath, arc: &LeeWickPath, z: Complex64) -> i64 {
    let n = WINDING_RESOLUTION;
    let points = (0..=n)
        .map(|idx| real.point(idx as f64 / n as f64))
        .chain((1..=n).map(|idx| arc.point(idx as f64 / n as f64)));
    let mut previous: Option<Complex64> = None;
    let mut turns = 0.0;
    for current in points {
        if let Some(previous) = previous {
            turns += ((current - z) / (previous - z)).arg();
        }
        previous = Some(current);
    }
    let winding = (turns / (2.0 * PI)).round();
    if winding.is_finite() {
        winding as i64
    } else {
        0
    }
}
