//! Discrete-time arm feedforward.
//!
//! Finds the constant voltage `V` for which the arm dynamics
//!
//! ```text
//! Ka × dω/dt = V − Ks × sign(ω) − Kg × cos(θ) − Kv × ω
//! dθ/dt      = ω
//! ```
//!
//! carry the velocity from `ω(0)` to the requested `ω(dt)`. There is no closed
//! form while `Kg ≠ 0`, so `V` is found iteratively.
//!
//! Integration splits the right-hand side. The damping `−Kv/Ka × ω` is linear
//! and is solved exactly on every sub-step; the remaining forcing is taken as
//! linear in time across the sub-step (exponential predictor-corrector). The
//! scheme has no step-size stability limit, however large `Kv/Ka` gets, and is
//! exact while the forcing is constant (`Kg = 0` with no velocity sign change).
//! The sensitivities `∂θ/∂V`, `∂ω/∂V` share the same linear part and are
//! advanced alongside the state, giving the exact slope of the discrete map.
//!
//! The voltage search is Newton's method safeguarded by a bracket. `ω(dt)`
//! rises with `V`, so whenever Newton stops contracting (typically when the
//! velocity changes sign inside the interval) the search widens until the
//! residual changes sign and then bisects.
//!
//! Convergence: `|ω(dt) − ω_next| ≤ VELOCITY_TOLERANCE × max(1, |ω_next|)`.
//!
//! Everything here lives on the stack.

use tracing::{debug, trace};

use super::{ArmFeedforward, sign};

/// Sub-steps per control period.
pub const DISCRETE_SUBSTEPS: usize = 32;

/// Iteration cap for the voltage search, Newton and bisection steps combined.
pub const MAX_SOLVER_ITERATIONS: usize = 100;

/// Relative terminal-velocity tolerance.
pub const VELOCITY_TOLERANCE: f64 = 1e-9;

/// A Newton step is kept only if it shrinks the residual at least this much.
const NEWTON_CONTRACTION: f64 = 0.5;

/// First outward step [V] when searching for a bracket; doubles each time.
const BRACKET_STEP: f64 = 1.0;

/// Below this `z`, the `φ` functions are summed as series.
const PHI_SERIES_LIMIT: f64 = 1.0;

const PHI_SERIES_TERMS: usize = 20;

/// Arm state and its sensitivity to the applied voltage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmTrajectoryPoint {
    /// Angle [rad].
    pub angle: f64,
    /// Angular velocity [rad/s].
    pub velocity: f64,
    /// ∂angle/∂V [rad/V].
    pub angle_sensitivity: f64,
    /// ∂velocity/∂V [rad/s/V].
    pub velocity_sensitivity: f64,
}

/// Forcing over one sub-step, `start + rate × τ`.
#[derive(Debug, Clone, Copy)]
struct Forcing {
    start: f64,
    rate: f64,
}

impl Forcing {
    fn constant(start: f64) -> Self {
        Self { start, rate: 0.0 }
    }

    fn towards(start: f64, end: f64, h: f64) -> Self {
        Self {
            start,
            rate: (end - start) / h,
        }
    }
}

/// Weights of the exact sub-step solution of
/// `x' = v`, `v' = −λv + f₀ + f₁τ`.
#[derive(Debug, Clone, Copy)]
struct StepWeights {
    h: f64,
    decay: f64,
    phi: [f64; 3],
}

impl StepWeights {
    fn new(ff: &ArmFeedforward, h: f64) -> Self {
        let z = ff.kv / ff.ka * h;
        Self {
            h,
            decay: (-z).exp(),
            phi: phi(z),
        }
    }

    #[inline]
    fn advance(&self, x: f64, v: f64, f: Forcing) -> (f64, f64) {
        let [p1, p2, p3] = self.phi;
        let h = self.h;
        (
            x + h * p1 * v + h * h * (p2 * f.start + h * p3 * f.rate),
            self.decay * v + h * (p1 * f.start + h * p2 * f.rate),
        )
    }
}

/// `φ₁(z)`, `φ₂(z)`, `φ₃(z)` with `φₖ(z) = Σₙ (−z)ⁿ / (n + k)!`.
///
/// `φ₁(0) = 1`, `φ₂(0) = 1/2`, `φ₃(0) = 1/6`; all tend to zero as `z → ∞`.
fn phi(z: f64) -> [f64; 3] {
    let mut out = [0.0; 3];

    if z < PHI_SERIES_LIMIT {
        let mut leading = 1.0;
        for (k, slot) in out.iter_mut().enumerate() {
            let order = k + 1;
            leading /= order as f64;
            let mut term = leading;
            for n in 0..PHI_SERIES_TERMS {
                *slot += term;
                term *= -z / (n + order + 1) as f64;
            }
        }
    } else {
        // Closed forms; no cancellation once z ≥ 1.
        out[0] = -(-z).exp_m1() / z;
        out[1] = (1.0 - out[0]) / z;
        out[2] = (0.5 - out[1]) / z;
    }

    out
}

impl ArmTrajectoryPoint {
    fn start(angle: f64, velocity: f64) -> Self {
        Self {
            angle,
            velocity,
            angle_sensitivity: 0.0,
            velocity_sensitivity: 0.0,
        }
    }

    #[inline]
    fn advanced(&self, w: &StepWeights, acceleration: Forcing, sensitivity: Forcing) -> Self {
        let (angle, velocity) = w.advance(self.angle, self.velocity, acceleration);
        let (angle_sensitivity, velocity_sensitivity) =
            w.advance(self.angle_sensitivity, self.velocity_sensitivity, sensitivity);
        Self {
            angle,
            velocity,
            angle_sensitivity,
            velocity_sensitivity,
        }
    }
}

/// Everything in `dω/dt` except the damping, and its voltage derivative.
///
/// `sign(ω)` is piecewise constant and contributes nothing to the
/// sensitivity.
#[inline]
fn forcing(ff: &ArmFeedforward, voltage: f64, s: &ArmTrajectoryPoint) -> (f64, f64) {
    let (sin, cos) = s.angle.sin_cos();
    (
        (voltage - ff.ks * sign(s.velocity) - ff.kg * cos) / ff.ka,
        (1.0 + ff.kg * sin * s.angle_sensitivity) / ff.ka,
    )
}

/// Integrate the arm under a constant `voltage` for `dt` seconds.
///
/// Requires `ka > 0`; with `ka == 0` the dynamics are algebraic and the
/// result is non-finite.
///
/// # Returns
/// Angle, velocity and their voltage sensitivities at `t = dt`.
pub fn integrate(
    ff: &ArmFeedforward,
    angle: f64,
    velocity: f64,
    voltage: f64,
    dt: f64,
) -> ArmTrajectoryPoint {
    let w = StepWeights::new(ff, dt / DISCRETE_SUBSTEPS as f64);
    let mut s = ArmTrajectoryPoint::start(angle, velocity);

    for _ in 0..DISCRETE_SUBSTEPS {
        let (a0, s0) = forcing(ff, voltage, &s);
        let predicted = s.advanced(&w, Forcing::constant(a0), Forcing::constant(s0));
        let (a1, s1) = forcing(ff, voltage, &predicted);
        s = s.advanced(
            &w,
            Forcing::towards(a0, a1, w.h),
            Forcing::towards(s0, s1, w.h),
        );
    }

    s
}

/// Voltages known to fall short of (`below`) and overshoot (`above`) the
/// target velocity, kept with `below < above`.
#[derive(Debug, Default, Clone, Copy)]
struct Bracket {
    below: Option<f64>,
    above: Option<f64>,
}

impl Bracket {
    fn record(&mut self, voltage: f64, residual: f64) {
        if residual < 0.0 {
            if self.above.is_some_and(|a| voltage >= a) {
                self.above = None;
            }
            if self.below.is_none_or(|b| voltage > b) {
                self.below = Some(voltage);
            }
        } else {
            if self.below.is_some_and(|b| voltage <= b) {
                self.below = None;
            }
            if self.above.is_none_or(|a| voltage < a) {
                self.above = Some(voltage);
            }
        }
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        self.below.zip(self.above)
    }
}

/// Solve for the constant voltage reaching `next_velocity` after `dt`.
///
/// Caller guarantees `dt > 0` and `ka > 0`.
pub(crate) fn solve_voltage(
    ff: &ArmFeedforward,
    current_angle: f64,
    current_velocity: f64,
    next_velocity: f64,
    dt: f64,
) -> f64 {
    let mut voltage = ff.calculate_with_acceleration(
        current_angle,
        current_velocity,
        (next_velocity - current_velocity) / dt,
    );
    let tolerance = VELOCITY_TOLERANCE * next_velocity.abs().max(1.0);

    let mut bracket = Bracket::default();
    let mut best_voltage = voltage;
    let mut best_residual = f64::INFINITY;
    let mut previous_residual = f64::INFINITY;
    let mut widen = BRACKET_STEP;

    for iteration in 0..MAX_SOLVER_ITERATIONS {
        let end = integrate(ff, current_angle, current_velocity, voltage, dt);
        let residual = end.velocity - next_velocity;
        trace!(iteration, voltage, residual, "discrete feedforward iterate");

        if !residual.is_finite() {
            debug!(iteration, voltage, residual, "discrete feedforward residual not finite");
            return best_voltage;
        }
        if residual.abs() < best_residual {
            best_voltage = voltage;
            best_residual = residual.abs();
        }
        if residual.abs() <= tolerance {
            return voltage;
        }
        bracket.record(voltage, residual);

        let newton = voltage - residual / end.velocity_sensitivity;
        let contracting = residual.abs() <= NEWTON_CONTRACTION * previous_residual;
        previous_residual = residual.abs();

        voltage = match bracket.bounds() {
            Some((low, high)) if contracting && newton > low && newton < high => newton,
            Some((low, high)) => {
                let mid = 0.5 * (low + high);
                if mid <= low || mid >= high {
                    debug!(
                        iteration,
                        best_voltage, best_residual, "discrete feedforward bracket collapsed"
                    );
                    return best_voltage;
                }
                mid
            }
            None if contracting && newton.is_finite() => newton,
            None => {
                // ω(dt) rises with V: step against the residual.
                let step = widen.copysign(-residual);
                widen *= 2.0;
                voltage + step
            }
        };
    }

    debug!(
        iterations = MAX_SOLVER_ITERATIONS,
        best_voltage, best_residual, "discrete feedforward did not converge"
    );
    best_voltage
}
