//! Arm feedforward model.
//!
//! ```text
//! V = Ks × sign(ω) + Kg × cos(θ) + Kv × ω + Ka × α
//! ```
//!
//! `θ` is measured from horizontal: at `θ = 0` the arm is parallel to the
//! floor. Encoders that do not follow this convention need an offset applied
//! by the caller. `sign(0) = 0`, so static friction vanishes at rest.

pub mod discrete;

use armff_common::gains::ArmFeedforwardGains;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FeedforwardError;

/// Feedforward for a motor acting against gravity on a pivoting beam.
///
/// Immutable after construction. `kv ≥ 0` and `ka ≥ 0` hold for every value
/// of this type; `ks` and `kg` may take either sign. Units of the gains
/// dictate units of the computed feedforward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ArmFeedforwardGains", into = "ArmFeedforwardGains")]
pub struct ArmFeedforward {
    /// Static gain [V].
    ks: f64,
    /// Gravity gain [V].
    kg: f64,
    /// Velocity gain [V/(rad/s)].
    kv: f64,
    /// Acceleration gain [V/(rad/s²)].
    ka: f64,
}

impl ArmFeedforward {
    /// Create a feedforward with the given gains.
    ///
    /// # Errors
    /// [`FeedforwardError::InvalidArgument`] if `kv < 0` or `ka < 0`. `kv` is
    /// checked first.
    pub fn new(ks: f64, kg: f64, kv: f64, ka: f64) -> Result<Self, FeedforwardError> {
        if kv < 0.0 {
            return Err(FeedforwardError::negative_gain("kv", kv));
        }
        if ka < 0.0 {
            return Err(FeedforwardError::negative_gain("ka", ka));
        }
        debug!(ks, kg, kv, ka, "arm feedforward constructed");
        Ok(Self { ks, kg, kv, ka })
    }

    /// Create a feedforward with the acceleration gain set to zero.
    ///
    /// # Errors
    /// [`FeedforwardError::InvalidArgument`] if `kv < 0`.
    pub fn new_without_acceleration(ks: f64, kg: f64, kv: f64) -> Result<Self, FeedforwardError> {
        Self::new(ks, kg, kv, 0.0)
    }

    /// Create a feedforward from a named gain record.
    pub fn from_gains(gains: ArmFeedforwardGains) -> Result<Self, FeedforwardError> {
        Self::new(gains.ks, gains.kg, gains.kv, gains.ka)
    }

    /// Static gain [V].
    #[inline]
    pub const fn ks(&self) -> f64 {
        self.ks
    }

    /// Gravity gain [V].
    #[inline]
    pub const fn kg(&self) -> f64 {
        self.kg
    }

    /// Velocity gain [V/(rad/s)].
    #[inline]
    pub const fn kv(&self) -> f64 {
        self.kv
    }

    /// Acceleration gain [V/(rad/s²)].
    #[inline]
    pub const fn ka(&self) -> f64 {
        self.ka
    }

    /// All four gains as a named record.
    #[inline]
    pub const fn gains(&self) -> ArmFeedforwardGains {
        ArmFeedforwardGains::new(self.ks, self.kg, self.kv, self.ka)
    }

    /// Feedforward for a position and velocity reference, acceleration zero.
    #[inline]
    pub fn calculate(&self, position: f64, velocity: f64) -> f64 {
        self.calculate_with_acceleration(position, velocity, 0.0)
    }

    /// Feedforward for a position, velocity and acceleration reference.
    ///
    /// # Arguments
    /// - `position`: Angle reference [rad], from horizontal.
    /// - `velocity`: Velocity reference [rad/s].
    /// - `acceleration`: Acceleration reference [rad/s²].
    ///
    /// # Returns
    /// Feedforward voltage [V]. Non-finite inputs propagate.
    #[inline]
    pub fn calculate_with_acceleration(&self, position: f64, velocity: f64, acceleration: f64) -> f64 {
        self.ks * sign(velocity)
            + self.kg * position.cos()
            + self.kv * velocity
            + self.ka * acceleration
    }

    /// Voltage that carries the arm from `current_velocity` to
    /// `next_velocity` over `dt` seconds, starting at `current_angle`.
    ///
    /// Unlike [`Self::calculate_with_acceleration`], this accounts for the
    /// gravity term changing as the arm rotates during the interval. With
    /// `ka == 0` there are no dynamics to integrate and the result is the
    /// continuous feedforward at acceleration `(next - current) / dt`.
    ///
    /// # Errors
    /// [`FeedforwardError::InvalidArgument`] if `dt` is not positive.
    pub fn calculate_discrete(
        &self,
        current_angle: f64,
        current_velocity: f64,
        next_velocity: f64,
        dt: f64,
    ) -> Result<f64, FeedforwardError> {
        // Also rejects NaN.
        if !(dt > 0.0) {
            return Err(FeedforwardError::non_positive_dt(dt));
        }

        if self.ka == 0.0 {
            let acceleration = (next_velocity - current_velocity) / dt;
            return Ok(self.calculate_with_acceleration(current_angle, current_velocity, acceleration));
        }

        Ok(discrete::solve_voltage(
            self,
            current_angle,
            current_velocity,
            next_velocity,
            dt,
        ))
    }

    // Rearranging the model for velocity or acceleration yields the bounds
    // below. They are useful for making the velocity and acceleration
    // constraints of a trapezoidal profile simultaneously achievable.

    /// Maximum velocity reachable with `max_voltage` at `angle` while
    /// accelerating at `acceleration`.
    ///
    /// Assumes the resulting velocity is positive. `kv == 0` is unguarded.
    #[inline]
    pub fn max_achievable_velocity(&self, max_voltage: f64, angle: f64, acceleration: f64) -> f64 {
        (max_voltage - self.ks - angle.cos() * self.kg - acceleration * self.ka) / self.kv
    }

    /// Minimum velocity reachable with `max_voltage` at `angle` while
    /// accelerating at `acceleration`.
    ///
    /// Assumes the resulting velocity is negative, so `ks` flips sign.
    #[inline]
    pub fn min_achievable_velocity(&self, max_voltage: f64, angle: f64, acceleration: f64) -> f64 {
        (-max_voltage + self.ks - angle.cos() * self.kg - acceleration * self.ka) / self.kv
    }

    /// Maximum acceleration reachable with `max_voltage` at `angle` and
    /// `velocity`. `ka == 0` is unguarded.
    #[inline]
    pub fn max_achievable_acceleration(&self, max_voltage: f64, angle: f64, velocity: f64) -> f64 {
        (max_voltage - self.ks * sign(velocity) - angle.cos() * self.kg - velocity * self.kv)
            / self.ka
    }

    /// Minimum acceleration reachable with `max_voltage` at `angle` and
    /// `velocity`: the maximum with the voltage budget negated.
    #[inline]
    pub fn min_achievable_acceleration(&self, max_voltage: f64, angle: f64, velocity: f64) -> f64 {
        self.max_achievable_acceleration(-max_voltage, angle, velocity)
    }
}

impl TryFrom<ArmFeedforwardGains> for ArmFeedforward {
    type Error = FeedforwardError;

    fn try_from(gains: ArmFeedforwardGains) -> Result<Self, Self::Error> {
        Self::from_gains(gains)
    }
}

impl From<ArmFeedforward> for ArmFeedforwardGains {
    fn from(ff: ArmFeedforward) -> Self {
        ff.gains()
    }
}

/// Sign of `x` with `sign(±0) = 0`. NaN propagates.
///
/// `f64::signum` returns `1.0` for `+0.0`, which would apply static friction
/// to an arm commanded to stand still.
#[inline]
pub(crate) fn sign(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x.signum() }
}

// ─── Tests ──────────────────────────────────────────────────────────
