//! # Arm Feedforward
//!
//! Open-loop voltage feedforward for a single-jointed arm: a motor driving a
//! beam that pivots against gravity. The model is
//!
//! ```text
//! V = Ks·sign(ω) + Kg·cos(θ) + Kv·ω + Ka·α
//! ```
//!
//! with `θ` measured from horizontal. Besides the continuous evaluator the
//! crate provides a discrete-time evaluator that integrates the arm dynamics
//! across a control period, and the algebraic inversions that bound the
//! velocity and acceleration reachable within a voltage budget.
//!
//! ```rust
//! use armff_feedforward::ArmFeedforward;
//!
//! let ff = ArmFeedforward::new_without_acceleration(1.0, 2.0, 3.0)?;
//! assert_eq!(ff.calculate(0.0, 4.0), 15.0);
//! # Ok::<(), armff_feedforward::FeedforwardError>(())
//! ```

pub mod config;
pub mod error;
pub mod feedforward;

pub use error::FeedforwardError;
pub use feedforward::ArmFeedforward;
