//! Arm Feedforward Common Library
//!
//! This crate provides the shared gain record, its fixed binary layout and
//! the configuration loading utilities used by all workspace crates.
//!
//! # Module Structure
//!
//! - [`gains`] - Named gain record exchanged with serialization layers
//! - [`layout`] - Fixed 32-byte packed layout of the gain record
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use armff_common::prelude::*;
//!
//! let gains = ArmFeedforwardGains::new(0.2, 0.9, 1.8, 0.05);
//! let bytes = ArmFeedforwardLayout::from(gains).pack();
//! assert_eq!(bytes.len(), ArmFeedforwardLayout::SIZE);
//! ```

pub mod config;
pub mod gains;
pub mod layout;
pub mod prelude;
