//! Cyclone Physics Core Library
//!
//! Math primitives for the cyclone rigid-body engine. Everything here is a
//! plain `Copy` value type meant for the simulation inner loop: operations
//! never allocate, never fail, and never check their inputs.
//!
//! ## Vectors
//!
//! [`Vector3`] holds three [`Real`] components and provides the usual
//! arithmetic as both named methods and operators:
//! - `a + b`, `a - b`, `-a` and their compound forms
//! - `a * s` scales by a scalar, `a * b` is the dot product
//! - `a % b` is the cross product
//!
//! ```
//! use cyclone_core::Vector3;
//!
//! let lhs = Vector3::new(-9.0, 1.5, -2.0);
//! let rhs = Vector3::new(0.0, -4.0, 1.0);
//!
//! assert_eq!(lhs * rhs, -8.0);
//! assert_eq!(lhs % rhs, Vector3::new(-6.5, 9.0, 36.0));
//! ```

// Core types and utilities
pub mod core_types;

// Re-export core types
pub use core_types::{Real, Vector3};
