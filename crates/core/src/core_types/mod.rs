//! Core types and utilities

mod interop;
pub mod vector3;

pub use vector3::Vector3;

/// Scalar type used by every numeric API in the engine.
pub type Real = f32;
