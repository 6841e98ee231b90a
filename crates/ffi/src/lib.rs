//! C ABI for the cyclone math core.
//!
//! Pure operations take and return `CycloneVector3` by value and cannot fail.
//! In-place operations take a `*mut CycloneVector3` and return a
//! `CycloneErrorCode`; on failure the message is available from
//! `cyclone_get_last_error` on the same thread.
//!
//! The build script writes `Cyclone.h` for C/C++ consumers.

mod error;
mod helpers;
mod vector3;

pub use error::*;
pub use vector3::*;
