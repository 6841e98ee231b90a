//! Error reporting across the C boundary.
//!
//! Vector math cannot fail, so the only error an FFI call can hit is a null
//! target pointer. Functions return a `CycloneErrorCode`; the matching message
//! is kept per thread for `cyclone_get_last_error`.

use std::cell::RefCell;
use std::ffi::CString;
use std::fmt;
use std::os::raw::c_char;
use std::ptr;

/// Status returned by every pointer-based cyclone function.
/// 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycloneErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// A pointer argument that must be non-null was null.
    NullPointer = 1,
}

/// A required pointer argument was null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NullPointerError {
    param: &'static str,
}

impl NullPointerError {
    pub fn new(param: &'static str) -> Self {
        Self { param }
    }

    pub fn code(self) -> CycloneErrorCode {
        CycloneErrorCode::NullPointer
    }
}

impl fmt::Display for NullPointerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter '{}' cannot be null", self.param)
    }
}

thread_local! {
    /// Last failure on this thread. Owning the `CString` keeps the pointer
    /// returned by `cyclone_get_last_error` alive.
    static LAST_ERROR: RefCell<(Option<CString>, CycloneErrorCode)> =
        const { RefCell::new((None, CycloneErrorCode::Ok)) };
}

pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, CycloneErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, CycloneErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Message for the most recent failed call on this thread, or null.
///
/// The pointer stays valid until the next in-place cyclone call on the same
/// thread. **DO NOT FREE THIS POINTER**.
///
/// Example:
/// ```c
/// CycloneVector3 *v = NULL;
/// if (cyclone_vector3_normalize(v) != Ok) {
///     const char *error = cyclone_get_last_error();
///     if (error) {
///         printf("normalize failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn cyclone_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Code of the most recent in-place call on this thread; `Ok` if it
/// succeeded or none has been made.
#[no_mangle]
pub extern "C" fn cyclone_get_last_error_code() -> CycloneErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
