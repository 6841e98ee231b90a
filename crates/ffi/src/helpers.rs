use crate::error::{with_last_error_mut, CycloneErrorCode, NullPointerError};
use crate::vector3::CycloneVector3;
use cyclone_core::Vector3;
use std::ffi::CString;

/// Record `error` as this thread's last error and return its code.
#[inline]
pub(crate) fn track_error(error: NullPointerError) -> CycloneErrorCode {
    let msg = error.to_string();
    tracing::warn!(code = ?error.code(), "{msg}");

    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(msg).ok();
        *code = error.code();
    });
    error.code()
}

/// Reset this thread's last error after a successful call.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = CycloneErrorCode::Ok;
    });
}

/// Run `func` on the vector behind `ptr` and write the result back.
///
/// A null `ptr` is never dereferenced; the failure is recorded as the last
/// error and `NullPointer` is returned.
///
/// # Safety
/// `ptr` must be null or point to a valid, writable `CycloneVector3`.
pub(crate) unsafe fn with_vector_mut<F>(
    ptr: *mut CycloneVector3,
    op: &'static str,
    func: F,
) -> CycloneErrorCode
where
    F: FnOnce(&mut Vector3),
{
    // SAFETY: the caller guarantees `ptr` is either null or valid for writes.
    let Some(target) = (unsafe { ptr.as_mut() }) else {
        return track_error(NullPointerError::new("v"));
    };

    let mut v = Vector3::from(*target);
    func(&mut v);
    *target = v.into();

    tracing::debug!(op, result = %v, "updated vector in place");
    clear_last_error();
    CycloneErrorCode::Ok
}
