use cyclone_core::Vector3;

use crate::error::CycloneErrorCode;
use crate::helpers::with_vector_mut;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// FFI-friendly 3D vector.
/// Keep this layout stable for C/C++ consumers.
pub struct CycloneVector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vector3> for CycloneVector3 {
    fn from(v: Vector3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<CycloneVector3> for Vector3 {
    fn from(v: CycloneVector3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

// ============================================================================
// CONSTRUCTION & PURE OPERATIONS
// ============================================================================

/// Zero vector (0, 0, 0).
#[no_mangle]
pub extern "C" fn cyclone_vector3_zero() -> CycloneVector3 {
    Vector3::zero().into()
}

/// Vector with the given components, stored verbatim.
#[no_mangle]
pub extern "C" fn cyclone_vector3_new(x: f32, y: f32, z: f32) -> CycloneVector3 {
    Vector3::new(x, y, z).into()
}

/// Euclidean length of `v`.
#[no_mangle]
pub extern "C" fn cyclone_vector3_magnitude(v: CycloneVector3) -> f32 {
    Vector3::from(v).magnitude()
}

/// Squared length of `v`.
#[no_mangle]
pub extern "C" fn cyclone_vector3_squared_magnitude(v: CycloneVector3) -> f32 {
    Vector3::from(v).squared_magnitude()
}

/// `v * scalar`
#[no_mangle]
pub extern "C" fn cyclone_vector3_scale(v: CycloneVector3, scalar: f32) -> CycloneVector3 {
    (Vector3::from(v) * scalar).into()
}

/// `a + b`
#[no_mangle]
pub extern "C" fn cyclone_vector3_add(a: CycloneVector3, b: CycloneVector3) -> CycloneVector3 {
    (Vector3::from(a) + Vector3::from(b)).into()
}

/// `a - b`
#[no_mangle]
pub extern "C" fn cyclone_vector3_sub(a: CycloneVector3, b: CycloneVector3) -> CycloneVector3 {
    (Vector3::from(a) - Vector3::from(b)).into()
}

/// Componentwise (Hadamard) product. Not the dot product.
#[no_mangle]
pub extern "C" fn cyclone_vector3_component_product(
    a: CycloneVector3,
    b: CycloneVector3,
) -> CycloneVector3 {
    Vector3::from(a).component_product(b.into()).into()
}

/// Dot product `a · b`.
#[no_mangle]
pub extern "C" fn cyclone_vector3_scalar_product(a: CycloneVector3, b: CycloneVector3) -> f32 {
    Vector3::from(a).scalar_product(b.into())
}

/// Cross product `a × b`.
#[no_mangle]
pub extern "C" fn cyclone_vector3_vector_product(
    a: CycloneVector3,
    b: CycloneVector3,
) -> CycloneVector3 {
    Vector3::from(a).vector_product(b.into()).into()
}

// ============================================================================
// IN-PLACE OPERATIONS
// ============================================================================
//
// All of these return
// - `CycloneErrorCode::Ok` (0) on success, with `*v` updated
// - `CycloneErrorCode::NullPointer` if `v` is null (see `cyclone_get_last_error`)

/// Negate every component of `*v`.
///
/// # Safety
/// `v` must be null or a valid, writable pointer to a `CycloneVector3`.
#[no_mangle]
pub unsafe extern "C" fn cyclone_vector3_invert(v: *mut CycloneVector3) -> CycloneErrorCode {
    unsafe { with_vector_mut(v, "invert", Vector3::invert) }
}

/// Scale `*v` to unit length. A zero-length vector is left unchanged and
/// still reports `Ok`.
///
/// # Safety
/// `v` must be null or a valid, writable pointer to a `CycloneVector3`.
#[no_mangle]
pub unsafe extern "C" fn cyclone_vector3_normalize(v: *mut CycloneVector3) -> CycloneErrorCode {
    unsafe { with_vector_mut(v, "normalize", Vector3::normalize) }
}

/// `*v *= scalar`
///
/// # Safety
/// `v` must be null or a valid, writable pointer to a `CycloneVector3`.
#[no_mangle]
pub unsafe extern "C" fn cyclone_vector3_scale_update(
    v: *mut CycloneVector3,
    scalar: f32,
) -> CycloneErrorCode {
    unsafe { with_vector_mut(v, "scale_update", |vec| *vec *= scalar) }
}

/// `*v += other`
///
/// # Safety
/// `v` must be null or a valid, writable pointer to a `CycloneVector3`.
#[no_mangle]
pub unsafe extern "C" fn cyclone_vector3_add_update(
    v: *mut CycloneVector3,
    other: CycloneVector3,
) -> CycloneErrorCode {
    unsafe { with_vector_mut(v, "add_update", |vec| *vec += Vector3::from(other)) }
}

/// `*v -= other`
///
/// # Safety
/// `v` must be null or a valid, writable pointer to a `CycloneVector3`.
#[no_mangle]
pub unsafe extern "C" fn cyclone_vector3_sub_update(
    v: *mut CycloneVector3,
    other: CycloneVector3,
) -> CycloneErrorCode {
    unsafe { with_vector_mut(v, "sub_update", |vec| *vec -= Vector3::from(other)) }
}

/// Multiply each component of `*v` by the matching component of `other`.
///
/// # Safety
/// `v` must be null or a valid, writable pointer to a `CycloneVector3`.
#[no_mangle]
pub unsafe extern "C" fn cyclone_vector3_component_product_update(
    v: *mut CycloneVector3,
    other: CycloneVector3,
) -> CycloneErrorCode {
    unsafe {
        with_vector_mut(v, "component_product_update", |vec| {
            vec.component_product_update(other.into());
        })
    }
}

/// Replace `*v` with `*v × other`.
///
/// # Safety
/// `v` must be null or a valid, writable pointer to a `CycloneVector3`.
#[no_mangle]
pub unsafe extern "C" fn cyclone_vector3_vector_product_update(
    v: *mut CycloneVector3,
    other: CycloneVector3,
) -> CycloneErrorCode {
    unsafe { with_vector_mut(v, "vector_product_update", |vec| *vec %= Vector3::from(other)) }
}
