//! Exercises the C ABI from Rust the way a C++ caller would use it.

use cyclone_ffi::{
    cyclone_get_last_error, cyclone_get_last_error_code, cyclone_vector3_add,
    cyclone_vector3_add_update, cyclone_vector3_component_product,
    cyclone_vector3_component_product_update, cyclone_vector3_invert, cyclone_vector3_magnitude,
    cyclone_vector3_new, cyclone_vector3_normalize, cyclone_vector3_scalar_product,
    cyclone_vector3_scale, cyclone_vector3_scale_update, cyclone_vector3_squared_magnitude,
    cyclone_vector3_sub, cyclone_vector3_sub_update, cyclone_vector3_vector_product,
    cyclone_vector3_vector_product_update, cyclone_vector3_zero, CycloneErrorCode,
    CycloneVector3,
};
use std::ffi::CStr;
use std::ptr;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn last_error_message() -> Option<String> {
    let msg = cyclone_get_last_error();
    if msg.is_null() {
        return None;
    }
    // SAFETY: non-null pointers from cyclone_get_last_error are valid C strings
    // until the next FFI call on this thread.
    Some(unsafe { CStr::from_ptr(msg) }.to_string_lossy().into_owned())
}

fn vec3(x: f32, y: f32, z: f32) -> CycloneVector3 {
    cyclone_vector3_new(x, y, z)
}

#[test]
fn test_construction() {
    assert_eq!(cyclone_vector3_zero(), CycloneVector3 { x: 0.0, y: 0.0, z: 0.0 });

    let v = vec3(1.0, 2.0, 3.0);
    assert_eq!((v.x, v.y, v.z), (1.0, 2.0, 3.0));
}

#[test]
fn test_pure_operations() {
    let v = vec3(1.0, 2.0, 3.0);
    assert_eq!(cyclone_vector3_magnitude(v), f32::sqrt(14.0));
    assert_eq!(cyclone_vector3_squared_magnitude(v), 14.0);
    assert_eq!(cyclone_vector3_scale(v, 2.0), vec3(2.0, 4.0, 6.0));

    let lhs = vec3(-1.0, 0.0, 5.0);
    let rhs = vec3(3.0, -2.0, 4.0);
    assert_eq!(cyclone_vector3_add(lhs, rhs), vec3(2.0, -2.0, 9.0));
    assert_eq!(cyclone_vector3_sub(lhs, rhs), vec3(-4.0, 2.0, 1.0));

    let lhs = vec3(-9.0, 1.5, -2.0);
    let rhs = vec3(0.0, -4.0, 1.0);
    assert_eq!(cyclone_vector3_component_product(lhs, rhs), vec3(0.0, -6.0, -2.0));
    assert_eq!(cyclone_vector3_scalar_product(lhs, rhs), -8.0);
    assert_eq!(cyclone_vector3_vector_product(lhs, rhs), vec3(-6.5, 9.0, 36.0));
}

#[test]
fn test_in_place_operations() {
    let mut v = vec3(1.0, 2.0, 3.0);
    assert_eq!(unsafe { cyclone_vector3_invert(&mut v) }, CycloneErrorCode::Ok);
    assert_eq!(v, vec3(-1.0, -2.0, -3.0));

    let mut v = vec3(1.0, 2.0, 3.0);
    assert_eq!(unsafe { cyclone_vector3_scale_update(&mut v, -2.0) }, CycloneErrorCode::Ok);
    assert_eq!(v, vec3(-2.0, -4.0, -6.0));

    let mut v = vec3(-1.0, 0.0, 5.0);
    assert_eq!(
        unsafe { cyclone_vector3_add_update(&mut v, vec3(3.0, -2.0, 4.0)) },
        CycloneErrorCode::Ok
    );
    assert_eq!(v, vec3(2.0, -2.0, 9.0));

    let mut v = vec3(-1.0, 0.0, 5.0);
    assert_eq!(
        unsafe { cyclone_vector3_sub_update(&mut v, vec3(3.0, -2.0, 4.0)) },
        CycloneErrorCode::Ok
    );
    assert_eq!(v, vec3(-4.0, 2.0, 1.0));

    let mut v = vec3(-9.0, 1.5, -2.0);
    assert_eq!(
        unsafe { cyclone_vector3_component_product_update(&mut v, vec3(0.0, -4.0, 1.0)) },
        CycloneErrorCode::Ok
    );
    assert_eq!(v, vec3(0.0, -6.0, -2.0));

    let mut v = vec3(-9.0, 1.5, -2.0);
    assert_eq!(
        unsafe { cyclone_vector3_vector_product_update(&mut v, vec3(0.0, -4.0, 1.0)) },
        CycloneErrorCode::Ok
    );
    assert_eq!(v, vec3(-6.5, 9.0, 36.0));
}

#[test]
fn test_normalize() {
    let mut v = vec3(1.0, 2.0, 3.0);
    assert_eq!(unsafe { cyclone_vector3_normalize(&mut v) }, CycloneErrorCode::Ok);

    let length = f32::sqrt(14.0);
    assert_eq!(v, vec3(1.0 / length, 2.0 / length, 3.0 / length));

    // Zero length is a successful no-op
    let mut zero = cyclone_vector3_zero();
    assert_eq!(unsafe { cyclone_vector3_normalize(&mut zero) }, CycloneErrorCode::Ok);
    assert_eq!(zero, cyclone_vector3_zero());
    assert_eq!(cyclone_get_last_error_code(), CycloneErrorCode::Ok);
}

#[test]
fn test_null_pointer_is_reported() {
    let code = unsafe { cyclone_vector3_invert(ptr::null_mut()) };

    assert_eq!(code, CycloneErrorCode::NullPointer);
    assert_eq!(cyclone_get_last_error_code(), CycloneErrorCode::NullPointer);
    assert_eq!(
        last_error_message().as_deref(),
        Some("Parameter 'v' cannot be null")
    );

    let code = unsafe {
        cyclone_vector3_vector_product_update(ptr::null_mut(), vec3(1.0, 0.0, 0.0))
    };
    assert_eq!(code, CycloneErrorCode::NullPointer);
}

#[test]
fn test_success_clears_last_error() {
    let _ = unsafe { cyclone_vector3_normalize(ptr::null_mut()) };
    assert_eq!(cyclone_get_last_error_code(), CycloneErrorCode::NullPointer);

    let mut v = vec3(0.0, 3.0, 4.0);
    assert_eq!(unsafe { cyclone_vector3_normalize(&mut v) }, CycloneErrorCode::Ok);

    assert_eq!(cyclone_get_last_error_code(), CycloneErrorCode::Ok);
    assert!(last_error_message().is_none());
}

#[test]
fn test_last_error_is_per_thread() {
    let _ = unsafe { cyclone_vector3_invert(ptr::null_mut()) };
    assert_eq!(cyclone_get_last_error_code(), CycloneErrorCode::NullPointer);

    let (code, message) =
        std::thread::spawn(|| (cyclone_get_last_error_code(), last_error_message()))
            .join()
            .unwrap();
    assert_eq!(code, CycloneErrorCode::Ok);
    assert!(message.is_none());

    // The failing thread still sees its own error
    assert_eq!(cyclone_get_last_error_code(), CycloneErrorCode::NullPointer);
}
