//! Conversions between [`Vector3`] and other vector representations.
//!
//! `nalgebra` is what the rest of the simulation stack uses for linear
//! algebra, so vectors cross that boundary often. Arrays and tuples cover
//! plain data coming from files and GPU buffers.

use super::{Real, Vector3};

impl From<nalgebra::Vector3<Real>> for Vector3 {
    #[inline]
    fn from(v: nalgebra::Vector3<Real>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<Real> {
    #[inline]
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<[Real; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [Real; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [Real; 3] {
    #[inline]
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<(Real, Real, Real)> for Vector3 {
    #[inline]
    fn from((x, y, z): (Real, Real, Real)) -> Self {
        Vector3::new(x, y, z)
    }
}
