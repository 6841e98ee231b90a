//! Three-component vector used for positions, velocities, and directions.
//!
//! # Usage
//! ```
//! use cyclone_core::Vector3;
//!
//! let mut velocity = Vector3::new(1.0, 2.0, 3.0);
//! velocity *= 2.0;
//! assert_eq!(velocity, Vector3::new(2.0, 4.0, 6.0));
//!
//! // `*` with a scalar scales, `*` with a vector is the dot product
//! let speed_sq: f32 = velocity * velocity;
//! assert_eq!(speed_sq, velocity.squared_magnitude());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use super::Real;

/// A 3D vector of [`Real`] components.
///
/// Non-finite components are not rejected; NaN and infinity propagate through
/// every operation unchanged. No operation on this type fails or panics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Vector3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Vector3 {
    /// The zero vector (0, 0, 0)
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Unit vector along +X
    pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    /// Unit vector along +Y
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);

    /// Unit vector along +Z
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Create a vector from its components, stored verbatim.
    #[inline]
    #[must_use]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Vector3 { x, y, z }
    }

    /// Same as [`Vector3::default`].
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    // ========================================================================
    // LENGTH
    // ========================================================================

    /// Euclidean length, `sqrt(x² + y² + z²)`
    #[inline]
    pub fn magnitude(self) -> Real {
        self.squared_magnitude().sqrt()
    }

    /// `x² + y² + z²`, for comparisons where the square root isn't needed
    #[inline]
    pub fn squared_magnitude(self) -> Real {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Scale to unit length in place.
    ///
    /// A vector whose magnitude is not strictly positive (the zero vector, or
    /// one with NaN components) is left exactly as it was.
    ///
    /// ```
    /// use cyclone_core::Vector3;
    ///
    /// let mut v = Vector3::new(3.0, 0.0, 4.0);
    /// v.normalize();
    /// assert_eq!(v, Vector3::new(0.6, 0.0, 0.8));
    ///
    /// let mut zero = Vector3::ZERO;
    /// zero.normalize();
    /// assert_eq!(zero, Vector3::ZERO);
    /// ```
    #[inline]
    pub fn normalize(&mut self) {
        let length = self.magnitude();

        if length > 0.0 {
            self.x /= length;
            self.y /= length;
            self.z /= length;
        }
    }

    /// Negate every component in place
    #[inline]
    pub fn invert(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    // ========================================================================
    // PRODUCTS
    // ========================================================================

    /// Componentwise (Hadamard) product. This is not the dot product, see
    /// [`Vector3::scalar_product`] for that.
    #[inline]
    pub fn component_product(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// In-place form of [`Vector3::component_product`]
    #[inline]
    pub fn component_product_update(&mut self, other: Vector3) {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
    }

    /// Dot product. Also available as `a * b` with two vectors.
    #[inline]
    pub fn scalar_product(self, other: Vector3) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product. Also available as `a % b`.
    ///
    /// ```
    /// use cyclone_core::Vector3;
    ///
    /// assert_eq!(Vector3::X.vector_product(Vector3::Y), Vector3::Z);
    /// assert_eq!(Vector3::X % Vector3::Y, Vector3::Z);
    /// ```
    #[inline]
    pub fn vector_product(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Replace this vector with `self × other`.
    #[inline]
    pub fn vector_product_update(&mut self, other: Vector3) {
        // Every output term reads the original components.
        let Vector3 { x, y, z } = *self;

        self.x = y * other.z - z * other.y;
        self.y = z * other.x - x * other.z;
        self.z = x * other.y - y * other.x;
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ============================================================================
// OPERATORS
// ============================================================================

impl Neg for Vector3 {
    type Output = Vector3;

    #[inline]
    fn neg(mut self) -> Vector3 {
        self.invert();
        self
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    #[inline]
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

/// Scale by a scalar
impl Mul<Real> for Vector3 {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Real) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3> for Real {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl MulAssign<Real> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Real) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

/// Dot product
impl Mul<Vector3> for Vector3 {
    type Output = Real;

    #[inline]
    fn mul(self, rhs: Vector3) -> Real {
        self.scalar_product(rhs)
    }
}

/// Cross product
impl Rem for Vector3 {
    type Output = Vector3;

    #[inline]
    fn rem(self, rhs: Vector3) -> Vector3 {
        self.vector_product(rhs)
    }
}

impl RemAssign for Vector3 {
    #[inline]
    fn rem_assign(&mut self, rhs: Vector3) {
        self.vector_product_update(rhs);
    }
}
