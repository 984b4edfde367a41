use std::ops::{Add, Mul, Sub};

use super::{cos_from_sin, fma, inv_sqrt, sin, Matrix4};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    pub fn dot(self, other: Self) -> f32 {
        fma(self.x, other.x, fma(self.y, other.y, self.z * other.z))
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            fma(self.y, other.z, -self.z * other.y),
            fma(self.z, other.x, -self.x * other.z),
            fma(self.x, other.y, -self.y * other.x),
        )
    }

    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared euclidean distance, avoiding the square root.
    pub fn distance_squared(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        fma(dx, dx, fma(dy, dy, dz * dz))
    }

    /// Scales to unit length. A zero vector yields NaN components.
    pub fn normalize(self) -> Self {
        let scale = inv_sqrt(fma(self.x, self.x, fma(self.y, self.y, self.z * self.z)));
        Self::new(self.x * scale, self.y * scale, self.z * scale)
    }

    /// Rotates about the +Y axis by `angle` radians.
    pub fn rotate_y(self, angle: f32) -> Self {
        let sin = sin(angle);
        let cos = cos_from_sin(sin, angle);
        Self::new(
            self.x * cos + self.z * sin,
            self.y,
            -self.x * sin + self.z * cos,
        )
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Homogeneous point used for unprojection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn from_point(p: Vector3) -> Self {
        Self::new(p.x, p.y, p.z, 1.0)
    }

    /// Transforms this vector by `mat` (column vector on the right).
    pub fn mul(self, mat: &Matrix4) -> Self {
        let Self { x, y, z, w } = self;
        Self {
            x: fma(mat.m00, x, fma(mat.m10, y, fma(mat.m20, z, mat.m30 * w))),
            y: fma(mat.m01, x, fma(mat.m11, y, fma(mat.m21, z, mat.m31 * w))),
            z: fma(mat.m02, x, fma(mat.m12, y, fma(mat.m22, z, mat.m32 * w))),
            w: fma(mat.m03, x, fma(mat.m13, y, fma(mat.m23, z, mat.m33 * w))),
        }
    }

    /// Divides every component by `scalar` through its reciprocal.
    ///
    /// Used as the perspective divide; `scalar == 0` produces Inf/NaN.
    pub fn div(self, scalar: f32) -> Self {
        let inv = 1.0 / scalar;
        Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
    }

    pub fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}
