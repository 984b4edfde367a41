use super::{cos_from_sin, fma, inv_sqrt, sin, tan, Vector3};

/// 4x4 matrix of floats, column-major to match OpenGL's interpretation:
///
/// ```text
/// m00  m10  m20  m30
/// m01  m11  m21  m31
/// m02  m12  m22  m32
/// m03  m13  m23  m33
/// ```
///
/// `mCR` is column `C`, row `R`. Transform builders right-multiply, so
/// `m.translate(..)` returns `m * T`: the new transform applies to vertices
/// first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix4 {
    pub m00: f32,
    pub m01: f32,
    pub m02: f32,
    pub m03: f32,
    pub m10: f32,
    pub m11: f32,
    pub m12: f32,
    pub m13: f32,
    pub m20: f32,
    pub m21: f32,
    pub m22: f32,
    pub m23: f32,
    pub m30: f32,
    pub m31: f32,
    pub m32: f32,
    pub m33: f32,
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    pub const IDENTITY: Self = Self::from_cols_array(&[
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Identity matrix.
    pub fn new() -> Self {
        Self::IDENTITY
    }

    pub const fn from_cols_array(a: &[f32; 16]) -> Self {
        Self {
            m00: a[0],
            m01: a[1],
            m02: a[2],
            m03: a[3],
            m10: a[4],
            m11: a[5],
            m12: a[6],
            m13: a[7],
            m20: a[8],
            m21: a[9],
            m22: a[10],
            m23: a[11],
            m30: a[12],
            m31: a[13],
            m32: a[14],
            m33: a[15],
        }
    }

    /// Column-major element order, ready for a uniform upload.
    pub fn to_cols_array(&self) -> [f32; 16] {
        [
            self.m00, self.m01, self.m02, self.m03, //
            self.m10, self.m11, self.m12, self.m13, //
            self.m20, self.m21, self.m22, self.m23, //
            self.m30, self.m31, self.m32, self.m33,
        ]
    }

    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        [
            [self.m00, self.m01, self.m02, self.m03],
            [self.m10, self.m11, self.m12, self.m13],
            [self.m20, self.m21, self.m22, self.m23],
            [self.m30, self.m31, self.m32, self.m33],
        ]
    }

    /// Translation expressed in this matrix's own basis. Only column 3 changes.
    pub fn translate(self, x: f32, y: f32, z: f32) -> Self {
        Self {
            m30: fma(self.m00, x, fma(self.m10, y, fma(self.m20, z, self.m30))),
            m31: fma(self.m01, x, fma(self.m11, y, fma(self.m21, z, self.m31))),
            m32: fma(self.m02, x, fma(self.m12, y, fma(self.m22, z, self.m32))),
            m33: fma(self.m03, x, fma(self.m13, y, fma(self.m23, z, self.m33))),
            ..self
        }
    }

    /// Rotation of `angle` radians about +X.
    pub fn rotate_x(self, angle: f32) -> Self {
        let sin = sin(angle);
        let cos = cos_from_sin(sin, angle);
        Self {
            m20: fma(self.m10, -sin, self.m20 * cos),
            m21: fma(self.m11, -sin, self.m21 * cos),
            m22: fma(self.m12, -sin, self.m22 * cos),
            m23: fma(self.m13, -sin, self.m23 * cos),
            m10: fma(self.m10, cos, self.m20 * sin),
            m11: fma(self.m11, cos, self.m21 * sin),
            m12: fma(self.m12, cos, self.m22 * sin),
            m13: fma(self.m13, cos, self.m23 * sin),
            ..self
        }
    }

    /// Rotation of `angle` radians about +Y.
    pub fn rotate_y(self, angle: f32) -> Self {
        let sin = sin(angle);
        let cos = cos_from_sin(sin, angle);
        Self {
            m00: fma(self.m00, cos, self.m20 * -sin),
            m01: fma(self.m01, cos, self.m21 * -sin),
            m02: fma(self.m02, cos, self.m22 * -sin),
            m03: fma(self.m03, cos, self.m23 * -sin),
            m20: fma(self.m00, sin, self.m20 * cos),
            m21: fma(self.m01, sin, self.m21 * cos),
            m22: fma(self.m02, sin, self.m22 * cos),
            m23: fma(self.m03, sin, self.m23 * cos),
            ..self
        }
    }

    /// Scales the three basis columns; the translation column is untouched.
    pub fn scale(self, x: f32, y: f32, z: f32) -> Self {
        Self {
            m00: self.m00 * x,
            m01: self.m01 * x,
            m02: self.m02 * x,
            m03: self.m03 * x,
            m10: self.m10 * y,
            m11: self.m11 * y,
            m12: self.m12 * y,
            m13: self.m13 * y,
            m20: self.m20 * z,
            m21: self.m21 * z,
            m22: self.m22 * z,
            m23: self.m23 * z,
            ..self
        }
    }

    /// Applies an orthographic projection.
    ///
    /// `z_zero_to_one` selects the `[0, 1]` depth range instead of OpenGL's
    /// `[-1, 1]`.
    #[allow(clippy::too_many_arguments)]
    pub fn ortho(
        self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
        z_zero_to_one: bool,
    ) -> Self {
        let rm00 = 2.0 / (right - left);
        let rm11 = 2.0 / (top - bottom);
        let rm22 = (if z_zero_to_one { 1.0 } else { 2.0 }) / (z_near - z_far);
        let rm30 = (left + right) / (left - right);
        let rm31 = (top + bottom) / (bottom - top);
        let rm32 = (if z_zero_to_one { z_near } else { z_far + z_near }) / (z_near - z_far);

        Self {
            m30: self.m00 * rm30 + self.m10 * rm31 + self.m20 * rm32 + self.m30,
            m31: self.m01 * rm30 + self.m11 * rm31 + self.m21 * rm32 + self.m31,
            m32: self.m02 * rm30 + self.m12 * rm31 + self.m22 * rm32 + self.m32,
            m33: self.m03 * rm30 + self.m13 * rm31 + self.m23 * rm32 + self.m33,
            m00: self.m00 * rm00,
            m01: self.m01 * rm00,
            m02: self.m02 * rm00,
            m03: self.m03 * rm00,
            m10: self.m10 * rm11,
            m11: self.m11 * rm11,
            m12: self.m12 * rm11,
            m13: self.m13 * rm11,
            m20: self.m20 * rm22,
            m21: self.m21 * rm22,
            m22: self.m22 * rm22,
            m23: self.m23 * rm22,
        }
    }

    /// Applies a symmetric perspective projection.
    ///
    /// Either `z_far` or `z_near` may be `f32::INFINITY`, in which case the
    /// infinite projection of Lengyel ("Projection Matrix Tricks", GDC 2007)
    /// is used with an epsilon of `1e-6`.
    pub fn perspective_generic(
        self,
        fovy: f32,
        aspect: f32,
        z_near: f32,
        z_far: f32,
        z_zero_to_one: bool,
    ) -> Self {
        const EPSILON: f32 = 1e-6;

        let h = tan(fovy * 0.5);
        let rm00 = 1.0 / (h * aspect);
        let rm11 = 1.0 / h;
        let far_inf = z_far > 0.0 && z_far.is_infinite();
        let near_inf = z_near > 0.0 && z_near.is_infinite();
        let (rm22, rm32) = if far_inf {
            (
                EPSILON - 1.0,
                (EPSILON - if z_zero_to_one { 1.0 } else { 2.0 }) * z_near,
            )
        } else if near_inf {
            (
                (if z_zero_to_one { 0.0 } else { 1.0 }) - EPSILON,
                ((if z_zero_to_one { 1.0 } else { 2.0 }) - EPSILON) * z_far,
            )
        } else {
            (
                (if z_zero_to_one { z_far } else { z_far + z_near }) / (z_near - z_far),
                (if z_zero_to_one { z_far } else { z_far + z_far }) * z_near / (z_near - z_far),
            )
        };

        Self {
            m00: self.m00 * rm00,
            m01: self.m01 * rm00,
            m02: self.m02 * rm00,
            m03: self.m03 * rm00,
            m10: self.m10 * rm11,
            m11: self.m11 * rm11,
            m12: self.m12 * rm11,
            m13: self.m13 * rm11,
            m30: self.m20 * rm32,
            m31: self.m21 * rm32,
            m32: self.m22 * rm32,
            m33: self.m23 * rm32,
            m20: self.m20 * rm22 - self.m30,
            m21: self.m21 * rm22 - self.m31,
            m22: self.m22 * rm22 - self.m32,
            m23: self.m23 * rm22 - self.m33,
        }
    }

    /// Applies a right-handed view transform looking from `eye` at `center`.
    pub fn look_at_generic(self, eye: Vector3, center: Vector3, up: Vector3) -> Self {
        let mut dir_x = eye.x - center.x;
        let mut dir_y = eye.y - center.y;
        let mut dir_z = eye.z - center.z;
        let inv_dir_length = inv_sqrt(dir_x * dir_x + dir_y * dir_y + dir_z * dir_z);
        dir_x *= inv_dir_length;
        dir_y *= inv_dir_length;
        dir_z *= inv_dir_length;

        // left = up x direction
        let mut left_x = up.y * dir_z - up.z * dir_y;
        let mut left_y = up.z * dir_x - up.x * dir_z;
        let mut left_z = up.x * dir_y - up.y * dir_x;
        let inv_left_length = inv_sqrt(left_x * left_x + left_y * left_y + left_z * left_z);
        left_x *= inv_left_length;
        left_y *= inv_left_length;
        left_z *= inv_left_length;

        // up = direction x left
        let upn_x = dir_y * left_z - dir_z * left_y;
        let upn_y = dir_z * left_x - dir_x * left_z;
        let upn_z = dir_x * left_y - dir_y * left_x;

        let rm30 = -(left_x * eye.x + left_y * eye.y + left_z * eye.z);
        let rm31 = -(upn_x * eye.x + upn_y * eye.y + upn_z * eye.z);
        let rm32 = -(dir_x * eye.x + dir_y * eye.y + dir_z * eye.z);

        let m = self;
        Self {
            m30: m.m00 * rm30 + m.m10 * rm31 + m.m20 * rm32 + m.m30,
            m31: m.m01 * rm30 + m.m11 * rm31 + m.m21 * rm32 + m.m31,
            m32: m.m02 * rm30 + m.m12 * rm31 + m.m22 * rm32 + m.m32,
            m33: m.m03 * rm30 + m.m13 * rm31 + m.m23 * rm32 + m.m33,
            m20: m.m00 * left_z + m.m10 * upn_z + m.m20 * dir_z,
            m21: m.m01 * left_z + m.m11 * upn_z + m.m21 * dir_z,
            m22: m.m02 * left_z + m.m12 * upn_z + m.m22 * dir_z,
            m23: m.m03 * left_z + m.m13 * upn_z + m.m23 * dir_z,
            m00: m.m00 * left_x + m.m10 * upn_x + m.m20 * dir_x,
            m01: m.m01 * left_x + m.m11 * upn_x + m.m21 * dir_x,
            m02: m.m02 * left_x + m.m12 * upn_x + m.m22 * dir_x,
            m03: m.m03 * left_x + m.m13 * upn_x + m.m23 * dir_x,
            m10: m.m00 * left_y + m.m10 * upn_y + m.m20 * dir_y,
            m11: m.m01 * left_y + m.m11 * upn_y + m.m21 * dir_y,
            m12: m.m02 * left_y + m.m12 * upn_y + m.m22 * dir_y,
            m13: m.m03 * left_y + m.m13 * upn_y + m.m23 * dir_y,
        }
    }

    /// General inverse via 2x2 sub-determinants.
    ///
    /// A singular matrix is not guarded against; the result is Inf/NaN.
    pub fn invert(self) -> Self {
        let Self {
            m00,
            m01,
            m02,
            m03,
            m10,
            m11,
            m12,
            m13,
            m20,
            m21,
            m22,
            m23,
            m30,
            m31,
            m32,
            m33,
        } = self;

        let a = m00 * m11 - m01 * m10;
        let b = m00 * m12 - m02 * m10;
        let c = m00 * m13 - m03 * m10;
        let d = m01 * m12 - m02 * m11;
        let e = m01 * m13 - m03 * m11;
        let f = m02 * m13 - m03 * m12;
        let g = m20 * m31 - m21 * m30;
        let h = m20 * m32 - m22 * m30;
        let i = m20 * m33 - m23 * m30;
        let j = m21 * m32 - m22 * m31;
        let k = m21 * m33 - m23 * m31;
        let l = m22 * m33 - m23 * m32;
        let det = 1.0 / (a * l - b * k + c * j + d * i - e * h + f * g);

        Self {
            m00: fma(m11, l, fma(-m12, k, m13 * j)) * det,
            m01: fma(-m01, l, fma(m02, k, -m03 * j)) * det,
            m02: fma(m31, f, fma(-m32, e, m33 * d)) * det,
            m03: fma(-m21, f, fma(m22, e, -m23 * d)) * det,
            m10: fma(-m10, l, fma(m12, i, -m13 * h)) * det,
            m11: fma(m00, l, fma(-m02, i, m03 * h)) * det,
            m12: fma(-m30, f, fma(m32, c, -m33 * b)) * det,
            m13: fma(m20, f, fma(-m22, c, m23 * b)) * det,
            m20: fma(m10, k, fma(-m11, i, m13 * g)) * det,
            m21: fma(-m00, k, fma(m01, i, -m03 * g)) * det,
            m22: fma(m30, e, fma(-m31, c, m33 * a)) * det,
            m23: fma(-m20, e, fma(m21, c, -m23 * a)) * det,
            m30: fma(-m10, j, fma(m11, h, -m12 * g)) * det,
            m31: fma(m00, j, fma(-m01, h, m02 * g)) * det,
            m32: fma(-m30, d, fma(m31, b, -m32 * a)) * det,
            m33: fma(m20, d, fma(-m21, b, m22 * a)) * det,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.to_cols_array().iter().all(|v| v.is_finite())
    }
}
