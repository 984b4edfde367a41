//! Minimal column-major linear algebra used by the camera and the picker.
//!
//! Every arithmetic chain keeps a fixed evaluation order. Floating point is
//! not associative, so reordering a fused multiply-add chain moves results by
//! a few ULPs and breaks reproducibility of picked rays.

mod matrix;
mod vector;

pub use matrix::Matrix4;
pub use vector::{Vector3, Vector4};

use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// `a * b + c` with a single rounding step.
#[inline]
pub fn fma(a: f32, b: f32, c: f32) -> f32 {
    a.mul_add(b, c)
}

/// Sine evaluated in double precision, then narrowed.
#[inline]
pub fn sin(angle: f32) -> f32 {
    (angle as f64).sin() as f32
}

/// Tangent evaluated in double precision, then narrowed.
#[inline]
pub fn tan(angle: f32) -> f32 {
    (angle as f64).tan() as f32
}

#[inline]
pub fn inv_sqrt(value: f32) -> f32 {
    1.0 / value.sqrt()
}

/// Derives the cosine of `angle` from its already computed sine.
///
/// The magnitude is `sqrt(1 - sin^2)`; the sign is negative when
/// `angle + pi/2`, reduced into `[0, 2pi)`, lands in the lower half turn.
pub fn cos_from_sin(sin: f32, angle: f32) -> f32 {
    let cos = (1.0 - sin * sin).sqrt();
    let a = angle + FRAC_PI_2;
    let mut b = a - ((a / TAU) as i32) as f32 * TAU;
    if b < 0.0 {
        b += TAU;
    }
    if b >= PI { -cos } else { cos }
}
