//! atan(x) from Rajan, Wang, Inkol and Joyal, "Efficient approximations for
//! the arctangent function" (2006):
//!
//! `atan(x) ~ pi/4 x - x (|x| - 1)(0.2447 + 0.0663 |x|)`, expanded into a
//! single polynomial in x and |x|. 12 full-rate ALU on the tuning GPU.

/// Largest |x| the fit covers.
pub const ATAN_FIT_RANGE: f32 = 1.0;

/// Worst-case absolute error of [`atan_fast`] for |x| <= [`ATAN_FIT_RANGE`].
pub const ATAN_MAX_ABS_ERROR: f32 = 1.6e-3;

/// Approximate atan(x).
///
/// Accurate for |x| <= 1. Outside that range the result is not clamped and
/// the error grows quickly (about 0.29 rad at |x| = 2); reduce with
/// atan(x) = sign(x) pi/2 - atan(1/x) first if large arguments occur.
#[inline]
pub fn atan_fast(x: f32) -> f32 {
    let ax = if x < 0.0 { -x } else { x };
    x * (-0.1784 * ax - 0.0663 * x * x + 1.0301)
}
