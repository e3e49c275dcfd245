//! acos(x) via a cubic in |x| times sqrt(1 - |x|).
//!
//! The cubic is the classic Hastings fit for acos on [0, 1]; negative
//! arguments use acos(-a) = pi - acos(a). 4 VGPRs, 16 full-rate ALU on the
//! tuning GPU.

use super::{PI, sqrt_hw};

const C0: f32 = 1.5707288;
const C1: f32 = -0.2121144;
const C2: f32 = 0.0742610;
const C3: f32 = -0.0187293;

/// Worst-case absolute error of [`acos_fast`] on [-1, 1], in radians.
pub const ACOS_MAX_ABS_ERROR: f32 = 7.0e-5;

/// Approximate acos(x) for x in [-1, 1].
///
/// `acos_fast(1.0)` is exactly `0.0` and `acos_fast(-1.0)` is `PI`. For
/// |x| > 1 the result is unspecified (NaN on most targets).
#[inline]
pub fn acos_fast(x: f32) -> f32 {
    let a = if x < 0.0 { -x } else { x };
    let a2 = a * a;
    let a3 = a2 * a;

    let mut s = C1 * a + C0;
    s = C2 * a2 + s;
    s = C3 * a3 + s;
    s *= sqrt_hw(1.0 - a);

    // Mirror; zero takes the pi - s side.
    if x > 0.0 { s } else { PI - s }
}
