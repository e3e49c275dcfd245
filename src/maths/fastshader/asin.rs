use super::{FRAC_PI_2, acos::ACOS_MAX_ABS_ERROR, acos_fast};

/// Same polynomial as acos, so the same bound.
pub const ASIN_MAX_ABS_ERROR: f32 = ACOS_MAX_ABS_ERROR;

/// Approximate asin(x) for x in [-1, 1], as pi/2 - acos_fast(x).
#[inline]
pub fn asin_fast(x: f32) -> f32 {
    FRAC_PI_2 - acos_fast(x)
}
