//! Zero-iteration guesses from the float bit pattern.
//!
//! For a positive normal float, `bits_of_float(x)` is roughly an affine
//! function of `log2(x)`, so negating, halving, or both give a first guess for
//! `1/x`, `sqrt(x)` and `1/sqrt(x)`. The magic constant restores the exponent
//! bias and centers the error across the mantissa.
//!
//! Inputs must be positive, finite and normal. Nothing is checked: zero,
//! negatives, subnormals, infinities and NaN produce some finite-or-not float
//! with no meaning, never a panic.

use super::{RcpMagic, RsqrtMagic, SqrtMagic, bits_of_float, float_of_bits};

#[inline(always)]
pub fn rcp_seed(x: f32, magic: RcpMagic) -> f32 {
    float_of_bits(magic.raw().wrapping_sub(bits_of_float(x)))
}

#[inline(always)]
pub fn sqrt_seed(x: f32, magic: SqrtMagic) -> f32 {
    // Arithmetic shift: the sign bit of a well-formed input is clear.
    float_of_bits(magic.raw().wrapping_add(bits_of_float(x) >> 1))
}

#[inline(always)]
pub fn rsqrt_seed(x: f32, magic: RsqrtMagic) -> f32 {
    float_of_bits(magic.raw().wrapping_sub(bits_of_float(x) >> 1))
}
