#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]

mod acos;
mod asin;
mod atan;
mod error;
mod magic;
mod newton;
mod rcp;
mod rsqrt;
mod seed;
mod sqrt;
mod sqrt_hw;
mod tier;

pub use acos::{ACOS_MAX_ABS_ERROR, acos_fast};
pub use asin::{ASIN_MAX_ABS_ERROR, asin_fast};
pub use atan::{ATAN_FIT_RANGE, ATAN_MAX_ABS_ERROR, atan_fast};
pub use error::PrecisionError;
pub use magic::{RcpMagic, RsqrtMagic, SqrtMagic};
pub use newton::{rcp_newton, refine_rcp, refine_rsqrt, rsqrt_newton};
pub use rcp::{
    RCP_DISTANCE, RCP_MAX_INPUT, RCP_SNORM, rcp, rcp_distance, rcp_snorm, rcp_tier0, rcp_tier1,
    rcp_tier2,
};
pub use rsqrt::{
    RSQRT_DISTANCE, RSQRT_SNORM, rsqrt, rsqrt_distance, rsqrt_snorm, rsqrt_tier0, rsqrt_tier1,
    rsqrt_tier2,
};
pub use seed::{rcp_seed, rsqrt_seed, sqrt_seed};
pub use sqrt::{
    SQRT_DISTANCE, SQRT_SNORM, sqrt, sqrt_distance, sqrt_snorm, sqrt_tier0, sqrt_tier1, sqrt_tier2,
};
pub use tier::{Accuracy, Nr0, Nr1, Nr2, Precision, Tier};

pub(crate) use sqrt_hw::sqrt_hw;

// ========= constants =========

/// π, written out past f32 precision so the literal rounds once.
#[allow(clippy::approx_constant)]
pub const PI: f32 = 3.1415926535897932384626433;

/// π/2, derived from [`PI`] by an exact halving.
pub const FRAC_PI_2: f32 = 0.5 * PI;

// ========= bit helpers =========

/// Reinterpret the IEEE-754 binary32 layout of `x` as a signed integer.
///
/// No numeric conversion takes place; every bit pattern maps to itself.
#[inline(always)]
pub const fn bits_of_float(x: f32) -> i32 {
    x.to_bits() as i32
}

/// Inverse of [`bits_of_float`].
#[inline(always)]
pub const fn float_of_bits(i: i32) -> f32 {
    f32::from_bits(i as u32)
}
