//! Approximate square root.
//!
//! Tier 0 is the direct bit trick. Tiers 1 and 2 are `x * rsqrt(x)` at the
//! same tier, so they share the rsqrt refinement and its error profile:
//!
//! | tier | method | nominal | worst case | ALU |
//! | ---: | :--- | ---: | ---: | ---: |
//! | 0 | `C + (i >> 1)` | < 0.7% | 4.48e-2 | 1 |
//! | 1 | `x * rsqrt_tier1(x)` | ~0.2% | 1.76e-3 | 6 |
//! | 2 | `x * rsqrt_tier2(x)` | ~4.6e-4% | 4.9e-6 | 9 |
//!
//! Input must be positive, finite and normal.

use super::{Accuracy, Nr0, Nr1, Nr2, SqrtMagic, Tier, rsqrt::rsqrt, seed::sqrt_seed};

/// Worst-case figures for [`sqrt_snorm`].
pub const SQRT_SNORM: Accuracy = Accuracy::new(4.48e-2, 7.0e-3, 1);
/// Worst-case figures for [`sqrt_distance`].
pub const SQRT_DISTANCE: Accuracy = Accuracy::new(4.49e-2, 7.0e-3, 1);

/// `sqrt(x)` at tier `T`.
#[inline(always)]
pub fn sqrt<T: Tier>(x: f32) -> f32 {
    if T::ITERATIONS == 0 {
        sqrt_seed(x, SqrtMagic::NR0)
    } else {
        x * rsqrt::<T>(x)
    }
}

#[inline]
pub fn sqrt_tier0(x: f32) -> f32 {
    sqrt::<Nr0>(x)
}

#[inline]
pub fn sqrt_tier1(x: f32) -> f32 {
    sqrt::<Nr1>(x)
}

#[inline]
pub fn sqrt_tier2(x: f32) -> f32 {
    sqrt::<Nr2>(x)
}

/// Zero-pass `sqrt(x)` with the constant fitted on [0, 1].
#[inline]
pub fn sqrt_snorm(x: f32) -> f32 {
    sqrt_seed(x, SqrtMagic::SNORM)
}

/// Zero-pass `sqrt(x)` with the constant fitted on [0, 1000].
#[inline]
pub fn sqrt_distance(x: f32) -> f32 {
    sqrt_seed(x, SqrtMagic::DISTANCE)
}
