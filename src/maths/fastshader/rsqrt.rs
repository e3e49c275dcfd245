//! Approximate reciprocal square root `1/sqrt(x)`.
//!
//! | tier | passes | nominal | worst case | ALU |
//! | ---: | ---: | ---: | ---: | ---: |
//! | 0 | 0 | ~3.4% | 3.44e-2 | 2 |
//! | 1 | 1 | ~0.2% | 1.76e-3 | 6 |
//! | 2 | 2 | ~4.6e-4% | 4.9e-6 | 9 |
//!
//! Input must be positive, finite and normal.

use super::{Accuracy, Nr0, Nr1, Nr2, RsqrtMagic, Tier, newton::refine_rsqrt, seed::rsqrt_seed};

/// Worst-case figures for [`rsqrt_snorm`].
pub const RSQRT_SNORM: Accuracy = Accuracy::new(4.77e-2, 3.4e-2, 2);
/// Worst-case figures for [`rsqrt_distance`].
pub const RSQRT_DISTANCE: Accuracy = Accuracy::new(4.85e-2, 3.4e-2, 2);

/// `1/sqrt(x)` at tier `T`.
#[inline(always)]
pub fn rsqrt<T: Tier>(x: f32) -> f32 {
    refine_rsqrt::<T>(x, rsqrt_seed(x, T::RSQRT_SEED))
}

#[inline]
pub fn rsqrt_tier0(x: f32) -> f32 {
    rsqrt::<Nr0>(x)
}

#[inline]
pub fn rsqrt_tier1(x: f32) -> f32 {
    rsqrt::<Nr1>(x)
}

#[inline]
pub fn rsqrt_tier2(x: f32) -> f32 {
    rsqrt::<Nr2>(x)
}

/// Zero-pass `1/sqrt(x)` with the constant fitted on [0, 1].
#[inline]
pub fn rsqrt_snorm(x: f32) -> f32 {
    rsqrt_seed(x, RsqrtMagic::SNORM)
}

/// Zero-pass `1/sqrt(x)` with the constant fitted on [0, 1000].
#[inline]
pub fn rsqrt_distance(x: f32) -> f32 {
    rsqrt_seed(x, RsqrtMagic::DISTANCE)
}
