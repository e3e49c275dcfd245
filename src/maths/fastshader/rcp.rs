//! Approximate reciprocal `1/x`.
//!
//! | tier | passes | nominal | worst case | ALU |
//! | ---: | ---: | ---: | ---: | ---: |
//! | 0 | 0 | < 0.4% | 5.06e-2 | 1 |
//! | 1 | 1 | < 0.02% | 2.56e-3 | 3 |
//! | 2 | 2 | < 5.0e-5% | 6.8e-6 | 5 |
//!
//! Input must be positive and normal, and at most [`RCP_MAX_INPUT`]; anything
//! else gives an unspecified result. Past 2^125 the seed `C - i` leaves the
//! normal range (subnormal, then negative), so neither the seed nor the
//! refined value keeps the bounds above.

use super::{Accuracy, Nr0, Nr1, Nr2, RcpMagic, Tier, newton::refine_rcp, seed::rcp_seed};

/// Largest input the rcp bounds hold for: 2^125.
pub const RCP_MAX_INPUT: f32 = f32::from_bits(0x7E00_0000);

/// Worst-case figures for [`rcp_snorm`].
pub const RCP_SNORM: Accuracy = Accuracy::new(6.56e-2, 4.0e-3, 1);
/// Worst-case figures for [`rcp_distance`].
pub const RCP_DISTANCE: Accuracy = Accuracy::new(5.09e-2, 4.0e-3, 1);

/// `1/x` at tier `T`: the tier's own seed, then `T::ITERATIONS` passes.
#[inline(always)]
pub fn rcp<T: Tier>(x: f32) -> f32 {
    refine_rcp::<T>(x, rcp_seed(x, T::RCP_SEED))
}

#[inline]
pub fn rcp_tier0(x: f32) -> f32 {
    rcp::<Nr0>(x)
}

#[inline]
pub fn rcp_tier1(x: f32) -> f32 {
    rcp::<Nr1>(x)
}

#[inline]
pub fn rcp_tier2(x: f32) -> f32 {
    rcp::<Nr2>(x)
}

/// Zero-pass `1/x` with the constant fitted on [0, 1].
#[inline]
pub fn rcp_snorm(x: f32) -> f32 {
    rcp_seed(x, RcpMagic::SNORM)
}

/// Zero-pass `1/x` with the constant fitted on [0, 1000].
#[inline]
pub fn rcp_distance(x: f32) -> f32 {
    rcp_seed(x, RcpMagic::DISTANCE)
}
