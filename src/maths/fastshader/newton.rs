//! Newton-Raphson passes for `1/x` and `1/sqrt(x)`.
//!
//! One pass maps a relative error `e` to `e^2` (rcp) or about `1.5 e^2`
//! (rsqrt). Each tier runs a fixed number of passes starting from its own
//! seed constant; see [`Tier`].

use super::Tier;

/// One reciprocal pass: `y * (2 - x*y)`.
#[inline(always)]
pub fn rcp_newton(x: f32, y: f32) -> f32 {
    y * (-y * x + 2.0)
}

/// One reciprocal-square-root pass: `y * (1.5 - half_x*y*y)`.
///
/// Takes `0.5 * x` rather than `x` so a chain of passes computes the halving
/// once.
#[inline(always)]
pub fn rsqrt_newton(half_x: f32, y: f32) -> f32 {
    y * (-half_x * (y * y) + 1.5)
}

/// Apply `T::ITERATIONS` reciprocal passes to the guess `y`.
#[inline(always)]
pub fn refine_rcp<T: Tier>(x: f32, mut y: f32) -> f32 {
    for _ in 0..T::ITERATIONS {
        y = rcp_newton(x, y);
    }
    y
}

/// Apply `T::ITERATIONS` reciprocal-square-root passes to the guess `y`.
#[inline(always)]
pub fn refine_rsqrt<T: Tier>(x: f32, mut y: f32) -> f32 {
    let half_x = 0.5 * x;
    for _ in 0..T::ITERATIONS {
        y = rsqrt_newton(half_x, y);
    }
    y
}
