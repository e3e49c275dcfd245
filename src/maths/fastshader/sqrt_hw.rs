use super::{SqrtMagic, seed::sqrt_seed};

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse")]
unsafe fn sqrt_sse(x: f32) -> f32 {
    use core::arch::x86_64::{_mm_cvtss_f32, _mm_set_ss, _mm_sqrt_ss};
    _mm_cvtss_f32(_mm_sqrt_ss(_mm_set_ss(x)))
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn sqrt_neon(x: f32) -> f32 {
    let out: f32;
    unsafe {
        core::arch::asm!(
            "fsqrt {out:s}, {x:s}",
            out = lateout(vreg) out,
            x = in(vreg) x,
            options(pure, nomem, nostack)
        );
    }
    out
}

/// Bit seed, Heron steps in f64, then a check against the neighbors' midpoints.
/// Products of f32 values and of their midpoints are exact in f64, so the
/// check settles the rounding exactly.
#[cfg_attr(any(target_arch = "x86_64", target_arch = "aarch64"), allow(dead_code))]
#[inline]
fn sqrt_fallback(x: f32) -> f32 {
    if x <= 0.0 {
        return if x == 0.0 { x } else { f32::NAN };
    }
    let xd = x as f64;
    let mut y = sqrt_seed(x, SqrtMagic::NR0) as f64;
    y = 0.5 * (y + xd / y);
    y = 0.5 * (y + xd / y);
    y = 0.5 * (y + xd / y);

    let mut r = y as f32;
    if !r.is_finite() {
        return r;
    }
    let up = f32::from_bits(r.to_bits().wrapping_add(1));
    let mid = 0.5 * (r as f64 + up as f64);
    if mid * mid < xd {
        r = up;
    }
    let down = f32::from_bits(r.to_bits().wrapping_sub(1));
    let mid = 0.5 * (down as f64 + r as f64);
    if mid * mid > xd {
        r = down;
    }
    r
}

/// Correctly rounded square root,
/// used where the polynomial kernels need an exact `sqrt` rather than an
/// approximation.
#[inline]
pub(crate) fn sqrt_hw(x: f32) -> f32 {
    #[cfg(target_arch = "x86_64")]
    unsafe {
        sqrt_sse(x)
    }

    #[cfg(target_arch = "aarch64")]
    {
        sqrt_neon(x)
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        sqrt_fallback(x)
    }
}
