//! Precision tiers: how many Newton passes follow the seed, which seed
//! constants go with that count, and the error each tier guarantees.
//!
//! The seed constants differ per tier because the best starting point for
//! zero, one or two passes is not the same; that comes from the fit, not from
//! the algebra. A tier tag carries its constants, so mixing a tier-0 seed with
//! a two-pass chain is not expressible through this API.

use core::str::FromStr;

use super::{PrecisionError, RcpMagic, RsqrtMagic, rcp::rcp, rsqrt::rsqrt, sqrt::sqrt};

/// Error and cost figures for one (operation, tier) pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Accuracy {
    /// Worst-case relative error over the operation's domain: every positive
    /// normal `f32` for sqrt and rsqrt, positive normals up to
    /// [`RCP_MAX_INPUT`](super::RCP_MAX_INPUT) for rcp.
    pub max_rel_error: f32,
    /// Typical relative error quoted for this tier in the tier table.
    pub nominal_rel_error: f32,
    /// ALU instruction count on the GPU the constants were tuned for.
    pub alu_ops: u8,
}

impl Accuracy {
    pub(crate) const fn new(max_rel_error: f32, nominal_rel_error: f32, alu_ops: u8) -> Self {
        Self {
            max_rel_error,
            nominal_rel_error,
            alu_ops,
        }
    }
}

mod private {
    pub trait Sealed {}
}

/// Compile-time precision tag.
///
/// Implemented only by [`Nr0`], [`Nr1`] and [`Nr2`].
pub trait Tier: private::Sealed + Copy + Default {
    /// Newton passes applied after the seed.
    const ITERATIONS: u32;
    const RCP_SEED: RcpMagic;
    const RSQRT_SEED: RsqrtMagic;
    const RCP: Accuracy;
    const SQRT: Accuracy;
    const RSQRT: Accuracy;
    /// Runtime counterpart of this tag.
    const PRECISION: Precision;
}

/// Seed only. Roughly "small float" precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nr0;

/// Seed plus one Newton pass. Roughly half-float precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nr1;

/// Seed plus two Newton passes. Close to full `f32` precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nr2;

impl private::Sealed for Nr0 {}
impl private::Sealed for Nr1 {}
impl private::Sealed for Nr2 {}

impl Tier for Nr0 {
    const ITERATIONS: u32 = 0;
    const RCP_SEED: RcpMagic = RcpMagic::NR0;
    const RSQRT_SEED: RsqrtMagic = RsqrtMagic::NR0;
    const RCP: Accuracy = Accuracy::new(5.06e-2, 4.0e-3, 1);
    const SQRT: Accuracy = Accuracy::new(4.48e-2, 7.0e-3, 1);
    const RSQRT: Accuracy = Accuracy::new(3.44e-2, 3.4e-2, 2);
    const PRECISION: Precision = Precision::Nr0;
}

impl Tier for Nr1 {
    const ITERATIONS: u32 = 1;
    const RCP_SEED: RcpMagic = RcpMagic::NR1;
    const RSQRT_SEED: RsqrtMagic = RsqrtMagic::NR1;
    const RCP: Accuracy = Accuracy::new(2.56e-3, 2.0e-4, 3);
    const SQRT: Accuracy = Accuracy::new(1.76e-3, 2.0e-3, 6);
    const RSQRT: Accuracy = Accuracy::new(1.76e-3, 2.0e-3, 6);
    const PRECISION: Precision = Precision::Nr1;
}

impl Tier for Nr2 {
    const ITERATIONS: u32 = 2;
    const RCP_SEED: RcpMagic = RcpMagic::NR2;
    const RSQRT_SEED: RsqrtMagic = RsqrtMagic::NR2;
    const RCP: Accuracy = Accuracy::new(6.8e-6, 5.0e-7, 5);
    const SQRT: Accuracy = Accuracy::new(4.9e-6, 4.6e-6, 9);
    const RSQRT: Accuracy = Accuracy::new(4.9e-6, 4.6e-6, 9);
    const PRECISION: Precision = Precision::Nr2;
}

/// Tier chosen at runtime, e.g. from a host's quality setting.
///
/// Each method dispatches to the matching [`Tier`] tag; in a hot loop prefer
/// the tagged functions so the branch is resolved at compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Precision {
    Nr0,
    #[default]
    Nr1,
    Nr2,
}

impl Precision {
    /// Cheapest to most precise.
    pub const ALL: [Precision; 3] = [Precision::Nr0, Precision::Nr1, Precision::Nr2];

    pub const fn iterations(self) -> u32 {
        match self {
            Precision::Nr0 => Nr0::ITERATIONS,
            Precision::Nr1 => Nr1::ITERATIONS,
            Precision::Nr2 => Nr2::ITERATIONS,
        }
    }

    #[inline]
    pub fn rcp(self, x: f32) -> f32 {
        match self {
            Precision::Nr0 => rcp::<Nr0>(x),
            Precision::Nr1 => rcp::<Nr1>(x),
            Precision::Nr2 => rcp::<Nr2>(x),
        }
    }

    #[inline]
    pub fn sqrt(self, x: f32) -> f32 {
        match self {
            Precision::Nr0 => sqrt::<Nr0>(x),
            Precision::Nr1 => sqrt::<Nr1>(x),
            Precision::Nr2 => sqrt::<Nr2>(x),
        }
    }

    #[inline]
    pub fn rsqrt(self, x: f32) -> f32 {
        match self {
            Precision::Nr0 => rsqrt::<Nr0>(x),
            Precision::Nr1 => rsqrt::<Nr1>(x),
            Precision::Nr2 => rsqrt::<Nr2>(x),
        }
    }

    pub const fn rcp_accuracy(self) -> Accuracy {
        match self {
            Precision::Nr0 => Nr0::RCP,
            Precision::Nr1 => Nr1::RCP,
            Precision::Nr2 => Nr2::RCP,
        }
    }

    pub const fn sqrt_accuracy(self) -> Accuracy {
        match self {
            Precision::Nr0 => Nr0::SQRT,
            Precision::Nr1 => Nr1::SQRT,
            Precision::Nr2 => Nr2::SQRT,
        }
    }

    pub const fn rsqrt_accuracy(self) -> Accuracy {
        match self {
            Precision::Nr0 => Nr0::RSQRT,
            Precision::Nr1 => Nr1::RSQRT,
            Precision::Nr2 => Nr2::RSQRT,
        }
    }

    /// Cheapest tier whose worst-case rcp error is within `max_rel_error`.
    pub fn for_rcp_budget(max_rel_error: f32) -> Option<Self> {
        Self::cheapest(max_rel_error, Self::rcp_accuracy)
    }

    /// Cheapest tier whose worst-case sqrt error is within `max_rel_error`.
    pub fn for_sqrt_budget(max_rel_error: f32) -> Option<Self> {
        Self::cheapest(max_rel_error, Self::sqrt_accuracy)
    }

    /// Cheapest tier whose worst-case rsqrt error is within `max_rel_error`.
    pub fn for_rsqrt_budget(max_rel_error: f32) -> Option<Self> {
        Self::cheapest(max_rel_error, Self::rsqrt_accuracy)
    }

    fn cheapest(max_rel_error: f32, accuracy: fn(Self) -> Accuracy) -> Option<Self> {
        Self::ALL.into_iter().find(|&p| accuracy(p).max_rel_error <= max_rel_error)
    }
}

impl Precision {
    fn from_iterations(iterations: u32) -> Result<Self, PrecisionError> {
        match iterations {
            0 => Ok(Precision::Nr0),
            1 => Ok(Precision::Nr1),
            2 => Ok(Precision::Nr2),
            n => Err(PrecisionError::TooManyIterations(n)),
        }
    }
}

impl TryFrom<u8> for Precision {
    type Error = PrecisionError;

    fn try_from(iterations: u8) -> Result<Self, Self::Error> {
        Precision::from_iterations(u32::from(iterations))
    }
}

impl TryFrom<u32> for Precision {
    type Error = PrecisionError;

    fn try_from(iterations: u32) -> Result<Self, Self::Error> {
        Precision::from_iterations(iterations)
    }
}

impl FromStr for Precision {
    type Err = PrecisionError;

    /// Accepts `nr0`..`nr2` (any case) or a bare iteration count. Only ASCII
    /// digits count as a number; a count too large for `u32` reports
    /// `u32::MAX` iterations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = match s.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("nr") => &s[2..],
            _ => s,
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PrecisionError::UnknownName);
        }
        let n = digits.parse::<u32>().unwrap_or(u32::MAX);
        Precision::from_iterations(n)
    }
}
