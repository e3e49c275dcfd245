//! Seed constants for the integer bit tricks.
//!
//! Each operation gets its own wrapper type, so an rcp constant cannot reach
//! the sqrt or rsqrt seed. The fields are private and the values exist only as
//! the associated constants below, which came out of batch fitting.
//!
//! `SNORM` constants are fitted on [0, 1] and `DISTANCE` constants on
//! [0, 1000]; both are zero-iteration seeds.

/// Seed constant for `C - i` (reciprocal).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RcpMagic(i32);

/// Seed constant for `C + (i >> 1)` (square root).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SqrtMagic(i32);

/// Seed constant for `C - (i >> 1)` (reciprocal square root).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RsqrtMagic(i32);

impl RcpMagic {
    pub const NR0: Self = Self(0x7EF3_11C2);
    pub const NR1: Self = Self(0x7EF3_11C3);
    pub const NR2: Self = Self(0x7EF3_12AC);
    pub const SNORM: Self = Self(0x7EEF_370B);
    pub const DISTANCE: Self = Self(0x7EF3_210C);

    #[inline(always)]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl SqrtMagic {
    pub const NR0: Self = Self(0x1FBD_1DF5);
    pub const SNORM: Self = Self(0x1FBD_1DF5);
    pub const DISTANCE: Self = Self(0x1FBD_22DF);

    #[inline(always)]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl RsqrtMagic {
    /// The classic `0x5f3759df`.
    pub const NR0: Self = Self(0x5F37_59DF);
    pub const NR1: Self = Self(0x5F37_5A86);
    pub const NR2: Self = Self(0x5F37_5A86);
    pub const SNORM: Self = Self(0x5F34_1A43);
    pub const DISTANCE: Self = Self(0x5F33_E79F);

    #[inline(always)]
    pub const fn raw(self) -> i32 {
        self.0
    }
}
