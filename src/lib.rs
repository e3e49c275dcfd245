#![no_std]

#[cfg(test)]
extern crate std;

pub mod maths;

pub use maths::fastshader;
pub use maths::fastshader::{
    acos_fast, asin_fast, atan_fast, rcp_tier0, rcp_tier1, rcp_tier2, rsqrt_tier0, rsqrt_tier1,
    rsqrt_tier2, sqrt_tier0, sqrt_tier1, sqrt_tier2,
};
