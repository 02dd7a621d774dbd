#![no_std]

pub mod entropy;
pub mod extras;
pub mod splitmix64;
pub mod xoshiro256;

pub use entropy::*;
pub use extras::*;
pub use splitmix64::*;
pub use xoshiro256::*;
pub use rand_core::*;

// SplitMix64 constants from Steele, G., Lea, D. and Flood, C. H.,
// Fast Splittable Pseudorandom Number Generators (2014),
// with the mixing multipliers of Stafford's variant 13.

/// Golden ratio increment of the SplitMix64 counter.
pub const SPLITMIX_GAMMA: u64 = 0x9e3779b97f4a7c15;
pub const SPLITMIX_M1: u64 = 0xbf58476d1ce4e5b9;
pub const SPLITMIX_M2: u64 = 0x94d049bb133111eb;

/// Exponent bits of an IEEE-754 double in [1, 2).
pub const F64_ONE_BITS: u64 = 0x3ff << 52;

/// Rotates x left by k bits, 0 < k < 64.
#[inline]
pub fn rotl(x: u64, k: u32) -> u64 {
    debug_assert!(k > 0 && k < 64);
    (x << k) | (x >> (64 - k))
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] pub fn rotl_matches_core() {
        let mut x: u64 = 0x0123456789abcdef;
        for k in 1 .. 64 {
            assert_eq!(x.rotate_left(k), rotl(x, k));
            x = x.wrapping_mul(SPLITMIX_GAMMA) ^ (x >> 7);
        }
        assert_eq!(1, rotl(1 << 63, 1));
        assert_eq!(1 << 45, rotl(1, 45));
    }
}
