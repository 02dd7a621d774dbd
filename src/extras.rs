use super::{RngCore, F64_ONE_BITS};

// Numeric conversions shared by all generators in this crate.
// The raw word is RngCore::next_u64, so the 64-bit output width
// these conversions depend on is fixed by the type system.

mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// Conversions from raw 64-bit output to floating point values and bounded integers.
/// This trait is sealed: it is implemented for SplitMix64 and Xoshiro256 only.
pub trait Extras: RngCore + Sealed {

    /// Smallest raw output.
    #[inline]
    fn min() -> u64 {
        0
    }

    /// Largest raw output.
    #[inline]
    fn max() -> u64 {
        u64::MAX
    }

    /// Returns a uniform double in [0, 1) with 52 bits of precision.
    #[inline]
    fn real01(&mut self) -> f64 {
        // Place the top 52 bits into the mantissa of a double in [1, 2).
        f64::from_bits(F64_ONE_BITS | (self.next_u64() >> 12)) - 1.0
    }

    /// Returns (max_val - min_val) * real01().
    /// Note that the result is not offset by min_val:
    /// it lies in [0, max_val - min_val).
    #[inline]
    fn real_between(&mut self, min_val: f64, max_val: f64) -> f64 {
        (max_val - min_val) * self.real01()
    }

    /// Returns a uniform integer in [0, bound_excl) using Lemire's multiply-shrink method.
    /// Panics if bound_excl is zero.
    #[inline]
    fn bounded(&mut self, bound_excl: u64) -> u64 {
        assert!(bound_excl > 0, "bounded: bound must be positive");
        ((bound_excl as u128 * self.next_u64() as u128) >> 64) as u64
    }

    /// Returns a uniform integer in [0, bound_excl) by rejection sampling.
    /// Draws until the raw word is at least 2**64 mod bound_excl, which removes modulo bias exactly.
    /// Panics if bound_excl is zero.
    fn bounded_rejection(&mut self, bound_excl: u64) -> u64 {
        assert!(bound_excl > 0, "bounded_rejection: bound must be positive");
        let threshold = bound_excl.wrapping_neg() % bound_excl;
        loop {
            let x = self.next_u64();
            if x >= threshold {
                return x % bound_excl;
            }
        }
    }
}
