use wrapping_arithmetic::wrappit;
use super::{SPLITMIX_GAMMA, SPLITMIX_M1, SPLITMIX_M2};

/// SplitMix64 non-cryptographic RNG. 64-bit output, 64-bit state.
/// Every state is valid. Mainly used to seed Xoshiro256.
#[derive(Clone, Eq, PartialEq)]
pub struct SplitMix64 {
    /// Weyl sequence counter.
    state: u64,
}

// As recommended, this Debug implementation does not expose internal state.
impl core::fmt::Debug for SplitMix64 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "SplitMix64 {{}}")
    }
}

impl SplitMix64 {

    /// Generates the next 64-bit random number.
    #[wrappit] #[inline]
    pub fn next(&mut self) -> u64 {
        self.state = self.state + SPLITMIX_GAMMA;
        let z = self.state;
        let z = (z ^ (z >> 30)) * SPLITMIX_M1;
        let z = (z ^ (z >> 27)) * SPLITMIX_M2;
        z ^ (z >> 31)
    }

    /// Creates a new SplitMix64 RNG seeded from OS entropy.
    /// Panics if entropy is unavailable.
    pub fn new() -> Self {
        SplitMix64::from_seed(super::rand64())
    }

    /// Creates a new SplitMix64 RNG seeded from OS entropy.
    pub fn try_new() -> Result<Self, super::Error> {
        Ok(SplitMix64::from_seed(super::try_rand64()?))
    }

    /// Creates a new SplitMix64 RNG from a seed.
    /// The same seed always produces the same sequence.
    pub fn from_seed(seed: u64) -> Self {
        SplitMix64 { state: seed }
    }
}

impl Default for SplitMix64 {
    fn default() -> Self {
        Self::new()
    }
}

use super::{RngCore, Error, SeedableRng};

impl RngCore for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        self.next() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = dest.len();
        let mut i = 0;
        while i < bytes {
            let x = self.next();
            let j = bytes.min(i + 8);
            // Always use Little-Endian.
            dest[i .. j].copy_from_slice(&x.to_le_bytes()[0 .. (j - i)]);
            i = j;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    /// Creates a new SplitMix64 RNG from a seed.
    fn from_seed(seed: Self::Seed) -> Self {
        // Always use Little-Endian.
        SplitMix64::from_seed(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(seed: u64) -> Self {
        SplitMix64::from_seed(seed)
    }
}

impl super::extras::Sealed for SplitMix64 {}
impl super::Extras for SplitMix64 {}
