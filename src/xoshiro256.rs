use wrapping_arithmetic::wrappit;
use super::{rotl, SplitMix64};

// Xoshiro256** features
// -design by David Blackman and Sebastiano Vigna (2018)
// -64-bit output, 256-bit state, period 2**256 - 1
// -the all-zero state is the only bad state
// -jumps of 2**128 and 2**192 steps for non-overlapping parallel sequences

/// Jump polynomial for 2**128 steps.
const JUMP: [u64; 4] = [0x180ec6d33cfd0aba, 0xd5a61266f0c9392c, 0xa9582618e03fc9aa, 0x39abdc4529b1661c];

/// Jump polynomial for 2**192 steps.
const LONG_JUMP: [u64; 4] = [0x76e15d3efefdcbbf, 0xc5004e441c522fb3, 0x77710069854ee241, 0x39109bb02acbe635];

/// Xoshiro256** non-cryptographic RNG. 64-bit output, 256-bit state.
#[derive(Clone, Eq, PartialEq)]
pub struct Xoshiro256 {
    s: [u64; 4],
}

// As recommended, this Debug implementation does not expose internal state.
impl core::fmt::Debug for Xoshiro256 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Xoshiro256 {{}}")
    }
}

impl Xoshiro256 {

    /// Returns the output for the current state.
    #[wrappit] #[inline]
    fn get(&self) -> u64 {
        rotl(self.s[1] * 5, 7) * 9
    }

    /// Advances to the next state.
    #[inline]
    fn step(&mut self) {
        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;

        self.s[3] = rotl(self.s[3], 45);
    }

    /// Generates the next 64-bit random number.
    #[inline]
    pub fn next(&mut self) -> u64 {
        // Output is taken from s1 before the state advances.
        let x = self.get();
        self.step();
        x
    }

    /// Creates a new Xoshiro256 RNG seeded from OS entropy.
    /// Panics if entropy is unavailable.
    pub fn new() -> Self {
        Xoshiro256::from_seed(super::rand64())
    }

    /// Creates a new Xoshiro256 RNG seeded from OS entropy.
    pub fn try_new() -> Result<Self, super::Error> {
        Ok(Xoshiro256::from_seed(super::try_rand64()?))
    }

    /// Creates a new Xoshiro256 RNG from a seed.
    /// The state is filled with four successive outputs of SplitMix64 seeded identically.
    /// All seeds work equally well.
    pub fn from_seed(seed: u64) -> Self {
        let mut splitmix = SplitMix64::from_seed(seed);
        let s = [splitmix.next(), splitmix.next(), splitmix.next(), splitmix.next()];
        // SplitMix64 outputs are a bijection of its counter, so at most one of them is zero.
        debug_assert!(s.iter().any(|&x| x != 0));
        Xoshiro256 { s }
    }

    fn jump_by(&mut self, polynomial: &[u64; 4]) {
        let mut s = [0u64; 4];
        for word in polynomial.iter() {
            for bit in 0 .. 64 {
                if word & (1u64 << bit) != 0 {
                    for (acc, x) in s.iter_mut().zip(self.s.iter()) { *acc ^= x; }
                }
                self.step();
            }
        }
        self.s = s;
    }

    /// Jumps forward by 2**128 steps.
    /// Can be used to generate 2**128 non-overlapping sequences for parallel use.
    pub fn jump(&mut self) {
        self.jump_by(&JUMP);
    }

    /// Jumps forward by 2**192 steps.
    /// Can be used to generate 2**64 starting points, each admitting 2**64 calls to jump.
    pub fn long_jump(&mut self) {
        self.jump_by(&LONG_JUMP);
    }
}

impl Default for Xoshiro256 {
    fn default() -> Self {
        Self::new()
    }
}

use super::{RngCore, Error, SeedableRng};

impl RngCore for Xoshiro256 {
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

impl SeedableRng for Xoshiro256 {
    type Seed = [u8; 8];

    /// Creates a new Xoshiro256 RNG from a seed.
    /// All seeds work equally well.
    fn from_seed(seed: Self::Seed) -> Self {
        // Always use Little-Endian.
        Xoshiro256::from_seed(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(seed: u64) -> Self {
        Xoshiro256::from_seed(seed)
    }
}

impl super::extras::Sealed for Xoshiro256 {}
impl super::Extras for Xoshiro256 {}
