use super::{Error, OsRng, RngCore};

// Seeds are drawn from the operating system through getrandom.
// This is slow compared to the generators; use it for seeding only.

/// Draws a non-deterministic 64-bit value from the operating system.
/// Returns an error if the OS entropy source is unavailable.
pub fn try_rand64() -> Result<u64, Error> {
    let mut bytes = [0u8; 8];
    OsRng.try_fill_bytes(&mut bytes)?;
    // Always use Little-Endian.
    Ok(u64::from_le_bytes(bytes))
}

/// Draws a non-deterministic 64-bit value from the operating system.
/// Panics if the OS entropy source is unavailable.
/// Supply an explicit seed where that is not acceptable.
pub fn rand64() -> u64 {
    match try_rand64() {
        Ok(x) => x,
        Err(error) => panic!("rand64: OS entropy source failed: {}", error),
    }
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] pub fn run_tests() {
        // Two draws colliding has probability 2**-64 per pair.
        let x = try_rand64().unwrap();
        let y = rand64();
        let z = rand64();
        assert!(x != y || y != z);
    }
}
