use std::io::Write;
use rand_starstar::*;

// Prints a few values from a fixed seed.

fn main() -> std::io::Result<()> {

    let mut rng = Xoshiro256::from_seed(123);
    let mut stdout = std::io::stdout();

    for _ in 0 .. 10 {
        writeln!(stdout, "{}", rng.real01())?;
    }

    let mut dice = SplitMix64::from_seed(123);
    let rolls: Vec<u64> = (0 .. 10).map(|_| 1 + dice.bounded(6)).collect();
    writeln!(stdout, "d6: {:?}", rolls)?;

    writeln!(stdout, "real_between(-1, 1): {}", rng.real_between(-1.0, 1.0))?;

    Ok(())
}
