use getrandom::getrandom;
use oorandom::Rand64;
use tracing::warn;

pub fn rng64(seed: u128) -> Rand64 {
    Rand64::new(seed)
}

/// Draws a seed from the operating system.
/// Falls back to a zero seed, with a warning, if the system source is unavailable.
pub fn os_random_seed() -> u128 {
    let mut buf = [0; 16];
    let filled = getrandom(&mut buf);
    seed_or_zero(filled, buf)
}

fn seed_or_zero(filled: Result<(), getrandom::Error>, buf: [u8; 16]) -> u128 {
    match filled {
        Ok(()) => u128::from_le_bytes(buf),
        Err(err) => {
            warn!(error = %err, "operating system randomness unavailable, using seed 0");
            0
        }
    }
}

/// Returns a uniformly distributed index in `0..bound`. `bound` must not be zero.
pub fn rand_index(rng: &mut Rand64, bound: usize) -> usize {
    rng.rand_range(0..bound as u64) as usize
}
