use anchor_lang::prelude::*;
use arrayref::array_ref;

use crate::error::RaffleError;

/// Source of draw indices.
pub trait Randomizer {
    /// Returns an index in `[0, bound)`.
    fn draw(&mut self, bound: u64) -> Result<u64>;
}

impl<F> Randomizer for F
where
    F: FnMut(u64) -> u64,
{
    fn draw(&mut self, bound: u64) -> Result<u64> {
        Ok(self(bound))
    }
}

// splitmix64 increment
const GOLDEN_GAMMA: u64 = 0x9e3779b97f4a7c15;

/// Randomizer seeded from the SlotHashes sysvar and the cluster clock.
///
/// The seed mixes two 8-byte windows of the sysvar data with the current
/// timestamp. Every draw advances the internal state, so several draws within
/// one instruction yield independent indices.
pub struct SlotHashRandomizer {
    state: u64,
}

impl SlotHashRandomizer {
    /// Fails with `InvalidSlotHashesAccount` if `slot_hashes` is too short to
    /// hold a single entry.
    pub fn new(slot_hashes: &[u8], timestamp: i64) -> Result<Self> {
        require!(
            slot_hashes.len() >= 20,
            RaffleError::InvalidSlotHashesAccount
        );

        let chunk1 = array_ref![slot_hashes, 12, 8];
        let chunk2 = if slot_hashes.len() >= 28 {
            array_ref![slot_hashes, 20, 8]
        } else {
            chunk1
        };

        let mut state = mix(u64::from_le_bytes(*chunk1), timestamp as u64);
        state = mix(state, u64::from_le_bytes(*chunk2));

        Ok(Self { state })
    }
}

impl Randomizer for SlotHashRandomizer {
    fn draw(&mut self, bound: u64) -> Result<u64> {
        self.state = mix(self.state, GOLDEN_GAMMA);
        unbiased_range(self.state, bound)
    }
}

/// Mixing function with strong avalanche properties.
/// Flipping any input bit flips each output bit with probability close to 1/2,
/// so nearby seeds (consecutive timestamps, similar hashes) diverge fully.
/// This is the splitmix64 finalizer applied to the wrapping sum of the inputs.
fn mix(a: u64, b: u64) -> u64 {
    let mut z = a.wrapping_add(b);

    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Maps a random `x` onto `[0, range)` without statistical bias.
/// A plain `x % range` favours low indices whenever `range` does not divide
/// 2^64, so the strategy depends on the size of the range.
fn unbiased_range(x: u64, range: u64) -> Result<u64> {
    // An empty range means the pool had no tickets at all.
    require!(range > 0, RaffleError::PoolInvariantViolated);

    // A power of two divides 2^64, so masking the low bits is exact
    if range.is_power_of_two() {
        return Ok(x & (range - 1));
    }

    // For small ranges the modulo bias is below 2^-56 and can be ignored
    if range <= 256 {
        return Ok(x % range);
    }

    // Largest multiple of `range` that fits in u64; values below it map evenly
    let threshold = u64::MAX - (u64::MAX % range);

    // Rejection sampling, with the cost kept bounded
    let mut value = x;

    // Cap iterations to keep compute usage predictable
    const MAX_ATTEMPTS: u8 = 3;

    for i in 0..MAX_ATTEMPTS {
        // Below the threshold the modulo is unbiased
        if value < threshold {
            return Ok(value % range);
        }

        // Remix and try again
        value = mix(value, value.wrapping_add(i as u64 + 1));
    }

    // Three rejections in a row are vanishingly rare; accept the last value
    Ok(value % range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sysvar_bytes(fill: u8) -> Vec<u8> {
        (0..64u8).map(|i| i.wrapping_mul(fill)).collect()
    }

    #[test]
    fn closures_act_as_randomizers() {
        let mut always_zero = |_: u64| 0u64;
        let mut last = |bound: u64| bound - 1;

        assert_eq!(always_zero.draw(90).unwrap(), 0);
        assert_eq!(last.draw(90).unwrap(), 89);
    }

    #[test]
    fn slot_hash_draws_stay_in_bounds() {
        let mut randomizer = SlotHashRandomizer::new(&sysvar_bytes(7), 1_700_000_000).unwrap();

        for bound in [1u64, 2, 3, 90, 256, 257, 1_000_003, u64::MAX] {
            assert!(randomizer.draw(bound).unwrap() < bound);
        }
    }

    #[test]
    fn same_seed_yields_same_sequence() {
        let mut a = SlotHashRandomizer::new(&sysvar_bytes(3), 42).unwrap();
        let mut b = SlotHashRandomizer::new(&sysvar_bytes(3), 42).unwrap();

        let first: Vec<u64> = (0..8).map(|_| a.draw(1_000).unwrap()).collect();
        let second: Vec<u64> = (0..8).map(|_| b.draw(1_000).unwrap()).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn state_advances_between_draws() {
        let mut randomizer = SlotHashRandomizer::new(&sysvar_bytes(5), 42).unwrap();

        let draws: Vec<u64> = (0..4).map(|_| randomizer.draw(u64::MAX).unwrap()).collect();

        assert!(draws.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn short_sysvar_data_is_rejected() {
        let result = SlotHashRandomizer::new(&[0u8; 16], 0);

        assert_eq!(
            result.err(),
            Some(RaffleError::InvalidSlotHashesAccount.into())
        );
    }

    #[test]
    fn zero_range_is_rejected() {
        assert_eq!(
            unbiased_range(123, 0).unwrap_err(),
            RaffleError::PoolInvariantViolated.into()
        );
    }
}
