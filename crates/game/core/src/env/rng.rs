//! RNG oracle for deterministic random number generation.
//!
//! Every roll in a combat (shuffles, quiz gating, enemy intents, relic
//! chances) is derived from the combat seed and a monotonically increasing
//! cursor, so a combat replays exactly from `(seed, inputs)`.

use std::collections::VecDeque;
use std::sync::Mutex;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Scripted oracle that replays a fixed list of values, cycling when exhausted.
///
/// Used by tests and tools that need to force specific outcomes (a quiz that
/// always triggers, a relic chance that always succeeds).
#[derive(Debug, Default)]
pub struct SequenceRng {
    values: Mutex<VecDeque<u32>>,
}

impl SequenceRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
        }
    }

    /// Oracle that always yields `value`.
    pub fn constant(value: u32) -> Self {
        Self::new([value])
    }

    /// Oracle whose unit rolls are always `0.0`; every chance check succeeds.
    pub fn always_low() -> Self {
        Self::constant(0)
    }

    /// Oracle whose unit rolls are just below `1.0`; chance checks below 1 fail.
    pub fn always_high() -> Self {
        Self::constant(u32::MAX)
    }
}

impl RngOracle for SequenceRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        let Ok(mut values) = self.values.lock() else {
            return 0;
        };
        match values.pop_front() {
            Some(value) => {
                values.push_back(value);
                value
            }
            None => 0,
        }
    }
}

/// Compute a deterministic seed for one roll.
///
/// * `combat_seed` - Base seed fixed when the session is created
/// * `cursor` - Roll sequence number within the combat
/// * `stream` - Independent stream selector for callers that need one
pub fn compute_seed(combat_seed: u64, cursor: u64, stream: u32) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = combat_seed;
    hash ^= cursor.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (stream as u64).wrapping_mul(0x517cc1b727220a95);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Position in the combat's random stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RngState {
    pub seed: u64,
    pub cursor: u64,
}

impl RngState {
    pub const fn new(seed: u64) -> Self {
        Self { seed, cursor: 0 }
    }
}

/// Short-lived roller pairing an oracle with the session's stream position.
pub struct Dice<'a> {
    oracle: &'a dyn RngOracle,
    state: &'a mut RngState,
}

impl<'a> Dice<'a> {
    pub fn new(oracle: &'a dyn RngOracle, state: &'a mut RngState) -> Self {
        Self { oracle, state }
    }

    pub fn next_u32(&mut self) -> u32 {
        let seed = compute_seed(self.state.seed, self.state.cursor, 0);
        self.state.cursor = self.state.cursor.wrapping_add(1);
        self.oracle.next_u32(seed)
    }

    /// Value in `0..bound`; `0` when `bound` is zero.
    ///
    /// The raw roll is reduced by remainder, so scripted oracles pick
    /// indices directly. Bounds that do not divide `2^32` skew toward low
    /// values by at most `bound / 2^32`.
    pub fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }

    /// Uniform value in `[0, 1)` with 24 bits of precision.
    pub fn unit(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Returns true with probability `p`. Certain outcomes skip the roll.
    pub fn chance(&mut self, p: f32) -> bool {
        if p <= 0.0 {
            return false;
        }
        if p >= 1.0 {
            return true;
        }
        self.unit() < p
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i as u32 + 1) as usize;
            items.swap(i, j);
        }
    }
}

impl core::fmt::Debug for Dice<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dice").field("state", &self.state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn compute_seed_separates_cursor_and_stream() {
        let base = compute_seed(7, 0, 0);
        assert_ne!(base, compute_seed(7, 1, 0));
        assert_ne!(base, compute_seed(7, 0, 1));
        assert_eq!(base, compute_seed(7, 0, 0));
    }

    #[test]
    fn dice_advances_cursor_per_roll() {
        let mut state = RngState::new(9);
        let mut dice = Dice::new(&PcgRng, &mut state);
        dice.next_u32();
        dice.unit();
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn certain_chances_do_not_consume_rolls() {
        let mut state = RngState::new(1);
        let mut dice = Dice::new(&PcgRng, &mut state);
        assert!(dice.chance(1.0));
        assert!(!dice.chance(0.0));
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn below_reduces_the_raw_roll_by_remainder() {
        let rng = SequenceRng::new([7, u32::MAX]);
        let mut state = RngState::default();
        let mut dice = Dice::new(&rng, &mut state);
        assert_eq!(dice.below(5), 2);
        assert_eq!(dice.below(10), 5);
        assert_eq!(dice.below(0), 0);
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn sequence_rng_cycles() {
        let rng = SequenceRng::new([1, 2]);
        assert_eq!(rng.next_u32(0), 1);
        assert_eq!(rng.next_u32(0), 2);
        assert_eq!(rng.next_u32(0), 1);
    }

    #[test]
    fn scripted_extremes_drive_chance() {
        let low = SequenceRng::always_low();
        let high = SequenceRng::always_high();
        let mut state = RngState::default();
        assert!(Dice::new(&low, &mut state).chance(0.01));
        assert!(!Dice::new(&high, &mut state).chance(0.99));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut state = RngState::new(1234);
        let mut dice = Dice::new(&PcgRng, &mut state);
        let mut items: Vec<u32> = (0..20).collect();
        dice.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }
}
