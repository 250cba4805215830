//! Injectable random source for agent decisions.
//!
//! Agents never reach for a global RNG. They own an [`RngSource`] handed in at
//! construction, so a game loop (or a test) that seeds it reproduces every
//! random walk and every avoidance fallback exactly.

use crate::ping::AgentId;

/// Random source owned by an agent.
pub trait RngSource: Send {
    /// Generate the next random u32 value.
    fn next_u32(&mut self) -> u32;

    /// Uniform index in `0..len`, or `None` when `len` is zero.
    fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.next_u32() as usize % len)
    }
}

impl<R: RngSource + ?Sized> RngSource for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Picks one element uniformly, or `None` for an empty slice.
pub fn choose<'a, T, R>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: RngSource + ?Sized,
{
    rng.index(items.len()).map(|index| &items[index])
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Same seed, same sequence.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub const fn seeded(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seeds from OS entropy. Use [`PcgRng::seeded`] when replays matter.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    /// `state' = (state * multiplier + increment) mod 2^64`
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

impl RngSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// Derives a per-agent seed from one game seed.
///
/// Lets a game loop seed every agent from a single replay seed without the
/// agents sharing a random stream.
pub fn derive_seed(game_seed: u64, agent: AgentId) -> u64 {
    // SplitMix64 / FxHash style mixing constants
    let mut hash = game_seed;
    hash ^= (agent.0 as u64).wrapping_mul(0x517cc1b727220a95);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
