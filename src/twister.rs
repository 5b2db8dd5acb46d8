//! The 32-bit Mersenne Twister (MT19937) the game service shuffles its letter bag with.
//!
//! Every draw from the bag must line up word for word with the service, so the generator is
//! reproduced exactly rather than taken from `rand`: seeding, the twist and the tempering
//! are the reference algorithm, including its fallback to [DEFAULT_SEED] when drawn from
//! without a seed.

use crate::DEFAULT_SEED;
use rand::RngCore;

/// The number of words in the generator state.
const N: usize = 624;
/// The middle word offset of the twist recurrence.
const M: usize = 397;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
/// The twist multiplier, selected by the low bit of the mixed word.
const MAG01: [u32; 2] = [0x0, 0x9908_b0df];
/// The cursor of a generator that has never been seeded.
const UNSEEDED: usize = N + 1;

/// A deterministic generator of 32-bit words, seeded from a single integer.
///
/// Owned by exactly one [game](crate::GameState). Cloning copies the whole state, which is
/// how [LetterBag::peek_remaining](crate::LetterBag::peek_remaining) predicts future draws
/// without disturbing live play.
#[derive(Clone, Eq, PartialEq)]
pub struct DeterministicRandom {
    state: [u32; N],
    cursor: usize,
}

impl DeterministicRandom {
    /// # Returns
    ///
    /// A generator seeded with `seed`.
    pub fn new(seed: u32) -> DeterministicRandom {
        let mut random = DeterministicRandom::unseeded();
        random.seed(seed);
        random
    }

    /// # Returns
    ///
    /// A generator that has never been seeded. Its first draw seeds it with [DEFAULT_SEED].
    pub fn unseeded() -> DeterministicRandom {
        DeterministicRandom {
            state: [0; N],
            cursor: UNSEEDED,
        }
    }

    /// Resets the state from `seed` and marks it exhausted so the next draw twists.
    pub fn seed(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..N {
            let previous = self.state[i - 1];
            self.state[i] = 1_812_433_253u32
                .wrapping_mul(previous ^ (previous >> 30))
                .wrapping_add(i as u32);
        }
        self.cursor = N;
    }

    /// # Returns
    ///
    /// The next word of the sequence.
    pub fn next_u32(&mut self) -> u32 {
        if self.cursor >= N {
            if self.cursor == UNSEEDED {
                self.seed(DEFAULT_SEED);
            }
            self.twist();
        }

        let mut y = self.state[self.cursor];
        self.cursor += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;
        y
    }

    /// Regenerates all `N` words of state.
    fn twist(&mut self) {
        let state = &mut self.state;
        let mix = |upper: u32, lower: u32| (upper & UPPER_MASK) | (lower & LOWER_MASK);

        for kk in 0..N - M {
            let y = mix(state[kk], state[kk + 1]);
            state[kk] = state[kk + M] ^ (y >> 1) ^ MAG01[(y & 0x1) as usize];
        }
        for kk in N - M..N - 1 {
            let y = mix(state[kk], state[kk + 1]);
            state[kk] = state[kk + M - N] ^ (y >> 1) ^ MAG01[(y & 0x1) as usize];
        }
        let y = mix(state[N - 1], state[0]);
        state[N - 1] = state[M - 1] ^ (y >> 1) ^ MAG01[(y & 0x1) as usize];

        self.cursor = 0;
    }
}

/// Prints the cursor only.
impl std::fmt::Debug for DeterministicRandom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeterministicRandom")
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl RngCore for DeterministicRandom {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        DeterministicRandom::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(DeterministicRandom::next_u32(self));
        let high = u64::from(DeterministicRandom::next_u32(self));
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = DeterministicRandom::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
