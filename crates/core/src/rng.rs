//! RNG module - seeded piece sequence
//!
//! Piece draws come from a linear congruential generator:
//! `hash(seed) = (a * seed + c) mod m` with the classic ANSI C constants.
//! Each draw scales the hash onto [1, 7], one value per piece kind.
//!
//! The generator is a pure function of its seed. [`RandomSequence`] carries the
//! seed plus the value it materialized, and is threaded through the game state
//! rather than held as hidden global state.

use crate::types::PieceKind;

/// LCG multiplier
pub const LCG_A: u64 = 1_103_515_245;
/// LCG increment
pub const LCG_C: u64 = 12_345;
/// LCG modulus (2^31)
pub const LCG_M: u64 = 1 << 31;

/// Number of distinct draw values
const KINDS: u64 = 7;

#[inline]
fn hash(seed: u32) -> u32 {
    // seed < 2^32 and a < 2^31, so the product fits comfortably in u64
    ((LCG_A * u64::from(seed) + LCG_C) % LCG_M) as u32
}

/// Derive one draw and the successor seed from `seed`.
///
/// `value = floor(hash / (m - 1) * 7) + 1`, computed in integers. A hash of
/// exactly `m - 1` would scale to 8, so the value is clamped to 7.
pub fn next(seed: u32) -> (u8, u32) {
    let h = hash(seed);
    let scaled = u64::from(h) * KINDS / (LCG_M - 1);
    let value = (scaled + 1).min(KINDS) as u8;
    (value, h)
}

/// Current position in the piece sequence.
///
/// `value` is the draw materialized by the last step; `seed` is what the next
/// step hashes. Stepping never reuses a previous draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RandomSequence {
    seed: u32,
    value: u8,
}

impl RandomSequence {
    /// Start a sequence and materialize its first draw
    pub fn new(seed: u32) -> Self {
        let (value, seed) = next((u64::from(seed) % LCG_M) as u32);
        Self { seed, value }
    }

    /// The following position in the sequence
    #[must_use]
    pub fn next(self) -> Self {
        let (value, seed) = next(self.seed);
        Self { seed, value }
    }

    /// Current draw as a piece kind
    pub fn kind(&self) -> PieceKind {
        PieceKind::from_draw(self.value)
    }

    /// Seed the next step will hash
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Lazy, infinite iterator over the draws from this point on.
    ///
    /// The current value is yielded first. Restarting from the same
    /// `RandomSequence` reproduces the same values.
    pub fn draws(self) -> Draws {
        Draws { current: self }
    }
}

/// Iterator returned by [`RandomSequence::draws`]
#[derive(Debug, Clone)]
pub struct Draws {
    current: RandomSequence,
}

impl Iterator for Draws {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let value = self.current.value;
        self.current = self.current.next();
        Some(value)
    }
}
