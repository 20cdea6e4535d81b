use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

enum Source {
    Rng(ChaCha8Rng),
    Scripted(VecDeque<u32>),
}

/// The single randomness source a game owns for its lifetime.
pub struct Dice {
    seed: Option<u64>,
    source: Source,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            source: Source::Rng(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Seed once from wall-clock time. The seed is kept so a game can be replayed.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::from_seed(seed)
    }

    /// Deterministic faces, consumed in order. Once the script runs dry every
    /// roll comes up as the lowest face.
    pub fn from_scripted(rolls: Vec<u32>) -> Self {
        Self {
            seed: None,
            source: Source::Scripted(rolls.into()),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Uniform integer in `1..=sides`.
    pub fn roll(&mut self, sides: u32) -> u32 {
        let sides = sides.max(1);
        match &mut self.source {
            Source::Rng(rng) => rng.gen_range(1..=sides),
            Source::Scripted(queue) => queue.pop_front().unwrap_or(1).clamp(1, sides),
        }
    }

    pub fn d6(&mut self) -> u32 {
        self.roll(6)
    }

    /// Uniform index in `0..len`; `len` of zero yields 0.
    pub fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.roll(len as u32) - 1) as usize
    }
}

impl std::fmt::Debug for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.source {
            Source::Rng(_) => "rng",
            Source::Scripted(_) => "scripted",
        };
        f.debug_struct("Dice")
            .field("seed", &self.seed)
            .field("source", &kind)
            .finish()
    }
}
