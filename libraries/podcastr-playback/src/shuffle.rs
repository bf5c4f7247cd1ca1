//! Random next-episode selection
//!
//! Shuffle here does not reorder the queue. Each "next" is an independent
//! uniform draw over every position, the current one included, so the same
//! episode can be picked twice in a row. Not suitable where fairness or
//! unpredictability matters.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform index source for shuffle mode
#[derive(Debug, Clone)]
pub(crate) struct ShuffleDraw {
    rng: StdRng,
}

impl ShuffleDraw {
    /// Create a draw source, seeded for reproducibility when `seed` is set
    pub(crate) fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Pick a position in `[0, len)`; `None` for an empty queue
    pub(crate) fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }
}
