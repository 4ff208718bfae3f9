use crate::error::SampleError;
use model::records::table::Table;
use rand::{SeedableRng, rngs::StdRng, seq::index};
use tracing::debug;

/// Draws fixed-size random subsets of table rows without replacement.
///
/// The generator is seeded once; successive calls on the same `Sampler`
/// continue the same random stream.
pub struct Sampler {
    seed: u64,
    rng: StdRng,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Sampler {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Selects `n` distinct rows uniformly at random.
    ///
    /// Rows come back in the order the generator picked them, not in source
    /// order. Columns are unchanged.
    pub fn sample(&mut self, table: &Table, n: usize) -> Result<Table, SampleError> {
        let available = table.row_count();
        if n > available {
            return Err(SampleError::InvalidSampleSize {
                requested: n,
                available,
            });
        }

        let picked = index::sample(&mut self.rng, available, n);
        let sampled = table.take(picked.into_iter())?;

        debug!(
            seed = self.seed,
            requested = n,
            available,
            "Selected sample rows"
        );

        Ok(sampled)
    }
}

/// One-shot sampling with a freshly seeded generator.
pub fn sample(table: &Table, n: usize, seed: u64) -> Result<Table, SampleError> {
    Sampler::new(seed).sample(table, n)
}
