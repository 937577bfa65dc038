//! Split planning: shuffle the dataset, drop the reduced-out tail and cut it
//! into train and valid partitions. No files are touched here.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::core::dataset::{DatasetEntry, DatasetSplit};

use super::params::{SplitCounts, SplitParams};

/// Source of randomness for the shuffle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShuffleStrategy {
    /// Seeded from platform entropy, a different split every run
    #[default]
    Random,
    /// Reproducible split for a fixed seed
    Seeded(u64),
}

impl ShuffleStrategy {
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(ShuffleStrategy::Random, ShuffleStrategy::Seeded)
    }

    pub fn rng(&self) -> StdRng {
        match self {
            ShuffleStrategy::Random => StdRng::from_entropy(),
            ShuffleStrategy::Seeded(seed) => StdRng::seed_from_u64(*seed),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        match self {
            ShuffleStrategy::Random => None,
            ShuffleStrategy::Seeded(seed) => Some(*seed),
        }
    }
}

/// Assignment of dataset entries to splits
#[derive(Debug, Clone)]
pub struct SplitPlan {
    pub params: SplitParams,
    pub counts: SplitCounts,
    pub train: Vec<DatasetEntry>,
    pub valid: Vec<DatasetEntry>,
}

impl SplitPlan {
    pub fn entries(&self, split: DatasetSplit) -> &[DatasetEntry] {
        match split {
            DatasetSplit::Train => &self.train,
            DatasetSplit::Valid => &self.valid,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.train.is_empty() && self.valid.is_empty()
    }

    pub fn len(&self) -> usize {
        self.train.len() + self.valid.len()
    }
}

/// Shuffle `entries` uniformly, keep the first `total_to_use` and assign the
/// first `train` of those to the training split.
pub fn plan_split<R: Rng + ?Sized>(
    mut entries: Vec<DatasetEntry>,
    params: &SplitParams,
    rng: &mut R,
) -> SplitPlan {
    let counts = params.counts(entries.len());

    entries.shuffle(rng);
    entries.truncate(counts.total_to_use);
    let valid = entries.split_off(counts.train);

    info!(
        "Split plan: {} train, {} valid, {} reduced out of {} images",
        entries.len(),
        valid.len(),
        counts.reduced_out,
        counts.total
    );

    SplitPlan {
        params: *params,
        counts,
        train: entries,
        valid,
    }
}
