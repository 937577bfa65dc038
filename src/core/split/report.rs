use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::core::dataset::{DatasetEntry, DatasetSplit};
use crate::error::{Result, SplitError};

use super::params::{SplitCounts, SplitParams};

/// What was copied into one split
#[derive(Debug, Clone, Default, Serialize)]
pub struct SplitSummary {
    pub images: Vec<String>,
    pub labels_copied: usize,
    pub missing_labels: usize,
}

impl SplitSummary {
    fn record(&mut self, entry: &DatasetEntry, label_copied: bool) {
        self.images.push(entry.file_name());
        if label_copied {
            self.labels_copied += 1;
        } else {
            self.missing_labels += 1;
        }
    }
}

/// Outcome of a completed split run, written out as the `--report` manifest
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub percentage: u8,
    pub reduction_factor: f64,
    pub seed: Option<u64>,
    pub counts: SplitCounts,
    pub train: SplitSummary,
    pub valid: SplitSummary,
}

impl SplitReport {
    pub fn new(params: &SplitParams, counts: SplitCounts) -> Self {
        Self {
            percentage: params.percentage(),
            reduction_factor: params.reduction_factor(),
            seed: None,
            counts,
            train: SplitSummary::default(),
            valid: SplitSummary::default(),
        }
    }

    pub fn record(&mut self, split: DatasetSplit, entry: &DatasetEntry, label_copied: bool) {
        self.summary_mut(split).record(entry, label_copied);
    }

    pub fn summary(&self, split: DatasetSplit) -> &SplitSummary {
        match split {
            DatasetSplit::Train => &self.train,
            DatasetSplit::Valid => &self.valid,
        }
    }

    fn summary_mut(&mut self, split: DatasetSplit) -> &mut SplitSummary {
        match split {
            DatasetSplit::Train => &mut self.train,
            DatasetSplit::Valid => &mut self.valid,
        }
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| SplitError::WriteReport {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Split report saved to: {:?}", path);
        Ok(())
    }
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for split in [DatasetSplit::Train, DatasetSplit::Valid] {
            let summary = self.summary(split);
            write!(
                f,
                "{}: {} images ({} labels), ",
                split.as_str(),
                summary.images.len(),
                summary.labels_copied
            )?;
        }
        write!(
            f,
            "{} of {} images not used",
            self.counts.reduced_out, self.counts.total
        )
    }
}
