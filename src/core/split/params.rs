use serde::Serialize;

use crate::error::{Result, SplitError};

pub const MIN_PERCENTAGE: i64 = 1;
pub const MAX_PERCENTAGE: i64 = 99;
pub const MIN_REDUCTION_FACTOR: f64 = 0.001;
pub const MAX_REDUCTION_FACTOR: f64 = 1.0;
pub const DEFAULT_REDUCTION_FACTOR: f64 = 1.0;

/// Slack in units of `f64::EPSILON`, relative to the product, applied before
/// rounding `total * reduction_factor` up. `100 * 0.07 = 7.000000000000001`
/// still means 7 files, while `10 * 0.10000000001` still means 2.
const CEIL_TOLERANCE_ULPS: f64 = 4.0;

/// Validated split parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitParams {
    percentage: u8,
    reduction_factor: f64,
}

impl SplitParams {
    /// Validate a train percentage (1-99) and a reduction factor (0.001-1.0).
    /// NaN reduction factors are rejected.
    pub fn new(percentage: i64, reduction_factor: f64) -> Result<Self> {
        if !(MIN_PERCENTAGE..=MAX_PERCENTAGE).contains(&percentage) {
            return Err(SplitError::InvalidPercentage(percentage));
        }
        if !(MIN_REDUCTION_FACTOR..=MAX_REDUCTION_FACTOR).contains(&reduction_factor) {
            return Err(SplitError::InvalidReductionFactor(reduction_factor));
        }
        Ok(Self {
            percentage: percentage as u8,
            reduction_factor,
        })
    }

    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    pub fn reduction_factor(&self) -> f64 {
        self.reduction_factor
    }

    /// Compute how many of `total` files are used, and how they divide.
    pub fn counts(&self, total: usize) -> SplitCounts {
        let scaled = total as f64 * self.reduction_factor;
        let slack = CEIL_TOLERANCE_ULPS * f64::EPSILON * scaled.max(1.0);
        let total_to_use = ((scaled - slack).ceil().max(0.0) as usize).min(total);

        let percentage = self.percentage as usize;
        let train = (total_to_use * percentage).div_ceil(100);

        SplitCounts {
            total,
            total_to_use,
            train,
            valid: total_to_use - train,
            reduced_out: total - total_to_use,
        }
    }
}

/// File counts for one run.
///
/// `train + valid == total_to_use` and `total_to_use + reduced_out == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SplitCounts {
    pub total: usize,
    pub total_to_use: usize,
    pub train: usize,
    pub valid: usize,
    pub reduced_out: usize,
}
