//! Random train/valid split of a YOLO-style dataset.
//!
//! Planning is pure and takes any `rand::Rng`, so callers choose between an
//! entropy-seeded and a fixed-seed shuffle. Execution performs the copies.

mod executor;
mod params;
mod planner;
mod report;

pub use executor::split_dataset;
pub use params::{SplitParams, DEFAULT_REDUCTION_FACTOR};
pub use planner::ShuffleStrategy;
pub use report::SplitReport;
