#[allow(clippy::module_inception)]
mod dataset;

pub use dataset::{load_entries, DatasetEntry, DatasetSplit};
