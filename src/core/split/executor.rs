use rand::Rng;
use tracing::{info, warn};

use crate::config::DatasetLayout;
use crate::core::dataset::{load_entries, DatasetSplit};
use crate::core::operations::{copy_entry, ensure_dir};
use crate::error::Result;

use super::params::SplitParams;
use super::planner::{plan_split, SplitPlan};
use super::report::SplitReport;

/// Copy every planned entry into its split's directories.
///
/// The four destination directories are created first. The run stops at the
/// first failed copy; files already copied are left in place.
pub fn execute_split_plan(layout: &DatasetLayout, plan: &SplitPlan) -> Result<SplitReport> {
    for dir in layout.destination_dirs() {
        ensure_dir(dir)?;
    }

    if plan.is_empty() {
        warn!("No images selected, nothing to copy");
    } else {
        info!("Copying {} planned images", plan.len());
    }

    let mut report = SplitReport::new(&plan.params, plan.counts);
    for split in [DatasetSplit::Train, DatasetSplit::Valid] {
        let (images_dir, labels_dir) = layout.destination(split);
        let entries = plan.entries(split);
        info!("Copying {} images to {:?}", entries.len(), images_dir);

        for entry in entries {
            let label_copied = copy_entry(entry, images_dir, labels_dir)?;
            report.record(split, entry, label_copied);
        }
    }

    let missing = report.train.missing_labels + report.valid.missing_labels;
    if missing > 0 {
        warn!("{} copied images had no label file", missing);
    }
    info!("Split complete: {}", report);
    Ok(report)
}

/// Enumerate the source dataset, plan a split with `rng` and copy it out.
pub fn split_dataset<R: Rng + ?Sized>(
    layout: &DatasetLayout,
    params: &SplitParams,
    rng: &mut R,
) -> Result<SplitReport> {
    let entries = load_entries(&layout.source_images, &layout.source_labels, &layout.config)?;
    let plan = plan_split(entries, params, rng);
    execute_split_plan(layout, &plan)
}
