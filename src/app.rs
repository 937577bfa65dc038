use tracing::info;

use crate::cli::SplitRequest;
use crate::config::{DatasetLayout, SplitConfig};
use crate::core::split::{split_dataset, ShuffleStrategy, SplitParams, SplitReport};
use crate::error::Result;

/// Check the divide value and reduction factor without touching the file system
pub fn validate(request: &SplitRequest) -> Result<SplitParams> {
    SplitParams::new(request.divide_value, request.reduction_factor)
}

/// Validate the request, then split the dataset it names.
///
/// Argument errors are returned before anything is read or created.
pub fn run_split(request: &SplitRequest, strategy: ShuffleStrategy) -> Result<SplitReport> {
    let params = validate(request)?;

    info!("source      : {:?}", request.source);
    info!("destination : {:?}", request.dest);
    info!("divide value: {}[%]", params.percentage());
    info!("reduction   : {}", params.reduction_factor());
    if let Some(seed) = strategy.seed() {
        info!("seed        : {}", seed);
    }

    let layout = DatasetLayout::new(&request.source, &request.dest, SplitConfig::default());
    let mut rng = strategy.rng();
    let mut report = split_dataset(&layout, &params, &mut rng)?;
    report.seed = strategy.seed();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SplitError;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn request(root: &Path, divide_value: i64, reduction_factor: f64) -> SplitRequest {
        SplitRequest {
            source: root.join("src"),
            dest: root.join("out"),
            divide_value,
            reduction_factor,
        }
    }

    fn make_source(root: &Path, count: usize) {
        let images = root.join("src/images");
        let labels = root.join("src/labels");
        fs::create_dir_all(&images).unwrap();
        fs::create_dir_all(&labels).unwrap();
        for i in 0..count {
            fs::write(images.join(format!("img_{}.jpg", i)), b"img").unwrap();
            fs::write(labels.join(format!("img_{}.txt", i)), b"1 0.1 0.1 0.2 0.2").unwrap();
        }
    }

    #[test]
    fn test_invalid_percentage_touches_nothing() {
        let tmp = tempdir().unwrap();
        make_source(tmp.path(), 4);

        for bad in [0, 100] {
            let err = run_split(&request(tmp.path(), bad, 1.0), ShuffleStrategy::Random)
                .unwrap_err();
            assert!(err.is_invalid_argument());
        }
        assert!(!tmp.path().join("out").exists());
    }

    #[test]
    fn test_invalid_reduction_touches_nothing() {
        let tmp = tempdir().unwrap();
        make_source(tmp.path(), 4);

        let err = run_split(&request(tmp.path(), 50, 0.0), ShuffleStrategy::Random).unwrap_err();
        assert!(matches!(err, SplitError::InvalidReductionFactor(_)));
        assert!(!tmp.path().join("out").exists());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        make_source(first.path(), 15);
        make_source(second.path(), 15);

        let a = run_split(&request(first.path(), 40, 1.0), ShuffleStrategy::Seeded(8)).unwrap();
        let b = run_split(&request(second.path(), 40, 1.0), ShuffleStrategy::Seeded(8)).unwrap();

        assert_eq!(a.train.images, b.train.images);
        assert_eq!(a.valid.images, b.valid.images);
        assert_eq!(a.seed, Some(8));
    }

    #[test]
    fn test_random_run_copies_everything() {
        let tmp = tempdir().unwrap();
        make_source(tmp.path(), 9);

        let report = run_split(&request(tmp.path(), 34, 1.0), ShuffleStrategy::Random).unwrap();

        assert_eq!(report.counts.train, 4);
        assert_eq!(report.counts.valid, 5);
        assert_eq!(report.seed, None);
        let valid_images: PathBuf = tmp.path().join("out/valid/images");
        assert_eq!(fs::read_dir(valid_images).unwrap().count(), 5);
    }
}
