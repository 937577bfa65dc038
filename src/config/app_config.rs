use std::path::{Path, PathBuf};

use crate::core::dataset::DatasetSplit;

/// Fixed directory and file naming used by a split run.
///
/// Centralizes the layout names so the copy code never spells them out.
/// There is no config file; the CLI always runs with `SplitConfig::default()`.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub images_dir: &'static str,
    pub labels_dir: &'static str,
    pub train_dir: &'static str,
    pub valid_dir: &'static str,
    /// Matched case-insensitively, without the leading dot
    pub image_extensions: Vec<&'static str>,
    pub label_extension: &'static str,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            images_dir: "images",
            labels_dir: "labels",
            train_dir: DatasetSplit::Train.as_str(),
            valid_dir: DatasetSplit::Valid.as_str(),
            image_extensions: vec!["jpg"],
            label_extension: "txt",
        }
    }
}

impl SplitConfig {
    /// Check whether a path carries one of the accepted image extensions
    pub fn is_image(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.image_extensions
                    .iter()
                    .any(|accepted| ext.eq_ignore_ascii_case(accepted))
            })
            .unwrap_or(false)
    }

    /// Get the directory name for a split
    pub fn split_dir(&self, split: DatasetSplit) -> &str {
        match split {
            DatasetSplit::Train => self.train_dir,
            DatasetSplit::Valid => self.valid_dir,
        }
    }
}

/// Resolved source and destination directories of a split run.
///
/// ```text
/// source/images/*.jpg      dest/train/images/   dest/valid/images/
/// source/labels/*.txt      dest/train/labels/   dest/valid/labels/
/// ```
#[derive(Debug, Clone)]
pub struct DatasetLayout {
    pub source_images: PathBuf,
    pub source_labels: PathBuf,
    pub train_images: PathBuf,
    pub train_labels: PathBuf,
    pub valid_images: PathBuf,
    pub valid_labels: PathBuf,
    pub config: SplitConfig,
}

impl DatasetLayout {
    pub fn new(source: &Path, dest: &Path, config: SplitConfig) -> Self {
        let train = dest.join(config.split_dir(DatasetSplit::Train));
        let valid = dest.join(config.split_dir(DatasetSplit::Valid));
        Self {
            source_images: source.join(config.images_dir),
            source_labels: source.join(config.labels_dir),
            train_images: train.join(config.images_dir),
            train_labels: train.join(config.labels_dir),
            valid_images: valid.join(config.images_dir),
            valid_labels: valid.join(config.labels_dir),
            config,
        }
    }

    /// Destination (images, labels) directories for a split
    pub fn destination(&self, split: DatasetSplit) -> (&Path, &Path) {
        match split {
            DatasetSplit::Train => (self.train_images.as_path(), self.train_labels.as_path()),
            DatasetSplit::Valid => (self.valid_images.as_path(), self.valid_labels.as_path()),
        }
    }

    /// All destination directories, in creation order
    pub fn destination_dirs(&self) -> [&Path; 4] {
        [
            self.train_images.as_path(),
            self.train_labels.as_path(),
            self.valid_images.as_path(),
            self.valid_labels.as_path(),
        ]
    }
}
