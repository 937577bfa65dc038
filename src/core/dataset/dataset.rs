use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::SplitConfig;
use crate::core::operations::label_path_for_image;
use crate::error::{Result, SplitError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetSplit {
    Train,
    Valid,
}

impl DatasetSplit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetSplit::Train => "train",
            DatasetSplit::Valid => "valid",
        }
    }
}

/// An image and the label file sharing its stem, if one exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetEntry {
    pub image: PathBuf,
    pub label: Option<PathBuf>,
}

impl DatasetEntry {
    /// Pair an image with `labels_dir/<stem>.<label_extension>`.
    /// The label is kept only when it exists as a regular file.
    pub fn resolve(image: PathBuf, labels_dir: &Path, label_extension: &str) -> Self {
        let label = label_path_for_image(&image, labels_dir, label_extension)
            .filter(|path| path.is_file());
        if label.is_none() {
            debug!("No label found for {:?}", image);
        }
        Self { image, label }
    }

    pub fn file_name(&self) -> String {
        self.image
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// List the image files directly under `images_dir`.
///
/// Subdirectories are not descended into; symlinks to files count as files.
/// The result is sorted so that a seeded shuffle yields the same split
/// regardless of directory order.
pub fn enumerate_images(images_dir: &Path, config: &SplitConfig) -> Result<Vec<PathBuf>> {
    let read_err = |source| SplitError::ReadDir {
        path: images_dir.to_path_buf(),
        source,
    };

    info!("Reading images from: {:?}", images_dir);
    let mut image_files = Vec::new();
    for entry in fs::read_dir(images_dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        if path.is_file() && config.is_image(&path) {
            image_files.push(path);
        }
    }
    image_files.sort();

    info!("Found {} images in {:?}", image_files.len(), images_dir);
    Ok(image_files)
}

/// Enumerate images and pair each one with its label
pub fn load_entries(
    images_dir: &Path,
    labels_dir: &Path,
    config: &SplitConfig,
) -> Result<Vec<DatasetEntry>> {
    let entries: Vec<DatasetEntry> = enumerate_images(images_dir, config)?
        .into_iter()
        .map(|image| DatasetEntry::resolve(image, labels_dir, config.label_extension))
        .collect();

    let labelled = entries.iter().filter(|e| e.label.is_some()).count();
    info!(
        "{} of {} images have a label in {:?}",
        labelled,
        entries.len(),
        labels_dir
    );
    Ok(entries)
}
