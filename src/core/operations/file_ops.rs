use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::core::dataset::DatasetEntry;
use crate::error::{Result, SplitError};

/// Create a directory and its parents if missing.
///
/// Existing directories are left untouched.
///
/// # Returns
/// * `Ok(true)` if the directory was created by this call
/// * `Ok(false)` if it already existed
/// * `Err(SplitError::CreateDir)` if creation failed
pub fn ensure_dir(path: &Path) -> Result<bool> {
    let existed = path.is_dir();

    fs::create_dir_all(path).map_err(|source| {
        error!("Failed to create directory {:?}: {}", path, source);
        SplitError::CreateDir {
            path: path.to_path_buf(),
            source,
        }
    })?;
    if existed {
        info!("Directory already exists: {:?}", path);
    } else {
        info!("Created directory: {:?}", path);
    }
    Ok(!existed)
}

/// Copy a file, replacing the destination if it already exists.
pub fn copy_overwrite(src: &Path, dest: &Path) -> Result<()> {
    debug!("Copying {:?} to {:?}", src, dest);
    fs::copy(src, dest).map_err(|source| {
        error!("Failed to copy file from {:?} to {:?}: {}", src, dest, source);
        SplitError::Copy {
            from: src.to_path_buf(),
            to: dest.to_path_buf(),
            source,
        }
    })?;
    Ok(())
}

/// Get the label file path for an image: `labels_dir/<stem>.<extension>`.
///
/// # Returns
/// * `None` if the image path has no file stem
pub fn label_path_for_image(
    image_path: &Path,
    labels_dir: &Path,
    extension: &str,
) -> Option<PathBuf> {
    image_path.file_stem().map(|stem| {
        let mut name = stem.to_os_string();
        name.push(".");
        name.push(extension);
        labels_dir.join(name)
    })
}

/// Copy an image into `images_dir` and its label, if any, into `labels_dir`.
///
/// # Returns
/// * `Ok(true)` if a label was copied along with the image
/// * `Ok(false)` if the entry has no label
/// * `Err(SplitError::Copy)` on the first failed copy
pub fn copy_entry(entry: &DatasetEntry, images_dir: &Path, labels_dir: &Path) -> Result<bool> {
    let Some(image_name) = entry.image.file_name() else {
        return Err(SplitError::Copy {
            from: entry.image.clone(),
            to: images_dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        });
    };
    copy_overwrite(&entry.image, &images_dir.join(image_name))?;

    match &entry.label {
        Some(label) => {
            if let Some(label_name) = label.file_name() {
                copy_overwrite(label, &labels_dir.join(label_name))?;
            }
            Ok(true)
        }
        None => {
            debug!("No label for {:?}, copied image only", entry.image);
            Ok(false)
        }
    }
}
