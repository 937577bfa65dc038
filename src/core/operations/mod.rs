mod file_ops;

pub use file_ops::{copy_entry, ensure_dir, label_path_for_image};
