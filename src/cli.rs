use clap::Parser;
use std::path::PathBuf;

use crate::core::split::DEFAULT_REDUCTION_FACTOR;

const LAYOUT_HELP: &str = "\
Directory layout:
  [source_path]┳images━jpgfiles
               ┗labels━txtfiles
  [dest_path]┳train┳images━jpgfiles
             ┃     ┗labels━txtfiles
             ┗valid┳images━jpgfiles
                   ┗labels━txtfiles";

/// Copy a random share of a YOLO dataset into train/ and the rest into valid/
#[derive(Debug, Parser)]
#[command(name = "yolo-split", version, after_help = LAYOUT_HELP)]
pub struct Args {
    /// Dataset root containing images/ and labels/
    pub source_path: Option<PathBuf>,

    /// Output root; train/ and valid/ are created inside it
    pub dest_path: Option<PathBuf>,

    /// Percentage of the (reduced) dataset copied to train/ (1-99)
    #[arg(allow_negative_numbers = true)]
    pub divide_value: Option<i64>,

    /// Fraction of the dataset used at all (0.001-1.0)
    #[arg(default_value_t = DEFAULT_REDUCTION_FACTOR, allow_negative_numbers = true)]
    pub reduction_factor: f64,

    /// Seed the shuffle for a reproducible split
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a JSON manifest of the split to this file
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Also write log lines to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log every copied file
    #[arg(short, long)]
    pub verbose: bool,
}

/// Positional arguments required for a split run
#[derive(Debug, Clone)]
pub struct SplitRequest {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub divide_value: i64,
    pub reduction_factor: f64,
}

impl Args {
    /// The split request, or `None` when fewer than three positionals were given
    pub fn request(&self) -> Option<SplitRequest> {
        Some(SplitRequest {
            source: self.source_path.clone()?,
            dest: self.dest_path.clone()?,
            divide_value: self.divide_value?,
            reduction_factor: self.reduction_factor,
        })
    }
}
