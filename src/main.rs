use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::process::ExitCode;
use tracing::debug;

mod app;
mod cli;
mod config;
mod core;
mod error;
mod logging;

use crate::core::split::ShuffleStrategy;
use cli::Args;

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    ExitCode::from(run(std::env::args_os()))
}

/// Run the splitter on a full argument list (program name first) and return
/// the process exit status.
fn run<I, T>(argv: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here
            let _ = e.print();
            return if e.use_stderr() {
                EXIT_FAILURE
            } else {
                EXIT_SUCCESS
            };
        }
    };

    let Some(request) = args.request() else {
        let _ = Args::command().print_help();
        return EXIT_SUCCESS;
    };

    // Bad arguments are rejected before the log file is opened
    if let Err(e) = app::validate(&request) {
        eprintln!("Error: {}", e);
        return EXIT_FAILURE;
    }

    if let Err(e) = logging::setup_logging(args.verbose, args.log_file.as_deref()) {
        eprintln!("Error: failed to open log file: {}", e);
        return EXIT_FAILURE;
    }

    let strategy = ShuffleStrategy::from_seed(args.seed);
    let result = app::run_split(&request, strategy).and_then(|report| {
        if let Some(path) = &args.report {
            report.write_json(path)?;
        }
        Ok(report)
    });

    match result {
        Ok(report) => {
            println!("Files have been copied successfully.");
            println!("{}", report);
            EXIT_SUCCESS
        }
        Err(e) => {
            debug!("Split aborted: {:?}", e);
            eprintln!("Error: {}", e);
            EXIT_FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn make_source(root: &Path, count: usize) {
        let images = root.join("images");
        let labels = root.join("labels");
        fs::create_dir_all(&images).unwrap();
        fs::create_dir_all(&labels).unwrap();
        for i in 0..count {
            fs::write(images.join(format!("{}.jpg", i)), b"img").unwrap();
            fs::write(labels.join(format!("{}.txt", i)), b"0 0.5 0.5 0.2 0.2").unwrap();
        }
    }

    fn path_arg(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_too_few_arguments_prints_usage() {
        assert_eq!(run(["yolo-split"]), EXIT_SUCCESS);
        assert_eq!(run(["yolo-split", "a", "b"]), EXIT_SUCCESS);
    }

    #[test]
    fn test_help_exits_successfully() {
        assert_eq!(run(["yolo-split", "--help"]), EXIT_SUCCESS);
    }

    #[test]
    fn test_non_numeric_divide_value_fails() {
        assert_eq!(run(["yolo-split", "a", "b", "half"]), EXIT_FAILURE);
    }

    #[test]
    fn test_out_of_range_values_fail_without_io() {
        let tmp = tempdir().unwrap();
        let dest = tmp.path().join("out");
        let log = tmp.path().join("split.log");
        make_source(&tmp.path().join("src"), 4);
        let src_arg = path_arg(&tmp.path().join("src"));
        let dest_arg = path_arg(&dest);
        let log_arg = path_arg(&log);

        for divide in ["0", "100"] {
            let argv = [
                "yolo-split",
                src_arg.as_str(),
                dest_arg.as_str(),
                divide,
                "--log-file",
                log_arg.as_str(),
            ];
            assert_eq!(run(argv), EXIT_FAILURE);
        }
        let argv = ["yolo-split", src_arg.as_str(), dest_arg.as_str(), "50", "1.5"];
        assert_eq!(run(argv), EXIT_FAILURE);

        assert!(!dest.exists());
        assert!(!log.exists());
    }

    #[test]
    fn test_missing_source_fails() {
        let tmp = tempdir().unwrap();
        let src_arg = path_arg(&tmp.path().join("nothing"));
        let dest_arg = path_arg(&tmp.path().join("out"));

        let argv = ["yolo-split", src_arg.as_str(), dest_arg.as_str(), "50"];
        assert_eq!(run(argv), EXIT_FAILURE);
    }

    #[test]
    fn test_successful_run() {
        let tmp = tempdir().unwrap();
        let dest = tmp.path().join("out");
        let report = tmp.path().join("split.json");
        make_source(&tmp.path().join("src"), 4);
        let src_arg = path_arg(&tmp.path().join("src"));
        let dest_arg = path_arg(&dest);
        let report_arg = path_arg(&report);

        let argv = [
            "yolo-split",
            src_arg.as_str(),
            dest_arg.as_str(),
            "50",
            "--seed",
            "7",
            "--report",
            report_arg.as_str(),
        ];

        assert_eq!(run(argv), EXIT_SUCCESS);
        assert_eq!(fs::read_dir(dest.join("train/images")).unwrap().count(), 2);
        assert_eq!(fs::read_dir(dest.join("valid/labels")).unwrap().count(), 2);
        assert!(report.exists());
    }
}
