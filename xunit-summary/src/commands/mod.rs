pub mod summary;

use log::LevelFilter;

//
// Constants
//
// Application metadata
pub const APP_NAME: &str = "xunit-summary";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
// Arguments
pub const RESULTS_FILE: &str = "results-file";
pub const VERBOSE: (&str, char) = ("verbose", 'v');
// Reading the results document from stdin
pub const STDIN_PATH: &str = "-";

pub const SUCCESS_STATUS_CODE: i32 = 0;
pub const INTERNAL_FAILURE_STATUS_CODE: i32 = -1;

/// Maps the number of `-v` occurrences to the stderr log level.
pub fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
