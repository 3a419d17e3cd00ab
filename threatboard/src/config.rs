//! Configuration for the threatboard CLI.
//!
//! Every value has a compile-time default and can be overridden at runtime
//! via a dedicated environment variable. Command-line flags take precedence
//! over both.

use std::path::PathBuf;

/// Default board file read by `count`.
const DEFAULT_BOARD_PATH: &str = "board.txt";

/// Default number of boards written by `generate`.
const DEFAULT_GENERATE_COUNT: usize = 50;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Get the board file path used when none is given on the command line.
///
/// Priority:
/// 1. `THREATBOARD_BOARD_PATH` env variable if set
/// 2. `board.txt` as fallback
pub fn get_board_path() -> PathBuf {
    if let Ok(path) = std::env::var("THREATBOARD_BOARD_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_BOARD_PATH)
}

/// Get the number of boards to generate when `--count` is absent.
///
/// Priority:
/// 1. `THREATBOARD_GENERATE_COUNT` env variable if set (falls back to default
///    if the value cannot be parsed as a `usize`)
/// 2. `50` as fallback
pub fn get_generate_count() -> usize {
    if let Ok(count) = std::env::var("THREATBOARD_GENERATE_COUNT") {
        return count.parse().unwrap_or(DEFAULT_GENERATE_COUNT);
    }

    DEFAULT_GENERATE_COUNT
}
