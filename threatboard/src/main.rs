//! threatboard CLI: counts attacked and safe squares on board files.
//!
//! Two subcommands:
//!
//! 1. **`count [PATH]`**: loads a board file (default from [`config`]),
//!    runs every piece's threat generator, and prints the attacked/safe
//!    totals, either as JSON or as text with an optional attack map.
//! 2. **`generate`**: writes random 8x8 boards, each holding one of every
//!    white and black piece, to `board{i}.txt` files.
//!
//! Logs go to stderr through `tracing`; stdout carries only the report.

use std::io::Write;
use std::path::{Path, PathBuf};

use board::{load_board, random_board, save_board, MalformedBoardError};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use threats::{compute_threats, DimensionMismatchError, ThreatReport};

mod config;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "threatboard", about = "Count attacked and safe squares on a board")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report how many squares are attacked and how many are safe.
    Count {
        /// Board file. Defaults to `THREATBOARD_BOARD_PATH` or `board.txt`.
        path: Option<PathBuf>,

        /// Print the report as JSON. Cannot be combined with `--map`.
        #[arg(long, conflicts_with = "map")]
        json: bool,

        /// Also print the attack map (`x` attacked, `.` safe).
        #[arg(long)]
        map: bool,
    },
    /// Write random boards to `board{i}.txt`.
    Generate {
        /// Number of boards. Defaults to `THREATBOARD_GENERATE_COUNT` or 50.
        #[arg(short, long)]
        count: Option<usize>,

        /// Directory the boards are written to.
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Seed for reproducible boards.
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Error type for CLI operations.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("malformed board: {0}")]
    Board(#[from] MalformedBoardError),

    /// Threat grids disagreed with the board size; a bug, not bad input.
    #[error("internal error: {0}")]
    Threats(#[from] DimensionMismatchError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load the board at `path`, compute its report and print it to `out`.
fn run_count(
    path: &Path,
    json: bool,
    map: bool,
    out: &mut impl Write,
) -> Result<ThreatReport, CliError> {
    let board = load_board(path)?;
    let grid = compute_threats(&board)?;
    let report = ThreatReport::from_grid(&grid);

    if json {
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    } else {
        writeln!(out, "{report}")?;
    }
    if map {
        write!(out, "{grid}")?;
    }

    Ok(report)
}

/// Write `count` random boards into `out_dir` as `board{i}.txt`.
fn run_generate<R: Rng + ?Sized>(
    count: usize,
    out_dir: &Path,
    rng: &mut R,
) -> Result<Vec<PathBuf>, CliError> {
    std::fs::create_dir_all(out_dir).map_err(|source| CliError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(count);
    for i in 0..count {
        let path = out_dir.join(format!("board{i}.txt"));
        save_board(&path, &random_board(rng)).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote board");
        written.push(path);
    }

    Ok(written)
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Count { path, json, map } => {
            let path = path.unwrap_or_else(config::get_board_path);
            tracing::info!("Counting threats on {}", path.display());
            run_count(&path, json, map, &mut std::io::stdout().lock())?;
        }
        Commands::Generate {
            count,
            out_dir,
            seed,
        } => {
            let count = count.unwrap_or_else(config::get_generate_count);
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let written = run_generate(count, &out_dir, &mut rng)?;
            tracing::info!("Wrote {} boards to {}", written.len(), out_dir.display());
        }
    }

    Ok(())
}
