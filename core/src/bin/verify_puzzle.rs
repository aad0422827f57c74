use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use strands_core::Puzzle;

/// Check puzzle files for structural and semantic validity.
///
/// A file passes when it parses, every answer stays on the board, spells its
/// word, and is unfolded, and the answers exactly tile the board.
#[derive(Debug, Parser)]
#[command(name = "verify-puzzle", version)]
struct Cli {
    /// Puzzle files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .init();

    let mut failed = false;
    for path in &cli.files {
        match check(path) {
            Ok(summary) => println!("{}: {summary}", path.display()),
            Err(err) => {
                eprintln!("{}: {err:#}", path.display());
                failed = true;
            }
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn check(path: &Path) -> anyhow::Result<String> {
    let puzzle = Puzzle::from_path(path).context("failed to load")?;
    puzzle.verify().context("failed verification")?;
    Ok(format!(
        "ok, theme {:?}, {}x{} board, {} answers",
        puzzle.theme(),
        puzzle.board().num_rows(),
        puzzle.board().num_cols(),
        puzzle.answers().len()
    ))
}
