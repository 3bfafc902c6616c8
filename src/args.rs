use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use xword_gen::generate::{Difficulty, DEFAULT_ATTEMPT_BUDGET};

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum DifficultyArg {
  Easy,
  Medium,
  Hard,
}

impl From<DifficultyArg> for Difficulty {
  fn from(difficulty: DifficultyArg) -> Self {
    match difficulty {
      DifficultyArg::Easy => Difficulty::Easy,
      DifficultyArg::Medium => Difficulty::Medium,
      DifficultyArg::Hard => Difficulty::Hard,
    }
  }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  /// Clue corpus: `answer<TAB>clue` lines, or a bitcode-encoded word bank
  /// when the extension is `.bin`.
  #[arg(long)]
  pub corpus: PathBuf,

  #[arg(long, default_value_t = 0)]
  pub seed: u64,

  #[arg(long, default_value = "medium")]
  pub difficulty: DifficultyArg,

  /// Bitcode-encoded pattern library; the built-in templates are used when
  /// absent.
  #[arg(long)]
  pub pattern_file: Option<PathBuf>,

  #[arg(long, default_value_t = DEFAULT_ATTEMPT_BUDGET)]
  pub attempt_budget: u32,

  /// Overrides the engine-derived puzzle id in the output payload.
  #[arg(long)]
  pub puzzle_id: Option<String>,
}
