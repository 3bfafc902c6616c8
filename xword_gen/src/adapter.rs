use std::{error::Error, time::Duration};

use serde::Serialize;

use crate::{
  generate::{Difficulty, GenerateOutcome, Puzzle},
  number::Word,
};

/// The game-ready puzzle shape consumed by the UI layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzlePayload {
  pub id: String,
  pub grid_size: u32,
  pub words: Vec<Word>,
  pub difficulty: Difficulty,
  pub title: String,
}

/// The sole interface surface toward the caller: either a puzzle or a
/// human-readable error, always with the elapsed generation time, never a
/// propagated exception.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub puzzle: Option<PuzzlePayload>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub grid_size: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub difficulty_score: Option<u32>,
  pub gen_time_ms: u64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

/// Converts a facade outcome into the caller-facing payload. `id_override`
/// replaces the engine-derived puzzle id when the caller supplies its own.
pub fn to_game_result(outcome: GenerateOutcome, id_override: Option<&str>) -> GenerationResult {
  match outcome {
    GenerateOutcome::Success { puzzle, gen_time } => {
      let Puzzle {
        id,
        size,
        words,
        difficulty,
        difficulty_score,
        title,
      } = puzzle;
      GenerationResult {
        success: true,
        puzzle: Some(PuzzlePayload {
          id: id_override.map_or(id, str::to_owned),
          grid_size: size,
          words,
          difficulty,
          title,
        }),
        grid_size: Some(size),
        difficulty_score: Some(difficulty_score),
        gen_time_ms: gen_time.as_millis() as u64,
        error: None,
      }
    }
    GenerateOutcome::Failure { error, gen_time } => failure(error, gen_time),
  }
}

/// Wraps an unexpected runtime error (e.g. a malformed pattern asset) into
/// the same failure shape, so nothing crosses this boundary as an exception.
pub fn failure_result(error: &dyn Error, gen_time: Duration) -> GenerationResult {
  failure(error.to_string(), gen_time)
}

fn failure(error: String, gen_time: Duration) -> GenerationResult {
  GenerationResult {
    success: false,
    puzzle: None,
    grid_size: None,
    difficulty_score: None,
    gen_time_ms: gen_time.as_millis() as u64,
    error: Some(error),
  }
}
