use std::{fmt::Display, time::Duration};

use log::{debug, warn};
use serde::Serialize;
use util::{rng::SeededRng, time::time_fn};
use xword_bank::WordBank;

use crate::{
  fill::fill,
  number::{number_slots, Word},
  pattern::PatternLibrary,
  slot::extract_slots,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
}

impl Display for Difficulty {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Difficulty::Easy => write!(f, "easy"),
      Difficulty::Medium => write!(f, "medium"),
      Difficulty::Hard => write!(f, "hard"),
    }
  }
}

pub const DEFAULT_ATTEMPT_BUDGET: u32 = 50_000;

/// Engine knobs. The attempt budget caps candidate expansions per pattern
/// trial; it is the only safeguard against runaway search on infeasible
/// patterns and must stay finite.
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
  pub attempt_budget: u32,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self {
      attempt_budget: DEFAULT_ATTEMPT_BUDGET,
    }
  }
}

#[derive(Clone, Copy, Debug)]
pub struct GenerateParams {
  pub seed: u64,
  pub difficulty: Difficulty,
}

/// A completed, numbered crossword. Immutable once returned; the adapter may
/// replace `id` with a caller-supplied identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
  pub id: String,
  pub size: u32,
  pub words: Vec<Word>,
  pub difficulty: Difficulty,
  pub difficulty_score: u32,
  pub title: String,
}

/// The facade's result. Failure is data, not an error: "no puzzle produced"
/// is the only externally observable failure mode, and substituting a
/// fallback puzzle is the caller's decision.
#[derive(Clone, Debug)]
pub enum GenerateOutcome {
  Success { puzzle: Puzzle, gen_time: Duration },
  Failure { error: String, gen_time: Duration },
}

impl GenerateOutcome {
  pub fn gen_time(&self) -> Duration {
    match self {
      GenerateOutcome::Success { gen_time, .. } | GenerateOutcome::Failure { gen_time, .. } => {
        *gen_time
      }
    }
  }
}

/// Orchestrates pattern trials. Owns the (read-only) word bank and pattern
/// library; construct one at startup and share it by reference across
/// `generate` calls. Each call is synchronous and keeps all search state
/// local, so concurrent calls need no locking.
pub struct Generator {
  bank: WordBank,
  patterns: PatternLibrary,
  config: GeneratorConfig,
}

impl Generator {
  pub fn new(bank: WordBank, patterns: PatternLibrary, config: GeneratorConfig) -> Self {
    Self {
      bank,
      patterns,
      config,
    }
  }

  pub fn generate(&self, params: GenerateParams) -> GenerateOutcome {
    let (gen_time, puzzle) = time_fn(|| self.run_trials(params));
    match puzzle {
      Some(puzzle) => GenerateOutcome::Success { puzzle, gen_time },
      None => GenerateOutcome::Failure {
        error: format!(
          "No puzzle could be generated: all {} pattern trials failed for seed {}",
          self.patterns.len(),
          params.seed
        ),
        gen_time,
      },
    }
  }

  fn run_trials(&self, params: GenerateParams) -> Option<Puzzle> {
    let mut rng = SeededRng::new(params.seed);
    let mut trial_order: Vec<_> = (0..self.patterns.len()).collect();
    rng.shuffle(&mut trial_order);

    for idx in trial_order {
      let Some(pattern) = self.patterns.get(idx) else {
        continue;
      };
      let slots = extract_slots(pattern);
      if slots.is_empty() {
        debug!("Pattern {idx} has no slots, skipping");
        continue;
      }

      // Fresh shuffled candidate view per trial: value ordering varies by
      // seed without ever mutating the shared bank.
      let candidates = self.bank.candidates_for_attempt(&mut rng);
      debug!("Trying pattern {idx} with {} slots", slots.len());
      if let Some(filled) = fill(pattern, &slots, &candidates, self.config.attempt_budget) {
        return Some(self.assemble(params, idx, pattern.width(), number_slots(filled)));
      }
      debug!("Pattern {idx} could not be filled");
    }

    warn!(
      "All {} pattern trials failed for seed {}",
      self.patterns.len(),
      params.seed
    );
    None
  }

  fn assemble(
    &self,
    params: GenerateParams,
    pattern_idx: usize,
    size: u32,
    words: Vec<Word>,
  ) -> Puzzle {
    let difficulty_score = words
      .iter()
      .map(|word| word.answer.chars().count() as u32)
      .sum();
    Puzzle {
      id: format!("xw_{}_{pattern_idx}", params.seed),
      size,
      words,
      difficulty: params.difficulty,
      difficulty_score,
      title: format!("Crossword #{}", params.seed),
    }
  }
}
