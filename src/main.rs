#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;

use std::{
  fs::{self, File},
  io::{BufRead, BufReader},
  time::Duration,
};

use args::Args;
use clap::Parser;
use log::info;
use util::{bitcode, error::EngineResult};
use xword_bank::WordBank;
use xword_gen::{
  adapter::{self, GenerationResult},
  generate::{GenerateParams, Generator, GeneratorConfig},
  pattern::{Pattern, PatternLibrary},
};

fn load_bank(args: &Args) -> EngineResult<WordBank> {
  let bank = if args.corpus.extension().is_some_and(|ext| ext == "bin") {
    bitcode::decode(&fs::read(&args.corpus)?)?
  } else {
    WordBank::from_tsv_lines(
      BufReader::new(File::open(&args.corpus)?)
        .lines()
        .collect::<Result<Vec<_>, _>>()?,
    )
  };
  info!("Loaded {} corpus entries", bank.num_entries());
  Ok(bank)
}

fn load_patterns(args: &Args) -> EngineResult<PatternLibrary> {
  match &args.pattern_file {
    Some(path) => {
      let grids: Vec<Pattern> = bitcode::decode(&fs::read(path)?)?;
      PatternLibrary::new(grids)
    }
    None => Ok(PatternLibrary::default()),
  }
}

fn run(args: &Args) -> EngineResult<GenerationResult> {
  let generator = Generator::new(
    load_bank(args)?,
    load_patterns(args)?,
    GeneratorConfig {
      attempt_budget: args.attempt_budget,
    },
  );
  let outcome = generator.generate(GenerateParams {
    seed: args.seed,
    difficulty: args.difficulty.into(),
  });
  Ok(adapter::to_game_result(outcome, args.puzzle_id.as_deref()))
}

fn main() -> EngineResult {
  env_logger::init();
  let args = Args::parse();

  // Asset problems surface as the same failure payload as an unfillable
  // corpus; generation never crashes the caller.
  let result = match run(&args) {
    Ok(result) => result,
    Err(err) => adapter::failure_result(&*err, Duration::ZERO),
  };
  println!("{}", serde_json::to_string_pretty(&result)?);
  Ok(())
}
