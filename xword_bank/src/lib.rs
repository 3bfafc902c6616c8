use std::{borrow::Borrow, collections::BTreeMap};

use bitcode::{Decode, Encode};
use itertools::Itertools;
use util::rng::SeededRng;

/// One clue/answer pair. Answers are stored uppercase.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct BankEntry {
  pub answer: String,
  pub clue: String,
}

impl BankEntry {
  /// Uppercases the answer and rejects entries unusable as crossword fill:
  /// answers shorter than two letters or containing whitespace, hyphens, or
  /// apostrophes.
  fn normalized(answer: &str, clue: &str) -> Option<Self> {
    if answer.chars().count() < 2
      || answer
        .chars()
        .any(|c| c.is_whitespace() || c == '-' || c == '\'')
    {
      return None;
    }

    Some(Self {
      answer: answer.to_uppercase(),
      clue: clue.to_owned(),
    })
  }

  pub fn len(&self) -> u32 {
    self.answer.chars().count() as u32
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.answer.is_empty()
  }
}

/// The indexed clue corpus: surviving entries grouped by answer length.
/// Built once, read-only afterward; safe to share across threads. Each solve
/// attempt takes its own shuffled view via [`WordBank::candidates_for_attempt`].
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct WordBank {
  by_length: BTreeMap<u32, Vec<BankEntry>>,
}

/// A per-attempt candidate view: each bucket independently shuffled, entries
/// borrowed from the shared bank.
pub type CandidateIndex<'a> = BTreeMap<u32, Vec<&'a BankEntry>>;

impl WordBank {
  /// Normalizes, filters, and deduplicates (first occurrence of an answer
  /// wins), then groups by answer length. Malformed entries are dropped
  /// silently; they are corpus noise, not an error.
  pub fn from_entries<A, C>(entries: impl IntoIterator<Item = (A, C)>) -> Self
  where
    A: AsRef<str>,
    C: AsRef<str>,
  {
    let by_length = entries
      .into_iter()
      .filter_map(|(answer, clue)| BankEntry::normalized(answer.as_ref(), clue.as_ref()))
      .unique_by(|entry| entry.answer.clone())
      .fold(BTreeMap::<_, Vec<_>>::new(), |mut by_length, entry| {
        by_length.entry(entry.len()).or_default().push(entry);
        by_length
      });
    Self { by_length }
  }

  /// Parses `answer<TAB>clue` lines. Lines without a tab are skipped.
  pub fn from_tsv_lines<S>(lines: impl IntoIterator<Item = S>) -> Self
  where
    S: Borrow<String>,
  {
    Self::from_entries(
      lines
        .into_iter()
        .filter_map(|line| {
          let line = line.borrow();
          line
            .split_once('\t')
            .map(|(answer, clue)| (answer.trim().to_owned(), clue.trim().to_owned()))
        })
        .collect::<Vec<_>>(),
    )
  }

  pub fn num_entries(&self) -> usize {
    self.by_length.values().map(Vec::len).sum()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.by_length.is_empty()
  }

  /// Number of candidates of exactly `length`. Zero means any slot of that
  /// length is immediately infeasible.
  pub fn bucket_size(&self, length: u32) -> usize {
    self.by_length.get(&length).map_or(0, Vec::len)
  }

  pub fn entries_with_length(&self, length: u32) -> impl Iterator<Item = &BankEntry> {
    self.by_length.get(&length).into_iter().flatten()
  }

  /// A fresh candidate view for one solve attempt: every bucket copied and
  /// shuffled with the caller's generator. Buckets are visited in ascending
  /// length order so a given seed always consumes the generator identically.
  pub fn candidates_for_attempt(&self, rng: &mut SeededRng) -> CandidateIndex<'_> {
    self
      .by_length
      .iter()
      .map(|(&length, bucket)| {
        let mut bucket: Vec<_> = bucket.iter().collect();
        rng.shuffle(&mut bucket);
        (length, bucket)
      })
      .collect()
  }
}
