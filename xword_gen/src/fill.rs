use std::collections::HashSet;

use log::trace;
use util::{grid::Grid, pos::Pos};
use xword_bank::{BankEntry, CandidateIndex};

use crate::{pattern::Pattern, slot::Slot};

/// A slot with its committed answer. Mutable only inside the search; frozen
/// once the solve completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilledSlot {
  pub slot: Slot,
  pub entry: BankEntry,
}

/// Backtracking fill of `slots` from pre-shuffled `candidates`.
///
/// Slots are ordered most-constrained-first (smallest candidate bucket);
/// within a slot, candidates are tried in the order the per-attempt shuffle
/// left them. Returns `None` when any slot length has no candidates at all,
/// or when the search exceeds `attempt_budget` candidate expansions. Never
/// errors: an unfillable pattern is an expected outcome, not a fault.
pub fn fill(
  pattern: &Pattern,
  slots: &[Slot],
  candidates: &CandidateIndex<'_>,
  attempt_budget: u32,
) -> Option<Vec<FilledSlot>> {
  let bucket_size =
    |slot: &Slot| candidates.get(&slot.length).map_or(0, |bucket| bucket.len());

  if let Some(slot) = slots.iter().find(|slot| bucket_size(slot) == 0) {
    trace!("No candidates of length {}, pattern infeasible", slot.length);
    return None;
  }

  // MRV order. The sort is stable, so ties keep the extraction order and a
  // fixed seed reproduces the same search.
  let mut order = slots.to_vec();
  order.sort_by_key(bucket_size);

  let mut search = Search {
    grid: Grid::new(pattern.width(), pattern.height()),
    candidates,
    used: HashSet::new(),
    placed: Vec::with_capacity(order.len()),
    attempts: 0,
    budget: attempt_budget,
  };
  search.solve(&order, 0).then(|| {
    order
      .iter()
      .zip(search.placed)
      .map(|(&slot, entry)| FilledSlot {
        slot,
        entry: entry.clone(),
      })
      .collect()
  })
}

struct Search<'a, 'b> {
  grid: Grid<Option<char>>,
  candidates: &'b CandidateIndex<'a>,
  used: HashSet<&'a str>,
  placed: Vec<&'a BankEntry>,
  attempts: u32,
  budget: u32,
}

impl<'a> Search<'a, '_> {
  fn solve(&mut self, order: &[Slot], depth: usize) -> bool {
    let Some(&slot) = order.get(depth) else {
      return true;
    };
    let Some(bucket) = self.candidates.get(&slot.length) else {
      return false;
    };

    for &entry in bucket {
      if self.attempts >= self.budget {
        // Out of budget: abandon the entire search, not just this branch.
        return false;
      }
      self.attempts += 1;

      if self.used.contains(entry.answer.as_str()) || !self.fits(slot, &entry.answer) {
        continue;
      }

      let undo = self.place(slot, entry);
      if self.solve(order, depth + 1) {
        return true;
      }
      self.unplace(entry, undo);
    }

    false
  }

  /// A candidate fits when every cell it would occupy is either unset or
  /// already holds the same letter. Rejection leaves the grid untouched.
  fn fits(&self, slot: Slot, word: &str) -> bool {
    slot
      .cells()
      .zip(word.chars())
      .all(|(pos, c)| match self.grid.get(pos) {
        Some(Some(existing)) => *existing == c,
        Some(None) => true,
        None => false,
      })
  }

  fn place(&mut self, slot: Slot, entry: &'a BankEntry) -> Vec<(Pos, Option<char>)> {
    let mut undo = Vec::with_capacity(slot.length as usize);
    for (pos, c) in slot.cells().zip(entry.answer.chars()) {
      if let Some(cell) = self.grid.get_mut(pos) {
        undo.push((pos, *cell));
        *cell = Some(c);
      }
    }
    self.used.insert(entry.answer.as_str());
    self.placed.push(entry);
    undo
  }

  fn unplace(&mut self, entry: &'a BankEntry, undo: Vec<(Pos, Option<char>)>) {
    // Restore exactly the cells this placement touched. A still-placed
    // crossing word may share some of them, so blind clearing would corrupt
    // the grid.
    for (pos, prev) in undo.into_iter().rev() {
      if let Some(cell) = self.grid.get_mut(pos) {
        *cell = prev;
      }
    }
    self.used.remove(entry.answer.as_str());
    self.placed.pop();
  }
}
