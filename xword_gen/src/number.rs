use std::collections::HashMap;

use itertools::Itertools;
use serde::Serialize;

use crate::{fill::FilledSlot, slot::Direction};

/// A numbered, clue-bearing answer in its final grid position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
  pub id: String,
  pub direction: Direction,
  pub start_row: u32,
  pub start_col: u32,
  pub answer: String,
  pub clue: String,
  pub num: u32,
}

/// Assigns clue numbers in standard crossword order: scan solved slots
/// top-to-bottom, left-to-right; the first slot starting at a cell takes the
/// next number, and a slot sharing that start cell (its crossing partner)
/// reuses it.
pub fn number_slots(filled: Vec<FilledSlot>) -> Vec<Word> {
  let mut numbers: HashMap<(i32, i32), u32> = HashMap::new();
  let mut next = 1;

  filled
    .into_iter()
    .sorted_by_key(|fs| {
      (
        fs.slot.pos.y,
        fs.slot.pos.x,
        fs.slot.direction == Direction::Down,
      )
    })
    .map(|fs| {
      let num = *numbers
        .entry((fs.slot.pos.y, fs.slot.pos.x))
        .or_insert_with(|| {
          let n = next;
          next += 1;
          n
        });
      Word {
        id: format!("{}_{num}", fs.slot.direction),
        direction: fs.slot.direction,
        start_row: fs.slot.pos.y as u32,
        start_col: fs.slot.pos.x as u32,
        answer: fs.entry.answer,
        clue: fs.entry.clue,
        num,
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use util::pos::Pos;
  use xword_bank::BankEntry;

  use super::number_slots;
  use crate::{
    fill::FilledSlot,
    slot::{Direction, Slot},
  };

  fn filled(pos: Pos, direction: Direction, answer: &str) -> FilledSlot {
    FilledSlot {
      slot: Slot {
        pos,
        direction,
        length: answer.chars().count() as u32,
      },
      entry: BankEntry {
        answer: answer.to_owned(),
        clue: format!("Clue for {answer}"),
      },
    }
  }

  #[gtest]
  fn test_shared_start_shares_number() {
    let words = number_slots(vec![
      filled(Pos::zero(), Direction::Down, "AC"),
      filled(Pos::zero(), Direction::Across, "AB"),
      filled(Pos { x: 1, y: 0 }, Direction::Down, "BD"),
      filled(Pos { x: 0, y: 1 }, Direction::Across, "CD"),
    ]);

    let ids: Vec<_> = words.iter().map(|w| w.id.as_str()).collect();
    expect_that!(
      ids,
      container_eq(["across_1", "down_1", "down_2", "across_3"])
    );
  }

  #[gtest]
  fn test_numbers_increase_by_one_in_scan_order() {
    let words = number_slots(vec![
      filled(Pos { x: 0, y: 2 }, Direction::Across, "KLM"),
      filled(Pos { x: 2, y: 0 }, Direction::Down, "XYZ"),
      filled(Pos::zero(), Direction::Across, "ABC"),
    ]);

    expect_that!(
      words.iter().map(|w| w.num).collect::<Vec<_>>(),
      container_eq([1, 2, 3])
    );
    expect_that!(words[0].answer.as_str(), eq("ABC"));
    expect_that!(words[1].answer.as_str(), eq("XYZ"));
    expect_that!(words[2].answer.as_str(), eq("KLM"));
  }

  #[gtest]
  fn test_word_fields() {
    let words = number_slots(vec![filled(Pos { x: 3, y: 1 }, Direction::Down, "MAPLE")]);
    let word = &words[0];
    expect_that!(word.id.as_str(), eq("down_1"));
    expect_that!(word.start_row, eq(1));
    expect_that!(word.start_col, eq(3));
    expect_that!(word.num, eq(1));
    expect_that!(word.clue.as_str(), eq("Clue for MAPLE"));
  }
}
