use std::fmt::Display;

use serde::Serialize;
use util::pos::{Diff, Pos};

use crate::pattern::Pattern;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  Across,
  Down,
}

impl Direction {
  pub fn step(self) -> Diff {
    match self {
      Direction::Across => Diff { x: 1, y: 0 },
      Direction::Down => Diff { x: 0, y: 1 },
    }
  }
}

impl Display for Direction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Direction::Across => write!(f, "across"),
      Direction::Down => write!(f, "down"),
    }
  }
}

/// A maximal run of two or more consecutive open cells in one direction;
/// holds exactly one answer word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
  pub pos: Pos,
  pub direction: Direction,
  pub length: u32,
}

impl Slot {
  pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
    (0..self.length as i32).map(move |i| self.pos + self.direction.step() * i)
  }
}

/// Derives the slot list for one pattern: across runs row by row first, then
/// down runs column by column. The order is stable, which the MRV sort (and
/// thus seed reproducibility) depends on.
pub fn extract_slots(pattern: &Pattern) -> Vec<Slot> {
  let mut slots = Vec::new();

  for y in 0..pattern.height() as i32 {
    let mut run_start = None;
    for x in 0..=pattern.width() as i32 {
      let pos = Pos { x, y };
      match (pattern.is_open(pos), run_start) {
        (true, None) => run_start = Some(pos),
        (false, Some(start)) => {
          push_run(&mut slots, start, Direction::Across, pos.x - start.x);
          run_start = None;
        }
        _ => {}
      }
    }
  }

  for x in 0..pattern.width() as i32 {
    let mut run_start = None;
    for y in 0..=pattern.height() as i32 {
      let pos = Pos { x, y };
      match (pattern.is_open(pos), run_start) {
        (true, None) => run_start = Some(pos),
        (false, Some(start)) => {
          push_run(&mut slots, start, Direction::Down, pos.y - start.y);
          run_start = None;
        }
        _ => {}
      }
    }
  }

  slots
}

fn push_run(slots: &mut Vec<Slot>, pos: Pos, direction: Direction, length: i32) {
  if length >= 2 {
    slots.push(Slot {
      pos,
      direction,
      length: length as u32,
    });
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use util::pos::Pos;

  use super::{extract_slots, Direction, Slot};
  use crate::pattern::Pattern;

  #[gtest]
  fn test_simple_pattern() {
    let pattern = Pattern::from_layout(
      "__
       X_",
    )
    .unwrap();
    expect_that!(
      extract_slots(&pattern),
      container_eq([
        Slot {
          pos: Pos::zero(),
          direction: Direction::Across,
          length: 2
        },
        Slot {
          pos: Pos { x: 1, y: 0 },
          direction: Direction::Down,
          length: 2
        },
      ])
    );
  }

  #[gtest]
  fn test_no_single_cell_slots() {
    // Open cells split by blocks: no run reaches length 2.
    let pattern = Pattern::from_layout(
      "_X_
       XXX
       _X_",
    )
    .unwrap();
    expect_that!(extract_slots(&pattern), empty());
  }

  #[gtest]
  fn test_runs_split_by_blocks() {
    let pattern = Pattern::from_layout(
      "__X__
       XXXXX
       _____",
    )
    .unwrap();
    let across: Vec<_> = extract_slots(&pattern)
      .into_iter()
      .filter(|slot| slot.direction == Direction::Across)
      .collect();
    expect_that!(
      across,
      container_eq([
        Slot {
          pos: Pos::zero(),
          direction: Direction::Across,
          length: 2
        },
        Slot {
          pos: Pos { x: 3, y: 0 },
          direction: Direction::Across,
          length: 2
        },
        Slot {
          pos: Pos { x: 0, y: 2 },
          direction: Direction::Across,
          length: 5
        },
      ])
    );
  }

  #[gtest]
  fn test_order_row_major_then_column_major() {
    let pattern = Pattern::from_layout(
      "___
       ___
       ___",
    )
    .unwrap();
    let slots = extract_slots(&pattern);
    let directions: Vec<_> = slots.iter().map(|slot| slot.direction).collect();
    expect_that!(
      directions,
      container_eq([
        Direction::Across,
        Direction::Across,
        Direction::Across,
        Direction::Down,
        Direction::Down,
        Direction::Down,
      ])
    );
    let starts: Vec<_> = slots.iter().map(|slot| slot.pos).collect();
    expect_that!(
      starts,
      container_eq([
        Pos::zero(),
        Pos { x: 0, y: 1 },
        Pos { x: 0, y: 2 },
        Pos::zero(),
        Pos { x: 1, y: 0 },
        Pos { x: 2, y: 0 },
      ])
    );
  }

  #[gtest]
  fn test_slot_cells() {
    let slot = Slot {
      pos: Pos { x: 2, y: 1 },
      direction: Direction::Down,
      length: 3,
    };
    expect_that!(
      slot.cells().collect::<Vec<_>>(),
      container_eq([Pos { x: 2, y: 1 }, Pos { x: 2, y: 2 }, Pos { x: 2, y: 3 }])
    );
  }
}
