use bitcode::{Decode, Encode};
use util::{
  error::{EngineError, EngineResult},
  grid::Grid,
  pos::Pos,
};

/// A blocked/open grid template. `true` cells are fillable. Patterns are
/// immutable once constructed; the solver writes letters into its own buffer,
/// never into the pattern.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct Pattern {
  grid: Grid<bool>,
}

impl Pattern {
  /// Parses a layout string, one row per line: `_` is open, `X` is blocked.
  /// Leading/trailing whitespace per line is ignored.
  pub fn from_layout(layout: &str) -> EngineResult<Self> {
    let (width, height, cells) = layout.lines().try_fold(
      (None, 0u32, vec![]),
      |(width, height, mut cells), line| -> EngineResult<_> {
        let line = line.trim();
        cells.extend(
          line
            .chars()
            .map(|c| match c {
              '_' => Ok(true),
              'X' => Ok(false),
              _ => Err(EngineError::Parse(format!("Unrecognized layout character '{c}'")).into()),
            })
            .collect::<EngineResult<Vec<_>>>()?,
        );
        if let Some(width) = width {
          if line.len() != width {
            return Err(
              EngineError::Parse(format!(
                "Layout line lengths differ: {} vs {width}",
                line.len()
              ))
              .into(),
            );
          }
        }

        Ok((Some(line.len()), height + 1, cells))
      },
    )?;

    let width = width.ok_or_else(|| EngineError::Parse("Empty layout string".to_owned()))? as u32;
    Ok(Self {
      grid: Grid::from_vec(cells, width, height)?,
    })
  }

  pub fn from_grid(grid: Grid<bool>) -> Self {
    Self { grid }
  }

  pub fn width(&self) -> u32 {
    self.grid.width()
  }

  pub fn height(&self) -> u32 {
    self.grid.height()
  }

  pub fn is_open(&self, pos: Pos) -> bool {
    self.grid.get(pos).is_some_and(|&open| open)
  }

  pub fn open_positions(&self) -> impl Iterator<Item = Pos> + '_ {
    self.grid.positions().filter(|&pos| self.is_open(pos))
  }
}

/// A fixed set of same-size square templates, consumed read-only by the
/// generator. The trial order over this set is reshuffled per seed.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct PatternLibrary {
  patterns: Vec<Pattern>,
}

impl PatternLibrary {
  pub fn new(patterns: Vec<Pattern>) -> EngineResult<Self> {
    let Some(first) = patterns.first() else {
      return Err(EngineError::Parse("Empty pattern library".to_owned()).into());
    };
    if first.width() != first.height() {
      return Err(
        EngineError::Parse(format!(
          "Patterns must be square, got {}x{}",
          first.width(),
          first.height()
        ))
        .into(),
      );
    }
    if let Some(pattern) = patterns
      .iter()
      .find(|p| p.width() != first.width() || p.height() != first.height())
    {
      return Err(
        EngineError::Parse(format!(
          "Pattern sizes differ: {}x{} vs {}x{}",
          pattern.width(),
          pattern.height(),
          first.width(),
          first.height()
        ))
        .into(),
      );
    }

    Ok(Self { patterns })
  }

  pub fn from_layouts<'a>(layouts: impl IntoIterator<Item = &'a str>) -> EngineResult<Self> {
    Self::new(
      layouts
        .into_iter()
        .map(Pattern::from_layout)
        .collect::<EngineResult<Vec<_>>>()?,
    )
  }

  /// Edge length shared by every pattern in the library.
  pub fn size(&self) -> u32 {
    self.patterns.first().map_or(0, Pattern::width)
  }

  pub fn len(&self) -> usize {
    self.patterns.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.patterns.is_empty()
  }

  pub fn get(&self, idx: usize) -> Option<&Pattern> {
    self.patterns.get(idx)
  }
}

impl Default for PatternLibrary {
  /// Built-in 9x9 templates. Every open cell lies on at least one run of two
  /// or more open cells, so a solved grid covers all of them.
  #[allow(clippy::unwrap_used)]
  fn default() -> Self {
    Self::from_layouts([
      "_________
       ____X____
       _________
       ____X____
       _________
       ____X____
       _________
       ____X____
       _________",
      "XX_____XX
       X_______X
       _________
       _________
       _________
       _________
       _________
       X_______X
       XX_____XX",
      "___X_X___
       _________
       _________
       X_______X
       _________
       X_______X
       _________
       _________
       ___X_X___",
    ])
    .unwrap()
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use util::pos::Pos;

  use super::{Pattern, PatternLibrary};

  #[gtest]
  fn test_empty_layout() {
    expect_that!(Pattern::from_layout(""), err(anything()));
  }

  #[gtest]
  fn test_ragged_layout() {
    expect_that!(
      Pattern::from_layout(
        "___
         __"
      ),
      err(anything())
    );
  }

  #[gtest]
  fn test_unknown_character() {
    expect_that!(Pattern::from_layout("_#_"), err(anything()));
  }

  #[gtest]
  fn test_open_and_blocked_cells() {
    let pattern = Pattern::from_layout(
      "__
       X_",
    )
    .unwrap();
    expect_true!(pattern.is_open(Pos { x: 0, y: 0 }));
    expect_true!(pattern.is_open(Pos { x: 1, y: 0 }));
    expect_false!(pattern.is_open(Pos { x: 0, y: 1 }));
    expect_true!(pattern.is_open(Pos { x: 1, y: 1 }));
    expect_false!(pattern.is_open(Pos { x: 2, y: 0 }));
  }

  #[gtest]
  fn test_library_rejects_mixed_sizes() {
    expect_that!(
      PatternLibrary::from_layouts([
        "__
         __",
        "___
         ___
         ___",
      ]),
      err(anything())
    );
  }

  #[gtest]
  fn test_library_rejects_non_square() {
    expect_that!(
      PatternLibrary::from_layouts([
        "___
         ___"
      ]),
      err(anything())
    );
  }

  #[gtest]
  fn test_default_library() {
    let library = PatternLibrary::default();
    expect_that!(library.len(), eq(3));
    expect_that!(library.size(), eq(9));
  }
}
