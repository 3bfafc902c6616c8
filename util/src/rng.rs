/// Deterministic seeded generator (mulberry32 core). The whole output
/// sequence, shuffles included, is a pure function of the seed and uses only
/// wrapping integer arithmetic, so results are identical across platforms.
#[derive(Clone, Debug)]
pub struct SeededRng {
  state: u32,
}

impl SeededRng {
  pub fn new(seed: u64) -> Self {
    Self {
      state: (seed as u32) ^ ((seed >> 32) as u32),
    }
  }

  pub fn next_u32(&mut self) -> u32 {
    self.state = self.state.wrapping_add(0x6D2B_79F5);
    let mut z = self.state;
    z = (z ^ (z >> 15)).wrapping_mul(z | 1);
    z ^= z.wrapping_add((z ^ (z >> 7)).wrapping_mul(z | 61));
    z ^ (z >> 14)
  }

  /// Uniform float in `[0, 1)`.
  pub fn next_f64(&mut self) -> f64 {
    f64::from(self.next_u32()) / 4_294_967_296.0
  }

  /// Fisher-Yates shuffle. The swap index is
  /// `(next_u32 * (i + 1)) >> 32`, the exact integer form of
  /// `floor(next_f64() * (i + 1))`.
  pub fn shuffle<T>(&mut self, items: &mut [T]) {
    for i in (1..items.len()).rev() {
      let j = ((u64::from(self.next_u32()) * (i as u64 + 1)) >> 32) as usize;
      items.swap(i, j);
    }
  }
}
