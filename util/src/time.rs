use std::time::{Duration, Instant};

pub fn time_fn<F: FnOnce() -> T, T>(f: F) -> (Duration, T) {
  let start = Instant::now();
  let result = f();
  (start.elapsed(), result)
}
