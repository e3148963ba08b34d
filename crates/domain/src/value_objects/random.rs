//! Injected randomness.
//!
//! The domain never owns a generator. Every operation that needs a draw takes
//! a `RandomSource`, and any `FnMut(min, max) -> i32` closure is one, so the
//! engine can hand over `|min, max| random.gen_range(min, max)` and tests can
//! hand over a seeded or scripted closure.

/// A source of uniform integer draws.
pub trait RandomSource {
    /// Uniform integer in `[min, max]`, both ends inclusive. Callers guarantee `min <= max`.
    fn gen_range(&mut self, min: i32, max: i32) -> i32;

    /// Range roll that tolerates an empty or inverted range by returning `min`.
    fn roll_between(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.gen_range(min, max)
    }

    /// Percentile roll, 1-100.
    fn roll_d100(&mut self) -> i32 {
        self.gen_range(1, 100)
    }

    /// Uniform index into a collection of `len` items.
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let upper = i32::try_from(len - 1).unwrap_or(i32::MAX);
        let index = self.roll_between(0, upper);
        usize::try_from(index).ok().filter(|i| *i < len)
    }

    /// Uniform pick from a slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        self.choose_index(items.len()).and_then(|i| items.get(i))
    }
}

impl<F> RandomSource for F
where
    F: FnMut(i32, i32) -> i32,
{
    fn gen_range(&mut self, min: i32, max: i32) -> i32 {
        self(min, max)
    }
}

/// Deterministic sources for tests.
#[cfg(test)]
pub(crate) mod testing {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Reproducible stream from a seed.
    pub fn seeded(seed: u64) -> impl FnMut(i32, i32) -> i32 {
        let mut rng = StdRng::seed_from_u64(seed);
        move |min, max| rng.gen_range(min..=max)
    }

    /// Replays `values` in order, clamped into each requested range.
    /// Once exhausted every draw returns the low end of the range.
    pub fn scripted(values: Vec<i32>) -> impl FnMut(i32, i32) -> i32 {
        let mut values = values.into_iter();
        move |min, max| match values.next() {
            Some(v) => v.clamp(min, max),
            None => min,
        }
    }

    /// Always the highest face.
    pub fn highest() -> impl FnMut(i32, i32) -> i32 {
        |_, max| max
    }

    /// Always the lowest face.
    pub fn lowest() -> impl FnMut(i32, i32) -> i32 {
        |min, _| min
    }
}
