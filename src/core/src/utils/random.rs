use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Uniform random source threaded through every stochastic operation.
///
/// Only [`RandomSource::next_f64`] must be provided; every helper is derived
/// from it, so a scripted source replays exactly the same decisions.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[min, max]`, both inclusive.
    fn int_in(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }

        let span = (max as i64 - min as i64 + 1) as f64;
        let value = (self.next_f64() * span).floor() as i64 + min as i64;

        value.min(max as i64) as i32
    }

    /// Percentile roll in `[0, 100)`.
    fn roll(&mut self) -> u32 {
        self.int_in(0, 99) as u32
    }

    fn coin(&mut self) -> bool {
        self.next_f64() < 0.5
    }

    /// Uniform draw in `[1, bound]`; an empty bound always draws 0.
    fn draw(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }

        self.int_in(1, bound.min(i32::MAX as u32) as i32) as u32
    }

    /// Fisher-Yates shuffle.
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.int_in(0, i as i32) as usize;
            items.swap(i, j);
        }
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }

        let index = self.int_in(0, items.len() as i32 - 1) as usize;
        items.get(index)
    }

    /// `amount` distinct indices of `0..len`, without replacement.
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize>
    where
        Self: Sized,
    {
        let mut indices: Vec<usize> = (0..len).collect();
        let amount = amount.min(len);

        for i in 0..amount {
            let j = self.int_in(i as i32, len as i32 - 1) as usize;
            indices.swap(i, j);
        }

        indices.truncate(amount);
        indices
    }

    /// Independent generator seeded from this source.
    fn fork(&mut self) -> SeededRandom {
        let high = (self.next_f64() * 4_294_967_296.0) as u64;
        let low = (self.next_f64() * 4_294_967_296.0) as u64;

        SeededRandom::new((high << 32) | low)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        SeededRandom {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        ThreadRandom { rng: rand::rng() }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed script of values, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct FixedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        FixedRandom { values, cursor: 0 }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for FixedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }

        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;

        value.clamp(0.0, 0.999_999_999)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_in_maps_unit_interval_onto_inclusive_range() {
        assert_eq!(FixedRandom::constant(0.0).int_in(1, 6), 1);
        assert_eq!(FixedRandom::constant(0.999).int_in(1, 6), 6);
        assert_eq!(FixedRandom::constant(0.5).int_in(0, 9), 5);
        assert_eq!(FixedRandom::constant(0.5).int_in(7, 7), 7);
        assert_eq!(FixedRandom::constant(0.5).int_in(9, 3), 9);
    }

    #[test]
    fn roll_of_point_four_is_forty() {
        assert_eq!(FixedRandom::constant(0.4).roll(), 40);
    }

    #[test]
    fn draw_on_empty_bound_is_zero() {
        let mut rng = SeededRandom::new(7);
        assert_eq!(rng.draw(0), 0);

        for _ in 0..100 {
            let value = rng.draw(12);
            assert!((1..=12).contains(&value));
        }
    }

    #[test]
    fn shuffle_keeps_every_element() {
        let mut rng = SeededRandom::new(42);
        let mut items: Vec<u32> = (0..20).collect();

        rng.shuffle(&mut items);

        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<u32>>());
    }

    #[test]
    fn sample_indices_are_distinct_and_capped() {
        let mut rng = SeededRandom::new(3);

        let sample = rng.sample_indices(5, 10);
        assert_eq!(sample.len(), 5);

        let mut sorted = sample.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 5);
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let mut first = SeededRandom::new(99);
        let mut second = SeededRandom::new(99);

        for _ in 0..10 {
            assert_eq!(first.roll(), second.roll());
        }
    }

    #[test]
    fn pick_on_empty_slice_is_none() {
        let mut rng = SeededRandom::new(1);
        let empty: [u32; 0] = [];
        assert!(rng.pick(&empty).is_none());
    }
}
