use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source owned by a single game. Seeding it makes food placement reproducible.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Uniform pick from `items`, `None` when the slice is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.random_range(0..items.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        let items: Vec<u32> = (0..100).collect();
        for _ in 0..20 {
            assert_eq!(a.pick(&items), b.pick(&items));
        }
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_pick_from_empty_slice_is_none() {
        let mut rng = SessionRng::new(1);
        let items: [u8; 0] = [];
        assert!(rng.pick(&items).is_none());
    }

    #[test]
    fn test_pick_from_single_item() {
        let mut rng = SessionRng::from_random();
        assert_eq!(rng.pick(&["only"]), Some(&"only"));
    }
}
