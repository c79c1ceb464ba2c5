//! Weighted category selection.
//!
//! A draw is an integer in `[1, total]`. Each entry owns the half-open band
//! `(previous cumulative, cumulative]`, so weights `6, 2, 1, 1` reproduce the
//! ladder `<= 6`, `<= 8`, `<= 9`, otherwise.

use crate::error::{LogGenError, Result};
use crate::simulation::types::Category;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<(u32, T)>,
    total: u32,
}

impl<T: Copy> WeightedTable<T> {
    pub fn new(entries: Vec<(u32, T)>) -> Result<Self> {
        let total = entries
            .iter()
            .try_fold(0u32, |acc, (w, _)| acc.checked_add(*w))
            .ok_or_else(|| LogGenError::config("total weight overflows u32"))?;
        if total == 0 {
            return Err(LogGenError::EmptyTable);
        }
        Ok(Self { entries, total })
    }

    /// Map a draw in `[1, total]` to its item. Out-of-range draws clamp to the ends.
    pub fn pick(&self, draw: u32) -> T {
        let draw = draw.clamp(1, self.total);
        let mut cumulative = 0;
        for (weight, item) in &self.entries {
            cumulative += weight;
            if draw <= cumulative {
                return *item;
            }
        }
        // total > 0 guarantees the loop returned
        self.entries[self.entries.len() - 1].1
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> T {
        self.pick(rng.random_range(1..=self.total))
    }
}

impl Category {
    /// 60% activity, 20% warning, 10% error, 10% debug.
    pub fn default_table() -> Result<WeightedTable<Category>> {
        WeightedTable::new(vec![
            (6, Category::Activity),
            (2, Category::Warning),
            (1, Category::Error),
            (1, Category::Debug),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_threshold_boundaries() {
        let table = Category::default_table().unwrap();
        let picked: Vec<Category> = (1..=10).map(|d| table.pick(d)).collect();

        assert!(picked[..6].iter().all(|c| *c == Category::Activity));
        assert_eq!(picked[6], Category::Warning); // 7
        assert_eq!(picked[7], Category::Warning); // 8
        assert_eq!(picked[8], Category::Error); // 9
        assert_eq!(picked[9], Category::Debug); // 10
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(
            WeightedTable::<Category>::new(vec![]),
            Err(LogGenError::EmptyTable)
        ));
        assert!(WeightedTable::new(vec![(0, Category::Debug)]).is_err());
    }

    #[test]
    fn test_weight_overflow_rejected() {
        let result = WeightedTable::new(vec![(u32::MAX, Category::Activity), (1, Category::Debug)]);
        assert!(matches!(result, Err(LogGenError::Config { .. })));
    }

    #[test]
    fn test_zero_weight_entry_never_picked() {
        let table = WeightedTable::new(vec![
            (1, Category::Activity),
            (0, Category::Warning),
            (1, Category::Debug),
        ])
        .unwrap();

        assert_eq!(table.pick(1), Category::Activity);
        assert_eq!(table.pick(2), Category::Debug);
    }

    #[test]
    fn test_distribution_chi_square() {
        let table = Category::default_table().unwrap();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let n = 10_000u32;

        let mut observed = [0u32; 4];
        for _ in 0..n {
            let drawn = table.sample(&mut rng);
            let idx = Category::ALL.iter().position(|c| *c == drawn).unwrap();
            observed[idx] += 1;
        }

        let expected = [0.6, 0.2, 0.1, 0.1].map(|p| p * n as f64);
        let chi_square: f64 = observed
            .iter()
            .zip(expected.iter())
            .map(|(&o, &e)| (o as f64 - e).powi(2) / e)
            .sum();

        // 3 degrees of freedom, p = 0.001
        assert!(
            chi_square < 16.27,
            "chi-square {chi_square:.2} too high for {observed:?}"
        );
    }
}
