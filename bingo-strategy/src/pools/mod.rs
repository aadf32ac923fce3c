pub mod drag;
pub mod hot;
pub mod ice_break;
pub mod rebound;
pub mod small_unopened;
pub mod strong_tail;
pub mod warm;

use std::collections::HashSet;

use bingo_data::models::{DRAW_SIZE, Draw, MAX_NUMBER};

/// Fewest draws a pool can be built from.
pub const MIN_HISTORY: usize = 10;
pub const LONG_WINDOW: usize = 10;
pub const SHORT_WINDOW: usize = 5;

pub trait PoolStrategy: Send + Sync {
    fn code(&self) -> &str;
    fn name(&self) -> &str;
    /// draws[0] = most recent draw, at least MIN_HISTORY long.
    /// Returns candidates best first; may be empty.
    fn build(&self, draws: &[Draw]) -> Vec<u8>;
}

/// Fixed order; ties in the backtest ranking keep it.
pub fn all_strategies() -> Vec<Box<dyn PoolStrategy>> {
    vec![
        Box::new(warm::WarmStrategy),
        Box::new(rebound::ReboundStrategy),
        Box::new(drag::DragStrategy),
        Box::new(ice_break::IceBreakStrategy),
        Box::new(small_unopened::SmallUnopenedStrategy),
        Box::new(hot::HotStrategy),
        Box::new(strong_tail::StrongTailStrategy),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrategyPool {
    pub code: String,
    pub name: String,
    pub numbers: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct StrategyPools {
    pools: Vec<StrategyPool>,
}

impl StrategyPools {
    pub fn get(&self, code: &str) -> Option<&StrategyPool> {
        self.pools.iter().find(|p| p.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StrategyPool> {
        self.pools.iter()
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

/// Build every pool from `draws`, or `None` with fewer than MIN_HISTORY draws.
/// An empty pool falls back to 1..=80.
pub fn build_pools(draws: &[Draw]) -> Option<StrategyPools> {
    if draws.len() < MIN_HISTORY {
        return None;
    }

    let pools = all_strategies()
        .iter()
        .map(|strategy| {
            let mut numbers = strategy.build(draws);
            if numbers.is_empty() {
                numbers = all_numbers();
            }
            StrategyPool {
                code: strategy.code().to_string(),
                name: strategy.name().to_string(),
                numbers,
            }
        })
        .collect();

    Some(StrategyPools { pools })
}

pub fn all_numbers() -> Vec<u8> {
    (1..=MAX_NUMBER).collect()
}

/// Occurrence counts over `draws`, in first-encounter order.
pub fn tally(draws: &[Draw]) -> Vec<(u8, u32)> {
    let mut counts: Vec<(u8, u32)> = Vec::new();
    for draw in draws {
        for &n in &draw.numbers {
            match counts.iter_mut().find(|(m, _)| *m == n) {
                Some((_, c)) => *c += 1,
                None => counts.push((n, 1)),
            }
        }
    }
    counts
}

/// Numbers by count descending; equal counts keep their input order.
pub fn most_common(mut counts: Vec<(u8, u32)>) -> Vec<u8> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().map(|(n, _)| n).collect()
}

/// Union of the two most recent draws.
pub fn recent_pair(draws: &[Draw]) -> HashSet<u8> {
    draws
        .iter()
        .take(2)
        .flat_map(|d| d.numbers.iter().copied())
        .collect()
}

pub fn make_test_draws(n: usize) -> Vec<Draw> {
    (0..n)
        .map(|i| {
            let numbers = (0..DRAW_SIZE)
                .map(|j| ((i * 7 + j * 4) % MAX_NUMBER as usize) as u8 + 1)
                .collect();
            Draw::new(format!("113{:06}", 500 - i), numbers)
        })
        .collect()
}

/// Pads short hand-written test histories with draws of numbers 61..=80.
#[cfg(test)]
pub(crate) fn with_filler(mut draws: Vec<Draw>, total: usize) -> Vec<Draw> {
    while draws.len() < total {
        let i = draws.len();
        draws.push(Draw::new(format!("filler{i}"), (61..=80).collect()));
    }
    draws
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_pools_needs_history() {
        assert!(build_pools(&make_test_draws(9)).is_none());
        assert!(build_pools(&[]).is_none());
        let pools = build_pools(&make_test_draws(10)).unwrap();
        assert_eq!(pools.len(), 7);
    }

    #[test]
    fn test_pools_in_fixed_order() {
        let pools = build_pools(&make_test_draws(30)).unwrap();
        let codes: Vec<&str> = pools.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["N1", "N2", "N3", "N5", "N6", "N7", "N8"]);
    }

    #[test]
    fn test_pools_never_empty_and_in_range() {
        let pools = build_pools(&make_test_draws(30)).unwrap();
        for pool in pools.iter() {
            assert!(!pool.numbers.is_empty(), "{} is empty", pool.code);
            assert!(pool.numbers.iter().all(|&n| (1..=80).contains(&n)));
        }
    }

    #[test]
    fn test_empty_pool_falls_back_to_all_numbers() {
        // Every number of the recent pair is also in 1..=10, so N6 comes out empty.
        let small: Vec<u8> = (1..=10).chain(61..=70).collect();
        let draws = with_filler(vec![Draw::new("a", small.clone()), Draw::new("b", small)], 12);
        let pools = build_pools(&draws).unwrap();
        assert_eq!(pools.get("N6").unwrap().numbers, all_numbers());
    }

    #[test]
    fn test_tally_first_encounter_order() {
        let draws = vec![Draw::new("a", vec![5, 3]), Draw::new("b", vec![3, 9, 5, 3])];
        assert_eq!(tally(&draws), vec![(5, 2), (3, 3), (9, 1)]);
    }

    #[test]
    fn test_most_common_stable() {
        let counts = vec![(5, 2), (3, 3), (9, 2), (1, 1)];
        assert_eq!(most_common(counts), vec![3, 5, 9, 1]);
    }

    #[test]
    fn test_make_test_draws_valid() {
        for draw in make_test_draws(40) {
            assert!(bingo_data::models::validate_draw(&draw.numbers).is_ok());
            assert_eq!(draw.numbers.len(), DRAW_SIZE);
        }
    }
}
