use bingo_data::models::{Draw, MAX_NUMBER};

use super::PoolStrategy;

/// All 80 numbers, longest absent first.
pub struct IceBreakStrategy;

/// Index of the most recent draw containing `number`, or `draws.len()`.
pub fn gap(draws: &[Draw], number: u8) -> usize {
    draws
        .iter()
        .position(|d| d.contains(number))
        .unwrap_or(draws.len())
}

impl PoolStrategy for IceBreakStrategy {
    fn code(&self) -> &str {
        "N5"
    }

    fn name(&self) -> &str {
        "Ice break"
    }

    fn build(&self, draws: &[Draw]) -> Vec<u8> {
        let mut gaps: Vec<(u8, usize)> = (1..=MAX_NUMBER).map(|n| (n, gap(draws, n))).collect();
        gaps.sort_by(|a, b| b.1.cmp(&a.1));
        gaps.into_iter().map(|(n, _)| n).collect()
    }
}
