use bingo_data::models::Draw;

use super::{LONG_WINDOW, PoolStrategy, tally};

/// Numbers seen two or three times in the last ten draws.
pub struct WarmStrategy;

impl PoolStrategy for WarmStrategy {
    fn code(&self) -> &str {
        "N1"
    }

    fn name(&self) -> &str {
        "Warm"
    }

    fn build(&self, draws: &[Draw]) -> Vec<u8> {
        let window = &draws[..LONG_WINDOW.min(draws.len())];
        tally(window)
            .into_iter()
            .filter(|&(_, c)| (2..=3).contains(&c))
            .map(|(n, _)| n)
            .collect()
    }
}
