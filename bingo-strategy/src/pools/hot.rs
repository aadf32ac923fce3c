use bingo_data::models::Draw;

use super::{PoolStrategy, SHORT_WINDOW, most_common, tally};

/// Most frequent numbers of the last five draws.
pub struct HotStrategy;

impl PoolStrategy for HotStrategy {
    fn code(&self) -> &str {
        "N7"
    }

    fn name(&self) -> &str {
        "Hot 5"
    }

    fn build(&self, draws: &[Draw]) -> Vec<u8> {
        let window = &draws[..SHORT_WINDOW.min(draws.len())];
        most_common(tally(window))
    }
}
