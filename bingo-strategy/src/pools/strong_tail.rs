use bingo_data::models::Draw;

use super::{PoolStrategy, SHORT_WINDOW, tally};

/// Numbers of the last five draws whose last digit is among the tails seen there.
pub struct StrongTailStrategy;

impl PoolStrategy for StrongTailStrategy {
    fn code(&self) -> &str {
        "N8"
    }

    fn name(&self) -> &str {
        "Strong tail"
    }

    fn build(&self, draws: &[Draw]) -> Vec<u8> {
        let window = &draws[..SHORT_WINDOW.min(draws.len())];

        let mut tails = [false; 10];
        for draw in window {
            for &n in &draw.numbers {
                tails[(n % 10) as usize] = true;
            }
        }

        tally(window)
            .into_iter()
            .map(|(n, _)| n)
            .filter(|n| tails[(n % 10) as usize])
            .collect()
    }
}
