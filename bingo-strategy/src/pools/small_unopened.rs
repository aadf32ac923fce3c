use bingo_data::models::Draw;

use super::{PoolStrategy, recent_pair};

/// Numbers 1-10 missing from the last two draws.
pub struct SmallUnopenedStrategy;

impl PoolStrategy for SmallUnopenedStrategy {
    fn code(&self) -> &str {
        "N6"
    }

    fn name(&self) -> &str {
        "Small unopened"
    }

    fn build(&self, draws: &[Draw]) -> Vec<u8> {
        let recent = recent_pair(draws);
        (1..=10).filter(|n| !recent.contains(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_unopened() {
        let draws = vec![
            Draw::new("0", vec![1, 5, 44]),
            Draw::new("1", vec![10, 2]),
            Draw::new("2", vec![3, 4]),
        ];
        assert_eq!(SmallUnopenedStrategy.build(&draws), vec![3, 4, 6, 7, 8, 9]);
    }
}
