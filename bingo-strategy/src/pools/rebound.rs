use bingo_data::models::Draw;

use super::{LONG_WINDOW, PoolStrategy, recent_pair, tally};

/// Numbers seen exactly twice in the last ten draws but absent from the last two.
pub struct ReboundStrategy;

impl PoolStrategy for ReboundStrategy {
    fn code(&self) -> &str {
        "N2"
    }

    fn name(&self) -> &str {
        "Rebound"
    }

    fn build(&self, draws: &[Draw]) -> Vec<u8> {
        let recent = recent_pair(draws);
        let window = &draws[..LONG_WINDOW.min(draws.len())];
        tally(window)
            .into_iter()
            .filter(|&(n, c)| c == 2 && !recent.contains(&n))
            .map(|(n, _)| n)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::with_filler;

    #[test]
    fn test_rebound_excludes_recent_pair() {
        let draws = with_filler(
            vec![
                Draw::new("1", vec![1, 2]),
                Draw::new("2", vec![3]),
                Draw::new("3", vec![1, 4, 5]),
                Draw::new("4", vec![5, 4, 6]),
                Draw::new("5", vec![6, 3]),
            ],
            10,
        );
        // Twice: 1, 4, 5, 6, 3. Of those 1 and 3 sit in the recent pair.
        assert_eq!(ReboundStrategy.build(&draws), vec![4, 5, 6]);
    }
}
