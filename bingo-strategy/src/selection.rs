use anyhow::{Result, bail};

use bingo_data::models::Draw;
use crate::backtest::StrategyScore;
use crate::config::SelectionConfig;
use crate::pools::{MIN_HISTORY, StrategyPools, build_pools};

#[derive(Debug, Clone, PartialEq)]
pub struct StarPick {
    pub stars: usize,
    /// Ascending.
    pub numbers: Vec<u8>,
}

/// Take up to `count` distinct numbers from the pools of the first `top`
/// strategies of the board, in rank order. The pick comes back short when
/// those pools run dry.
pub fn pick_from_pools(
    pools: &StrategyPools,
    board: &[StrategyScore],
    top: usize,
    count: usize,
) -> Vec<u8> {
    let mut selected: Vec<u8> = Vec::with_capacity(count);
    for score in board.iter().take(top) {
        let Some(pool) = pools.get(&score.code) else {
            continue;
        };
        for &n in &pool.numbers {
            if selected.len() >= count {
                return selected;
            }
            if !selected.contains(&n) {
                selected.push(n);
            }
        }
        if selected.len() >= count {
            break;
        }
    }

    selected
}

/// One pick per star count, each built independently from the current pools.
pub fn generate_star_picks(
    draws: &[Draw],
    board: &[StrategyScore],
    config: &SelectionConfig,
) -> Result<Vec<StarPick>> {
    let Some(pools) = build_pools(draws) else {
        bail!("Need at least {} draws, got {}", MIN_HISTORY, draws.len());
    };
    if board.is_empty() {
        bail!("Empty score board");
    }

    let picks = (config.min_stars..=config.max_stars)
        .map(|stars| {
            let mut numbers = pick_from_pools(&pools, board, config.top_strategies, stars);
            numbers.sort_unstable();
            StarPick { stars, numbers }
        })
        .collect();

    Ok(picks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backtest::evaluate_strategies;
    use crate::config::BacktestConfig;
    use crate::pools::{make_test_draws, with_filler};

    fn score(code: &str, hits: u32) -> StrategyScore {
        StrategyScore {
            code: code.to_string(),
            name: String::new(),
            hits,
        }
    }

    #[test]
    fn test_star_picks_sizes() {
        let draws = make_test_draws(40);
        let board = evaluate_strategies(&draws, &BacktestConfig::default());
        let picks = generate_star_picks(&draws, &board, &SelectionConfig::default()).unwrap();
        assert_eq!(picks.len(), 9);
        for (pick, stars) in picks.iter().zip(2..=10) {
            assert_eq!(pick.stars, stars);
            assert!(!pick.numbers.is_empty() && pick.numbers.len() <= stars);
            assert!(pick.numbers.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_star_picks_need_history() {
        let draws = make_test_draws(9);
        let board = vec![score("N1", 0)];
        assert!(generate_star_picks(&draws, &board, &SelectionConfig::default()).is_err());
    }

    #[test]
    fn test_star_picks_empty_board() {
        let draws = make_test_draws(20);
        assert!(generate_star_picks(&draws, &[], &SelectionConfig::default()).is_err());
    }

    #[test]
    fn test_pick_follows_rank_then_pool_order() {
        // Recent pair holds 1-3 and 61-77: N6 = 4..=10.
        let recent: Vec<u8> = (1..=3).chain(61..=77).collect();
        let draws = with_filler(vec![Draw::new("a", recent.clone()), Draw::new("b", recent)], 12);
        let pools = build_pools(&draws).unwrap();
        let n6 = pools.get("N6").unwrap().numbers.clone();
        assert_eq!(n6, (4..=10).collect::<Vec<u8>>());

        let board = vec![score("N6", 9), score("N5", 4), score("N1", 1), score("N7", 0)];
        let pick = pick_from_pools(&pools, &board, 3, 9);
        // All seven N6 numbers, then the head of N5.
        let n5 = &pools.get("N5").unwrap().numbers;
        let mut expected = n6.clone();
        expected.extend(n5.iter().filter(|n| !n6.contains(n)).take(2));
        assert_eq!(pick, expected);
    }

    #[test]
    fn test_pick_stays_within_top_strategies() {
        // N6 only yields 4..=10; N7 ranks below the cut and is never used.
        let recent: Vec<u8> = (1..=3).chain(61..=77).collect();
        let draws = with_filler(vec![Draw::new("a", recent.clone()), Draw::new("b", recent)], 12);
        let pools = build_pools(&draws).unwrap();
        let board = vec![score("N6", 5), score("N7", 0)];
        let pick = pick_from_pools(&pools, &board, 1, 10);
        assert_eq!(pick, vec![4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_short_star_pick_when_top_pools_run_dry() {
        let recent: Vec<u8> = (1..=3).chain(61..=77).collect();
        let draws = with_filler(vec![Draw::new("a", recent.clone()), Draw::new("b", recent)], 12);
        let board = vec![score("N6", 5), score("N5", 0)];
        let config = SelectionConfig {
            top_strategies: 1,
            ..SelectionConfig::default()
        };
        let picks = generate_star_picks(&draws, &board, &config).unwrap();
        assert_eq!(picks[5].stars, 7);
        assert_eq!(picks[5].numbers.len(), 7);
        assert_eq!(picks[8].stars, 10);
        assert_eq!(picks[8].numbers, (4..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn test_larger_pick_extends_smaller() {
        let draws = make_test_draws(30);
        let board = evaluate_strategies(&draws, &BacktestConfig::default());
        let picks = generate_star_picks(&draws, &board, &SelectionConfig::default()).unwrap();
        for pair in picks.windows(2) {
            assert!(pair[0].numbers.iter().all(|n| pair[1].numbers.contains(n)));
        }
    }
}
