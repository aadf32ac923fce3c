use log::debug;

use bingo_data::models::Draw;
use crate::config::BacktestConfig;
use crate::pools::{MIN_HISTORY, all_strategies, build_pools};

#[derive(Debug, Clone, PartialEq)]
pub struct StrategyScore {
    pub code: String,
    pub name: String,
    pub hits: u32,
}

impl StrategyScore {
    pub fn label(&self) -> String {
        format!("{} {}", self.code, self.name)
    }
}

/// Hits of every strategy against one replayed draw, in fixed strategy order.
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub period: String,
    pub hits: Vec<(String, u32)>,
}

#[derive(Debug, Clone)]
pub struct BacktestReport {
    pub rounds: Vec<RoundResult>,
    /// Best first; equal scores keep the fixed strategy order.
    pub board: Vec<StrategyScore>,
}

impl BacktestReport {
    pub fn top(&self, n: usize) -> &[StrategyScore] {
        &self.board[..n.min(self.board.len())]
    }
}

/// Number of draws that can be replayed while leaving MIN_HISTORY older ones.
pub fn testable_rounds(n_draws: usize, max_rounds: usize) -> usize {
    max_rounds.min(n_draws.saturating_sub(MIN_HISTORY))
}

/// Replay the most recent draws one by one. For round `i` the pools only see
/// draws[i+1..], so nothing from the tested draw or later leaks in.
pub fn run_backtest(draws: &[Draw], config: &BacktestConfig) -> BacktestReport {
    let mut board: Vec<StrategyScore> = all_strategies()
        .iter()
        .map(|s| StrategyScore {
            code: s.code().to_string(),
            name: s.name().to_string(),
            hits: 0,
        })
        .collect();

    let mut rounds = Vec::new();
    for i in 0..testable_rounds(draws.len(), config.rounds) {
        let actual = &draws[i];
        let Some(pools) = build_pools(&draws[i + 1..]) else {
            continue;
        };

        let mut hits = Vec::with_capacity(pools.len());
        for pool in pools.iter() {
            let head = &pool.numbers[..config.top_picks.min(pool.numbers.len())];
            let h = actual.hits(head) as u32;
            if let Some(score) = board.iter_mut().find(|s| s.code == pool.code) {
                score.hits += h;
            }
            hits.push((pool.code.clone(), h));
        }
        debug!("Backtest round {} ({}): {:?}", i, actual.period, hits);

        rounds.push(RoundResult {
            period: actual.period.clone(),
            hits,
        });
    }

    board.sort_by(|a, b| b.hits.cmp(&a.hits));
    BacktestReport { rounds, board }
}

/// Score board only.
pub fn evaluate_strategies(draws: &[Draw], config: &BacktestConfig) -> Vec<StrategyScore> {
    run_backtest(draws, config).board
}
