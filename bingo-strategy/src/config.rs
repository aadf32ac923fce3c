use std::path::Path;

use anyhow::{Context, Result};
use bingo_data::source::FetchConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BacktestConfig {
    /// Most recent draws replayed against older history.
    pub rounds: usize,
    /// Head of each pool compared against the replayed draw.
    pub top_picks: usize,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            rounds: 5,
            top_picks: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub top_strategies: usize,
    pub min_stars: usize,
    pub max_stars: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            top_strategies: 3,
            min_stars: 2,
            max_stars: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BingoConfig {
    pub fetch: FetchConfig,
    pub backtest: BacktestConfig,
    pub selection: SelectionConfig,
}

pub fn load_config(path: &Path) -> Result<BingoConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config {:?}", path))?;
    let config: BingoConfig = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config {:?}", path))?;
    Ok(config)
}
