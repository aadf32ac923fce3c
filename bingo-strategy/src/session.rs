use chrono::{DateTime, Local};
use log::{info, warn};

use bingo_data::models::Draw;
use bingo_data::source::{DrawSource, load_draws_or_empty};
use crate::backtest::{BacktestReport, run_backtest};
use crate::config::BingoConfig;
use crate::pools::MIN_HISTORY;
use crate::selection::{StarPick, generate_star_picks};

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Waiting,
    Fetched { count: usize, at: DateTime<Local> },
    FetchFailed,
    NotReady,
    NotEnoughHistory { have: usize },
    Predicted,
}

impl Status {
    pub fn message(&self) -> String {
        match self {
            Status::Waiting => "Waiting for a fetch...".to_string(),
            Status::Fetched { count, at } => {
                format!("Fetched {} draws at {}.", count, at.format("%H:%M:%S"))
            }
            Status::FetchFailed => "Nothing fetched, check the network.".to_string(),
            Status::NotReady => "Fetch draws before predicting.".to_string(),
            Status::NotEnoughHistory { have } => {
                format!("Need at least {} draws to predict, have {}.", MIN_HISTORY, have)
            }
            Status::Predicted => "Prediction done.".to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Status::FetchFailed | Status::NotReady | Status::NotEnoughHistory { .. }
        )
    }
}

#[derive(Debug, Clone)]
pub struct Prediction {
    pub report: BacktestReport,
    pub picks: Vec<StarPick>,
}

/// Draws of one run, held in memory only.
pub struct Session {
    source: DrawSource,
    config: BingoConfig,
    draws: Vec<Draw>,
    ready: bool,
    status: Status,
}

impl Session {
    pub fn new(source: DrawSource, config: BingoConfig) -> Self {
        Self {
            source,
            config,
            draws: Vec::new(),
            ready: false,
            status: Status::Waiting,
        }
    }

    pub fn draws(&self) -> &[Draw] {
        &self.draws
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn source(&self) -> &DrawSource {
        &self.source
    }

    pub fn config(&self) -> &BingoConfig {
        &self.config
    }

    /// Predict stays locked until a fetch succeeds; a failed fetch keeps the
    /// previous draws but locks it again.
    pub fn can_predict(&self) -> bool {
        self.ready
    }

    pub fn fetch(&mut self) -> &Status {
        self.ready = false;

        let draws = load_draws_or_empty(&self.source);

        if draws.is_empty() {
            self.status = Status::FetchFailed;
        } else {
            info!("Session holds {} draws from {}", draws.len(), self.source);
            self.status = Status::Fetched {
                count: draws.len(),
                at: Local::now(),
            };
            self.draws = draws;
            self.ready = true;
        }
        &self.status
    }

    pub fn predict(&mut self) -> Option<Prediction> {
        if !self.ready {
            self.status = Status::NotReady;
            return None;
        }
        if self.draws.len() < MIN_HISTORY {
            self.status = Status::NotEnoughHistory {
                have: self.draws.len(),
            };
            return None;
        }

        let report = run_backtest(&self.draws, &self.config.backtest);
        match generate_star_picks(&self.draws, &report.board, &self.config.selection) {
            Ok(picks) => {
                self.status = Status::Predicted;
                Some(Prediction { report, picks })
            }
            Err(e) => {
                warn!("Prediction failed: {e:#}");
                self.status = Status::NotEnoughHistory {
                    have: self.draws.len(),
                };
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn html_for(draws: &[Draw]) -> String {
        let rows: String = draws
            .iter()
            .map(|d| {
                let cells: String =
                    d.numbers.iter().map(|n| format!("<td>{:02}</td>", n)).collect();
                format!("<tr><td>{}</td>{}</tr>", d.period, cells)
            })
            .collect();
        format!("<html><body><table>{}</table></body></html>", rows)
    }

    fn page_file(n: usize) -> tempfile::NamedTempFile {
        // Periods must match the page format, and 11 is never parsed.
        let draws: Vec<Draw> = (0..n)
            .map(|i| {
                let start = (i % 3) as u8 * 20 + 12;
                Draw::new(format!("114{:06}", 900 - i), (start..start + 20).collect())
            })
            .collect();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(html_for(&draws).as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_predict_locked_before_fetch() {
        let source = DrawSource::File(PathBuf::from("unused"));
        let mut session = Session::new(source, BingoConfig::default());
        assert_eq!(session.status(), &Status::Waiting);
        assert!(session.predict().is_none());
        assert_eq!(session.status(), &Status::NotReady);
    }

    #[test]
    fn test_fetch_then_predict() {
        let file = page_file(20);
        let source = DrawSource::File(file.path().to_path_buf());
        let mut session = Session::new(source, BingoConfig::default());

        assert!(matches!(session.fetch(), Status::Fetched { count: 20, .. }));
        assert!(session.can_predict());
        assert_eq!(session.draws()[0].period, "114000900");

        let prediction = session.predict().unwrap();
        assert_eq!(session.status(), &Status::Predicted);
        assert_eq!(prediction.report.rounds.len(), 5);
        assert_eq!(prediction.picks.len(), 9);
        assert_eq!(prediction.picks[0].numbers.len(), 2);
        assert!(prediction.picks[8].numbers.len() <= 10);
    }

    #[test]
    fn test_failed_fetch_keeps_draws_but_locks_predict() {
        let file = page_file(12);
        let path = file.path().to_path_buf();
        let mut session = Session::new(DrawSource::File(path.clone()), BingoConfig::default());
        session.fetch();
        assert_eq!(session.draws().len(), 12);

        drop(file);
        assert_eq!(session.fetch(), &Status::FetchFailed);
        assert!(session.status().is_error());
        assert_eq!(session.draws().len(), 12);
        assert!(!session.can_predict());
        assert!(session.predict().is_none());
    }

    #[test]
    fn test_short_history() {
        let file = page_file(4);
        let source = DrawSource::File(file.path().to_path_buf());
        let mut session = Session::new(source, BingoConfig::default());
        session.fetch();
        assert!(session.predict().is_none());
        assert_eq!(session.status(), &Status::NotEnoughHistory { have: 4 });
    }

    #[test]
    fn test_status_messages() {
        assert!(Status::FetchFailed.message().contains("network"));
        assert!(Status::NotEnoughHistory { have: 3 }.message().contains("have 3"));
        assert!(!Status::Predicted.is_error());
    }
}
