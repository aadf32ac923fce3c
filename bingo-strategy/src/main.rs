mod interactive;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use bingo_data::models::{Draw, validate_draw};
use bingo_data::source::{DrawSource, load_draws_or_empty};
use bingo_strategy::backtest::run_backtest;
use bingo_strategy::config::{BingoConfig, load_config};
use bingo_strategy::display;
use bingo_strategy::pools::{MIN_HISTORY, build_pools};
use bingo_strategy::selection::generate_star_picks;
use bingo_strategy::session::Session;
use bingo_strategy::stats::{compute_stats, pick_hits};

#[derive(Parser)]
#[command(name = "bingo", about = "Bingo Bingo draw scraper and strategy-pool picks")]
struct Cli {
    /// Result page to scrape
    #[arg(long, global = true, env = "BINGO_URL")]
    url: Option<String>,

    /// Read a saved result page instead of fetching
    #[arg(long, global = true)]
    html: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log fetch and backtest details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the draws and show the newest ones
    Fetch,

    /// List the latest draws
    History {
        /// Number of draws to show
        #[arg(short, long, default_value = "10")]
        last: usize,
    },

    /// Frequency and gap of every number
    Stats {
        /// Analysis window (number of draws)
        #[arg(short, long, default_value = "50")]
        window: usize,
    },

    /// Show the current strategy pools
    Pools {
        /// Candidates shown per pool
        #[arg(long, default_value = "15")]
        head: usize,
    },

    /// Replay recent draws to score the strategies
    Backtest {
        /// Rounds to replay (default from config)
        #[arg(short, long)]
        rounds: Option<usize>,
    },

    /// Rank the strategies and recommend 2-10 star picks
    Predict,

    /// Check a pick against recent draws
    Compare {
        /// Numbers of the pick (1-80)
        #[arg(required = true)]
        numbers: Vec<u8>,

        /// Number of draws to check
        #[arg(short, long, default_value = "10")]
        last: usize,
    },

    /// Fetch / predict session (interactive mode)
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => BingoConfig::default(),
    };
    if let Some(url) = cli.url {
        config.fetch.url = url;
    }
    let source = match cli.html {
        Some(path) => DrawSource::File(path),
        None => DrawSource::Remote(config.fetch.clone()),
    };
    debug!("Source: {}", source);

    match cli.command {
        Command::Fetch => cmd_fetch(&mut Session::new(source, config)),
        Command::History { last } => cmd_history(&source, last),
        Command::Stats { window } => cmd_stats(&source, window),
        Command::Pools { head } => cmd_pools(&source, head),
        Command::Backtest { rounds } => {
            if let Some(r) = rounds {
                config.backtest.rounds = r;
            }
            cmd_backtest(&source, &config)
        }
        Command::Predict => cmd_predict(&source, &config),
        Command::Compare { numbers, last } => cmd_compare(&source, &numbers, last),
        Command::Interactive => interactive::run_interactive(&mut Session::new(source, config)),
    }
}

fn spinner(msg: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn load(source: &DrawSource) -> Result<Vec<Draw>> {
    let pb = spinner(format!("Loading draws from {source}"));
    let draws = load_draws_or_empty(source);
    pb.finish_and_clear();

    if draws.is_empty() {
        bail!("No draws found at {source}, check the network");
    }
    Ok(draws)
}

fn load_history(source: &DrawSource) -> Result<Vec<Draw>> {
    let draws = load(source)?;
    if draws.len() < MIN_HISTORY {
        bail!("Need at least {} draws, got {}", MIN_HISTORY, draws.len());
    }
    Ok(draws)
}

pub(crate) fn cmd_fetch(session: &mut Session) -> Result<()> {
    let pb = spinner(format!("Fetching draws from {}", session.source()));
    session.fetch();
    pb.finish_and_clear();

    display::display_status(session.status());
    if session.can_predict() {
        display::display_latest(session.draws(), 2);
    }
    Ok(())
}

pub(crate) fn cmd_session_predict(session: &mut Session) -> Result<()> {
    if let Some(prediction) = session.predict() {
        let top = session.config().selection.top_strategies;
        display::display_board(&prediction.report.board);
        display::display_picks(&prediction.picks, prediction.report.top(top));
    }
    display::display_status(session.status());
    Ok(())
}

pub(crate) fn cmd_session_history(session: &Session, last: usize) -> Result<()> {
    if session.draws().is_empty() {
        bail!("No draws yet, fetch first");
    }
    display::display_draws(&session.draws()[..last.min(session.draws().len())]);
    Ok(())
}

fn cmd_history(source: &DrawSource, last: usize) -> Result<()> {
    let draws = load(source)?;
    display::display_draws(&draws[..last.min(draws.len())]);
    Ok(())
}

fn cmd_stats(source: &DrawSource, window: usize) -> Result<()> {
    let draws = load(source)?;
    let effective_window = window.min(draws.len());
    let stats = compute_stats(&draws, effective_window);
    display::display_stats(&stats, effective_window);
    Ok(())
}

fn cmd_pools(source: &DrawSource, head: usize) -> Result<()> {
    let draws = load_history(source)?;
    let Some(pools) = build_pools(&draws) else {
        bail!("Not enough draws to build pools");
    };
    display::display_pools(&pools, head);
    Ok(())
}

fn cmd_backtest(source: &DrawSource, config: &BingoConfig) -> Result<()> {
    let draws = load_history(source)?;
    let report = run_backtest(&draws, &config.backtest);
    display::display_backtest(&report);
    Ok(())
}

fn cmd_predict(source: &DrawSource, config: &BingoConfig) -> Result<()> {
    let draws = load_history(source)?;
    display::display_latest(&draws, 2);

    let report = run_backtest(&draws, &config.backtest);
    display::display_board(&report.board);

    let picks = generate_star_picks(&draws, &report.board, &config.selection)?;
    display::display_picks(&picks, report.top(config.selection.top_strategies));
    Ok(())
}

fn cmd_compare(source: &DrawSource, numbers: &[u8], last: usize) -> Result<()> {
    validate_draw(numbers)?;
    let draws = load(source)?;
    let hits = pick_hits(numbers, &draws, last);
    display::display_compare(numbers, &hits);
    Ok(())
}
