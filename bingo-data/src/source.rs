use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use log::{debug, info, warn};
use regex::Regex;
use reqwest::StatusCode;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::models::{DRAW_SIZE, Draw, MAX_NUMBER};

pub const DEFAULT_URL: &str = "https://www.pilio.idv.tw/bingo/list.asp";

// Periods are ROC year 113-115 followed by a six digit serial.
static PERIOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(11[3-5][0-9]{6})\b").expect("period regex"));
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]{2}\b").expect("number regex"));
static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("row selector"));

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Where a session reads its draws from.
#[derive(Debug, Clone)]
pub enum DrawSource {
    Remote(FetchConfig),
    /// A result page saved to disk.
    File(PathBuf),
}

impl std::fmt::Display for DrawSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawSource::Remote(config) => write!(f, "{}", config.url),
            DrawSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn fetch_html(config: &FetchConfig) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(&config.url)
        .send()
        .with_context(|| format!("Request to {} failed", config.url))?;

    let status = response.status();
    if status != StatusCode::OK {
        bail!("{} answered with status {}", config.url, status);
    }

    response.text().context("Failed to read response body")
}

pub fn fetch_draws(config: &FetchConfig) -> Result<Vec<Draw>> {
    info!("Fetching draws from {}", config.url);
    let html = fetch_html(config)?;
    let draws = parse_draws(&html);
    info!("Parsed {} draws", draws.len());
    Ok(draws)
}

pub fn read_draws_file(path: &Path) -> Result<Vec<Draw>> {
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {:?}", path))?;
    Ok(parse_draws(&html))
}

pub fn load_draws(source: &DrawSource) -> Result<Vec<Draw>> {
    match source {
        DrawSource::Remote(config) => fetch_draws(config),
        DrawSource::File(path) => read_draws_file(path),
    }
}

/// Load errors (network, timeout, status, unreadable file) are logged and
/// turned into an empty list.
pub fn load_draws_or_empty(source: &DrawSource) -> Vec<Draw> {
    match load_draws(source) {
        Ok(draws) => draws,
        Err(e) => {
            warn!("Fetch error: {e:#}");
            Vec::new()
        }
    }
}

/// Extract draws from a result page, in page order (most recent first).
pub fn parse_draws(html: &str) -> Vec<Draw> {
    let document = Html::parse_document(html);
    document
        .select(&ROW_SELECTOR)
        .filter_map(|row| {
            let text = row
                .text()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            parse_row(&text)
        })
        .collect()
}

fn parse_row(text: &str) -> Option<Draw> {
    let period = PERIOD_RE.captures(text)?.get(1)?.as_str();
    // The two leading digits of the period also show up as a bare token on the page.
    let year_prefix = &period[..2];

    let mut numbers: Vec<u8> = Vec::with_capacity(DRAW_SIZE);
    for token in NUMBER_RE.find_iter(text).map(|m| m.as_str()) {
        if token == year_prefix {
            continue;
        }
        let Ok(n) = token.parse::<u8>() else { continue };
        if (1..=MAX_NUMBER).contains(&n) && !numbers.contains(&n) {
            numbers.push(n);
        }
    }

    if numbers.len() < DRAW_SIZE {
        debug!("Skipping period {}: only {} numbers", period, numbers.len());
        return None;
    }
    numbers.truncate(DRAW_SIZE);
    Some(Draw::new(period, numbers))
}
