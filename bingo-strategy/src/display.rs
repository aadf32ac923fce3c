use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

use bingo_data::models::{Draw, NumberStats};
use crate::backtest::{BacktestReport, StrategyScore};
use crate::pools::StrategyPools;
use crate::selection::StarPick;
use crate::session::Status;
use crate::stats::expected_frequency;

fn ball(number: u8, color: Color) -> Cell {
    Cell::new(format!("{:02}", number)).fg(color)
}

fn balls_row(label: String, numbers: &[u8], color: Color) -> Vec<Cell> {
    let mut row = vec![Cell::new(label)];
    row.extend(numbers.iter().map(|&n| ball(n, color)));
    row
}

fn join_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:02}", n))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn score_icon(hits: u32) -> &'static str {
    if hits >= 3 {
        "🔥"
    } else if hits > 0 {
        "👍"
    } else {
        "🧊"
    }
}

pub fn display_status(status: &Status) {
    let icon = match status {
        Status::Waiting => "⏳",
        Status::Fetched { .. } | Status::Predicted => "✅",
        _ => "⚠️",
    };
    println!("{icon} {}", status.message());
}

pub fn display_draws(draws: &[Draw]) {
    if draws.is_empty() {
        println!("No draws to show.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Period", "Numbers"]);

    for draw in draws {
        table.add_row(vec![draw.period.clone(), join_numbers(&draw.sorted_numbers())]);
    }

    println!("{table}");
}

/// The newest draws as rows of balls, for checking the fetch against the site.
pub fn display_latest(draws: &[Draw], count: usize) {
    if draws.is_empty() {
        return;
    }
    println!("\n== Latest draws ==\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for draw in draws.iter().take(count) {
        table.add_row(balls_row(draw.period.clone(), &draw.sorted_numbers(), Color::Blue));
    }
    println!("{table}");
}

pub fn display_stats(stats: &[NumberStats], window: usize) {
    println!("\n== Statistics over the last {} draws ==\n", window);

    let expected = expected_frequency(window);
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Number", "Frequency", "Gap"]);

    let mut sorted = stats.to_vec();
    sorted.sort_by(|a, b| b.frequency.cmp(&a.frequency));

    for stat in &sorted {
        let color = if stat.frequency as f64 > expected * 1.3 {
            Color::Green
        } else if (stat.frequency as f64) < expected * 0.7 {
            Color::Red
        } else {
            Color::White
        };
        table.add_row(vec![
            Cell::new(format!("{:02}", stat.number)),
            Cell::new(stat.frequency).fg(color),
            Cell::new(stat.gap),
        ]);
    }
    println!("{table}");
}

pub fn display_pools(pools: &StrategyPools, head: usize) {
    println!("\n== Strategy pools ==\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Strategy", "Size", "Candidates"]);

    for pool in pools.iter() {
        let shown = &pool.numbers[..head.min(pool.numbers.len())];
        let mut candidates = join_numbers(shown);
        if pool.numbers.len() > shown.len() {
            candidates.push_str(" …");
        }
        table.add_row(vec![
            format!("{} {}", pool.code, pool.name),
            pool.numbers.len().to_string(),
            candidates,
        ]);
    }
    println!("{table}");
}

pub fn display_board(board: &[StrategyScore]) {
    println!("\n== Strategy strength (recent backtest) ==\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["", "Strategy", "Hits"]);

    for score in board {
        table.add_row(vec![
            Cell::new(score_icon(score.hits)),
            Cell::new(score.label()),
            Cell::new(score.hits),
        ]);
    }
    println!("{table}");
}

pub fn display_backtest(report: &BacktestReport) {
    if report.rounds.is_empty() {
        println!("Not enough draws to replay any round.");
    } else {
        println!("\n== Backtest rounds ==\n");

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        let mut header = vec!["Period".to_string()];
        header.extend(report.rounds[0].hits.iter().map(|(code, _)| code.clone()));
        table.set_header(header);

        for round in &report.rounds {
            let mut row = vec![Cell::new(&round.period)];
            for (_, hits) in &round.hits {
                let cell = Cell::new(hits);
                row.push(if *hits > 0 { cell.fg(Color::Green) } else { cell });
            }
            table.add_row(row);
        }
        println!("{table}");
    }

    display_board(&report.board);
}

pub fn display_picks(picks: &[StarPick], top: &[StrategyScore]) {
    let names = top.iter().map(|s| s.label()).collect::<Vec<_>>().join(", ");
    println!("\n== Recommended picks (from {}) ==\n", names);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for pick in picks {
        table.add_row(balls_row(format!("{} stars", pick.stars), &pick.numbers, Color::Red));
    }
    println!("{table}");
}

pub fn display_compare(pick: &[u8], hits: &[(&Draw, usize)]) {
    println!("\n== Pick {} against recent draws ==\n", join_numbers(pick));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Period", "Hits", "Matched"]);

    for (draw, count) in hits {
        let matched: Vec<u8> = pick.iter().copied().filter(|&n| draw.contains(n)).collect();
        let color = if *count > 0 { Color::Green } else { Color::White };
        table.add_row(vec![
            Cell::new(&draw.period),
            Cell::new(format!("{}/{}", count, pick.len())).fg(color),
            Cell::new(join_numbers(&matched)),
        ]);
    }
    println!("{table}");
}
