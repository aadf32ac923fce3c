use bingo_data::models::{DRAW_SIZE, Draw, MAX_NUMBER, NumberStats};

/// Frequency and gap of every number over the `window` most recent draws.
pub fn compute_stats(draws: &[Draw], window: usize) -> Vec<NumberStats> {
    let window = &draws[..window.min(draws.len())];

    let mut stats: Vec<NumberStats> = (1..=MAX_NUMBER)
        .map(|n| NumberStats {
            number: n,
            frequency: 0,
            gap: window.len() as u32,
        })
        .collect();

    for (i, draw) in window.iter().enumerate() {
        for &n in &draw.numbers {
            let Some(stat) = n.checked_sub(1).and_then(|idx| stats.get_mut(idx as usize)) else {
                continue;
            };
            if stat.frequency == 0 {
                stat.gap = i as u32;
            }
            stat.frequency += 1;
        }
    }

    stats
}

/// Appearances a number would get on average over `window` draws.
pub fn expected_frequency(window: usize) -> f64 {
    window as f64 * DRAW_SIZE as f64 / MAX_NUMBER as f64
}

/// Hits of `pick` against each of the `last` most recent draws.
pub fn pick_hits<'a>(pick: &[u8], draws: &'a [Draw], last: usize) -> Vec<(&'a Draw, usize)> {
    draws.iter().take(last).map(|d| (d, d.hits(pick))).collect()
}
