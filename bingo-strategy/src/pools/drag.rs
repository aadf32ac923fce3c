use bingo_data::models::Draw;

use super::{PoolStrategy, most_common};

/// Numbers that followed draws resembling the latest one.
///
/// Every older draw sharing `w > 0` numbers with draws[0] lends weight `w` to
/// each number of the draw that came right after it. Scans the whole history.
pub struct DragStrategy;

impl PoolStrategy for DragStrategy {
    fn code(&self) -> &str {
        "N3"
    }

    fn name(&self) -> &str {
        "Drag"
    }

    fn build(&self, draws: &[Draw]) -> Vec<u8> {
        let Some(latest) = draws.first() else {
            return Vec::new();
        };

        let mut scores: Vec<(u8, u32)> = Vec::new();
        for i in 1..draws.len() {
            let weight = draws[i].hits(&latest.numbers) as u32;
            if weight == 0 {
                continue;
            }
            for &n in &draws[i - 1].numbers {
                match scores.iter_mut().find(|(m, _)| *m == n) {
                    Some((_, s)) => *s += weight,
                    None => scores.push((n, weight)),
                }
            }
        }

        most_common(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_weights_successor() {
        let draws = vec![
            Draw::new("0", vec![1, 2, 3]),
            Draw::new("1", vec![10, 11]),
            Draw::new("2", vec![1, 2, 20]),
            Draw::new("3", vec![30, 31]),
            Draw::new("4", vec![3, 40]),
        ];
        // draw 2 shares 2 numbers -> draw 1 gets +2 each.
        // draw 4 shares 1 number  -> draw 3 gets +1 each.
        assert_eq!(DragStrategy.build(&draws), vec![10, 11, 30, 31]);
    }

    #[test]
    fn test_drag_counts_latest_when_draw_one_overlaps() {
        let draws = vec![
            Draw::new("0", vec![5, 6]),
            Draw::new("1", vec![5, 9]),
            Draw::new("2", vec![6, 5]),
        ];
        // draw 1 (w=1) -> draw 0 +1; draw 2 (w=2) -> draw 1 +2.
        assert_eq!(DragStrategy.build(&draws), vec![5, 9, 6]);
    }

    #[test]
    fn test_drag_no_overlap() {
        let draws = vec![Draw::new("0", vec![1]), Draw::new("1", vec![2])];
        assert!(DragStrategy.build(&draws).is_empty());
    }
}
