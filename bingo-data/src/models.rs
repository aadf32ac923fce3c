use anyhow::{Result, bail};

/// Highest number that can be drawn.
pub const MAX_NUMBER: u8 = 80;

/// Numbers drawn per period.
pub const DRAW_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub period: String,
    /// Page order, not sorted.
    pub numbers: Vec<u8>,
}

impl Draw {
    pub fn new(period: impl Into<String>, numbers: Vec<u8>) -> Self {
        Self {
            period: period.into(),
            numbers,
        }
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers.contains(&number)
    }

    pub fn sorted_numbers(&self) -> Vec<u8> {
        let mut sorted = self.numbers.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Count of `picks` that appear in this draw.
    pub fn hits(&self, picks: &[u8]) -> usize {
        picks.iter().filter(|&&n| self.contains(n)).count()
    }
}

#[derive(Debug, Clone)]
pub struct NumberStats {
    pub number: u8,
    pub frequency: u32,
    pub gap: u32,
}

pub fn validate_draw(numbers: &[u8]) -> Result<()> {
    if numbers.len() > DRAW_SIZE {
        bail!("Too many numbers: {} (max {})", numbers.len(), DRAW_SIZE);
    }
    for &n in numbers {
        if n < 1 || n > MAX_NUMBER {
            bail!("Number {} out of range (1-{})", n, MAX_NUMBER);
        }
    }
    for i in 0..numbers.len() {
        for j in (i + 1)..numbers.len() {
            if numbers[i] == numbers[j] {
                bail!("Duplicate number: {}", numbers[i]);
            }
        }
    }
    Ok(())
}
