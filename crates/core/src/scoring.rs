//! Scoring module - batch reward curve
//!
//! A batch is the set of cells cleared in one pass of a settle cycle. Each
//! batch is scored on its own, so a chain of two 3-cell batches is worth
//! `3 + 3`, not the points for a single 6-cell batch.
//!
//! | Cells cleared | Points |
//! |---------------|--------|
//! | n <= 3 | n |
//! | 4..=5 | 3 + 2(n - 3) |
//! | n >= 6 | 3 + 2(n - 3) + 3(n - 5) |

/// Points for one batch of `n` cleared cells
pub fn batch_points(n: usize) -> u32 {
    let n = u32::try_from(n).unwrap_or(u32::MAX);
    match n {
        0..=3 => n,
        4..=5 => 3 + 2 * (n - 3),
        _ => (3u32)
            .saturating_add(2u32.saturating_mul(n - 3))
            .saturating_add(3u32.saturating_mul(n - 5)),
    }
}

/// Running session score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scorer {
    score: u32,
}

impl Scorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the points for one batch and return them
    pub fn score_batch(&mut self, n: usize) -> u32 {
        let delta = batch_points(n);
        self.score = self.score.saturating_add(delta);
        delta
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_curve_anchors() {
        assert_eq!(batch_points(0), 0);
        assert_eq!(batch_points(3), 3);
        assert_eq!(batch_points(4), 5);
        assert_eq!(batch_points(5), 7);
        assert_eq!(batch_points(6), 12);
        assert_eq!(batch_points(7), 17);
    }

    #[test]
    fn test_reward_curve_non_decreasing() {
        for n in 0..200 {
            assert!(batch_points(n + 1) >= batch_points(n), "drop at n={}", n);
        }
    }

    #[test]
    fn test_two_small_batches_score_below_one_big_batch() {
        assert!(batch_points(3) + batch_points(3) < batch_points(6));
    }

    #[test]
    fn test_scorer_accumulates() {
        let mut scorer = Scorer::new();
        assert_eq!(scorer.score_batch(3), 3);
        assert_eq!(scorer.score_batch(6), 12);
        assert_eq!(scorer.score_batch(0), 0);
        assert_eq!(scorer.score(), 15);

        scorer.reset();
        assert_eq!(scorer.score(), 0);
    }

    #[test]
    fn test_huge_batch_saturates() {
        assert_eq!(batch_points(usize::MAX), u32::MAX);
    }
}
