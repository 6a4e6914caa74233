//! Random pronunciation scorer adapter.
//!
//! Stands in for a real speech model: word grades are drawn from a weighted
//! distribution and passage scores uniformly from `70..=99`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::practice::PASSAGE_SCORE_RANGE;
use crate::domain::WordGrade;
use crate::traits::PronunciationScorer;

/// RNG-backed scorer.
///
/// # Example
///
/// ```ignore
/// use mello::adapters::RandomScorer;
/// use mello::traits::PronunciationScorer;
///
/// // Reproducible sessions for demos
/// let mut scorer = RandomScorer::seeded(7);
/// let grade = scorer.grade_word("Apple");
/// ```
#[derive(Debug)]
pub struct RandomScorer {
    rng: StdRng,
}

impl RandomScorer {
    /// Create a scorer seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a scorer with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a scorer from an optional seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for RandomScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PronunciationScorer for RandomScorer {
    fn grade_word(&mut self, word: &str) -> WordGrade {
        let grade = WordGrade::from_sample(self.rng.gen::<f64>());
        tracing::debug!(word, %grade, "graded word");
        grade
    }

    fn score_passage(&mut self, text: &str) -> u8 {
        let score = self.rng.gen_range(PASSAGE_SCORE_RANGE);
        tracing::debug!(chars = text.len(), score, "scored passage");
        score
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passage_scores_stay_in_range() {
        let mut scorer = RandomScorer::seeded(1);
        for _ in 0..500 {
            let score = scorer.score_passage("text");
            assert!(PASSAGE_SCORE_RANGE.contains(&score), "{score}");
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomScorer::seeded(42);
        let mut b = RandomScorer::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.grade_word("w"), b.grade_word("w"));
        }
    }

    #[test]
    fn test_grade_distribution_is_weighted() {
        let mut scorer = RandomScorer::seeded(9);
        let mut excellent = 0;
        let mut needs_practice = 0;
        for _ in 0..2000 {
            match scorer.grade_word("w") {
                WordGrade::Excellent => excellent += 1,
                WordGrade::NeedsPractice => needs_practice += 1,
                WordGrade::Good => {}
            }
        }
        // Expected roughly 800 and 400.
        assert!((650..950).contains(&excellent), "{excellent}");
        assert!((280..520).contains(&needs_practice), "{needs_practice}");
    }
}
