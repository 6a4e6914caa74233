//! Scripted pronunciation scorer for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::WordGrade;
use crate::traits::PronunciationScorer;

/// Grade used when the word script runs dry.
pub const DEFAULT_GRADE: WordGrade = WordGrade::Good;

/// Score used when the passage script runs dry.
pub const DEFAULT_PASSAGE_SCORE: u8 = 85;

/// Pronunciation scorer that replays queued results.
///
/// Clones share the same queues, so a test can keep a handle and push more
/// results after the scorer has been moved into the app.
///
/// # Example
///
/// ```ignore
/// use mello::adapters::mock::ScriptedScorer;
/// use mello::domain::WordGrade;
///
/// let scorer = ScriptedScorer::new()
///     .with_grades([WordGrade::Excellent, WordGrade::NeedsPractice]);
/// let handle = scorer.clone();
/// let app = App::with_scorer(config, Box::new(scorer));
/// assert_eq!(handle.graded_words(), Vec::<String>::new());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedScorer {
    grades: Arc<Mutex<VecDeque<WordGrade>>>,
    passage_scores: Arc<Mutex<VecDeque<u8>>>,
    graded: Arc<Mutex<Vec<String>>>,
}

impl ScriptedScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue word grades, returned in order.
    pub fn with_grades(self, grades: impl IntoIterator<Item = WordGrade>) -> Self {
        self.push_grades(grades);
        self
    }

    /// Queue passage scores, returned in order.
    pub fn with_passage_scores(self, scores: impl IntoIterator<Item = u8>) -> Self {
        if let Ok(mut queue) = self.passage_scores.lock() {
            queue.extend(scores);
        }
        self
    }

    /// Queue more word grades through a shared handle.
    pub fn push_grades(&self, grades: impl IntoIterator<Item = WordGrade>) {
        if let Ok(mut queue) = self.grades.lock() {
            queue.extend(grades);
        }
    }

    /// Words passed to `grade_word` so far.
    pub fn graded_words(&self) -> Vec<String> {
        self.graded.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl PronunciationScorer for ScriptedScorer {
    fn grade_word(&mut self, word: &str) -> WordGrade {
        if let Ok(mut graded) = self.graded.lock() {
            graded.push(word.to_string());
        }
        self.grades
            .lock()
            .ok()
            .and_then(|mut q| q.pop_front())
            .unwrap_or(DEFAULT_GRADE)
    }

    fn score_passage(&mut self, _text: &str) -> u8 {
        self.passage_scores
            .lock()
            .ok()
            .and_then(|mut q| q.pop_front())
            .unwrap_or(DEFAULT_PASSAGE_SCORE)
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order_then_defaults() {
        let mut scorer =
            ScriptedScorer::new().with_grades([WordGrade::Excellent, WordGrade::NeedsPractice]);
        assert_eq!(scorer.grade_word("a"), WordGrade::Excellent);
        assert_eq!(scorer.grade_word("b"), WordGrade::NeedsPractice);
        assert_eq!(scorer.grade_word("c"), DEFAULT_GRADE);
        assert_eq!(scorer.graded_words(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_clones_share_queues() {
        let scorer = ScriptedScorer::new();
        let handle = scorer.clone();
        let mut boxed: Box<dyn PronunciationScorer> = Box::new(scorer);
        handle.push_grades([WordGrade::Excellent]);
        assert_eq!(boxed.grade_word("x"), WordGrade::Excellent);
        assert_eq!(handle.graded_words(), vec!["x"]);
    }

    #[test]
    fn test_passage_scores() {
        let mut scorer = ScriptedScorer::new().with_passage_scores([72, 95]);
        assert_eq!(scorer.score_passage(""), 72);
        assert_eq!(scorer.score_passage(""), 95);
        assert_eq!(scorer.score_passage(""), DEFAULT_PASSAGE_SCORE);
    }
}
