//! Pronunciation scoring trait abstraction.
//!
//! Screens never roll dice themselves; they ask a [`PronunciationScorer`] for
//! a grade when a simulated recording finishes. The default adapter samples a
//! random number generator, tests inject a scripted scorer.

use crate::domain::WordGrade;

/// Scores simulated recordings.
pub trait PronunciationScorer: Send {
    /// Grade a single spoken word.
    fn grade_word(&mut self, word: &str) -> WordGrade;

    /// Score a read-aloud passage, in `70..=99`.
    fn score_passage(&mut self, text: &str) -> u8;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

impl<T: PronunciationScorer + ?Sized> PronunciationScorer for Box<T> {
    fn grade_word(&mut self, word: &str) -> WordGrade {
        (**self).grade_word(word)
    }

    fn score_passage(&mut self, text: &str) -> u8 {
        (**self).score_passage(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
