//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`PronunciationScorer`] - Grades simulated recordings

pub mod scoring;

pub use scoring::PronunciationScorer;
