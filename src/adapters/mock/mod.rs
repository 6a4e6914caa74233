//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`ScriptedScorer`] - Pronunciation scorer with queued results

pub mod scorer;

pub use scorer::ScriptedScorer;
