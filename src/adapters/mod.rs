//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`RandomScorer`] - RNG-backed pronunciation scorer
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::ScriptedScorer`] - Replays queued grades and scores

pub mod mock;
pub mod random_scorer;

pub use mock::ScriptedScorer;
pub use random_scorer::RandomScorer;
