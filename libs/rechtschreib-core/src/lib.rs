//! Core spelling-analysis library shared by the worksheet applications.
//!
//! Provides:
//! - Rule-based classification of German spelling mistakes into a fixed
//!   taxonomy of orthographic-development strategies
//! - Per-learner aggregation of classified errors into focus buckets
//! - Generation of targeted practice exercises from curated wordlists
//! - Assembly of a complete, printable practice plan per learner
//!
//! The library is pure and synchronous: no IO, no ambient randomness (the
//! one shuffling builder takes an injected rng) and read-only static
//! registries, so it is safe to call concurrently per learner.

pub mod analyzer;
pub mod catalog;
pub mod classifier;
pub mod error;
pub mod exercises;
pub mod planner;
pub mod types;
pub mod wordlist;

pub use analyzer::analyze;
pub use catalog::ExerciseTemplate;
pub use classifier::classify;
pub use error::{PlanError, Result};
pub use exercises::{generate, DEFAULT_EXERCISE_COUNT};
pub use planner::plan;
pub use types::{
    Category, ClassificationCandidate, Difficulty, ErrorBucket, ErrorFocus, ErrorObservation,
    ExerciseType, GeneratedExercise, Subtype, Task, WorksheetPlan,
};
pub use wordlist::WordlistEntry;
