//! Exercise generation: template selection and ten type-specific builders.
//!
//! One builder module per exercise type, dispatched from `generate`. Builders
//! are pure functions of the bucket, the curated wordlist entry and the DaZ
//! flag; only the error-detective builder draws from the injected rng.

pub mod article;
pub mod compound;
pub mod derivation;
pub mod detective;
pub mod dictation;
pub mod gap_fill;
pub mod rule_discovery;
pub mod sorting;
pub mod syllable;
pub mod word_family;

use rand::Rng;

use crate::catalog::{self, ExerciseTemplate};
use crate::types::{ErrorBucket, ExerciseType, GeneratedExercise, Task};
use crate::wordlist::{self, WordlistEntry};

/// Exercises generated per bucket unless the caller asks for another count.
pub const DEFAULT_EXERCISE_COUNT: usize = 3;

/// Build the exercises for one bucket.
///
/// Returns an empty list when no curated wordlist exists for the bucket's
/// taxonomy slot. For DaZ learners only DaZ-friendly templates are used; the
/// surviving candidates are truncated to `exercise_count` in catalog order.
pub fn generate<R: Rng>(
    bucket: &ErrorBucket,
    daz_student: bool,
    exercise_count: usize,
    rng: &mut R,
) -> Vec<GeneratedExercise> {
    let Some(entry) = wordlist::find(bucket.category, bucket.subtype) else {
        return Vec::new();
    };

    let mut candidates = catalog::types_for_subtype(bucket.subtype);
    if daz_student {
        candidates.retain(|t| t.daz_friendly);
    }
    candidates.truncate(exercise_count);

    let mut exercises = Vec::with_capacity(candidates.len());
    for template in candidates {
        exercises.push(build(template, bucket, entry, daz_student, rng));
    }
    exercises
}

fn build<R: Rng>(
    template: &ExerciseTemplate,
    bucket: &ErrorBucket,
    entry: &WordlistEntry,
    daz_student: bool,
    rng: &mut R,
) -> GeneratedExercise {
    match template.exercise_type {
        ExerciseType::GapFill => gap_fill::build(template, bucket, entry, daz_student),
        ExerciseType::WordFamily => word_family::build(template, entry),
        ExerciseType::Sorting => sorting::build(template, bucket, entry),
        ExerciseType::DerivationTrick => derivation::build(template, entry),
        ExerciseType::ErrorDetective => detective::build(template, entry, rng),
        ExerciseType::ArticleTest => article::build(template, entry),
        ExerciseType::SyllableClapping => syllable::build(template, bucket, entry, daz_student),
        ExerciseType::DictationPrep => dictation::build(template, bucket, entry),
        ExerciseType::CompoundBuilder => compound::build(template, entry),
        ExerciseType::RuleDiscovery => rule_discovery::build(template, bucket, entry),
    }
}

/// Assemble the uniform exercise value from a template and built tasks.
pub(crate) fn assemble(
    template: &ExerciseTemplate,
    tasks: Vec<Task>,
    hints: Vec<String>,
    rules: Vec<String>,
) -> GeneratedExercise {
    GeneratedExercise {
        title: template.name.to_string(),
        exercise_type: template.exercise_type,
        instructions: template.instructions.to_string(),
        tasks,
        difficulty: template.difficulty,
        didactic_goal: template.goal.to_string(),
        daz_friendly: template.daz_friendly,
        hints,
        rules,
    }
}

pub(crate) fn task(number: usize, content: String) -> Task {
    Task {
        number,
        content,
        solution: None,
        explanation: None,
    }
}

/// Practice words for a bucket: the learner's own target words first (in
/// first-error order, deduplicated), padded with curated words up to `max`.
pub(crate) fn practice_words(bucket: &ErrorBucket, entry: &WordlistEntry, max: usize) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for word in bucket
        .target_words
        .iter()
        .map(|w| w.as_str())
        .chain(entry.words.iter().copied())
    {
        if words.len() == max {
            break;
        }
        if !words.iter().any(|w| w == word) {
            words.push(word.to_string());
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::types::{Category, ErrorObservation, Subtype};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    fn observe(incorrect: &str, correct: &str) -> ErrorObservation {
        ErrorObservation::new(Uuid::nil(), incorrect, correct)
    }

    fn bucket_for(incorrect: &str, correct: &str) -> ErrorBucket {
        classify(&[observe(incorrect, correct)]).remove(0)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn bucket_without_wordlist_generates_nothing() {
        let bucket = bucket_for("Tach", "Dach");
        assert_eq!(bucket.subtype, Subtype::VoicedVoicelessConfusion);
        let exercises = generate(&bucket, false, DEFAULT_EXERCISE_COUNT, &mut rng());
        assert!(exercises.is_empty());
    }

    #[test]
    fn never_more_exercises_than_requested() {
        let bucket = bucket_for("komen", "kommen");
        for count in 0..=5 {
            let exercises = generate(&bucket, false, count, &mut rng());
            assert!(exercises.len() <= count);
        }
    }

    #[test]
    fn daz_students_only_get_daz_friendly_exercises() {
        let bucket = bucket_for("komen", "kommen");
        let exercises = generate(&bucket, true, DEFAULT_EXERCISE_COUNT, &mut rng());
        assert!(!exercises.is_empty());
        assert!(exercises.iter().all(|e| e.daz_friendly));
    }

    #[test]
    fn truncation_follows_catalog_order() {
        let bucket = bucket_for("Stul", "Stuhl");
        let exercises = generate(&bucket, false, 1, &mut rng());
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].exercise_type, ExerciseType::GapFill);
    }

    #[test]
    fn generation_is_deterministic_with_fixed_seed() {
        let bucket = bucket_for("komen", "kommen");
        let mut first_rng = StdRng::seed_from_u64(42);
        let mut second_rng = StdRng::seed_from_u64(42);
        let first = generate(&bucket, false, DEFAULT_EXERCISE_COUNT, &mut first_rng);
        let second = generate(&bucket, false, DEFAULT_EXERCISE_COUNT, &mut second_rng);
        assert_eq!(first, second);
    }

    #[test]
    fn practice_words_put_learner_words_first() {
        let bucket = classify(&[
            observe("Zal", "Zahl"),
            observe("Zal", "Zahl"),
            observe("Stul", "Stuhl"),
        ])
        .remove(0);
        let entry = wordlist::find(Category::Orthographic, Subtype::LengthMarking)
            .expect("curated entry");
        let words = practice_words(&bucket, entry, 4);
        assert_eq!(words[0], "Zahl");
        assert_eq!(words[1], "Stuhl");
        assert_eq!(words.len(), 4);
    }
}
