//! Dictation-preparation builder: a fixed four-step training routine.

use super::{assemble, practice_words, task};
use crate::catalog::ExerciseTemplate;
use crate::types::{ErrorBucket, GeneratedExercise};
use crate::wordlist::WordlistEntry;

const MAX_WORDS: usize = 10;

/// The four steps are the same for every subtype; only the word material
/// changes.
pub fn build(
    template: &ExerciseTemplate,
    bucket: &ErrorBucket,
    entry: &WordlistEntry,
) -> GeneratedExercise {
    let words = practice_words(bucket, entry, MAX_WORDS).join(", ");

    let tasks = vec![
        task(1, format!("Lies die Übungswörter aufmerksam: {}", words)),
        task(2, "Markiere in jedem Wort die schwierige Stelle farbig.".to_string()),
        task(3, "Decke die Wörter zu und schreibe sie auswendig auf.".to_string()),
        task(
            4,
            "Decke auf, vergleiche Buchstabe für Buchstabe und verbessere.".to_string(),
        ),
    ];

    assemble(template, tasks, Vec::new(), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::classifier::classify;
    use crate::types::{Category, ErrorObservation, ExerciseType, Subtype};
    use crate::wordlist;
    use uuid::Uuid;

    #[test]
    fn four_steps_with_practice_words_in_step_one() {
        let template =
            catalog::template_for(ExerciseType::DictationPrep).expect("registered template");
        let entry = wordlist::find(Category::Orthographic, Subtype::LengthMarking)
            .expect("curated entry");
        let bucket = classify(&[ErrorObservation::new(Uuid::nil(), "Zal", "Zahl")]).remove(0);

        let exercise = build(template, &bucket, entry);
        assert_eq!(exercise.tasks.len(), 4);
        assert!(exercise.tasks[0].content.contains("Zahl"));
        assert!(exercise.tasks[3].content.contains("vergleiche"));
    }
}
