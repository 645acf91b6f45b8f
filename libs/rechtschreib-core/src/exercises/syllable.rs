//! Syllable-clapping builder: chunk words for rhythmic spelling.

use super::{assemble, practice_words, task};
use crate::catalog::ExerciseTemplate;
use crate::types::{ErrorBucket, GeneratedExercise};
use crate::wordlist::WordlistEntry;

const MAX_WORDS: usize = 8;
const CHUNK_LEN: usize = 3;

pub fn build(
    template: &ExerciseTemplate,
    bucket: &ErrorBucket,
    entry: &WordlistEntry,
    daz_student: bool,
) -> GeneratedExercise {
    let tasks = practice_words(bucket, entry, MAX_WORDS)
        .iter()
        .enumerate()
        .map(|(i, word)| task(i + 1, format!("Klatsche und sprich: {}", chunked(word))))
        .collect();

    let hints = if daz_student {
        vec![
            "Klatsche bei jedem Wortteil einmal in die Hände.".to_string(),
            "Sprich jeden Wortteil laut und deutlich mit.".to_string(),
        ]
    } else {
        Vec::new()
    };

    assemble(template, tasks, hints, Vec::new())
}

/// Fixed three-letter chunks joined by a separator. Not linguistic syllable
/// division; the rhythm is what matters here.
fn chunked(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    chars
        .chunks(CHUNK_LEN)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("-")
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
    fn words_are_chunked_in_threes() {
        assert_eq!(chunked("Fahrrad"), "Fah-rra-d");
        assert_eq!(chunked("Ei"), "Ei");
    }

    #[test]
    fn daz_learners_get_multisensory_hints() {
        let template =
            catalog::template_for(ExerciseType::SyllableClapping).expect("registered template");
        let entry = wordlist::find(Category::Alphabetic, Subtype::VowelOmission)
            .expect("curated entry");
        let bucket = classify(&[ErrorObservation::new(Uuid::nil(), "Fhrrd", "Fahrrad")])
            .remove(0);

        let exercise = build(template, &bucket, entry, true);
        assert_eq!(exercise.hints.len(), 2);
        assert_eq!(exercise.tasks.len(), MAX_WORDS);

        let plain = build(template, &bucket, entry, false);
        assert!(plain.hints.is_empty());
    }
}
