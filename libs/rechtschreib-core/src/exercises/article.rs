//! Article-test builder: find the nouns and capitalize them.

use super::assemble;
use crate::catalog::ExerciseTemplate;
use crate::types::{GeneratedExercise, Task};
use crate::wordlist::WordlistEntry;

const MAX_WORDS: usize = 10;

pub fn build(template: &ExerciseTemplate, entry: &WordlistEntry) -> GeneratedExercise {
    // The curated list mixes nouns and other word classes; capitalization in
    // the list is the ground truth.
    let tasks = entry
        .words
        .iter()
        .take(MAX_WORDS)
        .enumerate()
        .map(|(i, word)| {
            let is_noun = word.chars().next().is_some_and(|c| c.is_uppercase());
            Task {
                number: i + 1,
                content: format!(
                    "Ist \"{}\" ein Nomen? Wenn ja: Schreibe es groß und mit Artikel (der, die, das).",
                    word.to_lowercase()
                ),
                solution: is_noun.then(|| (*word).to_string()),
                explanation: None,
            }
        })
        .collect();

    assemble(template, tasks, Vec::new(), Vec::new())
}
