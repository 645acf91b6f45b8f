//! Word-family builder: work the shared stem of related word forms.

use super::{assemble, task};
use crate::catalog::ExerciseTemplate;
use crate::types::GeneratedExercise;
use crate::wordlist::WordlistEntry;

const MAX_FAMILIES: usize = 6;
const MAX_WORDS: usize = 8;

pub fn build(template: &ExerciseTemplate, entry: &WordlistEntry) -> GeneratedExercise {
    let tasks = if entry.word_families.is_empty() {
        // No curated families: let the learner collect related forms.
        entry
            .words
            .iter()
            .take(MAX_WORDS)
            .enumerate()
            .map(|(i, word)| {
                task(
                    i + 1,
                    format!("Finde zwei oder drei verwandte Wörter zu \"{}\".", word),
                )
            })
            .collect()
    } else {
        entry
            .word_families
            .iter()
            .take(MAX_FAMILIES)
            .enumerate()
            .map(|(i, family)| {
                let base = family.first().copied().unwrap_or("");
                let related = family.iter().skip(1).copied().collect::<Vec<_>>().join(", ");
                task(
                    i + 1,
                    format!(
                        "{} – {}: Markiere den gemeinsamen Wortstamm.",
                        base, related
                    ),
                )
            })
            .collect()
    };

    assemble(template, tasks, Vec::new(), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::types::{Category, ExerciseType, Subtype};
    use crate::wordlist;

    fn template() -> &'static ExerciseTemplate {
        catalog::template_for(ExerciseType::WordFamily).expect("registered template")
    }

    #[test]
    fn curated_families_become_stem_tasks() {
        let entry = wordlist::find(Category::Morphematic, Subtype::FinalDevoicing)
            .expect("curated entry");
        let exercise = build(template(), entry);
        assert_eq!(exercise.tasks.len(), MAX_FAMILIES);
        assert!(exercise.tasks[0].content.starts_with("Hund – Hunde, Hündin"));
    }

    #[test]
    fn missing_families_fall_back_to_collecting_forms() {
        let entry = wordlist::find(Category::Orthographic, Subtype::Sharpening)
            .expect("curated entry");
        let exercise = build(template(), entry);
        assert_eq!(exercise.tasks.len(), MAX_WORDS);
        assert!(exercise.tasks[0].content.contains("verwandte Wörter"));
    }
}
