//! Derivation-trick builder: lengthen a word to hear the right letter.

use super::assemble;
use crate::catalog::ExerciseTemplate;
use crate::types::{GeneratedExercise, Task};
use crate::wordlist::WordlistEntry;

const MAX_WORDS: usize = 10;

pub fn build(template: &ExerciseTemplate, entry: &WordlistEntry) -> GeneratedExercise {
    let tasks = entry
        .words
        .iter()
        .take(MAX_WORDS)
        .enumerate()
        .map(|(i, word)| Task {
            number: i + 1,
            content: format!("Verlängere das Wort und höre genau hin: {} → ____", word),
            // The solution comes from the family at the same list position,
            // not from the family whose base form matches the word.
            solution: entry
                .word_families
                .get(i)
                .and_then(|family| family.get(1))
                .map(|form| (*form).to_string()),
            explanation: None,
        })
        .collect();

    assemble(template, tasks, Vec::new(), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::types::{Category, ExerciseType, Subtype};
    use crate::wordlist;

    fn template() -> &'static ExerciseTemplate {
        catalog::template_for(ExerciseType::DerivationTrick).expect("registered template")
    }

    #[test]
    fn one_task_per_curated_word() {
        let entry = wordlist::find(Category::Morphematic, Subtype::FinalDevoicing)
            .expect("curated entry");
        let exercise = build(template(), entry);
        assert_eq!(exercise.tasks.len(), MAX_WORDS);
        assert!(exercise.tasks[0].content.contains("Hund"));
    }

    #[test]
    fn solution_is_taken_by_list_position() {
        let entry = wordlist::find(Category::Morphematic, Subtype::FinalDevoicing)
            .expect("curated entry");
        let exercise = build(template(), entry);
        // Word i is solved with family i's second form, whatever that family is.
        for (i, task) in exercise.tasks.iter().enumerate() {
            let expected = entry.word_families.get(i).and_then(|f| f.get(1)).copied();
            assert_eq!(task.solution.as_deref(), expected);
        }
    }

    #[test]
    fn missing_families_leave_solutions_empty() {
        let entry = wordlist::find(Category::Morphematic, Subtype::UmlautDerivation)
            .expect("curated entry");
        let exercise = build(template(), entry);
        assert!(exercise.tasks.iter().all(|t| t.solution.is_some()));

        let sparse = wordlist::find(Category::Orthographic, Subtype::Sharpening)
            .expect("curated entry");
        let exercise = build(template(), sparse);
        assert!(exercise.tasks.iter().all(|t| t.solution.is_none()));
    }
}
