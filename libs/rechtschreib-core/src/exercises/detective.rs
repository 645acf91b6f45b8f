//! Error-detective builder: judge shuffled correct and misspelled words.

use rand::seq::SliceRandom;
use rand::Rng;

use super::assemble;
use crate::catalog::ExerciseTemplate;
use crate::types::{GeneratedExercise, Task};
use crate::wordlist::WordlistEntry;

const MAX_CORRECT: usize = 5;
const MAX_MISTAKES: usize = 5;

struct DetectiveItem {
    word: String,
    is_correct: bool,
    correction: Option<String>,
}

/// The only builder with non-deterministic output: the item order comes from
/// the injected rng so tests can pin it with a seed.
pub fn build<R: Rng>(
    template: &ExerciseTemplate,
    entry: &WordlistEntry,
    rng: &mut R,
) -> GeneratedExercise {
    let mut items: Vec<DetectiveItem> = Vec::new();

    for word in entry.words.iter().take(MAX_CORRECT) {
        items.push(DetectiveItem {
            word: (*word).to_string(),
            is_correct: true,
            correction: None,
        });
    }
    for (i, mistake) in entry.common_mistakes.iter().take(MAX_MISTAKES).enumerate() {
        items.push(DetectiveItem {
            word: (*mistake).to_string(),
            is_correct: false,
            // Mistakes are curated index-parallel to their corrected words.
            correction: entry.words.get(i).map(|w| (*w).to_string()),
        });
    }

    items.shuffle(rng);

    let tasks = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let content = if item.is_correct {
                format!("\"{}\" – richtig oder falsch?", item.word)
            } else {
                format!(
                    "\"{}\" – richtig oder falsch? Schreibe die richtige Form daneben.",
                    item.word
                )
            };
            let solution = if item.is_correct {
                Some("richtig".to_string())
            } else {
                match item.correction {
                    Some(correction) => Some(format!("falsch – richtig: {}", correction)),
                    None => Some("falsch".to_string()),
                }
            };
            Task {
                number: i + 1,
                content,
                solution,
                explanation: None,
            }
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
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn template() -> &'static ExerciseTemplate {
        catalog::template_for(ExerciseType::ErrorDetective).expect("registered template")
    }

    fn entry() -> &'static WordlistEntry {
        wordlist::find(Category::Orthographic, Subtype::Sharpening).expect("curated entry")
    }

    #[test]
    fn interleaves_correct_words_and_mistakes() {
        let mut rng = StdRng::seed_from_u64(1);
        let exercise = build(template(), entry(), &mut rng);
        assert_eq!(exercise.tasks.len(), MAX_CORRECT + MAX_MISTAKES);
        let wrong = exercise
            .tasks
            .iter()
            .filter(|t| t.content.contains("richtige Form"))
            .count();
        assert_eq!(wrong, MAX_MISTAKES);
    }

    #[test]
    fn misspelled_items_carry_their_correction() {
        let mut rng = StdRng::seed_from_u64(1);
        let exercise = build(template(), entry(), &mut rng);
        let task = exercise
            .tasks
            .iter()
            .find(|t| t.content.contains("komen"))
            .expect("curated mistake present");
        assert_eq!(task.solution.as_deref(), Some("falsch – richtig: kommen"));
    }

    #[test]
    fn shuffle_is_reproducible_per_seed() {
        let mut first_rng = StdRng::seed_from_u64(99);
        let mut second_rng = StdRng::seed_from_u64(99);
        let first = build(template(), entry(), &mut first_rng);
        let second = build(template(), entry(), &mut second_rng);
        assert_eq!(first, second);
    }
}
