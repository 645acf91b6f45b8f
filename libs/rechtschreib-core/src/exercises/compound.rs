//! Compound-builder: combine two word parts into one compound noun.

use super::assemble;
use crate::catalog::ExerciseTemplate;
use crate::types::{GeneratedExercise, Task};
use crate::wordlist::WordlistEntry;

const MAX_TASKS: usize = 8;

/// Hardcoded fallback pairs used when the slot has no curated triples.
const FALLBACK: &[(&str, &str, &str)] = &[
    ("Haus", "Tür", "Haustür"),
    ("Fuß", "Ball", "Fußball"),
    ("Schul", "Hof", "Schulhof"),
];

pub fn build(template: &ExerciseTemplate, entry: &WordlistEntry) -> GeneratedExercise {
    let tasks: Vec<Task> = if entry.word_families.is_empty() {
        FALLBACK
            .iter()
            .enumerate()
            .map(|(i, &(first, second, compound))| {
                compound_task(i + 1, first, second, compound.to_string())
            })
            .collect()
    } else {
        entry
            .word_families
            .iter()
            .filter(|family| family.len() >= 2)
            .take(MAX_TASKS)
            .enumerate()
            .map(|(i, family)| {
                let solution = match family.get(2) {
                    Some(compound) => (*compound).to_string(),
                    None => format!("{}{}", family[0], family[1].to_lowercase()),
                };
                compound_task(i + 1, family[0], family[1], solution)
            })
            .collect()
    };

    assemble(template, tasks, Vec::new(), Vec::new())
}

fn compound_task(number: usize, first: &str, second: &str, solution: String) -> Task {
    Task {
        number,
        content: format!("{} + {} = ____________", first, second),
        solution: Some(solution),
        explanation: None,
    }
}
