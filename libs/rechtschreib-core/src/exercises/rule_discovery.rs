//! Rule-discovery builder: a four-step inquiry ending in a self-found rule.

use super::{assemble, practice_words, task};
use crate::catalog::ExerciseTemplate;
use crate::types::{ErrorBucket, GeneratedExercise, Task};
use crate::wordlist::WordlistEntry;

const MAX_WORDS: usize = 12;

pub fn build(
    template: &ExerciseTemplate,
    bucket: &ErrorBucket,
    entry: &WordlistEntry,
) -> GeneratedExercise {
    let words = practice_words(bucket, entry, MAX_WORDS).join(", ");

    let rule_task = match entry.rules.first() {
        Some(rule) => Task {
            number: 3,
            content: "Formuliere die Regel in deinen eigenen Worten.".to_string(),
            solution: Some((*rule).to_string()),
            explanation: None,
        },
        None => task(
            3,
            "Formuliere eine eigene Regel: ____________________".to_string(),
        ),
    };

    let tasks = vec![
        task(1, format!("Schau dir die Wörter genau an: {}", words)),
        task(
            2,
            "Was haben alle Wörter gemeinsam? Besprich dich mit deinem Nachbarn.".to_string(),
        ),
        rule_task,
        task(4, "Finde drei weitere Wörter, die zu deiner Regel passen.".to_string()),
    ];

    let rules = entry.rules.iter().map(|r| (*r).to_string()).collect();
    assemble(template, tasks, Vec::new(), rules)
}
