//! Sorting builder: group words by their spelling pattern.

use super::{assemble, practice_words, task};
use crate::catalog::ExerciseTemplate;
use crate::types::{ErrorBucket, GeneratedExercise, Subtype};
use crate::wordlist::WordlistEntry;

const MAX_WORDS: usize = 12;

pub fn build(
    template: &ExerciseTemplate,
    bucket: &ErrorBucket,
    entry: &WordlistEntry,
) -> GeneratedExercise {
    let groups = groups_for(bucket.subtype);
    let words = practice_words(bucket, entry, MAX_WORDS).join(", ");

    let mut tasks = vec![task(
        1,
        format!("Sortiere die Wörter in die Gruppen: {}", words),
    )];
    for (i, group) in groups.iter().enumerate() {
        tasks.push(task(i + 2, format!("{}: ____________________", group)));
    }

    assemble(template, tasks, Vec::new(), Vec::new())
}

/// Sorting groups per subtype; subtypes without a dedicated mapping get a
/// generic two-way split.
fn groups_for(subtype: Subtype) -> &'static [&'static str] {
    match subtype {
        Subtype::LengthMarking => &["mit Dehnungs-h", "mit ie", "ohne Längenzeichen"],
        Subtype::Sharpening => &["mit Doppelkonsonant", "mit ck", "mit tz"],
        Subtype::Capitalization => &["Nomen (groß)", "keine Nomen (klein)"],
        _ => &["Gruppe A", "Gruppe B"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::classifier::classify;
    use crate::types::{Category, ErrorObservation, ExerciseType};
    use crate::wordlist;
    use uuid::Uuid;

    #[test]
    fn one_listing_task_plus_one_slot_per_group() {
        let template =
            catalog::template_for(ExerciseType::Sorting).expect("registered template");
        let entry = wordlist::find(Category::Orthographic, Subtype::Sharpening)
            .expect("curated entry");
        let bucket = classify(&[ErrorObservation::new(Uuid::nil(), "komen", "kommen")])
            .remove(0);
        let exercise = build(template, &bucket, entry);
        assert_eq!(exercise.tasks.len(), 1 + groups_for(Subtype::Sharpening).len());
        assert!(exercise.tasks[0].content.contains("kommen"));
        assert!(exercise.tasks[1].content.starts_with("mit Doppelkonsonant"));
    }

    #[test]
    fn unmapped_subtypes_get_generic_groups() {
        assert_eq!(groups_for(Subtype::VowelOmission), &["Gruppe A", "Gruppe B"][..]);
    }
}
