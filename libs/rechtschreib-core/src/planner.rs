//! Top-level orchestration: one learner's buckets become a practice plan.

use rand::Rng;

use crate::error::{PlanError, Result};
use crate::exercises::{self, DEFAULT_EXERCISE_COUNT};
use crate::types::{ErrorBucket, ErrorFocus, GeneratedExercise, WorksheetPlan};

/// Assemble the practice plan for one learner.
///
/// `buckets` must not be empty: without classified errors there is no
/// dominant pattern to focus on, and the caller gets `PlanError::NoErrorData`
/// instead of an arbitrary plan.
pub fn plan<R: Rng>(
    learner_name: &str,
    buckets: &[ErrorBucket],
    daz_student: bool,
    rng: &mut R,
) -> Result<WorksheetPlan> {
    let dominant = dominant_bucket(buckets).ok_or(PlanError::NoErrorData)?;

    let mut generated: Vec<GeneratedExercise> = Vec::new();
    for bucket in buckets {
        generated.extend(exercises::generate(
            bucket,
            daz_student,
            DEFAULT_EXERCISE_COUNT,
            rng,
        ));
    }

    let mut notes: Vec<String> = dominant.hints.clone();
    notes.push(format!("Förderschwerpunkt: {}", dominant.description));
    notes.push(format!(
        "{} Fehler wurden diesem Schwerpunkt zugeordnet.",
        dominant.error_count()
    ));
    if daz_student {
        notes.push(
            "DaZ: Es wurden strukturierte, mehrkanalige Übungsformate ausgewählt.".to_string(),
        );
    }

    Ok(WorksheetPlan {
        learner_name: learner_name.to_string(),
        focus: ErrorFocus {
            category: dominant.category,
            subtype: dominant.subtype,
            description: dominant.description.clone(),
            error_count: dominant.error_count(),
        },
        exercises: generated,
        notes,
        daz_student,
    })
}

/// The bucket with the most observations; the first bucket wins ties.
fn dominant_bucket(buckets: &[ErrorBucket]) -> Option<&ErrorBucket> {
    buckets.iter().reduce(|best, bucket| {
        if bucket.error_count() > best.error_count() {
            bucket
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::types::{ErrorObservation, ExerciseType, Subtype};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    fn observe(incorrect: &str, correct: &str) -> ErrorObservation {
        ErrorObservation::new(Uuid::nil(), incorrect, correct)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn empty_buckets_are_rejected() {
        let result = plan("Mia", &[], false, &mut rng());
        assert!(matches!(result, Err(PlanError::NoErrorData)));
    }

    #[test]
    fn dominant_bucket_has_most_observations() {
        let buckets = classify(&[
            observe("Stul", "Stuhl"),
            observe("Hunt", "Hund"),
            observe("Berk", "Berg"),
        ]);
        let sheet = plan("Mia", &buckets, false, &mut rng()).expect("plan");
        assert_eq!(sheet.focus.subtype, Subtype::FinalDevoicing);
        assert_eq!(sheet.focus.error_count, 2);
    }

    #[test]
    fn first_bucket_wins_count_ties() {
        let buckets = classify(&[observe("Stul", "Stuhl"), observe("Hunt", "Hund")]);
        let sheet = plan("Mia", &buckets, false, &mut rng()).expect("plan");
        assert_eq!(sheet.focus.subtype, Subtype::LengthMarking);
    }

    #[test]
    fn exercises_follow_bucket_order() {
        let buckets = classify(&[observe("Stul", "Stuhl"), observe("Hunt", "Hund")]);
        let sheet = plan("Mia", &buckets, false, &mut rng()).expect("plan");
        assert_eq!(sheet.exercises.len(), 6);
        assert_eq!(sheet.exercises[0].exercise_type, ExerciseType::GapFill);
        assert_eq!(sheet.exercises[3].exercise_type, ExerciseType::WordFamily);
    }

    #[test]
    fn notes_summarize_the_focus() {
        let buckets = classify(&[observe("Hunt", "Hund")]);
        let sheet = plan("Mia", &buckets, false, &mut rng()).expect("plan");
        assert!(sheet
            .notes
            .iter()
            .any(|n| n.starts_with("Förderschwerpunkt:")));
        assert!(sheet.notes.iter().any(|n| n.contains("1 Fehler")));
        assert!(!sheet.notes.iter().any(|n| n.starts_with("DaZ:")));
    }

    #[test]
    fn daz_plans_carry_the_daz_note() {
        let buckets = classify(&[observe("Hunt", "Hund")]);
        let sheet = plan("Mia", &buckets, true, &mut rng()).expect("plan");
        assert!(sheet.daz_student);
        assert!(sheet.notes.iter().any(|n| n.starts_with("DaZ:")));
        assert!(sheet.exercises.iter().all(|e| e.daz_friendly));
    }

    #[test]
    fn planning_is_idempotent_with_fixed_seed() {
        let buckets = classify(&[
            observe("komen", "kommen"),
            observe("Stul", "Stuhl"),
            observe("Hunt", "Hund"),
        ]);
        let first = plan("Mia", &buckets, false, &mut StdRng::seed_from_u64(5)).expect("plan");
        let second = plan("Mia", &buckets, false, &mut StdRng::seed_from_u64(5)).expect("plan");
        assert_eq!(first, second);
    }

    #[test]
    fn plan_round_trips_through_json() {
        let buckets = classify(&[observe("Haus Tür", "Haustür")]);
        let sheet = plan("Mia", &buckets, false, &mut rng()).expect("plan");
        let json = serde_json::to_string(&sheet).expect("serialize");
        let restored: WorksheetPlan = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(sheet, restored);
    }
}
