//! Primary-classification pick and per-learner bucket aggregation.

use std::cmp::Ordering;

use crate::analyzer;
use crate::catalog;
use crate::types::{ErrorBucket, ErrorObservation, Subtype};

/// Group observations into buckets keyed by category and subtype.
///
/// For each observation the analyzer candidates are sorted by confidence
/// descending; the sort is stable, so ties fall back to rule declaration
/// order. Buckets appear in first-seen order and every observation lands in
/// exactly one bucket.
pub fn classify(observations: &[ErrorObservation]) -> Vec<ErrorBucket> {
    let mut buckets: Vec<ErrorBucket> = Vec::new();

    for observation in observations {
        let mut candidates = analyzer::analyze(observation);
        candidates.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
        });
        let primary = &candidates[0];

        let index = match buckets
            .iter()
            .position(|b| b.category == primary.category && b.subtype == primary.subtype)
        {
            Some(i) => i,
            None => {
                buckets.push(new_bucket(primary.subtype));
                buckets.len() - 1
            }
        };

        buckets[index].observations.push(observation.clone());
        buckets[index]
            .target_words
            .push(observation.correct_word.clone());
    }

    buckets
}

/// Bucket shell with metadata from the static profile tables. Description,
/// hints and suggested exercise types are set once here and never re-derived.
fn new_bucket(subtype: Subtype) -> ErrorBucket {
    let (description, hints) = profile(subtype);
    ErrorBucket {
        category: subtype.category(),
        subtype,
        description: description.to_string(),
        observations: Vec::new(),
        target_words: Vec::new(),
        hints: hints.iter().map(|h| h.to_string()).collect(),
        suggested_exercises: catalog::types_for_subtype(subtype)
            .iter()
            .map(|t| t.exercise_type)
            .collect(),
    }
}

/// German description and pedagogical hints per subtype.
fn profile(subtype: Subtype) -> (&'static str, &'static [&'static str]) {
    match subtype {
        Subtype::VowelOmission => (
            "Vokale werden beim Schreiben ausgelassen",
            &[
                "Wörter silbenweise mitsprechen und schwingen",
                "Jede Silbe braucht einen Vokal – Silbenbögen einzeichnen lassen",
            ],
        ),
        Subtype::ConsonantClusterReduction => (
            "Konsonantenhäufungen werden verkürzt",
            &[
                "Wortanfänge gedehnt vorsprechen und nachsprechen lassen",
                "Anlaute mit Lautgebärden oder Spiegelübungen sichern",
            ],
        ),
        Subtype::VoicedVoicelessConfusion => (
            "Harte und weiche Konsonanten (b/p, d/t, g/k) werden verwechselt",
            &[
                "Minimalpaare hörend unterscheiden üben",
                "Die Handprobe am Kehlkopf zeigt stimmhaft und stimmlos",
            ],
        ),
        Subtype::LengthMarking => (
            "Längenzeichen (Dehnungs-h, ie) fehlen oder stehen falsch",
            &[
                "Lange und kurze Vokale bewusst gegenüberstellen",
                "Merkwörter mit Dehnungs-h in einer eigenen Kartei sammeln",
            ],
        ),
        Subtype::Sharpening => (
            "Die Schärfung nach kurzem Vokal wird nicht markiert",
            &[
                "Kurze Vokale klatschen und die Doppelkonsonanten markieren",
                "Die Regel über das Silbengelenk gemeinsam erarbeiten",
            ],
        ),
        Subtype::SpecialGrapheme => (
            "Besondere Grapheme (v, ß, qu, x, y) werden lautgetreu ersetzt",
            &[
                "Merkwörter mit besonderen Graphemen regelmäßig wiederholen",
                "Wörter mit v und ß in einer Lernkartei sammeln",
            ],
        ),
        Subtype::FinalDevoicing => (
            "Auslautverhärtung: am Wortende wird t/k/p statt d/g/b geschrieben",
            &[
                "Den Verlängerungstrick einführen: Hund – Hunde",
                "Verwandte Wortformen suchen, in denen der Laut hörbar wird",
            ],
        ),
        Subtype::UmlautDerivation => (
            "Umlaute werden nicht vom verwandten Wort abgeleitet",
            &[
                "Grundform und abgeleitete Form nebeneinanderstellen",
                "Wortfamilien bilden: Baum – Bäume, Haus – Häuser",
            ],
        ),
        Subtype::MorphemeEnding => (
            "Unbetonte Endungen (-er, -el, -en, ...) werden lautgetreu geschrieben",
            &[
                "Endungen überdeutlich aussprechen und vergleichen",
                "Wörter mit gleicher Endung in Gruppen sortieren",
            ],
        ),
        Subtype::Capitalization => (
            "Nomen werden kleingeschrieben",
            &[
                "Die Artikelprobe als festes Werkzeug einüben",
                "Nomen in Texten farbig markieren lassen",
            ],
        ),
        Subtype::Compounding => (
            "Zusammengesetzte Nomen werden getrennt geschrieben",
            &[
                "Zusammengesetzte Nomen aus Wortbausteinen legen lassen",
                "Das Grundwort am Ende bestimmt Artikel und Bedeutung",
            ],
        ),
        Subtype::OpenClosedCompound => (
            "Getrennt zu schreibende Wortgruppen werden zusammengezogen",
            &[
                "Wortgruppen und Komposita gegenüberstellen",
                "Die Probe mit eingeschobenen Wörtern anwenden",
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn observe(incorrect: &str, correct: &str) -> ErrorObservation {
        ErrorObservation::new(Uuid::nil(), incorrect, correct)
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        assert!(classify(&[]).is_empty());
    }

    #[test]
    fn every_observation_lands_in_exactly_one_bucket() {
        let observations = vec![
            observe("Hunt", "Hund"),
            observe("Stul", "Stuhl"),
            observe("Berk", "Berg"),
            observe("komen", "kommen"),
            observe("hund", "Hund"),
            observe("zzz", "qqq"),
        ];
        let buckets = classify(&observations);
        let total: usize = buckets.iter().map(|b| b.observations.len()).sum();
        assert_eq!(total, observations.len());
    }

    #[test]
    fn same_pattern_grows_one_bucket() {
        let observations = vec![
            observe("Hunt", "Hund"),
            observe("Berk", "Berg"),
            observe("Walt", "Wald"),
        ];
        let buckets = classify(&observations);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].subtype, Subtype::FinalDevoicing);
        assert_eq!(buckets[0].observations.len(), 3);
        assert_eq!(buckets[0].target_words, vec!["Hund", "Berg", "Wald"]);
    }

    #[test]
    fn target_words_keep_duplicates() {
        let observations = vec![observe("Hunt", "Hund"), observe("Hunt", "Hund")];
        let buckets = classify(&observations);
        assert_eq!(buckets[0].target_words, vec!["Hund", "Hund"]);
    }

    #[test]
    fn buckets_keep_first_seen_order() {
        let observations = vec![
            observe("Stul", "Stuhl"),
            observe("Hunt", "Hund"),
            observe("Zal", "Zahl"),
        ];
        let buckets = classify(&observations);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].subtype, Subtype::LengthMarking);
        assert_eq!(buckets[1].subtype, Subtype::FinalDevoicing);
        assert_eq!(buckets[0].observations.len(), 2);
    }

    #[test]
    fn bucket_metadata_comes_from_profile_tables() {
        let buckets = classify(&[observe("Hunt", "Hund")]);
        let bucket = &buckets[0];
        assert_eq!(bucket.category, Category::Morphematic);
        assert!(!bucket.description.is_empty());
        assert!(!bucket.hints.is_empty());
        assert!(!bucket.suggested_exercises.is_empty());
    }

    #[test]
    fn confidence_tie_breaks_by_rule_order() {
        // "Fan" vs "Fahne" fires vowel omission and length marking at 0.9
        // each; the earlier rule wins the tie.
        let buckets = classify(&[observe("Fan", "Fahne")]);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].subtype, Subtype::VowelOmission);
    }

    #[test]
    fn unclassifiable_observation_uses_fallback_bucket() {
        let buckets = classify(&[observe("zzz", "qqq")]);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].category, Category::Orthographic);
        assert_eq!(buckets[0].subtype, Subtype::SpecialGrapheme);
    }

    #[test]
    fn every_subtype_has_a_profile() {
        let all = [
            Subtype::VowelOmission,
            Subtype::ConsonantClusterReduction,
            Subtype::VoicedVoicelessConfusion,
            Subtype::LengthMarking,
            Subtype::Sharpening,
            Subtype::SpecialGrapheme,
            Subtype::FinalDevoicing,
            Subtype::UmlautDerivation,
            Subtype::MorphemeEnding,
            Subtype::Capitalization,
            Subtype::Compounding,
            Subtype::OpenClosedCompound,
        ];
        for subtype in all {
            let (description, hints) = profile(subtype);
            assert!(!description.is_empty());
            assert!(!hints.is_empty());
        }
    }
}
