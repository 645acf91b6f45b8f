//! Pattern rules classifying a single spelling mistake.
//!
//! `analyze` runs a fixed battery of independent rules over one observation.
//! Each rule is a pure function returning at most one candidate; the battery
//! order doubles as the tie-break when two candidates share a confidence.
//! A generic fallback guarantees a non-empty result.

use crate::types::{Category, ClassificationCandidate, ErrorObservation, Subtype};

type Rule = fn(&ErrorObservation) -> Option<ClassificationCandidate>;

/// Rule battery in declaration order.
const RULES: &[Rule] = &[
    vowel_omission,
    consonant_cluster_reduction,
    voiced_voiceless_confusion,
    length_marking,
    sharpening,
    special_grapheme,
    final_devoicing,
    umlaut_derivation,
    morpheme_ending,
    capitalization,
    compound_spelling,
];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'ä', 'ö', 'ü'];

/// Classify one observation. Always returns at least one candidate.
pub fn analyze(observation: &ErrorObservation) -> Vec<ClassificationCandidate> {
    let mut candidates: Vec<ClassificationCandidate> =
        RULES.iter().filter_map(|rule| rule(observation)).collect();

    if candidates.is_empty() {
        candidates.push(ClassificationCandidate {
            category: Category::Orthographic,
            subtype: Subtype::SpecialGrapheme,
            confidence: 0.5,
            evidence: format!(
                "Allgemeine Abweichung: \"{}\" statt \"{}\"",
                observation.incorrect_word, observation.correct_word
            ),
            daz_relevant: false,
        });
    }

    candidates
}

fn candidate(
    subtype: Subtype,
    confidence: f64,
    evidence: String,
    daz_relevant: bool,
) -> Option<ClassificationCandidate> {
    Some(ClassificationCandidate {
        category: subtype.category(),
        subtype,
        confidence,
        evidence,
        daz_relevant,
    })
}

fn vowel_count(word: &str) -> usize {
    word.chars().filter(|c| VOWELS.contains(c)).count()
}

fn chars_of(word: &str) -> Vec<char> {
    word.to_lowercase().chars().collect()
}

fn find_in(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&i| &haystack[i..i + needle.len()] == needle)
}

fn starts_at(haystack: &[char], index: usize, needle: &[char]) -> bool {
    index + needle.len() <= haystack.len() && &haystack[index..index + needle.len()] == needle
}

/// Rule 1: the incorrect word lost one or more vowels.
fn vowel_omission(obs: &ErrorObservation) -> Option<ClassificationCandidate> {
    let incorrect = obs.incorrect_word.to_lowercase();
    let correct = obs.correct_word.to_lowercase();
    if vowel_count(&incorrect) >= vowel_count(&correct) {
        return None;
    }
    candidate(
        Subtype::VowelOmission,
        0.9,
        format!(
            "In \"{}\" fehlen Vokale aus \"{}\"",
            obs.incorrect_word, obs.correct_word
        ),
        false,
    )
}

/// Rule 2: a known consonant cluster collapsed to fewer letters.
fn consonant_cluster_reduction(obs: &ErrorObservation) -> Option<ClassificationCandidate> {
    // Longer clusters first so "schw" is found before "sch".
    const CLUSTERS: &[&str] = &[
        "schw", "schl", "schr", "sch", "pfl", "str", "spr", "br", "dr", "fr", "gr", "kr", "tr",
        "bl", "fl", "gl", "kl", "pl", "pf", "st", "sp",
    ];

    let incorrect = chars_of(&obs.incorrect_word);
    let correct = chars_of(&obs.correct_word);
    if incorrect.len() >= correct.len() {
        return None;
    }

    for cluster in CLUSTERS {
        let cluster_chars: Vec<char> = cluster.chars().collect();
        let Some(pos) = find_in(&correct, &cluster_chars) else {
            continue;
        };
        if find_in(&incorrect, &cluster_chars).is_some() {
            continue;
        }

        let first = cluster_chars[0];
        let last = cluster_chars[cluster_chars.len() - 1];
        let reductions: [&[char]; 3] = [&[first, last], &[first], &[last]];
        for reduction in reductions {
            if starts_at(&incorrect, pos, reduction) {
                return candidate(
                    Subtype::ConsonantClusterReduction,
                    0.85,
                    format!(
                        "Konsonantenhäufung \"{}\" in \"{}\" wurde verkürzt",
                        cluster, obs.correct_word
                    ),
                    false,
                );
            }
        }
    }
    None
}

/// Rule 3: b/p, d/t or g/k substituted at a non-final position.
fn voiced_voiceless_confusion(obs: &ErrorObservation) -> Option<ClassificationCandidate> {
    let incorrect = chars_of(&obs.incorrect_word);
    let correct = chars_of(&obs.correct_word);
    if incorrect.len() != correct.len() || incorrect.len() < 2 {
        return None;
    }

    for i in 0..incorrect.len() - 1 {
        if incorrect[i] != correct[i] && is_voicing_pair(incorrect[i], correct[i]) {
            return candidate(
                Subtype::VoicedVoicelessConfusion,
                0.8,
                format!(
                    "\"{}\" und \"{}\" verwechseln einen harten und einen weichen Konsonanten",
                    incorrect[i], correct[i]
                ),
                true,
            );
        }
    }
    None
}

fn is_voicing_pair(a: char, b: char) -> bool {
    matches!(
        (a, b),
        ('b', 'p') | ('p', 'b') | ('d', 't') | ('t', 'd') | ('g', 'k') | ('k', 'g')
    )
}

/// Rule 4: silent length-marking h or ie missing, or an h added in excess.
fn length_marking(obs: &ErrorObservation) -> Option<ClassificationCandidate> {
    const LONG_VOWEL_H: &[&str] = &["ah", "äh", "eh", "ih", "oh", "öh", "uh", "üh"];

    let incorrect = obs.incorrect_word.to_lowercase();
    let correct = obs.correct_word.to_lowercase();

    for marked in LONG_VOWEL_H {
        let vowel = &marked[..marked.len() - 1];
        if correct.contains(marked) && !incorrect.contains(marked) && incorrect.contains(vowel) {
            return candidate(
                Subtype::LengthMarking,
                0.9,
                format!("Das Dehnungs-h aus \"{}\" fehlt", obs.correct_word),
                false,
            );
        }
    }

    if correct.contains("ie") && !incorrect.contains("ie") && incorrect.contains('i') {
        return candidate(
            Subtype::LengthMarking,
            0.85,
            format!("Das lange i in \"{}\" wird ie geschrieben", obs.correct_word),
            false,
        );
    }

    for marked in LONG_VOWEL_H {
        let vowel = &marked[..marked.len() - 1];
        if incorrect.contains(marked) && !correct.contains(marked) && correct.contains(vowel) {
            return candidate(
                Subtype::LengthMarking,
                0.85,
                format!("\"{}\" enthält ein überflüssiges Dehnungs-h", obs.incorrect_word),
                false,
            );
        }
    }

    None
}

/// Rule 5: a geminate, ck or tz from the correct word is not marked.
fn sharpening(obs: &ErrorObservation) -> Option<ClassificationCandidate> {
    let incorrect = obs.incorrect_word.to_lowercase();
    let correct_chars = chars_of(&obs.correct_word);

    for pair in correct_chars.windows(2) {
        if pair[0] == pair[1] && !VOWELS.contains(&pair[0]) && pair[0].is_alphabetic() {
            let geminate: String = pair.iter().collect();
            if !incorrect.contains(&geminate) && incorrect.contains(pair[0]) {
                return candidate(
                    Subtype::Sharpening,
                    0.9,
                    format!("Der Doppelkonsonant \"{}\" fehlt", geminate),
                    false,
                );
            }
        }
    }

    let correct = obs.correct_word.to_lowercase();
    for special in ["ck", "tz"] {
        if correct.contains(special) && !incorrect.contains(special) {
            return candidate(
                Subtype::Sharpening,
                0.85,
                format!("Die Schärfung \"{}\" fehlt", special),
                false,
            );
        }
    }

    None
}

/// Rule 6: a special grapheme replaced by a phonetically similar spelling.
fn special_grapheme(obs: &ErrorObservation) -> Option<ClassificationCandidate> {
    const SUBSTITUTIONS: &[(&str, &[&str])] = &[
        ("v", &["f", "w"]),
        ("ß", &["ss", "s"]),
        ("qu", &["kw", "ku"]),
        ("x", &["ks", "cks", "gs"]),
        ("y", &["i", "ü"]),
    ];

    let incorrect = obs.incorrect_word.to_lowercase();
    let correct = obs.correct_word.to_lowercase();

    for (grapheme, substitutes) in SUBSTITUTIONS {
        if correct.contains(grapheme)
            && !incorrect.contains(grapheme)
            && substitutes.iter().any(|s| incorrect.contains(s))
        {
            return candidate(
                Subtype::SpecialGrapheme,
                0.85,
                format!("Das Graphem \"{}\" wurde lautgetreu ersetzt", grapheme),
                false,
            );
        }
    }
    None
}

/// Rule 7: word-final d/g/b written as the devoiced t/k/p.
///
/// The phonetic rule is near-deterministic, hence the highest confidence in
/// the battery.
fn final_devoicing(obs: &ErrorObservation) -> Option<ClassificationCandidate> {
    const FINAL_PAIRS: &[(char, char)] = &[('t', 'd'), ('k', 'g'), ('p', 'b')];

    let incorrect = chars_of(&obs.incorrect_word);
    let correct = chars_of(&obs.correct_word);
    if incorrect.len() != correct.len() || incorrect.is_empty() {
        return None;
    }

    let last = incorrect.len() - 1;
    if incorrect[..last] != correct[..last] {
        return None;
    }
    if FINAL_PAIRS.contains(&(incorrect[last], correct[last])) {
        return candidate(
            Subtype::FinalDevoicing,
            0.95,
            format!(
                "Am Wortende wird \"{}\" gesprochen, aber \"{}\" geschrieben",
                incorrect[last], correct[last]
            ),
            false,
        );
    }
    None
}

/// Rule 8: umlaut (or äu) written as its unmarked base vowel.
fn umlaut_derivation(obs: &ErrorObservation) -> Option<ClassificationCandidate> {
    let incorrect = obs.incorrect_word.to_lowercase();
    let correct = obs.correct_word.to_lowercase();

    if correct.contains("äu")
        && !incorrect.contains("äu")
        && (incorrect.contains("au") || incorrect.contains("eu"))
    {
        return candidate(
            Subtype::UmlautDerivation,
            0.85,
            format!("\"äu\" in \"{}\" wurde nicht abgeleitet", obs.correct_word),
            true,
        );
    }

    for (umlaut, base) in [('ä', 'a'), ('ö', 'o'), ('ü', 'u')] {
        if correct.contains(umlaut) && !incorrect.contains(umlaut) && incorrect.contains(base) {
            return candidate(
                Subtype::UmlautDerivation,
                0.85,
                format!("\"{}\" wurde als \"{}\" geschrieben", umlaut, base),
                true,
            );
        }
    }
    None
}

/// Rule 9: a known unstressed suffix written as a phonetic variant.
fn morpheme_ending(obs: &ErrorObservation) -> Option<ClassificationCandidate> {
    // Longer suffixes first; the first suffix the correct word ends with
    // decides, so "-chen" is not shadowed by "-en".
    const SUFFIX_VARIANTS: &[(&str, &[&str])] = &[
        ("schaft", &["schafft", "shaft"]),
        ("chen", &["chn", "schen"]),
        ("lein", &["lain", "leihn"]),
        ("lich", &["lig", "lisch"]),
        ("heit", &["hait"]),
        ("keit", &["kait"]),
        ("ung", &["unk", "unck"]),
        ("ig", &["ich", "ik"]),
        ("er", &["a", "ar"]),
        ("el", &["l", "al"]),
        ("en", &["n", "un"]),
    ];

    let incorrect = obs.incorrect_word.to_lowercase();
    let correct = obs.correct_word.to_lowercase();

    for (suffix, variants) in SUFFIX_VARIANTS {
        if !correct.ends_with(suffix) {
            continue;
        }
        if incorrect.ends_with(suffix) {
            return None;
        }
        for variant in *variants {
            if incorrect.ends_with(variant) {
                return candidate(
                    Subtype::MorphemeEnding,
                    0.8,
                    format!("Die Endung \"-{}\" wurde als \"-{}\" geschrieben", suffix, variant),
                    true,
                );
            }
        }
        return None;
    }
    None
}

/// Rule 10: noun written lowercase while the rest of the word matches.
fn capitalization(obs: &ErrorObservation) -> Option<ClassificationCandidate> {
    let mut incorrect_chars = obs.incorrect_word.chars();
    let mut correct_chars = obs.correct_word.chars();
    let (Some(first_incorrect), Some(first_correct)) =
        (incorrect_chars.next(), correct_chars.next())
    else {
        return None;
    };

    if obs.incorrect_word.to_lowercase() != obs.correct_word.to_lowercase() {
        return None;
    }
    if first_correct.is_uppercase() && first_incorrect.is_lowercase() {
        return candidate(
            Subtype::Capitalization,
            0.9,
            format!("\"{}\" ist ein Nomen und wird großgeschrieben", obs.correct_word),
            true,
        );
    }
    None
}

/// Rule 11: compound written apart, or a word group fused.
fn compound_spelling(obs: &ErrorObservation) -> Option<ClassificationCandidate> {
    let incorrect_spaced = obs.incorrect_word.contains(' ');
    let correct_spaced = obs.correct_word.contains(' ');

    if incorrect_spaced && !correct_spaced {
        return candidate(
            Subtype::Compounding,
            0.9,
            format!(
                "Das zusammengesetzte Nomen \"{}\" wurde getrennt geschrieben",
                obs.correct_word
            ),
            true,
        );
    }
    if correct_spaced && !incorrect_spaced {
        return candidate(
            Subtype::OpenClosedCompound,
            0.9,
            format!("\"{}\" wird getrennt geschrieben", obs.correct_word),
            true,
        );
    }
    None
}
