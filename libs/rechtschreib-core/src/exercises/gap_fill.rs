//! Gap-fill builder: blank out the subtype's critical letters.

use super::{assemble, practice_words};
use crate::catalog::ExerciseTemplate;
use crate::types::{ErrorBucket, GeneratedExercise, Subtype, Task};
use crate::wordlist::WordlistEntry;

const MAX_WORDS: usize = 10;

pub fn build(
    template: &ExerciseTemplate,
    bucket: &ErrorBucket,
    entry: &WordlistEntry,
    daz_student: bool,
) -> GeneratedExercise {
    let words = practice_words(bucket, entry, MAX_WORDS);
    let tasks = words
        .iter()
        .enumerate()
        .map(|(i, word)| Task {
            number: i + 1,
            content: gap_word(word, bucket.subtype),
            solution: daz_student.then(|| word.clone()),
            explanation: None,
        })
        .collect();

    let hints = if daz_student {
        vec![
            "Sprich jedes Wort langsam und deutlich mit.".to_string(),
            "Vergleiche mit einem ähnlichen Wort, das du sicher kennst.".to_string(),
        ]
    } else {
        Vec::new()
    };

    assemble(template, tasks, hints, Vec::new())
}

/// Blank out the letters the subtype is about; other subtypes get a generic
/// every-third-letter gap.
fn gap_word(word: &str, subtype: Subtype) -> String {
    match subtype {
        Subtype::VowelOmission => blank_vowels(word),
        Subtype::LengthMarking => blank_length_marking(word),
        Subtype::Sharpening => blank_sharpening(word),
        _ => blank_every_third(word),
    }
}

fn is_vowel(c: char) -> bool {
    matches!(
        c.to_lowercase().next(),
        Some('a') | Some('e') | Some('i') | Some('o') | Some('u') | Some('ä') | Some('ö')
            | Some('ü')
    )
}

fn blank_vowels(word: &str) -> String {
    word.chars()
        .map(|c| if is_vowel(c) { '_' } else { c })
        .collect()
}

/// Blank the silent h after a vowel, or the ie digraph. Words without a
/// length marking fall back to the generic gap.
fn blank_length_marking(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let lower: Vec<char> = word.to_lowercase().chars().collect();

    for i in 0..lower.len().saturating_sub(1) {
        if is_vowel(lower[i]) && lower[i + 1] == 'h' {
            let mut gapped = chars.clone();
            gapped[i + 1] = '_';
            return gapped.into_iter().collect();
        }
    }
    for i in 0..lower.len().saturating_sub(1) {
        if lower[i] == 'i' && lower[i + 1] == 'e' {
            let mut gapped = chars.clone();
            gapped[i] = '_';
            gapped[i + 1] = '_';
            return gapped.into_iter().collect();
        }
    }
    blank_every_third(word)
}

/// Collapse the geminate (or ck/tz) to a single blank.
fn blank_sharpening(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let lower: Vec<char> = word.to_lowercase().chars().collect();

    for i in 0..lower.len().saturating_sub(1) {
        let pair_is_sharpening = (lower[i] == lower[i + 1] && !is_vowel(lower[i]))
            || (lower[i] == 'c' && lower[i + 1] == 'k')
            || (lower[i] == 't' && lower[i + 1] == 'z');
        if pair_is_sharpening {
            let mut gapped: Vec<char> = chars[..i].to_vec();
            gapped.push('_');
            gapped.extend_from_slice(&chars[i + 2..]);
            return gapped.into_iter().collect();
        }
    }
    blank_every_third(word)
}

fn blank_every_third(word: &str) -> String {
    word.chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 3 == 2 && c.is_alphabetic() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowels_are_blanked() {
        assert_eq!(blank_vowels("Banane"), "B_n_n_");
        assert_eq!(blank_vowels("Ananas"), "_n_n_s");
    }

    #[test]
    fn silent_h_is_blanked() {
        assert_eq!(blank_length_marking("Stuhl"), "Stu_l");
        assert_eq!(blank_length_marking("Zahl"), "Za_l");
    }

    #[test]
    fn ie_is_blanked_as_pair() {
        assert_eq!(blank_length_marking("Biene"), "B__ne");
    }

    #[test]
    fn geminate_collapses_to_single_blank() {
        assert_eq!(blank_sharpening("kommen"), "ko_en");
        assert_eq!(blank_sharpening("Katze"), "Ka_e");
        assert_eq!(blank_sharpening("backen"), "ba_en");
    }

    #[test]
    fn other_subtypes_blank_every_third_letter() {
        assert_eq!(blank_every_third("Vogel"), "Vo_el");
        assert_eq!(gap_word("Vogel", Subtype::SpecialGrapheme), "Vo_el");
    }
}
