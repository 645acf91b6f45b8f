//! Static catalog of exercise archetypes.
//!
//! Declaration order of `TEMPLATES` is load-bearing: `types_for_subtype`
//! preserves it, and the generator truncates candidate lists in that order,
//! so earlier templates win when fewer exercises are requested.

use crate::types::{Difficulty, ExerciseType, Subtype};

/// One exercise archetype with its applicability metadata.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseTemplate {
    pub exercise_type: ExerciseType,
    /// German worksheet title.
    pub name: &'static str,
    pub description: &'static str,
    /// Subtypes this archetype is suited for.
    pub subtypes: &'static [Subtype],
    pub difficulty: Difficulty,
    /// Suitable for DaZ learners (structured, multisensory formats).
    pub daz_friendly: bool,
    pub goal: &'static str,
    pub instructions: &'static str,
}

/// All registered templates in declaration order.
pub fn templates() -> &'static [ExerciseTemplate] {
    TEMPLATES
}

/// Templates applicable to a subtype, in declaration order.
pub fn types_for_subtype(subtype: Subtype) -> Vec<&'static ExerciseTemplate> {
    TEMPLATES
        .iter()
        .filter(|t| t.subtypes.contains(&subtype))
        .collect()
}

/// Look up the template for an exercise type.
pub fn template_for(exercise_type: ExerciseType) -> Option<&'static ExerciseTemplate> {
    TEMPLATES.iter().find(|t| t.exercise_type == exercise_type)
}

static TEMPLATES: &[ExerciseTemplate] = &[
    ExerciseTemplate {
        exercise_type: ExerciseType::GapFill,
        name: "Lückenwörter",
        description: "Wörter mit ausgelassenen Buchstaben vervollständigen",
        subtypes: &[
            Subtype::VowelOmission,
            Subtype::LengthMarking,
            Subtype::Sharpening,
            Subtype::SpecialGrapheme,
            Subtype::UmlautDerivation,
        ],
        difficulty: Difficulty::Easy,
        daz_friendly: true,
        goal: "Die schwierige Stelle im Wort bewusst wahrnehmen",
        instructions: "Setze die fehlenden Buchstaben ein. Sprich jedes Wort dabei leise mit.",
    },
    ExerciseTemplate {
        exercise_type: ExerciseType::WordFamily,
        name: "Wortfamilien",
        description: "Verwandte Wörter mit gemeinsamem Stamm sammeln",
        subtypes: &[
            Subtype::FinalDevoicing,
            Subtype::UmlautDerivation,
            Subtype::MorphemeEnding,
        ],
        difficulty: Difficulty::Medium,
        daz_friendly: true,
        goal: "Den Wortstamm als Rechtschreibhilfe nutzen",
        instructions: "Schau dir die Wortfamilien an und markiere den gemeinsamen Wortstamm.",
    },
    ExerciseTemplate {
        exercise_type: ExerciseType::Sorting,
        name: "Wörter sortieren",
        description: "Wörter nach Rechtschreibmuster in Gruppen ordnen",
        subtypes: &[
            Subtype::LengthMarking,
            Subtype::Sharpening,
            Subtype::Capitalization,
            Subtype::VoicedVoicelessConfusion,
        ],
        difficulty: Difficulty::Easy,
        daz_friendly: true,
        goal: "Rechtschreibmuster durch Vergleichen erkennen",
        instructions: "Ordne jedes Wort der passenden Gruppe zu und schreibe es in die Tabelle.",
    },
    ExerciseTemplate {
        exercise_type: ExerciseType::DerivationTrick,
        name: "Verlängerungstrick",
        description: "Wörter verlängern, um den richtigen Buchstaben zu hören",
        subtypes: &[Subtype::FinalDevoicing, Subtype::UmlautDerivation],
        difficulty: Difficulty::Medium,
        daz_friendly: false,
        goal: "Schreibweisen aus verwandten Wortformen ableiten",
        instructions: "Verlängere jedes Wort und höre genau hin, welcher Buchstabe richtig ist.",
    },
    ExerciseTemplate {
        exercise_type: ExerciseType::ErrorDetective,
        name: "Fehlerdetektiv",
        description: "Richtig und falsch geschriebene Wörter unterscheiden",
        subtypes: &[
            Subtype::Sharpening,
            Subtype::SpecialGrapheme,
            Subtype::LengthMarking,
            Subtype::Capitalization,
        ],
        difficulty: Difficulty::Medium,
        daz_friendly: false,
        goal: "Den prüfenden Blick für die eigene Schreibung schulen",
        instructions: "Entscheide bei jedem Wort: richtig oder falsch geschrieben?",
    },
    ExerciseTemplate {
        exercise_type: ExerciseType::ArticleTest,
        name: "Artikelprobe",
        description: "Nomen mit der Artikelprobe erkennen und großschreiben",
        subtypes: &[Subtype::Capitalization],
        difficulty: Difficulty::Easy,
        daz_friendly: true,
        goal: "Nomen sicher erkennen und großschreiben",
        instructions: "Prüfe mit der Artikelprobe, ob das Wort ein Nomen ist.",
    },
    ExerciseTemplate {
        exercise_type: ExerciseType::SyllableClapping,
        name: "Silben klatschen",
        description: "Wörter in Sprechsilben zerlegen und mitklatschen",
        subtypes: &[Subtype::VowelOmission, Subtype::ConsonantClusterReduction],
        difficulty: Difficulty::Easy,
        daz_friendly: true,
        goal: "Die Lautstruktur der Wörter körperlich erfahren",
        instructions: "Klatsche die Wörter in Silben und schreibe sie danach auf.",
    },
    ExerciseTemplate {
        exercise_type: ExerciseType::DictationPrep,
        name: "Diktat-Vorbereitung",
        description: "Übungswörter in vier Schritten selbstständig trainieren",
        subtypes: &[
            Subtype::LengthMarking,
            Subtype::Sharpening,
            Subtype::SpecialGrapheme,
            Subtype::FinalDevoicing,
        ],
        difficulty: Difficulty::Medium,
        daz_friendly: false,
        goal: "Eine eigene Lernstrategie für schwierige Wörter aufbauen",
        instructions: "Arbeite die vier Schritte der Reihe nach durch.",
    },
    ExerciseTemplate {
        exercise_type: ExerciseType::CompoundBuilder,
        name: "Wörter zusammenbauen",
        description: "Aus zwei Wortteilen ein zusammengesetztes Nomen bilden",
        subtypes: &[Subtype::Compounding, Subtype::OpenClosedCompound],
        difficulty: Difficulty::Easy,
        daz_friendly: true,
        goal: "Zusammengesetzte Nomen als ein Wort begreifen",
        instructions: "Setze die beiden Wortteile zu einem neuen Wort zusammen.",
    },
    ExerciseTemplate {
        exercise_type: ExerciseType::RuleDiscovery,
        name: "Regel entdecken",
        description: "Eine Rechtschreibregel aus Beispielwörtern selbst erschließen",
        subtypes: &[
            Subtype::Sharpening,
            Subtype::LengthMarking,
            Subtype::FinalDevoicing,
            Subtype::Capitalization,
        ],
        difficulty: Difficulty::Hard,
        daz_friendly: false,
        goal: "Rechtschreibregeln durch eigenes Forschen verstehen",
        instructions: "Untersuche die Wörter und finde heraus, welche Regel dahintersteckt.",
    },
];
