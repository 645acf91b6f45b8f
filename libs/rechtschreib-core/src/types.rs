//! Core types for the spelling-analysis library.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Developmental spelling strategy a mistake reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Alphabetic,
    Orthographic,
    Morphematic,
    Grammatical,
}

impl Category {
    /// Get the category key as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alphabetic => "alphabetic",
            Self::Orthographic => "orthographic",
            Self::Morphematic => "morphematic",
            Self::Grammatical => "grammatical",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "alphabetic" => Some(Self::Alphabetic),
            "orthographic" => Some(Self::Orthographic),
            "morphematic" => Some(Self::Morphematic),
            "grammatical" => Some(Self::Grammatical),
            _ => None,
        }
    }

    /// German display name used on worksheets.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Alphabetic => "Alphabetische Strategie",
            Self::Orthographic => "Orthographische Strategie",
            Self::Morphematic => "Morphematische Strategie",
            Self::Grammatical => "Wortübergreifende Strategie",
        }
    }
}

/// Fine-grained error pattern within a category.
///
/// The taxonomy is closed: three subtypes per category, twelve in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subtype {
    VowelOmission,
    ConsonantClusterReduction,
    VoicedVoicelessConfusion,
    LengthMarking,
    Sharpening,
    SpecialGrapheme,
    FinalDevoicing,
    UmlautDerivation,
    MorphemeEnding,
    Capitalization,
    Compounding,
    OpenClosedCompound,
}

impl Subtype {
    /// The category this subtype belongs to.
    pub fn category(&self) -> Category {
        match self {
            Self::VowelOmission | Self::ConsonantClusterReduction | Self::VoicedVoicelessConfusion => {
                Category::Alphabetic
            }
            Self::LengthMarking | Self::Sharpening | Self::SpecialGrapheme => Category::Orthographic,
            Self::FinalDevoicing | Self::UmlautDerivation | Self::MorphemeEnding => {
                Category::Morphematic
            }
            Self::Capitalization | Self::Compounding | Self::OpenClosedCompound => {
                Category::Grammatical
            }
        }
    }

    /// Get the subtype key as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VowelOmission => "vowel_omission",
            Self::ConsonantClusterReduction => "consonant_cluster_reduction",
            Self::VoicedVoicelessConfusion => "voiced_voiceless_confusion",
            Self::LengthMarking => "length_marking",
            Self::Sharpening => "sharpening",
            Self::SpecialGrapheme => "special_grapheme",
            Self::FinalDevoicing => "final_devoicing",
            Self::UmlautDerivation => "umlaut_derivation",
            Self::MorphemeEnding => "morpheme_ending",
            Self::Capitalization => "capitalization",
            Self::Compounding => "compounding",
            Self::OpenClosedCompound => "open_closed_compound",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "vowel_omission" => Some(Self::VowelOmission),
            "consonant_cluster_reduction" => Some(Self::ConsonantClusterReduction),
            "voiced_voiceless_confusion" => Some(Self::VoicedVoicelessConfusion),
            "length_marking" => Some(Self::LengthMarking),
            "sharpening" => Some(Self::Sharpening),
            "special_grapheme" => Some(Self::SpecialGrapheme),
            "final_devoicing" => Some(Self::FinalDevoicing),
            "umlaut_derivation" => Some(Self::UmlautDerivation),
            "morpheme_ending" => Some(Self::MorphemeEnding),
            "capitalization" => Some(Self::Capitalization),
            "compounding" => Some(Self::Compounding),
            "open_closed_compound" => Some(Self::OpenClosedCompound),
            _ => None,
        }
    }

    /// German display name used on worksheets.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VowelOmission => "Auslassung von Vokalen",
            Self::ConsonantClusterReduction => "Verkürzung von Konsonantenhäufungen",
            Self::VoicedVoicelessConfusion => "Verwechslung harter und weicher Konsonanten",
            Self::LengthMarking => "Dehnung",
            Self::Sharpening => "Schärfung",
            Self::SpecialGrapheme => "Besondere Grapheme",
            Self::FinalDevoicing => "Auslautverhärtung",
            Self::UmlautDerivation => "Umlautableitung",
            Self::MorphemeEnding => "Unbetonte Endungen",
            Self::Capitalization => "Großschreibung",
            Self::Compounding => "Zusammenschreibung",
            Self::OpenClosedCompound => "Getrennt- und Zusammenschreibung",
        }
    }
}

/// A single observed spelling mistake of one learner.
///
/// Created by the collection flow outside this library; never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObservation {
    pub learner_id: Uuid,
    pub incorrect_word: String,
    pub correct_word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daz_background: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl ErrorObservation {
    /// Create a new observation with only the required fields set.
    pub fn new(learner_id: Uuid, incorrect_word: &str, correct_word: &str) -> Self {
        Self {
            learner_id,
            incorrect_word: incorrect_word.to_string(),
            correct_word: correct_word.to_string(),
            context: None,
            daz_background: None,
            recorded_at: None,
        }
    }
}

/// One analyzer rule's classification proposal for an observation.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationCandidate {
    pub category: Category,
    pub subtype: Subtype,
    /// Confidence in [0, 1].
    pub confidence: f64,
    /// Human-readable explanation of what the rule matched.
    pub evidence: String,
    /// Whether the matched pattern is typical for DaZ learners.
    pub daz_relevant: bool,
}

/// Aggregated errors of one learner sharing a category and subtype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBucket {
    pub category: Category,
    pub subtype: Subtype,
    pub description: String,
    pub observations: Vec<ErrorObservation>,
    /// Correct spellings of the member observations. Not deduplicated:
    /// repeated words signal practice priority.
    pub target_words: Vec<String>,
    pub hints: Vec<String>,
    pub suggested_exercises: Vec<ExerciseType>,
}

impl ErrorBucket {
    /// Number of observations collected in this bucket.
    pub fn error_count(&self) -> usize {
        self.observations.len()
    }
}

/// Exercise archetype keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    GapFill,
    WordFamily,
    Sorting,
    DerivationTrick,
    ErrorDetective,
    ArticleTest,
    SyllableClapping,
    DictationPrep,
    CompoundBuilder,
    RuleDiscovery,
}

impl ExerciseType {
    /// Get the exercise type key as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GapFill => "gap_fill",
            Self::WordFamily => "word_family",
            Self::Sorting => "sorting",
            Self::DerivationTrick => "derivation_trick",
            Self::ErrorDetective => "error_detective",
            Self::ArticleTest => "article_test",
            Self::SyllableClapping => "syllable_clapping",
            Self::DictationPrep => "dictation_prep",
            Self::CompoundBuilder => "compound_builder",
            Self::RuleDiscovery => "rule_discovery",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "gap_fill" => Some(Self::GapFill),
            "word_family" => Some(Self::WordFamily),
            "sorting" => Some(Self::Sorting),
            "derivation_trick" => Some(Self::DerivationTrick),
            "error_detective" => Some(Self::ErrorDetective),
            "article_test" => Some(Self::ArticleTest),
            "syllable_clapping" => Some(Self::SyllableClapping),
            "dictation_prep" => Some(Self::DictationPrep),
            "compound_builder" => Some(Self::CompoundBuilder),
            "rule_discovery" => Some(Self::RuleDiscovery),
            _ => None,
        }
    }
}

/// Difficulty tier of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A single numbered task on a worksheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub number: usize,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// A fully built exercise ready for worksheet rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedExercise {
    pub title: String,
    pub exercise_type: ExerciseType,
    pub instructions: String,
    pub tasks: Vec<Task>,
    pub difficulty: Difficulty,
    pub didactic_goal: String,
    pub daz_friendly: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub hints: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub rules: Vec<String>,
}

/// The learner's dominant error pattern a plan concentrates on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorFocus {
    pub category: Category,
    pub subtype: Subtype,
    pub description: String,
    pub error_count: usize,
}

/// One learner's complete practice plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorksheetPlan {
    pub learner_name: String,
    pub focus: ErrorFocus,
    pub exercises: Vec<GeneratedExercise>,
    pub notes: Vec<String>,
    pub daz_student: bool,
}
