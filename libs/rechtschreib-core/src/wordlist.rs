//! Curated reference wordlists keyed by category and subtype.
//!
//! The registry is a static table built into the binary. Not every taxonomy
//! slot carries curated material yet; `find` returning `None` is an expected
//! outcome and callers fall back to generating nothing for that bucket.

use crate::types::{Category, Subtype};

/// Curated practice material for one taxonomy slot.
///
/// `word_families` groups related forms sharing a stem. For the compounding
/// slot the families are part/part/compound triples instead.
#[derive(Debug, Clone, Copy)]
pub struct WordlistEntry {
    pub category: Category,
    pub subtype: Subtype,
    pub words: &'static [&'static str],
    /// Misspellings commonly produced for the words above, index-parallel
    /// to `words` where a pairing exists.
    pub common_mistakes: &'static [&'static str],
    pub word_families: &'static [&'static [&'static str]],
    pub rules: &'static [&'static str],
}

/// Look up the curated entry for a taxonomy slot, if one exists.
pub fn find(category: Category, subtype: Subtype) -> Option<&'static WordlistEntry> {
    ENTRIES
        .iter()
        .find(|e| e.category == category && e.subtype == subtype)
}

static ENTRIES: &[WordlistEntry] = &[
    WordlistEntry {
        category: Category::Alphabetic,
        subtype: Subtype::VowelOmission,
        words: &[
            "Fahrrad",
            "Banane",
            "Schokolade",
            "Elefant",
            "Krokodil",
            "Tomate",
            "Ananas",
            "Limonade",
            "Rakete",
            "Salat",
        ],
        common_mistakes: &["Fahrrd", "Bnane", "Schokolde", "Elefnt", "Krokodl"],
        word_families: &[],
        rules: &["Jede Silbe enthält mindestens einen Vokal (a, e, i, o, u)."],
    },
    WordlistEntry {
        category: Category::Alphabetic,
        subtype: Subtype::ConsonantClusterReduction,
        words: &[
            "Schwester",
            "Brille",
            "Traktor",
            "Pflaume",
            "Strumpf",
            "Frosch",
            "Drachen",
            "Blume",
            "Gras",
            "Klasse",
        ],
        common_mistakes: &["Sester", "Bille", "Tator", "Faume", "Stumpf"],
        word_families: &[],
        rules: &["Sprich das Wort langsam und achte auf jeden Mitlaut am Wortanfang."],
    },
    WordlistEntry {
        category: Category::Orthographic,
        subtype: Subtype::LengthMarking,
        words: &[
            "Stuhl",
            "Zahl",
            "Ohr",
            "Mehl",
            "Biene",
            "Wiese",
            "sieben",
            "Bohne",
            "Uhr",
            "Jahr",
        ],
        common_mistakes: &["Stul", "Zal", "Or", "Mel", "Bine"],
        word_families: &[],
        rules: &[
            "Nach einem lang gesprochenen Vokal steht oft ein stummes h.",
            "Ein lang gesprochenes i schreibt man meistens ie.",
        ],
    },
    WordlistEntry {
        category: Category::Orthographic,
        subtype: Subtype::Sharpening,
        words: &[
            "kommen",
            "Sommer",
            "schwimmen",
            "Butter",
            "rennen",
            "Katze",
            "sitzen",
            "backen",
            "Zucker",
            "schnell",
            "Teller",
            "Suppe",
        ],
        common_mistakes: &["komen", "Somer", "schwimen", "Buter", "renen"],
        word_families: &[],
        rules: &[
            "Nach einem kurzen Vokal folgen zwei gleiche Konsonanten.",
            "Statt kk schreibt man ck, statt zz schreibt man tz.",
        ],
    },
    WordlistEntry {
        category: Category::Orthographic,
        subtype: Subtype::SpecialGrapheme,
        words: &[
            "Vogel",
            "Vater",
            "viel",
            "Straße",
            "Fuß",
            "Quelle",
            "quer",
            "Hexe",
            "Taxi",
            "Pony",
        ],
        common_mistakes: &["Fogel", "Fater", "fil", "Strase", "Fus"],
        word_families: &[],
        rules: &["Manche Laute haben eine besondere Schreibung: v, ß, qu, x und y."],
    },
    WordlistEntry {
        category: Category::Morphematic,
        subtype: Subtype::FinalDevoicing,
        words: &[
            "Hund", "Berg", "Korb", "Wald", "Tag", "gelb", "Weg", "Kind", "Sand", "klug",
        ],
        common_mistakes: &["Hunt", "Berk", "Korp", "Walt", "Tak"],
        word_families: &[
            &["Hund", "Hunde", "Hündin"],
            &["Berg", "Berge", "bergig"],
            &["Korb", "Körbe", "Körbchen"],
            &["Wald", "Wälder", "Waldweg"],
            &["Tag", "Tage", "täglich"],
            &["gelb", "gelbe", "gelblich"],
            &["Weg", "Wege", "unterwegs"],
            &["Kind", "Kinder", "Kindheit"],
            &["Sand", "sandig", "Sandburg"],
            &["klug", "kluge", "Klugheit"],
        ],
        rules: &["Verlängere das Wort, dann hörst du den richtigen Buchstaben am Ende."],
    },
    WordlistEntry {
        category: Category::Morphematic,
        subtype: Subtype::UmlautDerivation,
        words: &[
            "Bäume", "Häuser", "Mäuse", "läuft", "Vögel", "Töne", "Füße", "Äpfel", "Träume",
            "Bäcker",
        ],
        common_mistakes: &["Baume", "Hauser", "Mause", "leuft", "Vogel"],
        word_families: &[
            &["Baum", "Bäume", "Bäumchen"],
            &["Haus", "Häuser", "Häuschen"],
            &["Maus", "Mäuse", "Mäuschen"],
            &["laufen", "läuft", "Läufer"],
            &["Vogel", "Vögel", "Vogelhaus"],
            &["Ton", "Töne", "tönen"],
            &["Fuß", "Füße", "Fußweg"],
            &["Apfel", "Äpfel", "Apfelbaum"],
            &["Traum", "Träume", "träumen"],
            &["backen", "Bäcker", "Bäckerei"],
        ],
        rules: &[
            "Aus a, o, u und au wird oft ä, ö, ü oder äu, wenn ein verwandtes Wort den Umlaut verlangt.",
        ],
    },
    WordlistEntry {
        category: Category::Grammatical,
        subtype: Subtype::Capitalization,
        words: &[
            "Hund",
            "schnell",
            "Tisch",
            "laufen",
            "Schule",
            "grün",
            "Freude",
            "springen",
            "Himmel",
            "Montag",
        ],
        common_mistakes: &["hund", "Schnell", "tisch", "Laufen", "schule"],
        word_families: &[],
        rules: &["Nomen schreibt man groß. Du erkennst sie an Begleitern wie der, die, das."],
    },
    WordlistEntry {
        category: Category::Grammatical,
        subtype: Subtype::Compounding,
        words: &[
            "Haustür",
            "Fußball",
            "Schulhof",
            "Regenbogen",
            "Sonnenblume",
            "Zahnbürste",
            "Butterbrot",
            "Spielplatz",
        ],
        common_mistakes: &["Haus Tür", "Fuß Ball", "Schul Hof", "Regen Bogen"],
        word_families: &[
            &["Haus", "Tür", "Haustür"],
            &["Fuß", "Ball", "Fußball"],
            &["Schul", "Hof", "Schulhof"],
            &["Regen", "Bogen", "Regenbogen"],
            &["Sonnen", "Blume", "Sonnenblume"],
            &["Zahn", "Bürste", "Zahnbürste"],
            &["Butter", "Brot", "Butterbrot"],
            &["Spiel", "Platz", "Spielplatz"],
        ],
        rules: &["Zusammengesetzte Nomen schreibt man als ein Wort."],
    },
];
