//! Keyword-based message categorization.
//!
//! Each category owns a fixed vocabulary. Categories are tested in a fixed
//! priority order and the first match wins; there is no scoring across
//! categories.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Content classification used to pick contextually relevant responses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    General,
    Technical,
    Creative,
    Analytical,
    Philosophical,
    Educational,
}

impl Default for Category {
    fn default() -> Self {
        Category::General
    }
}

const TECHNICAL_KEYWORDS: &[&str] = &[
    "code",
    "algorithm",
    "function",
    "api",
    "database",
    "programming",
    "software",
    "hardware",
    "system",
    "architecture",
    "framework",
    "library",
    "bug",
    "error",
    "debug",
    "performance",
    "optimization",
];

const CREATIVE_KEYWORDS: &[&str] = &[
    "design",
    "creative",
    "art",
    "story",
    "novel",
    "music",
    "color",
    "aesthetic",
    "imagination",
    "innovative",
    "create",
    "inspiration",
    "visual",
    "compose",
    "draw",
    "paint",
    "write",
    "craft",
];

const ANALYTICAL_KEYWORDS: &[&str] = &[
    "analyze",
    "analysis",
    "data",
    "statistics",
    "pattern",
    "trend",
    "correlation",
    "causation",
    "metric",
    "measure",
    "evaluate",
    "assessment",
    "comparison",
    "contrast",
    "evidence",
    "hypothesis",
    "conclusion",
];

const PHILOSOPHICAL_KEYWORDS: &[&str] = &[
    "philosophy",
    "meaning",
    "existence",
    "consciousness",
    "ethics",
    "moral",
    "value",
    "purpose",
    "truth",
    "reality",
    "knowledge",
    "belief",
    "mind",
    "soul",
    "free will",
    "determinism",
    "metaphysics",
    "epistemology",
];

const EDUCATIONAL_KEYWORDS: &[&str] = &[
    "learn",
    "teach",
    "education",
    "student",
    "school",
    "university",
    "course",
    "curriculum",
    "lesson",
    "explain",
    "understand",
    "concept",
    "theory",
    "principle",
    "example",
    "instruction",
    "knowledge",
    "skill",
];

/// Rule-based classifier holding one compiled pattern per category.
pub struct CategoryClassifier {
    rules: Vec<(Category, Regex)>,
}

impl CategoryClassifier {
    /// Compiles the keyword sets in priority order.
    pub fn new() -> Self {
        let rules = [
            (Category::Technical, TECHNICAL_KEYWORDS),
            (Category::Creative, CREATIVE_KEYWORDS),
            (Category::Analytical, ANALYTICAL_KEYWORDS),
            (Category::Philosophical, PHILOSOPHICAL_KEYWORDS),
            (Category::Educational, EDUCATIONAL_KEYWORDS),
        ]
        .into_iter()
        .map(|(category, keywords)| (category, Self::compile(keywords)))
        .collect();

        Self { rules }
    }

    fn compile(keywords: &[&str]) -> Regex {
        let alternation = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        // Keywords are escaped literals, so the pattern is always valid.
        // Word boundaries are ASCII: only [A-Za-z0-9_] counts as a word character.
        Regex::new(&format!(r"(?i)(?-u:\b)(?:{alternation})(?-u:\b)"))
            .unwrap_or_else(|e| unreachable!("invalid keyword pattern: {e}"))
    }

    /// Returns the first category whose vocabulary appears in `text`,
    /// falling back to [`Category::General`].
    pub fn classify(&self, text: &str) -> Category {
        self.rules
            .iter()
            .find(|(_, pattern)| pattern.is_match(text))
            .map(|(category, _)| *category)
            .unwrap_or(Category::General)
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new()
    }
}

static CLASSIFIER: OnceLock<CategoryClassifier> = OnceLock::new();

/// Classifies `text` with the process-wide classifier.
pub fn determine_category(text: &str) -> Category {
    CLASSIFIER.get_or_init(CategoryClassifier::new).classify(text)
}
