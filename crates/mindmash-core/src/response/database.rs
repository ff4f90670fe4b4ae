//! Immutable response table and the selection rules over it.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use rand::Rng;
use rand::seq::SliceRandom;

use super::table::{
    CHATGPT_RESPONSES, GEMINI_RESPONSES, GROK_RESPONSES, PersonaTable, SYSTEM_RESPONSES,
};
use crate::category::Category;
use crate::persona::SYSTEM_ID;

/// Returned when no table entry can serve a request.
pub const FALLBACK_RESPONSE: &str = "I'm processing your request...";

/// Persona id → category → ordered responses.
///
/// Constructed once and read-only afterwards. Lookups never fail: see
/// [`ResponseDatabase::candidates`] for the fallback chain.
#[derive(Debug, Clone, Default)]
pub struct ResponseDatabase {
    personas: HashMap<String, BTreeMap<Category, Vec<String>>>,
}

static BUILTIN: OnceLock<ResponseDatabase> = OnceLock::new();

impl ResponseDatabase {
    /// An empty database. Every lookup resolves to [`FALLBACK_RESPONSE`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in offline response table, initialized on first access.
    pub fn builtin() -> &'static ResponseDatabase {
        BUILTIN.get_or_init(|| {
            let mut db = ResponseDatabase::new();
            for (id, table) in [
                ("grok", GROK_RESPONSES),
                ("chatgpt", CHATGPT_RESPONSES),
                ("gemini", GEMINI_RESPONSES),
                (SYSTEM_ID, SYSTEM_RESPONSES),
            ] {
                db.insert_table(id, table);
            }
            db
        })
    }

    fn insert_table(&mut self, persona: &str, table: PersonaTable) {
        for (category, responses) in table {
            self.insert(persona, *category, responses.iter().copied());
        }
    }

    /// Adds responses for `(persona, category)`, appending to any existing list.
    pub fn with_responses<I, S>(mut self, persona: &str, category: Category, responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(persona, category, responses);
        self
    }

    fn insert<I, S>(&mut self, persona: &str, category: Category, responses: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.personas
            .entry(persona.to_string())
            .or_default()
            .entry(category)
            .or_default()
            .extend(responses.into_iter().map(Into::into));
    }

    /// Persona ids present in the table, sorted.
    pub fn persona_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.personas.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// The exact list for `(persona, category)`, if present and non-empty.
    pub fn responses(&self, persona: &str, category: Category) -> Option<&[String]> {
        self.personas
            .get(persona)
            .and_then(|categories| categories.get(&category))
            .map(Vec::as_slice)
            .filter(|list| !list.is_empty())
    }

    /// Resolves the candidate pool for a request.
    ///
    /// Order: `(persona, category)`, `(persona, general)`, `(system, general)`.
    /// `None` means the caller should use [`FALLBACK_RESPONSE`].
    pub fn candidates(&self, persona: &str, category: Category) -> Option<&[String]> {
        self.responses(persona, category)
            .or_else(|| self.responses(persona, Category::General))
            .or_else(|| self.responses(SYSTEM_ID, Category::General))
    }

    /// Picks a response for `persona` in `category` using `rng`.
    ///
    /// Entries found in `previously_used` are skipped unless that would leave
    /// nothing to choose from.
    pub fn select<R, S>(
        &self,
        persona: &str,
        category: Category,
        previously_used: &[S],
        rng: &mut R,
    ) -> String
    where
        R: Rng + ?Sized,
        S: AsRef<str>,
    {
        let Some(pool) = self.candidates(persona, category) else {
            tracing::debug!(target: "mindmash::response", persona, %category, "No candidates, using fallback");
            return FALLBACK_RESPONSE.to_string();
        };

        let fresh: Vec<&String> = pool
            .iter()
            .filter(|candidate| {
                !previously_used
                    .iter()
                    .any(|used| used.as_ref() == candidate.as_str())
            })
            .collect();

        let choice = if fresh.is_empty() {
            pool.choose(rng)
        } else {
            fresh.choose(rng).copied()
        };

        choice
            .cloned()
            .unwrap_or_else(|| FALLBACK_RESPONSE.to_string())
    }
}

/// Picks a response from the built-in table with the thread-local RNG.
pub fn get_ai_response<S: AsRef<str>>(
    persona: &str,
    category: Category,
    previously_used: &[S],
) -> String {
    ResponseDatabase::builtin().select(persona, category, previously_used, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    const NONE: &[&str] = &[];

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_builtin_personas() {
        assert_eq!(
            ResponseDatabase::builtin().persona_ids(),
            vec!["chatgpt", "gemini", "grok", "system"]
        );
    }

    #[test]
    fn test_exact_lookup() {
        let db = ResponseDatabase::builtin();
        let pool = db.responses("grok", Category::Technical).unwrap();
        for _ in 0..20 {
            let picked = db.select("grok", Category::Technical, NONE, &mut rng());
            assert!(pool.contains(&picked));
        }
    }

    #[test]
    fn test_missing_category_falls_back_to_persona_general() {
        let db = ResponseDatabase::builtin();
        // grok has no educational responses
        assert!(db.responses("grok", Category::Educational).is_none());
        let general = db.responses("grok", Category::General).unwrap();
        let picked = db.select("grok", Category::Educational, NONE, &mut rng());
        assert!(general.contains(&picked));
    }

    #[test]
    fn test_unknown_persona_falls_back_to_system_general() {
        let db = ResponseDatabase::builtin();
        let system_general = db.responses(SYSTEM_ID, Category::General).unwrap();
        for category in Category::iter() {
            let picked = db.select("claude", category, NONE, &mut rng());
            assert!(system_general.contains(&picked), "{category}");
        }
    }

    #[test]
    fn test_empty_database_returns_sentinel() {
        let db = ResponseDatabase::new();
        assert_eq!(
            db.select("grok", Category::Technical, NONE, &mut rng()),
            FALLBACK_RESPONSE
        );
    }

    #[test]
    fn test_empty_list_is_treated_as_missing() {
        let db = ResponseDatabase::new()
            .with_responses("grok", Category::Creative, Vec::<String>::new())
            .with_responses("grok", Category::General, ["hi"]);
        assert_eq!(db.select("grok", Category::Creative, NONE, &mut rng()), "hi");
    }

    #[test]
    fn test_previously_used_is_excluded() {
        let db = ResponseDatabase::builtin();
        let pool = db.responses("chatgpt", Category::Analytical).unwrap();
        let used: Vec<String> = pool[..pool.len() - 1].to_vec();
        let mut rng = rng();
        for _ in 0..50 {
            let picked = db.select("chatgpt", Category::Analytical, used.as_slice(), &mut rng);
            assert_eq!(picked, pool[pool.len() - 1]);
        }
    }

    #[test]
    fn test_exhausted_pool_allows_repeats() {
        let db = ResponseDatabase::builtin();
        let pool = db.responses("gemini", Category::Creative).unwrap();
        let picked = db.select("gemini", Category::Creative, pool, &mut rng());
        assert!(pool.contains(&picked));
    }

    #[test]
    fn test_unrelated_history_does_not_shrink_pool() {
        let db = ResponseDatabase::new().with_responses("grok", Category::General, ["a", "b"]);
        let history = ["x", "y", "z"];
        let mut seen = std::collections::HashSet::new();
        let mut rng = rng();
        for _ in 0..100 {
            seen.insert(db.select("grok", Category::General, &history[..], &mut rng));
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_get_ai_response_never_empty() {
        for persona in ["grok", "chatgpt", "gemini", "system", "unknown", ""] {
            for category in Category::iter() {
                assert!(!get_ai_response(persona, category, NONE).is_empty());
            }
        }
    }
}
