//! Internal rule database for classifying `_chem_comp.type` annotations.
//!
//! The priority-ordered keyword rules live in an embedded TOML table so the classification
//! policy can be audited as data. [`ClassifierRules`] is the validated, lowercased form of that
//! table; the built-in instance is parsed once and cached.

mod loader;
mod schema;
mod store;

use crate::model::types::MonomerCategory;
use thiserror::Error;

/// Errors raised while loading a rule table.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("malformed rule table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("rule {index} declares no keywords")]
    NoKeywords { index: usize },

    #[error("rule {index} contains an empty keyword")]
    EmptyKeyword { index: usize },
}

/// Returns the built-in rule table.
pub fn default_rules() -> &'static ClassifierRules {
    store::get_default_rules()
}

/// One keyword rule: any contained keyword assigns `category`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    keywords: Vec<String>,
    category: MonomerCategory,
}

impl KeywordRule {
    pub fn new<I, S>(keywords: I, category: MonomerCategory) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            category,
        }
    }

    /// Lowercased keywords in declaration order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn category(&self) -> MonomerCategory {
        self.category
    }

    /// Tests an already lowercased annotation against the rule.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Ordered keyword rules plus the category used when no rule matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierRules {
    rules: Vec<KeywordRule>,
    fallback: MonomerCategory,
}

impl ClassifierRules {
    pub fn new(rules: Vec<KeywordRule>, fallback: MonomerCategory) -> Self {
        Self { rules, fallback }
    }

    /// Parses a rule table in the format of the embedded `monomer_types.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] for invalid TOML, unknown fields or categories, and rules
    /// without usable keywords.
    pub fn from_toml_str(content: &str) -> Result<Self, RuleError> {
        let table: schema::RuleTableFile = toml::from_str(content)?;

        let mut rules = Vec::with_capacity(table.rules.len());
        for (index, entry) in table.rules.into_iter().enumerate() {
            if entry.keywords.is_empty() {
                return Err(RuleError::NoKeywords { index });
            }
            if entry.keywords.iter().any(|k| k.is_empty()) {
                return Err(RuleError::EmptyKeyword { index });
            }
            rules.push(KeywordRule::new(entry.keywords, entry.category));
        }

        Ok(Self::new(rules, table.fallback))
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn fallback(&self) -> MonomerCategory {
        self.fallback
    }

    /// Category of `annotation` under first-match-wins, case-insensitive evaluation.
    pub fn category_for(&self, annotation: &str) -> MonomerCategory {
        let lowered = annotation.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(KeywordRule::category)
            .unwrap_or(self.fallback)
    }
}
