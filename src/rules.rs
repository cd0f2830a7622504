//! Read-only access to the monomer classification rules.

use crate::db;

pub use crate::db::{ClassifierRules, KeywordRule, RuleError};

/// Returns the built-in rule table embedded in the crate.
pub fn builtin() -> &'static ClassifierRules {
    db::default_rules()
}
