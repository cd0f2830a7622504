use super::ClassifierRules;
use super::loader;
use std::sync::OnceLock;

static DEFAULT_RULES: OnceLock<ClassifierRules> = OnceLock::new();

pub fn get_default_rules() -> &'static ClassifierRules {
    DEFAULT_RULES.get_or_init(loader::load_default_rules)
}
