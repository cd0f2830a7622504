use crate::model::types::MonomerCategory;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct RuleTableFile {
    pub fallback: MonomerCategory,
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleEntry>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    pub keywords: Vec<String>,
    pub category: MonomerCategory,
}
