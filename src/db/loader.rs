use super::ClassifierRules;

pub fn load_default_rules() -> ClassifierRules {
    let content = include_str!("../../rules/monomer_types.toml");
    ClassifierRules::from_toml_str(content)
        .unwrap_or_else(|e| panic!("Failed to parse rule file 'monomer_types.toml': {}", e))
}
