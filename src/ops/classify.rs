//! Monomer classification from `_chem_comp.type` annotations.
//!
//! Distinct annotations are bucketed once with the keyword rules; every component is then
//! projected through the buckets so its identifier lands in at most one output list.

use std::collections::BTreeSet;

use log::{debug, info};

use crate::db::{self, ClassifierRules};
use crate::io::CifFile;
use crate::model::classes::{CategoryLists, TypeBuckets};
use crate::model::types::MonomerCategory;
use crate::utils::parallel::*;

/// Category holding the component descriptor, including its type annotation.
pub const TYPE_CATEGORY: &str = "chem_comp";

const TYPE_FIELD: &str = "type";

/// Result of classifying a dictionary: the annotation buckets and the per-category lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub buckets: TypeBuckets,
    pub lists: CategoryLists,
}

/// Reads the `_chem_comp.type` annotation of one block.
///
/// Missing categories, missing fields, `?`/`.` placeholders and categories that fail to parse
/// all yield `None`.
pub fn read_type_annotation(file: &CifFile, block_id: &str) -> Option<String> {
    match file.category(block_id, TYPE_CATEGORY) {
        Ok(Some(category)) => category.text(TYPE_FIELD, 0).map(str::to_string),
        Ok(None) => None,
        Err(e) => {
            debug!("Ignoring unreadable {TYPE_CATEGORY} category of '{block_id}': {e}");
            None
        }
    }
}

/// Collects `(identifier, annotation)` pairs for every block, in file order.
pub fn collect_type_annotations(file: &CifFile) -> Vec<(String, Option<String>)> {
    let ids: Vec<&str> = file.block_ids().collect();
    ids.par_iter()
        .map(|&id| (id.to_string(), read_type_annotation(file, id)))
        .collect()
}

/// Buckets distinct annotations with `rules`.
pub fn classify_annotations<'a, I>(annotations: I, rules: &ClassifierRules) -> TypeBuckets
where
    I: IntoIterator<Item = &'a str>,
{
    let mut buckets = TypeBuckets::new();
    for annotation in annotations {
        buckets.insert(rules.category_for(annotation), annotation);
    }
    buckets
}

/// Projects components onto output lists using previously computed buckets.
///
/// Components without an annotation, or whose annotation is not bucketed, are dropped.
pub fn project_categories(
    annotations: &[(String, Option<String>)],
    buckets: &TypeBuckets,
) -> CategoryLists {
    let mut lists = CategoryLists::new();
    for (id, annotation) in annotations {
        if let Some(category) = annotation.as_deref().and_then(|a| buckets.category_of(a)) {
            lists.push(category, id.as_str());
        }
    }
    lists
}

/// Classifies every component of the dictionary with the built-in rules.
pub fn classify_components(file: &CifFile) -> CategoryLists {
    classify_components_with(file, db::default_rules()).lists
}

/// Classifies every component of the dictionary with a caller-supplied rule table.
pub fn classify_components_with(file: &CifFile, rules: &ClassifierRules) -> Classification {
    let annotations = collect_type_annotations(file);

    let distinct: BTreeSet<&str> = annotations
        .iter()
        .filter_map(|(_, annotation)| annotation.as_deref())
        .collect();
    let buckets = classify_annotations(distinct, rules);

    for category in [
        MonomerCategory::Nucleotide,
        MonomerCategory::Carbohydrate,
        MonomerCategory::Peptide,
        MonomerCategory::Remainder,
    ] {
        let members: Vec<&str> = buckets.bucket(category).iter().map(String::as_str).collect();
        info!("{} types: {:?}", category.name(), members);
    }

    let lists = project_categories(&annotations, &buckets);

    info!(
        "Classified {} of {} components ({} nucleotides, {} carbohydrates, {} amino acids)",
        lists.total(),
        annotations.len(),
        lists.nucleotides.len(),
        lists.carbohydrates.len(),
        lists.amino_acids.len()
    );

    Classification { buckets, lists }
}
