use super::types::MonomerCategory;
use std::collections::BTreeSet;

/// Distinct `_chem_comp.type` annotations partitioned by monomer category.
///
/// Every annotation lives in exactly one bucket; [`TypeBuckets::insert`] moves a value that was
/// previously filed elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeBuckets {
    nucleotide: BTreeSet<String>,
    carbohydrate: BTreeSet<String>,
    peptide: BTreeSet<String>,
    remainder: BTreeSet<String>,
}

impl TypeBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: MonomerCategory, annotation: impl Into<String>) {
        let annotation = annotation.into();
        for other in Self::CATEGORIES {
            if other != category {
                self.bucket_mut(other).remove(&annotation);
            }
        }
        self.bucket_mut(category).insert(annotation);
    }

    /// Category of a previously bucketed annotation.
    pub fn category_of(&self, annotation: &str) -> Option<MonomerCategory> {
        Self::CATEGORIES
            .into_iter()
            .find(|category| self.bucket(*category).contains(annotation))
    }

    /// Annotations filed under `category`, in sorted order.
    pub fn bucket(&self, category: MonomerCategory) -> &BTreeSet<String> {
        match category {
            MonomerCategory::Nucleotide => &self.nucleotide,
            MonomerCategory::Carbohydrate => &self.carbohydrate,
            MonomerCategory::Peptide => &self.peptide,
            MonomerCategory::Remainder => &self.remainder,
        }
    }

    pub fn len(&self) -> usize {
        Self::CATEGORIES
            .into_iter()
            .map(|category| self.bucket(category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    const CATEGORIES: [MonomerCategory; 4] = [
        MonomerCategory::Nucleotide,
        MonomerCategory::Carbohydrate,
        MonomerCategory::Peptide,
        MonomerCategory::Remainder,
    ];

    fn bucket_mut(&mut self, category: MonomerCategory) -> &mut BTreeSet<String> {
        match category {
            MonomerCategory::Nucleotide => &mut self.nucleotide,
            MonomerCategory::Carbohydrate => &mut self.carbohydrate,
            MonomerCategory::Peptide => &mut self.peptide,
            MonomerCategory::Remainder => &mut self.remainder,
        }
    }
}

/// Component identifiers per output category, in input block order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryLists {
    pub nucleotides: Vec<String>,
    pub carbohydrates: Vec<String>,
    pub amino_acids: Vec<String>,
}

impl CategoryLists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` to the list of `category`. Remainder identifiers are discarded.
    pub fn push(&mut self, category: MonomerCategory, id: impl Into<String>) {
        match category {
            MonomerCategory::Nucleotide => self.nucleotides.push(id.into()),
            MonomerCategory::Carbohydrate => self.carbohydrates.push(id.into()),
            MonomerCategory::Peptide => self.amino_acids.push(id.into()),
            MonomerCategory::Remainder => {}
        }
    }

    /// Returns the list for `category`; `None` for the remainder, which has no output list.
    pub fn list(&self, category: MonomerCategory) -> Option<&[String]> {
        match category {
            MonomerCategory::Nucleotide => Some(&self.nucleotides),
            MonomerCategory::Carbohydrate => Some(&self.carbohydrates),
            MonomerCategory::Peptide => Some(&self.amino_acids),
            MonomerCategory::Remainder => None,
        }
    }

    pub fn total(&self) -> usize {
        self.nucleotides.len() + self.carbohydrates.len() + self.amino_acids.len()
    }
}
