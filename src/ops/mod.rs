//! Dataset pipelines built on the component dictionary.
//!
//! `bonds` turns every `_chem_comp_bond` loop into a normalized bond graph; `classify` sorts
//! components into nucleotide, carbohydrate, and amino-acid lists from their type annotation.
//! Both share a common error type.

mod bonds;
mod classify;
mod error;

pub use bonds::{
    BOND_CATEGORY, assemble_residue_bonds, extract_bond_graph, normalize_bond, read_residue_bonds,
};

pub use classify::{
    Classification, TYPE_CATEGORY, classify_annotations, classify_components,
    classify_components_with, collect_type_annotations, project_categories, read_type_annotation,
};

pub use error::{BondLocation, Error};
