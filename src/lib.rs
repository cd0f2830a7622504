//! # CompForge
//!
//! **CompForge** turns the PDBx/mmCIF chemical components dictionary into two reusable datasets: a per-residue bond graph with normalized bond types, and lists of component identifiers grouped into nucleotides, carbohydrates, and amino acids. Runs are deterministic, so identical input yields byte-identical output.
//!
//! ## Features
//!
//! - **Indexed dictionary reader** – `CifFile` splits a multi-block mmCIF file into blocks and category sections once, then parses individual categories on demand so a malformed category never affects its neighbours.
//! - **Bond normalization** – `value_order` and `pdbx_aromatic_flag` pairs map onto seven `BondType` tags through a fixed table; unsupported combinations abort the run instead of producing silent gaps.
//! - **Rule-driven classification** – Priority-ordered keyword rules, embedded as TOML, bucket the distinct `_chem_comp.type` annotations before components are projected onto output lists.
//! - **Compact encodings** – Bond graphs serialize to MessagePack and category lists to indented JSON through the `io` module.
//! - **Optional parallelism** – The `parallel` feature distributes per-block work over Rayon while preserving block order.

mod db;
mod model;
mod utils;

pub mod io;
pub mod ops;
pub mod rules;

pub use model::bonds::{AtomPair, BondGraph, ResidueBonds};
pub use model::classes::{CategoryLists, TypeBuckets};
pub use model::types::{Aromaticity, BondOrder, BondType, MonomerCategory};
