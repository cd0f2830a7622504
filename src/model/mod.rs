//! Core data structures describing the chemical component dictionary.
//!
//! `types` holds the bond and monomer enumerations, `bonds` the per-residue bond tables that
//! make up a bond graph, and `classes` the annotation buckets and output lists produced by
//! classification.

pub mod bonds;
pub mod classes;
pub mod types;
