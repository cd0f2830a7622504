//! IO front-end for chemical component dictionaries and the derived datasets.
//!
//! The module exposes the multi-block mmCIF reader used by both pipelines, the MessagePack
//! codec for bond graphs, and the JSON writer for category lists, so callers never touch the
//! format-specific submodules directly.

mod cif;
mod error;
mod json;
mod msgpack;

pub use cif::{Category, CifFile, CifValue};

pub use msgpack::reader::read as read_bond_graph;
pub use msgpack::writer::write as write_bond_graph;

pub use json::writer::write_list as write_category_list;

pub use error::Error;
