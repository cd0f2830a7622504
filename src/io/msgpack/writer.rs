//! MessagePack writer for the per-residue bond dataset.
//!
//! The dataset is a map from component identifier to a map keyed by the two-element
//! `[atom_id_1, atom_id_2]` array, valued by the integer tag of the normalized [`BondType`].
//! Both levels are emitted in sorted key order, so identical graphs produce identical bytes.
//!
//! [`BondType`]: crate::model::types::BondType

use crate::io::error::Error;
use crate::model::bonds::BondGraph;
use std::io::Write;

/// Serializes a [`BondGraph`] as MessagePack.
///
/// # Arguments
///
/// * `writer` - Destination that implements [`Write`].
/// * `graph` - Bond tables keyed by component identifier.
///
/// # Errors
///
/// Returns [`Error::Encode`] when encoding fails or the writer rejects the bytes.
pub fn write<W: Write>(mut writer: W, graph: &BondGraph) -> Result<(), Error> {
    rmp_serde::encode::write(&mut writer, graph).map_err(|e| Error::encode("MessagePack", e))?;
    writer.flush().map_err(|e| Error::from_io(e, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::bonds::ResidueBonds;
    use crate::model::types::BondType;

    fn sample_graph() -> BondGraph {
        let mut ala = ResidueBonds::new();
        ala.insert("N", "CA", BondType::Single);
        ala.insert("C", "O", BondType::Double);

        let mut graph = BondGraph::new();
        graph.insert("ALA", ala);
        graph.insert("ZN", ResidueBonds::new());
        graph
    }

    #[test]
    fn write_is_deterministic() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        write(&mut first, &sample_graph()).unwrap();
        write(&mut second, &sample_graph()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn write_encodes_outer_map_with_component_keys() {
        let mut buffer = Vec::new();
        write(&mut buffer, &sample_graph()).unwrap();

        // fixmap with two entries, first key "ALA" as fixstr.
        assert_eq!(buffer[0], 0x82);
        assert_eq!(&buffer[1..5], &[0xa3, b'A', b'L', b'A']);
    }

    #[test]
    fn write_encodes_atom_pairs_as_arrays_and_tags_as_integers() {
        let mut ala = ResidueBonds::new();
        ala.insert("C", "O", BondType::Double);
        let mut graph = BondGraph::new();
        graph.insert("X", ala);

        let mut buffer = Vec::new();
        write(&mut buffer, &graph).unwrap();

        let expected = [
            0x81, 0xa1, b'X', // {"X":
            0x81, // {
            0x92, 0xa1, b'C', 0xa1, b'O', // ["C", "O"]:
            0x02, // 2
        ];
        assert_eq!(buffer, expected);
    }
}
