use crate::io::error::Error;
use crate::model::bonds::BondGraph;
use std::io::Read;

/// Reads a bond dataset written by [`super::writer::write`].
///
/// # Errors
///
/// Returns [`Error::Decode`] when the bytes are not a valid dataset, including unknown bond
/// type tags.
pub fn read<R: Read>(reader: R) -> Result<BondGraph, Error> {
    rmp_serde::decode::from_read(reader).map_err(|e| Error::decode("MessagePack", e))
}
