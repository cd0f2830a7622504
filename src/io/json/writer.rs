//! JSON writer for component identifier lists.

use crate::io::error::Error;
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

/// Writes `ids` as a JSON array indented by one space per level.
///
/// # Errors
///
/// Returns [`Error::Encode`] when serialization fails and [`Error::Io`] when flushing fails.
pub fn write_list<W: Write>(mut writer: W, ids: &[String]) -> Result<(), Error> {
    let formatter = PrettyFormatter::with_indent(b" ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    ids.serialize(&mut serializer)
        .map_err(|e| Error::encode("JSON", e))?;
    writer.flush().map_err(|e| Error::from_io(e, None))
}
