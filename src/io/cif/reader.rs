//! Multi-block PDBx/mmCIF reader for dictionary-style files such as `components.cif`.
//!
//! Reading splits the stream into `data_` blocks and indexes each block's categories by line
//! range without tokenizing values. Categories are tokenized on request, so a malformed
//! category only surfaces when it is asked for and never prevents access to its neighbours.

use super::category::{Category, split_data_name};
use super::tokenizer::tokenize;
use crate::io::error::Error;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Range;
use std::path::Path;

/// One `data_` block: its raw lines and the line ranges of every category it declares.
#[derive(Debug, Clone)]
struct Block {
    name: String,
    /// One-based line number of the first entry in `lines`.
    first_line: usize,
    lines: Vec<String>,
    sections: Sections,
}

/// Category line ranges of a block, plus loop categories declared more than once.
#[derive(Debug, Clone, Default)]
struct Sections {
    ranges: HashMap<String, Vec<Range<usize>>>,
    /// Zero-based block line of the first repeated `loop_` for each affected category.
    repeated: HashMap<String, usize>,
}

impl Sections {
    fn push_items(&mut self, category: String, range: Range<usize>) {
        self.ranges.entry(category).or_default().push(range);
    }

    fn push_loop(&mut self, category: String, range: Range<usize>) {
        if self.ranges.contains_key(&category) {
            self.repeated.entry(category).or_insert(range.start);
        } else {
            self.ranges.insert(category, vec![range]);
        }
    }
}

/// Splitter states while indexing a block.
enum SectionState {
    Idle,
    Items { category: String, start: usize },
    LoopHeader { category: Option<String>, start: usize },
    LoopBody { category: String, start: usize },
}

/// In-memory PDBx/mmCIF file exposing per-block, per-category access.
#[derive(Debug, Clone, Default)]
pub struct CifFile {
    blocks: Vec<Block>,
    index: HashMap<String, usize>,
}

impl CifFile {
    /// Reads and indexes a multi-block CIF stream.
    ///
    /// Lines before the first `data_` header are ignored. Category contents are not validated
    /// here; see [`CifFile::category`].
    ///
    /// # Arguments
    ///
    /// * `reader` - Buffered source of CIF text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the stream cannot be read and [`Error::InconsistentData`]
    /// when two blocks share a name.
    pub fn read<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut file = CifFile::default();
        let mut current: Option<Block> = None;
        let mut in_text_field = false;

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::from_io(e, None))?;
            let line_number = idx + 1;

            if !in_text_field {
                let trimmed = line.trim_start();
                if let Some(name) = strip_prefix_ignore_case(trimmed, "data_") {
                    if let Some(block) = current.take() {
                        file.push(block)?;
                    }
                    current = Some(Block {
                        name: name.trim().to_string(),
                        first_line: line_number + 1,
                        lines: Vec::new(),
                        sections: Sections::default(),
                    });
                    continue;
                }
            }

            if line.starts_with(';') {
                in_text_field = !in_text_field;
            }

            if let Some(block) = current.as_mut() {
                block.lines.push(line);
            }
        }

        if let Some(block) = current.take() {
            file.push(block)?;
        }

        Ok(file)
    }

    /// Opens and indexes a CIF file, attaching `path` to any error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::from_io(e, Some(path.to_path_buf())))?;
        Self::read(BufReader::new(file)).map_err(|e| e.with_path(path))
    }

    /// Block identifiers in file order.
    pub fn block_ids(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|b| b.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Parses one category of one block into columns.
    ///
    /// # Arguments
    ///
    /// * `block_id` - Name following `data_`, e.g. `"ALA"`.
    /// * `name` - Category name without the leading underscore, e.g. `"chem_comp_bond"`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the block or the category does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when the category exists but cannot be tokenized, its
    /// values do not line up with its data names, or the block declares it as a loop more
    /// than once.
    pub fn category(&self, block_id: &str, name: &str) -> Result<Option<Category>, Error> {
        let Some(block) = self.block(block_id) else {
            return Ok(None);
        };
        let key = name.to_ascii_lowercase();
        if let Some(&line) = block.sections.repeated.get(&key) {
            return Err(Error::parse(
                "mmCIF",
                None,
                block.first_line + line,
                format!("Category '{key}' is declared more than once in block '{block_id}'"),
            ));
        }
        let Some(ranges) = block.sections.ranges.get(&key) else {
            return Ok(None);
        };

        let mut tokens = Vec::new();
        for range in ranges {
            tokens.extend(tokenize(
                &block.lines[range.clone()],
                block.first_line + range.start,
            )?);
        }

        Category::from_tokens(&key, tokens).map(Some)
    }

    fn block(&self, block_id: &str) -> Option<&Block> {
        self.index.get(block_id).map(|&idx| &self.blocks[idx])
    }

    fn push(&mut self, mut block: Block) -> Result<(), Error> {
        block.sections = index_sections(&block);
        if self.index.contains_key(&block.name) {
            return Err(Error::inconsistent_data(
                "mmCIF",
                None,
                format!("Duplicate data block '{}'", block.name),
            ));
        }
        self.index.insert(block.name.clone(), self.blocks.len());
        self.blocks.push(block);
        Ok(())
    }
}

/// Computes the line ranges belonging to each category of a block.
///
/// Consecutive key/value items of one category form a single range; a category whose items
/// are interleaved with other categories gets several ranges. Text-field lines always belong
/// to the section they appear in.
///
/// A loop category declared twice is recorded as repeated and reported by
/// [`CifFile::category`] for that block only.
fn index_sections(block: &Block) -> Sections {
    let mut sections = Sections::default();
    let mut state = SectionState::Idle;
    let mut in_text_field = false;

    let mut close = |state: SectionState, end: usize| match state {
        SectionState::Idle | SectionState::LoopHeader { category: None, .. } => {}
        SectionState::Items { category, start } => sections.push_items(category, start..end),
        SectionState::LoopHeader {
            category: Some(category),
            start,
        }
        | SectionState::LoopBody { category, start } => sections.push_loop(category, start..end),
    };

    for (idx, line) in block.lines.iter().enumerate() {
        if line.starts_with(';') {
            in_text_field = !in_text_field;
            state = begin_loop_body(state);
            continue;
        }
        if in_text_field {
            continue;
        }

        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let first = trimmed.split_whitespace().next().unwrap_or_default();

        if first.eq_ignore_ascii_case("loop_") {
            close(std::mem::replace(&mut state, SectionState::Idle), idx);
            let category = trimmed
                .split_whitespace()
                .nth(1)
                .filter(|t| t.starts_with('_'))
                .map(|t| split_data_name(t).0.to_ascii_lowercase());
            state = SectionState::LoopHeader {
                category,
                start: idx,
            };
            continue;
        }

        if first.starts_with('_') {
            let category = split_data_name(first).0.to_ascii_lowercase();
            state = match state {
                SectionState::LoopHeader {
                    category: None,
                    start,
                } => SectionState::LoopHeader {
                    category: Some(category),
                    start,
                },
                header @ SectionState::LoopHeader { .. } => header,
                SectionState::Items {
                    category: current,
                    start,
                } if current == category => SectionState::Items {
                    category: current,
                    start,
                },
                previous => {
                    close(previous, idx);
                    SectionState::Items {
                        category,
                        start: idx,
                    }
                }
            };
            continue;
        }

        state = begin_loop_body(state);
    }

    close(state, block.lines.len());
    sections
}

/// Moves a loop whose header names its category into the value section.
fn begin_loop_body(state: SectionState) -> SectionState {
    match state {
        SectionState::LoopHeader {
            category: Some(category),
            start,
        } => SectionState::LoopBody { category, start },
        other => other,
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    s.get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &s[prefix.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::cif::CifValue;
    use std::io::Cursor;

    const COMPONENTS: &str = "\
data_ALA
#
_chem_comp.id ALA
_chem_comp.name ALANINE
_chem_comp.type \"L-PEPTIDE LINKING\"
_chem_comp.pdbx_type ATOMP
#
loop_
_chem_comp_atom.comp_id
_chem_comp_atom.atom_id
ALA N
ALA CA
#
loop_
_chem_comp_bond.comp_id
_chem_comp_bond.atom_id_1
_chem_comp_bond.atom_id_2
_chem_comp_bond.value_order
_chem_comp_bond.pdbx_aromatic_flag
ALA N CA SING N
ALA CA C SING N
ALA C O DOUB N
#
data_ZN
_chem_comp.id ZN
_chem_comp.name 'ZINC ION'
_chem_comp.type NON-POLYMER
#
data_XYZ
_chem_comp.id XYZ
_chem_comp.name
;
_not_a_name inside text
;
_chem_comp.type 'broken
";

    fn read(text: &str) -> CifFile {
        CifFile::read(Cursor::new(text.as_bytes())).expect("CIF should index")
    }

    #[test]
    fn read_lists_blocks_in_file_order() {
        let file = read(COMPONENTS);
        assert_eq!(file.block_ids().collect::<Vec<_>>(), vec!["ALA", "ZN", "XYZ"]);
        assert_eq!(file.len(), 3);
    }

    #[test]
    fn read_ignores_lines_before_first_block() {
        let file = read("# preamble\n_stray.value 1\ndata_A\n_chem_comp.id A\n");
        assert_eq!(file.block_ids().collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn read_rejects_duplicate_block_names() {
        let err = CifFile::read(Cursor::new("data_A\ndata_A\n".as_bytes())).unwrap_err();
        assert!(matches!(err, Error::InconsistentData { .. }));
    }

    #[test]
    fn category_reads_looped_bond_table() {
        let file = read(COMPONENTS);
        let bonds = file.category("ALA", "chem_comp_bond").unwrap().unwrap();
        assert_eq!(bonds.row_count(), 3);
        assert_eq!(bonds.text("value_order", 2), Some("DOUB"));
        assert_eq!(bonds.text("atom_id_1", 1), Some("CA"));
    }

    #[test]
    fn category_reads_key_value_table() {
        let file = read(COMPONENTS);
        let comp = file.category("ALA", "chem_comp").unwrap().unwrap();
        assert_eq!(comp.row_count(), 1);
        assert_eq!(comp.text("type", 0), Some("L-PEPTIDE LINKING"));

        let zn = file.category("ZN", "chem_comp").unwrap().unwrap();
        assert_eq!(zn.text("name", 0), Some("ZINC ION"));
    }

    #[test]
    fn category_returns_none_for_absent_category_or_block() {
        let file = read(COMPONENTS);
        assert!(file.category("ZN", "chem_comp_bond").unwrap().is_none());
        assert!(file.category("GLY", "chem_comp").unwrap().is_none());
    }

    #[test]
    fn category_lookup_is_case_insensitive() {
        let file = read(COMPONENTS);
        assert!(file.category("ALA", "CHEM_COMP_BOND").unwrap().is_some());
    }

    #[test]
    fn category_reports_unparsable_content_without_affecting_other_blocks() {
        let file = read(COMPONENTS);
        let err = file.category("XYZ", "chem_comp").unwrap_err();
        match err {
            Error::Parse { line_number, .. } => assert_eq!(line_number, 35),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(file.category("ZN", "chem_comp").unwrap().is_some());
    }

    #[test]
    fn text_fields_do_not_open_new_sections() {
        let file = read(
            "data_T\n_chem_comp.name\n;\n_chem_comp_bond.fake x\n;\n_chem_comp.type ?\n",
        );
        assert!(file.category("T", "chem_comp_bond").unwrap().is_none());
        let comp = file.category("T", "chem_comp").unwrap().unwrap();
        assert_eq!(comp.text("name", 0), Some("_chem_comp_bond.fake x"));
        assert_eq!(comp.value("type", 0), Some(&CifValue::Unknown));
    }

    #[test]
    fn open_reads_file_and_attaches_path_to_errors() {
        let path = std::env::temp_dir().join(format!("comp_forge_open_{}.cif", std::process::id()));
        std::fs::write(&path, COMPONENTS).unwrap();
        let file = CifFile::open(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(file.len(), 3);

        let missing = path.with_extension("missing");
        match CifFile::open(&missing).unwrap_err() {
            Error::Io { path: Some(p), .. } => assert_eq!(p, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn repeated_loop_category_fails_only_that_category() {
        let text = "data_A\n_chem_comp.id A\nloop_\n_x.a\n1\nloop_\n_x.a\n2\ndata_B\nloop_\n_x.a\n3\n";
        let file = read(text);

        match file.category("A", "x").unwrap_err() {
            Error::Parse { line_number, .. } => assert_eq!(line_number, 6),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(file.category("A", "chem_comp").unwrap().is_some());
        assert_eq!(file.category("B", "x").unwrap().unwrap().text("a", 0), Some("3"));
    }

    #[test]
    fn read_accepts_lines_starting_with_multibyte_characters() {
        let file = read(
            "data_X\nloop_\n_chem_comp_atom.name\n_chem_comp_atom.alt\n\u{e9}\u{e9}\u{e9} a\n#\ndata_Y\n_chem_comp.id Y\n",
        );
        assert_eq!(file.block_ids().collect::<Vec<_>>(), vec!["X", "Y"]);
        let atoms = file.category("X", "chem_comp_atom").unwrap().unwrap();
        assert_eq!(atoms.text("name", 0), Some("\u{e9}\u{e9}\u{e9}"));
    }
}
