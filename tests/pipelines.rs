use std::collections::HashSet;
use std::io::Cursor;

use comp_forge::io::{CifFile, read_bond_graph, write_bond_graph, write_category_list};
use comp_forge::ops::{self, classify_components, extract_bond_graph};
use comp_forge::{BondType, CategoryLists};

const DICTIONARY: &str = r#"# chemical components excerpt
data_ALA
#
_chem_comp.id                                    ALA
_chem_comp.name                                  ALANINE
_chem_comp.type                                  "L-PEPTIDE LINKING"
_chem_comp.pdbx_type                             ATOMP
#
loop_
_chem_comp_bond.comp_id
_chem_comp_bond.atom_id_1
_chem_comp_bond.atom_id_2
_chem_comp_bond.value_order
_chem_comp_bond.pdbx_aromatic_flag
_chem_comp_bond.pdbx_stereo_config
_chem_comp_bond.pdbx_ordinal
ALA N   CA  SING N N 1
ALA CA  C   SING N N 2
ALA C   O   DOUB N N 3
#
data_DA
#
_chem_comp.id                                    DA
_chem_comp.name                                  "2'-DEOXYADENOSINE-5'-MONOPHOSPHATE"
_chem_comp.type                                  "DNA LINKING"
#
loop_
_chem_comp_bond.comp_id
_chem_comp_bond.atom_id_1
_chem_comp_bond.atom_id_2
_chem_comp_bond.value_order
_chem_comp_bond.pdbx_aromatic_flag
_chem_comp_bond.pdbx_stereo_config
_chem_comp_bond.pdbx_ordinal
DA "C5'" "C4'" SING N N 1
DA N9    C8    SING Y N 2
DA C8    N7    DOUB Y N 3
#
data_GLC
#
_chem_comp.id                                    GLC
_chem_comp.name                                  alpha-D-glucopyranose
_chem_comp.type                                  "D-saccharide, alpha linking"
_chem_comp.pdbx_synonyms
;alpha-D-glucose; D-glucose;
glucose
;
#
data_ZN
#
_chem_comp.id                                    ZN
_chem_comp.name                                  "ZINC ION"
_chem_comp.type                                  NON-POLYMER
#
data_PRX
#
_chem_comp.id                                    PRX
_chem_comp.type                                  peptide-like
#
data_UNK
#
_chem_comp.id                                    UNK
_chem_comp.type                                  ?
#
data_FOO
#
_chem_comp.id                                    FOO
_chem_comp.type                                  "DNA linking"
#
"#;

fn dictionary() -> CifFile {
    CifFile::read(Cursor::new(DICTIONARY.as_bytes())).expect("dictionary should index")
}

#[test]
fn bond_graph_covers_only_components_with_bond_tables() {
    let graph = extract_bond_graph(&dictionary()).unwrap();

    assert_eq!(graph.residue_count(), 2);
    assert_eq!(graph.bond_count(), 6);

    let ala = graph.residue("ALA").unwrap();
    assert_eq!(ala.get("N", "CA"), Some(BondType::Single));
    assert_eq!(ala.get("CA", "C"), Some(BondType::Single));
    assert_eq!(ala.get("C", "O"), Some(BondType::Double));

    let da = graph.residue("DA").unwrap();
    assert_eq!(da.get("C5'", "C4'"), Some(BondType::Single));
    assert_eq!(da.get("N9", "C8"), Some(BondType::AromaticSingle));
    assert_eq!(da.get("C8", "N7"), Some(BondType::AromaticDouble));

    for id in ["GLC", "ZN", "PRX", "UNK", "FOO"] {
        assert!(!graph.contains(id), "{id} should have no bond entry");
    }
}

#[test]
fn bond_dataset_is_byte_identical_across_runs_and_reads_back() {
    let file = dictionary();

    let mut first = Vec::new();
    write_bond_graph(&mut first, &extract_bond_graph(&file).unwrap()).unwrap();
    let mut second = Vec::new();
    write_bond_graph(&mut second, &extract_bond_graph(&file).unwrap()).unwrap();
    assert_eq!(first, second);

    let decoded = read_bond_graph(Cursor::new(first)).unwrap();
    assert_eq!(decoded, extract_bond_graph(&file).unwrap());
}

#[test]
fn unsupported_bond_aborts_extraction() {
    let mut text = DICTIONARY.to_string();
    text.push_str(
        "data_RE2\nloop_\n_chem_comp_bond.comp_id\n_chem_comp_bond.atom_id_1\n\
         _chem_comp_bond.atom_id_2\n_chem_comp_bond.value_order\n\
         _chem_comp_bond.pdbx_aromatic_flag\nRE2 RE1 RE2 QUAD Y\n",
    );
    let file = CifFile::read(Cursor::new(text.as_bytes())).unwrap();

    let err = extract_bond_graph(&file).unwrap_err();
    assert!(matches!(err, ops::Error::InvalidBondSpecification { .. }));
    assert!(err.to_string().contains("RE1-RE2"));
}

#[test]
fn classification_sorts_components_into_disjoint_lists() {
    let file = dictionary();
    let lists = classify_components(&file);

    assert_eq!(lists.amino_acids, vec!["ALA"]);
    assert_eq!(lists.nucleotides, vec!["DA", "FOO"]);
    assert_eq!(lists.carbohydrates, vec!["GLC"]);

    let all: Vec<&String> = lists
        .nucleotides
        .iter()
        .chain(&lists.carbohydrates)
        .chain(&lists.amino_acids)
        .collect();
    let unique: HashSet<&String> = all.iter().copied().collect();
    assert_eq!(all.len(), unique.len());

    let block_ids: HashSet<&str> = file.block_ids().collect();
    assert!(all.iter().all(|id| block_ids.contains(id.as_str())));
}

#[test]
fn classification_is_repeatable() {
    let file = dictionary();
    let first: CategoryLists = classify_components(&file);
    let second: CategoryLists = classify_components(&file);
    assert_eq!(first, second);
}

#[test]
fn category_lists_render_as_indented_json() {
    let lists = classify_components(&dictionary());

    let mut buffer = Vec::new();
    write_category_list(&mut buffer, &lists.nucleotides).unwrap();
    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "[\n \"DA\",\n \"FOO\"\n]"
    );
}
