use super::types::BondType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Ordered atom-name pair as listed in `_chem_comp_bond` (`atom_id_1`, `atom_id_2`).
pub type AtomPair = (String, String);

/// Bond table of a single chemical component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResidueBonds {
    bonds: BTreeMap<AtomPair, BondType>,
}

impl ResidueBonds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a bond, replacing any earlier entry for the same ordered pair.
    pub fn insert(
        &mut self,
        atom1: impl Into<String>,
        atom2: impl Into<String>,
        bond_type: BondType,
    ) -> Option<BondType> {
        self.bonds.insert((atom1.into(), atom2.into()), bond_type)
    }

    /// Returns the bond type for the pair exactly as ordered in the source table.
    pub fn get(&self, atom1: &str, atom2: &str) -> Option<BondType> {
        self.bonds
            .get(&(atom1.to_string(), atom2.to_string()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, BondType)> {
        self.bonds
            .iter()
            .map(|((a1, a2), bond_type)| (a1.as_str(), a2.as_str(), *bond_type))
    }
}

impl FromIterator<(String, String, BondType)> for ResidueBonds {
    fn from_iter<T: IntoIterator<Item = (String, String, BondType)>>(iter: T) -> Self {
        let mut bonds = ResidueBonds::new();
        for (atom1, atom2, bond_type) in iter {
            bonds.insert(atom1, atom2, bond_type);
        }
        bonds
    }
}

/// Bond tables keyed by component identifier.
///
/// Components without a `_chem_comp_bond` category are never inserted, so membership tells
/// "no bond data" apart from "bond table present but empty".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BondGraph {
    residues: BTreeMap<String, ResidueBonds>,
}

impl BondGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, residue: impl Into<String>, bonds: ResidueBonds) {
        self.residues.insert(residue.into(), bonds);
    }

    pub fn residue(&self, id: &str) -> Option<&ResidueBonds> {
        self.residues.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.residues.contains_key(id)
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    pub fn bond_count(&self) -> usize {
        self.residues.values().map(ResidueBonds::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ResidueBonds> {
        self.residues.iter()
    }
}

impl FromIterator<(String, ResidueBonds)> for BondGraph {
    fn from_iter<T: IntoIterator<Item = (String, ResidueBonds)>>(iter: T) -> Self {
        Self {
            residues: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BondGraph {
    type Item = (&'a String, &'a ResidueBonds);
    type IntoIter = btree_map::Iter<'a, String, ResidueBonds>;

    fn into_iter(self) -> Self::IntoIter {
        self.residues.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alanine_backbone() -> ResidueBonds {
        let mut bonds = ResidueBonds::new();
        bonds.insert("N", "CA", BondType::Single);
        bonds.insert("CA", "C", BondType::Single);
        bonds.insert("C", "O", BondType::Double);
        bonds
    }

    #[test]
    fn residue_bonds_get_respects_pair_order() {
        let bonds = alanine_backbone();
        assert_eq!(bonds.get("N", "CA"), Some(BondType::Single));
        assert_eq!(bonds.get("C", "O"), Some(BondType::Double));
        assert_eq!(bonds.get("CA", "N"), None);
    }

    #[test]
    fn residue_bonds_insert_replaces_duplicate_pair() {
        let mut bonds = alanine_backbone();
        let previous = bonds.insert("C", "O", BondType::AromaticDouble);
        assert_eq!(previous, Some(BondType::Double));
        assert_eq!(bonds.len(), 3);
        assert_eq!(bonds.get("C", "O"), Some(BondType::AromaticDouble));
    }

    #[test]
    fn residue_bonds_from_iter_collects_rows() {
        let bonds: ResidueBonds = vec![
            ("C1".to_string(), "C2".to_string(), BondType::AromaticSingle),
            ("C2".to_string(), "C3".to_string(), BondType::AromaticDouble),
        ]
        .into_iter()
        .collect();
        assert_eq!(bonds.len(), 2);
        assert_eq!(bonds.get("C2", "C3"), Some(BondType::AromaticDouble));
    }

    #[test]
    fn bond_graph_distinguishes_absent_from_empty() {
        let mut graph = BondGraph::new();
        graph.insert("ALA", alanine_backbone());
        graph.insert("ZN", ResidueBonds::new());

        assert!(graph.contains("ZN"));
        assert!(graph.residue("ZN").unwrap().is_empty());
        assert!(!graph.contains("HOH"));
        assert!(graph.residue("HOH").is_none());
    }

    #[test]
    fn bond_graph_counts_residues_and_bonds() {
        let mut graph = BondGraph::new();
        graph.insert("ALA", alanine_backbone());
        graph.insert("ZN", ResidueBonds::new());

        assert_eq!(graph.residue_count(), 2);
        assert_eq!(graph.bond_count(), 3);
        assert!(!graph.is_empty());
    }

    #[test]
    fn bond_graph_iterates_in_identifier_order() {
        let graph: BondGraph = vec![
            ("GLY".to_string(), ResidueBonds::new()),
            ("ALA".to_string(), alanine_backbone()),
        ]
        .into_iter()
        .collect();
        let ids: Vec<&str> = graph.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["ALA", "GLY"]);
    }
}
