//! Bond extraction: normalization of raw bond codes and assembly of the bond graph.
//!
//! Each component's `_chem_comp_bond` loop is converted into a [`ResidueBonds`] table. A row
//! whose order and aromaticity codes have no [`BondType`] aborts the whole extraction;
//! components without a bond loop are left out of the [`BondGraph`].

use std::str::FromStr;

use log::{debug, info};

use super::error::Error;
use crate::io::{Category, CifFile, CifValue};
use crate::model::bonds::{BondGraph, ResidueBonds};
use crate::model::types::{Aromaticity, BondOrder, BondType};
use crate::utils::parallel::*;

/// Category holding the intra-residue bonds of a component.
pub const BOND_CATEGORY: &str = "chem_comp_bond";

const ATOM_ID_1: &str = "atom_id_1";
const ATOM_ID_2: &str = "atom_id_2";
const VALUE_ORDER: &str = "value_order";
const AROMATIC_FLAG: &str = "pdbx_aromatic_flag";

/// Maps a raw `value_order` code and `pdbx_aromatic_flag` onto a [`BondType`].
///
/// # Arguments
///
/// * `order` - Bond order code (`SING`, `DOUB`, `TRIP`, `QUAD`).
/// * `aromatic_flag` - Aromaticity flag (`Y` or `N`).
///
/// # Errors
///
/// Returns [`Error::InvalidBondSpecification`] for unknown codes and for the aromatic
/// quadruple combination, which has no bond type.
pub fn normalize_bond(order: &str, aromatic_flag: &str) -> Result<BondType, Error> {
    let invalid = || Error::invalid_bond_specification(order, aromatic_flag);

    let order_code = BondOrder::from_str(order).map_err(|_| invalid())?;
    let aromaticity = Aromaticity::from_str(aromatic_flag).map_err(|_| invalid())?;

    BondType::lookup(order_code, aromaticity).ok_or_else(invalid)
}

/// Builds the bond table of one component from its parsed `_chem_comp_bond` category.
///
/// # Arguments
///
/// * `residue` - Component identifier, used for error context.
/// * `bonds` - The component's bond category.
///
/// # Errors
///
/// Returns [`Error::MissingColumn`] if a required column is absent and
/// [`Error::InvalidBondSpecification`] (with the failing row attached) if any row cannot be
/// normalized.
pub fn assemble_residue_bonds(residue: &str, bonds: &Category) -> Result<ResidueBonds, Error> {
    let atom1 = required_column(residue, bonds, ATOM_ID_1)?;
    let atom2 = required_column(residue, bonds, ATOM_ID_2)?;
    let order = required_column(residue, bonds, VALUE_ORDER)?;
    let aromatic = required_column(residue, bonds, AROMATIC_FLAG)?;

    let mut table = ResidueBonds::new();
    for row in 0..bonds.row_count() {
        let a1 = atom1[row].as_str();
        let a2 = atom2[row].as_str();
        let bond_type = normalize_bond(order[row].as_str(), aromatic[row].as_str())
            .map_err(|e| e.at_bond(residue, a1, a2))?;
        table.insert(a1, a2, bond_type);
    }

    Ok(table)
}

/// Reads and assembles the bond table of one block.
///
/// # Returns
///
/// `Ok(None)` when the block has no `_chem_comp_bond` category.
///
/// # Errors
///
/// Propagates reader failures for an unparsable bond category and every error of
/// [`assemble_residue_bonds`].
pub fn read_residue_bonds(file: &CifFile, residue: &str) -> Result<Option<ResidueBonds>, Error> {
    match file.category(residue, BOND_CATEGORY)? {
        Some(category) => assemble_residue_bonds(residue, &category).map(Some),
        None => {
            debug!("Component '{residue}' has no {BOND_CATEGORY} category");
            Ok(None)
        }
    }
}

/// Extracts the bond graph of every component in the dictionary.
///
/// # Errors
///
/// Fails on the first component whose bond data cannot be read or normalized; no partial
/// graph is returned.
pub fn extract_bond_graph(file: &CifFile) -> Result<BondGraph, Error> {
    let ids: Vec<&str> = file.block_ids().collect();

    let tables = ids
        .par_iter()
        .map(|&id| read_residue_bonds(file, id).map(|table| table.map(|t| (id.to_string(), t))))
        .collect::<Result<Vec<_>, Error>>()?;

    let graph: BondGraph = tables.into_iter().flatten().collect();

    info!(
        "Collected {} bonds for {} of {} components",
        graph.bond_count(),
        graph.residue_count(),
        ids.len()
    );

    Ok(graph)
}

fn required_column<'a>(
    residue: &str,
    bonds: &'a Category,
    column: &'static str,
) -> Result<&'a [CifValue], Error> {
    bonds
        .column(column)
        .ok_or_else(|| Error::missing_column(residue, BOND_CATEGORY, column))
}
