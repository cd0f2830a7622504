//! Shared error type returned by the dataset pipelines.
//!
//! Bond specifications without a corresponding bond type and structurally incomplete bond
//! tables are fatal for a run; reader failures are wrapped so callers see one error type.

use std::fmt;
use thiserror::Error;

/// Residue and atom pair of the bond row that failed to normalize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BondLocation {
    pub residue: String,
    pub atom1: String,
    pub atom2: String,
}

/// Error conditions surfaced by the operations layer.
#[derive(Debug, Error)]
pub enum Error {
    /// The `(value_order, pdbx_aromatic_flag)` pair has no bond type, or a code is unknown.
    #[error(
        "invalid bond specification (order '{order}', aromatic flag '{aromatic_flag}') for {location_desc}",
        location_desc = LocationDisplay(location)
    )]
    InvalidBondSpecification {
        order: String,
        aromatic_flag: String,
        location: Option<BondLocation>,
    },

    /// A bond category is present but lacks a column needed to build the bond table.
    #[error("category '{category}' of residue '{residue}' has no '{column}' column")]
    MissingColumn {
        residue: String,
        category: &'static str,
        column: &'static str,
    },

    /// The component dictionary could not be read.
    #[error(transparent)]
    Io(#[from] crate::io::Error),
}

impl Error {
    pub fn invalid_bond_specification(
        order: impl Into<String>,
        aromatic_flag: impl Into<String>,
    ) -> Self {
        Self::InvalidBondSpecification {
            order: order.into(),
            aromatic_flag: aromatic_flag.into(),
            location: None,
        }
    }

    pub fn missing_column(
        residue: impl Into<String>,
        category: &'static str,
        column: &'static str,
    ) -> Self {
        Self::MissingColumn {
            residue: residue.into(),
            category,
            column,
        }
    }

    /// Attaches the failing bond row to an [`Error::InvalidBondSpecification`].
    ///
    /// Other variants are returned unchanged.
    pub fn at_bond(
        self,
        residue: impl Into<String>,
        atom1: impl Into<String>,
        atom2: impl Into<String>,
    ) -> Self {
        match self {
            Self::InvalidBondSpecification {
                order,
                aromatic_flag,
                ..
            } => Self::InvalidBondSpecification {
                order,
                aromatic_flag,
                location: Some(BondLocation {
                    residue: residue.into(),
                    atom1: atom1.into(),
                    atom2: atom2.into(),
                }),
            },
            other => other,
        }
    }
}

struct LocationDisplay<'a>(&'a Option<BondLocation>);

impl<'a> fmt::Display for LocationDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(loc) => write!(
                f,
                "bond {}-{} of residue '{}'",
                loc.atom1, loc.atom2, loc.residue
            ),
            None => write!(f, "bond record"),
        }
    }
}
