use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Bond multiplicity as written in `_chem_comp_bond.value_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Quadruple,
}

/// Value of `_chem_comp_bond.pdbx_aromatic_flag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aromaticity {
    Aromatic,
    NonAromatic,
}

/// Normalized bond type combining multiplicity and aromaticity.
///
/// The discriminants are the integer tags written to the bond dataset. Tag `0` is left to
/// consumers as "unspecified" and is never produced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BondType {
    Single = 1,
    Double = 2,
    Triple = 3,
    Quadruple = 4,
    AromaticSingle = 5,
    AromaticDouble = 6,
    AromaticTriple = 7,
}

/// Monomer class assigned to a `_chem_comp.type` annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonomerCategory {
    Nucleotide,
    Carbohydrate,
    Peptide,
    Remainder,
}

impl BondOrder {
    pub fn code(&self) -> &'static str {
        match self {
            BondOrder::Single => "SING",
            BondOrder::Double => "DOUB",
            BondOrder::Triple => "TRIP",
            BondOrder::Quadruple => "QUAD",
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for BondOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SING" => Ok(BondOrder::Single),
            "DOUB" => Ok(BondOrder::Double),
            "TRIP" => Ok(BondOrder::Triple),
            "QUAD" => Ok(BondOrder::Quadruple),
            _ => Err(format!("Invalid bond order code: {}", s)),
        }
    }
}

impl Aromaticity {
    pub fn flag(&self) -> &'static str {
        match self {
            Aromaticity::Aromatic => "Y",
            Aromaticity::NonAromatic => "N",
        }
    }
}

impl fmt::Display for Aromaticity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

impl FromStr for Aromaticity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Y" => Ok(Aromaticity::Aromatic),
            "N" => Ok(Aromaticity::NonAromatic),
            _ => Err(format!("Invalid aromatic flag: {}", s)),
        }
    }
}

/// Every supported `(order, aromaticity)` combination. Anything missing has no bond type.
const BOND_TYPE_TABLE: [((BondOrder, Aromaticity), BondType); 7] = [
    ((BondOrder::Single, Aromaticity::NonAromatic), BondType::Single),
    ((BondOrder::Double, Aromaticity::NonAromatic), BondType::Double),
    ((BondOrder::Triple, Aromaticity::NonAromatic), BondType::Triple),
    ((BondOrder::Quadruple, Aromaticity::NonAromatic), BondType::Quadruple),
    ((BondOrder::Single, Aromaticity::Aromatic), BondType::AromaticSingle),
    ((BondOrder::Double, Aromaticity::Aromatic), BondType::AromaticDouble),
    ((BondOrder::Triple, Aromaticity::Aromatic), BondType::AromaticTriple),
];

impl BondType {
    /// Looks up the bond type for a multiplicity and aromaticity pair.
    ///
    /// Returns `None` for combinations absent from the table (an aromatic quadruple bond).
    pub fn lookup(order: BondOrder, aromaticity: Aromaticity) -> Option<Self> {
        BOND_TYPE_TABLE
            .iter()
            .find(|(key, _)| *key == (order, aromaticity))
            .map(|(_, bond_type)| *bond_type)
    }

    pub fn tag(&self) -> u8 {
        *self as u8
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        BOND_TYPE_TABLE
            .iter()
            .map(|(_, bond_type)| *bond_type)
            .find(|bond_type| bond_type.tag() == tag)
    }

    pub fn is_aromatic(&self) -> bool {
        matches!(
            self,
            BondType::AromaticSingle | BondType::AromaticDouble | BondType::AromaticTriple
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            BondType::Single => "SINGLE",
            BondType::Double => "DOUBLE",
            BondType::Triple => "TRIPLE",
            BondType::Quadruple => "QUADRUPLE",
            BondType::AromaticSingle => "AROMATIC_SINGLE",
            BondType::AromaticDouble => "AROMATIC_DOUBLE",
            BondType::AromaticTriple => "AROMATIC_TRIPLE",
        }
    }
}

impl fmt::Display for BondType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for BondType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.tag())
    }
}

impl<'de> Deserialize<'de> for BondType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = u8::deserialize(deserializer)?;
        BondType::from_tag(tag)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown bond type tag {tag}")))
    }
}

impl MonomerCategory {
    pub fn name(&self) -> &'static str {
        match self {
            MonomerCategory::Nucleotide => "Nucleotide",
            MonomerCategory::Carbohydrate => "Carbohydrate",
            MonomerCategory::Peptide => "Peptide",
            MonomerCategory::Remainder => "Remainder",
        }
    }
}

impl fmt::Display for MonomerCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MonomerCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Nucleotide" | "nucleotide" => Ok(MonomerCategory::Nucleotide),
            "Carbohydrate" | "carbohydrate" => Ok(MonomerCategory::Carbohydrate),
            "Peptide" | "peptide" => Ok(MonomerCategory::Peptide),
            "Remainder" | "remainder" => Ok(MonomerCategory::Remainder),
            _ => Err(format!("Invalid monomer category: {}", s)),
        }
    }
}
