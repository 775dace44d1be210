use std::fmt::{Display, Formatter, Result as FmtResult};

/// The unsaturation class of a parent chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChainType {
    Alkane,
    Alkene,
    Alkyne,
}

impl ChainType {
    /// Whether names of this type carry bond locants.
    pub fn is_unsaturated(&self) -> bool {
        !matches!(self, ChainType::Alkane)
    }

    /// The order of the bond found at each locant.
    pub fn bond_order(&self) -> u8 {
        match self {
            ChainType::Alkane => 1,
            ChainType::Alkene => 2,
            ChainType::Alkyne => 3,
        }
    }

    /// "double" or "triple" for unsaturated chains.
    pub fn bond_name(&self) -> Option<&'static str> {
        match self {
            ChainType::Alkane => None,
            ChainType::Alkene => Some("double"),
            ChainType::Alkyne => Some("triple"),
        }
    }
}

impl Display for ChainType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ChainType::Alkane => write!(f, "alkane"),
            ChainType::Alkene => write!(f, "alkene"),
            ChainType::Alkyne => write!(f, "alkyne"),
        }
    }
}

/// A validated straight-chain hydrocarbon.
///
/// Instances only come out of the name parser, so every `Molecule` has
/// already passed locant validation: unsaturated chains have at least one
/// locant, no locant repeats, and each lies in `1..chain_length`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Molecule {
    pub(crate) name: String,
    pub(crate) chain_type: ChainType,
    pub(crate) chain_length: usize,
    pub(crate) bond_locants: Vec<usize>,
}

impl Molecule {
    /// The name this molecule was parsed from, exactly as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chain_type(&self) -> ChainType {
        self.chain_type
    }

    /// Number of carbons in the parent chain.
    pub fn chain_length(&self) -> usize {
        self.chain_length
    }

    /// 1-based positions of the leftmost atom of each unsaturated bond.
    /// Always empty for alkanes.
    pub fn bond_locants(&self) -> &[usize] {
        &self.bond_locants
    }

    /// The order of the bond between carbons `locant` and `locant + 1`.
    pub fn bond_order_at(&self, locant: usize) -> u8 {
        if self.chain_type.is_unsaturated() && self.bond_locants.contains(&locant) {
            self.chain_type.bond_order()
        } else {
            1
        }
    }
}

impl Display for Molecule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.describe())
    }
}
