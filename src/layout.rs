use std::collections::BTreeMap;
use thiserror::Error;
use tracing::*;

/// The highest bond order a layout accepts.
pub const MAX_BOND_ORDER: u8 = 3;

/// Carbon's valence.
const VALENCE: u8 = 4;

/// Atom labels indexed by implicit hydrogen count.
const CARBON_LABELS: [&str; 5] = ["C", "CH", "CH₂", "CH₃", "CH₄"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("bond orders must be between 0 and 3, got {order} at position {position}")]
    InvalidBondOrder { position: i32, order: u8 },
    #[error("carbon already exists at position {0}")]
    DuplicatePosition(i32),
    #[error("too many connections to carbon at position {position} ({total} bonds)")]
    TooManyConnections { position: i32, total: u8 },
}

/// Orders of the two bonds a carbon can have in a straight chain.
///
/// `right` is the bond towards the next position, `left` the bond towards
/// the previous one. 0 means no bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BondPair {
    pub right: u8,
    pub left: u8,
}

impl BondPair {
    pub fn new(right: u8, left: u8) -> Self {
        Self { right, left }
    }

    pub fn total(&self) -> u8 {
        self.right.saturating_add(self.left)
    }
}

/// Carbons of a straight chain keyed by grid position.
///
/// Whenever two carbons sit at adjacent positions `p` and `p + 1`,
/// `self[p].right == self[p + 1].left` holds after every successful call to
/// [`CarbonLayout::add_carbon`], whatever order the carbons arrived in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarbonLayout {
    carbons: BTreeMap<i32, BondPair>,
}

impl Default for CarbonLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl CarbonLayout {
    /// A layout holding a single unbonded carbon at position 0.
    pub fn new() -> Self {
        let mut carbons = BTreeMap::new();
        carbons.insert(0, BondPair::default());
        Self { carbons }
    }

    /// Place a carbon at `position`.
    ///
    /// Each existing neighbour is reconciled with the new carbon: if the
    /// new carbon's side facing it is non-zero the neighbour takes that
    /// order, otherwise the new carbon takes the neighbour's.
    pub fn add_carbon(&mut self, position: i32, bonds: BondPair) -> Result<(), LayoutError> {
        for order in [bonds.right, bonds.left] {
            if order > MAX_BOND_ORDER {
                return Err(LayoutError::InvalidBondOrder { position, order });
            }
        }
        if self.carbons.contains_key(&position) {
            return Err(LayoutError::DuplicatePosition(position));
        }

        let mut bonds = bonds;
        if let Some(previous) = position.checked_sub(1).and_then(|p| self.carbons.get_mut(&p)) {
            if bonds.left == 0 {
                bonds.left = previous.right;
            } else {
                previous.right = bonds.left;
            }
        }
        if let Some(next) = position.checked_add(1).and_then(|p| self.carbons.get_mut(&p)) {
            if bonds.right == 0 {
                bonds.right = next.left;
            } else {
                next.left = bonds.right;
            }
        }

        trace!("Adding carbon at {position} with bonds {bonds:?}");
        self.carbons.insert(position, bonds);
        Ok(())
    }

    pub fn get(&self, position: i32) -> Option<BondPair> {
        self.carbons.get(&position).copied()
    }

    pub fn len(&self) -> usize {
        self.carbons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carbons.is_empty()
    }

    /// Carbons in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, BondPair)> + '_ {
        self.carbons.iter().map(|(position, bonds)| (*position, *bonds))
    }

    /// Implicit hydrogens on the carbon at `position`, or `None` if there is
    /// no carbon there.
    pub fn hydrogens_at(&self, position: i32) -> Option<Result<u8, LayoutError>> {
        self.get(position).map(|bonds| hydrogen_count(position, bonds))
    }
}

/// Implicit hydrogens for a carbon with the given bonds.
pub fn hydrogen_count(position: i32, bonds: BondPair) -> Result<u8, LayoutError> {
    let total = bonds.total();
    VALENCE
        .checked_sub(total)
        .ok_or(LayoutError::TooManyConnections { position, total })
}

/// The text drawn for a carbon with the given number of hydrogens.
pub fn carbon_label(hydrogens: u8) -> &'static str {
    CARBON_LABELS[usize::from(hydrogens.min(VALENCE))]
}
