use nom::{
    character::complete::{char, digit1},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::delimited,
    IResult,
};
use std::collections::HashSet;
use std::str::FromStr;
use thiserror::Error;
use tracing::*;

use crate::grammar::strip_suffix_ignore_case;
use crate::{ChainType, Molecule, CHAIN_ENDINGS, CHAIN_LENGTHS};

/// Chains this short may omit the locant of their only multiple bond.
const MAX_IMPLICIT_LOCANT_LENGTH: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("chain type of {0:?} not recognized")]
    UnrecognizedChainType(String),
    #[error("chain length of {0:?} not recognized")]
    UnrecognizedChainLength(String),
    #[error("{chain_type}s with a chain length of 4 or more need a {bond} bond locant")]
    MissingBondLocant {
        chain_type: ChainType,
        bond: &'static str,
        chain_length: usize,
    },
    #[error("duplicate {bond} bond position {locant} is not allowed")]
    DuplicateLocant { bond: &'static str, locant: usize },
    #[error("{chain_type}s need a minimum chain length of two, got {chain_length}")]
    ChainTooShort {
        chain_type: ChainType,
        chain_length: usize,
    },
    #[error("{bond} bond position {locant} is out of range for a chain of length {chain_length}")]
    LocantOutOfRange {
        bond: &'static str,
        locant: usize,
        chain_length: usize,
    },
}

/// Parses a straight-chain hydrocarbon name such as `ethane`, `propyne`
/// or `hex-2,4-ene`.
///
/// # Arguments
///
/// * `name` - The IUPAC name to parse. Case is ignored.
///
/// # Returns
///
/// * `Result<Molecule, ParseError>` - The validated molecule, or the first rule it broke.
pub fn parse_iupac(name: &str) -> Result<Molecule, ParseError> {
    let (chain_type, stem) = split_chain_ending(name)?;
    debug!("{name:?} is an {chain_type}, remaining stem {stem:?}");

    let (stem, explicit_locants) = if chain_type.is_unsaturated() {
        split_trailing_locants(stem)
    } else {
        (stem, None)
    };

    let (chain_length, rest) = split_chain_length(stem)?;
    debug!("{name:?} has a parent chain of length {chain_length}");
    if !rest.is_empty() {
        warn!("Ignoring {rest:?} before the parent chain of {name:?}");
    }

    let bond_locants = match chain_type.bond_name() {
        Some(bond) => validate_locants(chain_type, bond, chain_length, explicit_locants)?,
        None => Vec::new(),
    };

    Ok(Molecule {
        name: name.to_string(),
        chain_type,
        chain_length,
        bond_locants,
    })
}

impl Molecule {
    /// Parse a molecule from its IUPAC name.
    pub fn from_iupac(name: &str) -> Result<Self, ParseError> {
        parse_iupac(name)
    }
}

impl FromStr for Molecule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_iupac(s)
    }
}

/// Finds the chain type from the name's ending and strips it.
fn split_chain_ending(name: &str) -> Result<(ChainType, &str), ParseError> {
    CHAIN_ENDINGS
        .iter()
        .find_map(|(chain_type, ending)| {
            strip_suffix_ignore_case(name, ending).map(|stem| (*chain_type, stem))
        })
        .ok_or_else(|| ParseError::UnrecognizedChainType(name.to_string()))
}

/// Finds the chain length from the stem's trailing prefix and strips it.
fn split_chain_length(stem: &str) -> Result<(usize, &str), ParseError> {
    CHAIN_LENGTHS
        .iter()
        .find_map(|(prefix, length)| strip_suffix_ignore_case(stem, prefix).map(|rest| (*length, rest)))
        .ok_or_else(|| ParseError::UnrecognizedChainLength(stem.to_string()))
}

/// A hyphen-delimited, comma-separated list of locants, e.g. `-2,4-`.
/// The digits are kept as text so no locant is too long to match.
fn locant_list(input: &str) -> IResult<&str, Vec<&str>> {
    delimited(char('-'), separated_list1(char(','), digit1), char('-'))(input)
}

/// Strips a locant list from the end of `stem` if there is one.
fn split_trailing_locants(stem: &str) -> (&str, Option<Vec<&str>>) {
    for (start, _) in stem.match_indices('-') {
        if let Ok((_, locants)) = all_consuming(locant_list)(&stem[start..]) {
            debug!("Found bond locants {locants:?} in {stem:?}");
            return (&stem[..start], Some(locants));
        }
    }
    (stem, None)
}

/// Locant digits without leading zeros, so `02` and `2` compare equal.
fn normalize_locant(digits: &str) -> &str {
    match digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    }
}

/// The numeric value of a locant. Values past `usize::MAX` saturate, which
/// still puts them out of range for any chain.
fn locant_value(digits: &str) -> usize {
    digits.parse().unwrap_or(usize::MAX)
}

fn validate_locants(
    chain_type: ChainType,
    bond: &'static str,
    chain_length: usize,
    explicit: Option<Vec<&str>>,
) -> Result<Vec<usize>, ParseError> {
    let digits = match explicit {
        Some(digits) => digits.into_iter().map(normalize_locant).collect::<Vec<_>>(),
        None if chain_length <= MAX_IMPLICIT_LOCANT_LENGTH => vec!["1"],
        None => {
            return Err(ParseError::MissingBondLocant {
                chain_type,
                bond,
                chain_length,
            })
        }
    };

    let mut seen = HashSet::new();
    if let Some(&repeated) = digits.iter().find(|digits| !seen.insert(**digits)) {
        return Err(ParseError::DuplicateLocant {
            bond,
            locant: locant_value(repeated),
        });
    }
    let locants: Vec<usize> = digits.into_iter().map(locant_value).collect();

    if chain_length < 2 {
        return Err(ParseError::ChainTooShort {
            chain_type,
            chain_length,
        });
    }

    if let Some(&locant) = locants.iter().find(|&&p| p < 1 || p >= chain_length) {
        return Err(ParseError::LocantOutOfRange {
            bond,
            locant,
            chain_length,
        });
    }

    Ok(locants)
}
